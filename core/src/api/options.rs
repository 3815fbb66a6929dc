//! Runtime configuration.
//!
//! [`RuntimeOptions`] holds the defaults a [`Runtime`](super::Runtime) is
//! built with. [`RuntimeOptionsOverride`] changes some of them for a single
//! call, leaving the rest untouched.

/// Options shared by every builtin call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeOptions {
    /// Separator used by the `__` namespace join.
    pub namespace_separator: String,
    /// Log operator sentinels at `warn` instead of `debug`.
    pub warn_on_sentinel: bool,
    /// Largest array `_Range` may produce. `None` means unbounded.
    pub max_range_len: Option<usize>,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            namespace_separator: "::".to_string(),
            warn_on_sentinel: false,
            max_range_len: None,
        }
    }
}

impl RuntimeOptions {
    /// Apply every field set in `other`.
    pub fn override_with(&mut self, other: &RuntimeOptionsOverride) {
        if let Some(separator) = &other.namespace_separator {
            self.namespace_separator = separator.clone();
        }
        if let Some(warn) = other.warn_on_sentinel {
            self.warn_on_sentinel = warn;
        }
        if let Some(max) = other.max_range_len {
            self.max_range_len = Some(max);
        }
    }
}

/// Per-call overrides for [`RuntimeOptions`]. `None` keeps the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeOptionsOverride {
    pub namespace_separator: Option<String>,
    pub warn_on_sentinel: Option<bool>,
    pub max_range_len: Option<usize>,
}

impl RuntimeOptionsOverride {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_options() {
        let options = RuntimeOptions::default();
        assert_eq!(options.namespace_separator, "::");
        assert!(!options.warn_on_sentinel);
        assert_eq!(options.max_range_len, None);
    }

    #[test]
    fn test_override_only_touches_set_fields() {
        let mut options = RuntimeOptions::default();
        options.override_with(&RuntimeOptionsOverride {
            max_range_len: Some(10),
            ..Default::default()
        });
        assert_eq!(
            options,
            RuntimeOptions {
                max_range_len: Some(10),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_empty_override() {
        assert!(RuntimeOptionsOverride::default().is_empty());
        assert!(
            !RuntimeOptionsOverride {
                warn_on_sentinel: Some(true),
                ..Default::default()
            }
            .is_empty()
        );
    }
}
