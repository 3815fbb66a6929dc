//! Output-safe text fragments.

use core::fmt;

/// The output context a [`SafeString`] is safe for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SafeKind {
    /// HTML element content.
    Html,
    /// One or more HTML attributes (`key="value"`).
    HtmlAttr,
    /// A CSS fragment.
    Css,
    /// A JavaScript/JSON fragment.
    Js,
}

impl fmt::Display for SafeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SafeKind::Html => write!(f, "html"),
            SafeKind::HtmlAttr => write!(f, "html-attr"),
            SafeKind::Css => write!(f, "css"),
            SafeKind::Js => write!(f, "js"),
        }
    }
}

/// Text the render pipeline must emit without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafeString {
    pub kind: SafeKind,
    text: String,
}

impl SafeString {
    pub fn new(kind: SafeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Self::new(SafeKind::Html, text)
    }

    pub fn html_attr(text: impl Into<String>) -> Self {
        Self::new(SafeKind::HtmlAttr, text)
    }

    pub fn css(text: impl Into<String>) -> Self {
        Self::new(SafeKind::Css, text)
    }

    pub fn js(text: impl Into<String>) -> Self {
        Self::new(SafeKind::Js, text)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for SafeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
