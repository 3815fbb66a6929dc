//! Command-line argument decoding.

use pugrt::Host;

/// Decode one argument: JSON when it parses, plain text otherwise.
pub fn parse_arg(arg: &str) -> Host {
    match serde_json::from_str::<serde_json::Value>(arg) {
        Ok(json) => Host::from(json),
        Err(_) => Host::from(arg),
    }
}
