//! Small helpers shared by the client.

/// Render a boolean the way the API expects it in the query string.
pub fn bool_param(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Resolve the caller's local IANA zone name, falling back to UTC when the
/// platform gives no answer.
pub fn local_timezone() -> String {
    iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_param_renders_literal_strings() {
        assert_eq!(bool_param(true), "true");
        assert_eq!(bool_param(false), "false");
    }

    #[test]
    fn local_timezone_is_nonempty() {
        assert!(!local_timezone().is_empty());
    }
}
