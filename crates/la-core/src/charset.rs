/// The ten ASCII digits — the interactive session default.
pub const CHARSET_DIGITS: &str = "0123456789";

/// 10 characters — compact, good contrast.
pub const CHARSET_COMPACT: &str = " .:-=+*#%@";

/// 70 characters — Paul Bourke extended, good balance.
pub const CHARSET_STANDARD: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Resolve a charset preset name to its characters.
///
/// Returns `None` for unknown names; callers then treat the input as a
/// literal character string.
///
/// # Example
/// ```
/// use la_core::charset::preset;
/// assert_eq!(preset("digits"), Some("0123456789"));
/// assert_eq!(preset(" .:#@"), None);
/// ```
#[must_use]
pub fn preset(name: &str) -> Option<&'static str> {
    match name {
        "digits" => Some(CHARSET_DIGITS),
        "compact" => Some(CHARSET_COMPACT),
        "standard" => Some(CHARSET_STANDARD),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_resolve_by_name() {
        assert_eq!(preset("compact"), Some(CHARSET_COMPACT));
        assert_eq!(preset("standard"), Some(CHARSET_STANDARD));
        assert_eq!(preset("bogus"), None);
    }
}
