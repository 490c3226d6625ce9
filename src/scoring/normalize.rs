//! Text normalization applied before comparing transcripts.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static OUTSIDE_TELUGU: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\x{0C00}-\x{0C7F} ]").expect("telugu pattern is valid"));

/// Normalize text for comparison.
///
/// Lowercases, collapses whitespace runs to a single space, drops everything
/// outside the Telugu block except the space, then trims.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let collapsed = WHITESPACE_RUN.replace_all(&lowered, " ");
    let stripped = OUTSIDE_TELUGU.replace_all(&collapsed, "");
    stripped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_telugu() {
        assert_eq!(normalize("నమస్తే"), "నమస్తే");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  మీరు \t\n ఎలా   ఉన్నారు "), "మీరు ఎలా ఉన్నారు");
    }

    #[test]
    fn test_strips_foreign_characters() {
        assert_eq!(normalize("Namaste నమస్తే!"), "నమస్తే");
        assert_eq!(normalize("123, abc."), "");
    }

    #[test]
    fn test_stripping_can_leave_inner_double_space() {
        // Whitespace is collapsed before stripping, so removed words leave their gaps.
        assert_eq!(normalize("రండి x కూర్చోండి"), "రండి  కూర్చోండి");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
