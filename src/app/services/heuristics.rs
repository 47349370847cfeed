//! Comment-text heuristics for feeder attributes
//!
//! TX400 exports carry the mounted part description as free text in the
//! feeder comment. These total functions derive a display value and a
//! coarse tolerance bucket from that text; they never fail, falling back to
//! the unknown placeholder.

use crate::constants::{TOLERANCE_1_PERCENT, TOLERANCE_5_PERCENT, UNKNOWN_PLACEHOLDER};

/// Derive the component value from a feeder comment
///
/// Multi-token comments carry the value as their trailing
/// whitespace-delimited token (`"R1 100R"` → `"100R"`), returned verbatim
/// with no unit normalization. A single token alone is not considered a
/// value.
pub fn derive_value(comment: &str) -> String {
    let tokens: Vec<&str> = comment.split_whitespace().collect();
    match tokens.as_slice() {
        [] | [_] => UNKNOWN_PLACEHOLDER.to_string(),
        [.., last] => (*last).to_string(),
    }
}

/// Derive the tolerance class from a feeder comment
///
/// Case-insensitive: `0R` anywhere in the text classifies as ±5% and takes
/// precedence over the broader letter check; otherwise any of the letters
/// `R`, `K`, `M` classifies as ±1%. The letter match is a raw substring
/// check, not word-bounded; existing exports depend on exactly this
/// classification.
pub fn derive_tolerance(comment: &str) -> String {
    if comment.is_empty() {
        return UNKNOWN_PLACEHOLDER.to_string();
    }

    let text = comment.to_uppercase();
    if text.contains("0R") {
        TOLERANCE_5_PERCENT.to_string()
    } else if ["R", "K", "M"].iter().any(|letter| text.contains(letter)) {
        TOLERANCE_1_PERCENT.to_string()
    } else {
        UNKNOWN_PLACEHOLDER.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_value_takes_trailing_token() {
        assert_eq!(derive_value("R1 100R"), "100R");
        assert_eq!(derive_value("pull-up resistor 4K7"), "4K7");
    }

    #[test]
    fn test_derive_value_single_token_is_not_a_value() {
        assert_eq!(derive_value("100R"), "—");
    }

    #[test]
    fn test_derive_value_empty_and_whitespace() {
        assert_eq!(derive_value(""), "—");
        assert_eq!(derive_value("   "), "—");
    }

    #[test]
    fn test_derive_tolerance_zero_ohm_takes_precedence() {
        // Contains both "0R" and "R"; the 0R rule must win
        assert_eq!(derive_tolerance("0R source"), "±5%");
        assert_eq!(derive_tolerance("jumper 0r"), "±5%");
    }

    #[test]
    fn test_derive_tolerance_letter_rule() {
        assert_eq!(derive_tolerance("4K7"), "±1%");
        assert_eq!(derive_tolerance("2M2 bleeder"), "±1%");
        assert_eq!(derive_tolerance("1r0"), "±1%");
    }

    #[test]
    fn test_derive_tolerance_letter_rule_is_not_word_bounded() {
        // "abc" has no match, but "marker" carries both M and R
        assert_eq!(derive_tolerance("abc"), "—");
        assert_eq!(derive_tolerance("marker"), "±1%");
    }

    #[test]
    fn test_derive_tolerance_empty() {
        assert_eq!(derive_tolerance(""), "—");
    }
}
