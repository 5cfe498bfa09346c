//! City extraction from free-form questions.
//!
//! Only the `in <word>` form is recognised, so "weather in New York" yields
//! "New" and "what's it like at Paris" yields nothing.

use regex::Regex;
use std::sync::LazyLock;

use aw_protocol::UNKNOWN_CITY;

static RE_IN_CITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bin\s+(\w+)").unwrap());

/// Return the word following the first standalone "in", if any.
pub fn extract_city(text: &str) -> Option<String> {
    RE_IN_CITY
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Like [`extract_city`], falling back to `"unknown"`.
pub fn city_or_unknown(text: &str) -> String {
    extract_city(text).unwrap_or_else(|| UNKNOWN_CITY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_question() {
        assert_eq!(extract_city("Is it cold in London?").as_deref(), Some("London"));
        assert_eq!(
            extract_city("What's the weather in Toronto").as_deref(),
            Some("Toronto")
        );
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(extract_city("WEATHER IN OSLO").as_deref(), Some("OSLO"));
        assert_eq!(extract_city("In Berlin, is it sunny").as_deref(), Some("Berlin"));
    }

    #[test]
    fn in_must_start_a_word() {
        // "rain in" must not capture "in" from the tail of "rain".
        assert_eq!(extract_city("is there rain in Paris").as_deref(), Some("Paris"));
        assert_eq!(extract_city("is it raining today"), None);
    }

    #[test]
    fn first_word_only() {
        assert_eq!(extract_city("weather in New York").as_deref(), Some("New"));
    }

    #[test]
    fn non_ascii_city() {
        assert_eq!(extract_city("is it hot in Zürich").as_deref(), Some("Zürich"));
    }

    #[test]
    fn no_match_is_unknown() {
        assert_eq!(city_or_unknown("how are you?"), "unknown");
        assert_eq!(city_or_unknown(""), "unknown");
        assert_eq!(city_or_unknown("cold in Montreal"), "Montreal");
    }
}
