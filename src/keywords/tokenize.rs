// Review text normalization.
//
// Splits text at Unicode word boundaries (UAX #29), so punctuation between
// words separates them even with no space ("fast,cheap" -> "fast" + "cheap",
// "well-made" -> "well" + "made"). English clitics are then split from their
// stem ("it's" -> "it", "don't" -> "do"), and a segment still holding
// punctuation after that ("3.5", "rock'n'roll") is not a keyword and is dropped.

use std::sync::LazyLock;

use regex_lite::Regex;
use unicode_segmentation::UnicodeSegmentation;

use super::stopwords::StopWords;

/// Matches a lowercase word ending in an English clitic. Group 1 is the stem.
static CLITIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)(?:n['’]t|['’](?:s|re|ve|ll|d|m))$").expect("clitic pattern is valid")
});

/// Turn raw review text into keyword tokens.
///
/// Tokens come out lowercase, fully alphanumeric, and not in `stop_words`,
/// in the order they appear. Duplicates are kept. Never fails: empty or
/// punctuation-only text yields nothing.
pub fn normalize<'a>(
    text: &'a str,
    stop_words: &'a StopWords,
) -> impl Iterator<Item = String> + 'a {
    text.unicode_words()
        .map(word_stem)
        .filter(|token| is_alphanumeric_token(token))
        .filter(move |token| !stop_words.contains(token))
}

/// Lowercase a word segment and strip any trailing clitic.
fn word_stem(word: &str) -> String {
    let lower = word.to_lowercase();
    let stem = CLITIC
        .captures(&lower)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());
    stem.unwrap_or(lower)
}

fn is_alphanumeric_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        normalize(text, &StopWords::english()).collect()
    }

    #[test]
    fn test_empty_text() {
        assert!(tokens("").is_empty());
        assert!(tokens("   \n\t").is_empty());
    }

    #[test]
    fn test_punctuation_only() {
        assert!(tokens("!!! ... ?? -- :)").is_empty());
    }

    #[test]
    fn test_attached_punctuation_is_stripped() {
        assert_eq!(tokens("Great!!! Loved it."), vec!["great", "loved"]);
        assert_eq!(tokens("(battery) \"life\""), vec!["battery", "life"]);
    }

    #[test]
    fn test_clitics_split_from_stem() {
        // "it" and "do" are stop words once the clitic is gone
        assert!(tokens("It's fine").contains(&"fine".to_string()));
        assert!(!tokens("It's fine").iter().any(|t| t.contains('\'')));
        assert_eq!(tokens("Don't buy"), vec!["buy"]);
        assert_eq!(tokens("seller's fault"), vec!["seller", "fault"]);
        assert_eq!(tokens("seller’s fault"), vec!["seller", "fault"]);
    }

    #[test]
    fn test_punctuation_between_words_splits() {
        assert_eq!(tokens("fast,cheap"), vec!["fast", "cheap"]);
        assert_eq!(tokens("great...loved"), vec!["great", "loved"]);
        assert_eq!(tokens("good;fast"), vec!["good", "fast"]);
        assert_eq!(tokens("battery/screen"), vec!["battery", "screen"]);
        assert_eq!(tokens("well-made phone"), vec!["well", "made", "phone"]);
    }

    #[test]
    fn test_embedded_punctuation_dropped() {
        assert_eq!(tokens("3.5 stars"), vec!["stars"]);
        assert_eq!(tokens("rock'n'roll case"), vec!["case"]);
    }

    #[test]
    fn test_digits_kept() {
        assert_eq!(tokens("lasted 2 days"), vec!["lasted", "2", "days"]);
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        assert_eq!(
            tokens("fast shipping, fast delivery"),
            vec!["fast", "shipping", "fast", "delivery"]
        );
    }

    #[test]
    fn test_non_ascii_words() {
        assert_eq!(tokens("Très BIEN, café"), vec!["très", "bien", "café"]);
    }

    #[test]
    fn test_custom_stop_words() {
        let sw = StopWords::from_words(["phone"]);
        let out: Vec<String> = normalize("Phone is great", &sw).collect();
        assert_eq!(out, vec!["is", "great"]);
    }
}
