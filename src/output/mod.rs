// Output formatting: JSON rendering and terminal display of reports.

pub mod json;
pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Location strings are free-form input, so this respects UTF-8 character
/// boundaries instead of slicing bytes.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_unchanged() {
        assert_eq!(truncate_chars("Paris", 10), "Paris");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_chars("Zürich-Oerlikon", 6), "Zürich...");
    }
}
