//! Canonicalization of handwritten recipe names.

/// Normalize a free-form name into Title Case, or `None` if nothing usable
/// remains.
///
/// Hyphens and underscores act as word separators; everything that is not an
/// ASCII letter or space is dropped.
pub fn normalize(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }

    let cleaned: String = raw
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect();

    let words: Vec<String> = cleaned.split_whitespace().map(title_case).collect();
    if words.is_empty() {
        return None;
    }

    Some(words.join(" "))
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_and_punctuation() {
        assert_eq!(
            normalize("chicken-noodle_soup!!"),
            Some("Chicken Noodle Soup".to_string())
        );
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(normalize(""), None);
    }

    #[test]
    fn test_whitespace_only_rejected() {
        assert_eq!(normalize("   "), None);
    }

    #[test]
    fn test_no_letters_rejected() {
        assert_eq!(normalize("123 !?"), None);
        assert_eq!(normalize("---___"), None);
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(normalize("GRILLED cHeEsE"), Some("Grilled Cheese".to_string()));
    }

    #[test]
    fn test_separator_runs_collapse() {
        assert_eq!(
            normalize("mac--and__cheese"),
            Some("Mac And Cheese".to_string())
        );
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(normalize("  beef   stew  "), Some("Beef Stew".to_string()));
    }

    #[test]
    fn test_digits_stripped_within_words() {
        assert_eq!(normalize("pizza123"), Some("Pizza".to_string()));
    }

    #[test]
    fn test_non_ascii_letters_stripped() {
        assert_eq!(normalize("café"), Some("Caf".to_string()));
    }

    #[test]
    fn test_idempotent() {
        for raw in ["chicken-noodle_soup!!", "  beef   stew  ", "PIZZA time"] {
            let once = normalize(raw).unwrap();
            assert_eq!(normalize(&once), Some(once.clone()));
        }
    }
}
