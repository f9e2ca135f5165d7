//! Splitting of free-text command arguments.

/// All words joined with single spaces, or `None` when there are none.
pub fn joined(args: &str) -> Option<String> {
    let words: Vec<&str> = args.split_whitespace().collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

/// First word only; the rest is ignored.
pub fn first(args: &str) -> Option<&str> {
    args.split_whitespace().next()
}

/// Split off the last `N` words, joining the rest as a title.
///
/// At least one title word is required.
pub fn title_and_trailing<const N: usize>(args: &str) -> Option<(String, [&str; N])> {
    let words: Vec<&str> = args.split_whitespace().collect();
    if words.len() <= N {
        return None;
    }
    let (title, rest) = words.split_at(words.len() - N);
    let trailing: [&str; N] = rest.try_into().ok()?;
    Some((title.join(" "), trailing))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joined_normalizes_spacing() {
        assert_eq!(joined("  The   Dark\tKnight "), Some("The Dark Knight".into()));
        assert_eq!(joined(""), None);
        assert_eq!(joined("   "), None);
    }

    #[test]
    fn first_ignores_extra_words() {
        assert_eq!(first("tt0133093 extra words"), Some("tt0133093"));
        assert_eq!(first(" "), None);
    }

    #[test]
    fn trailing_numbers_are_reserved() {
        assert_eq!(
            title_and_trailing::<2>("Breaking Bad 1 1"),
            Some(("Breaking Bad".to_string(), ["1", "1"]))
        );
        assert_eq!(
            title_and_trailing::<1>("The Office 3"),
            Some(("The Office".to_string(), ["3"]))
        );
        assert_eq!(
            title_and_trailing::<2>("Lost 1 2"),
            Some(("Lost".to_string(), ["1", "2"]))
        );
    }

    #[test]
    fn too_few_words_is_none() {
        assert_eq!(title_and_trailing::<2>("1 1"), None);
        assert_eq!(title_and_trailing::<1>("Lost"), None);
        assert_eq!(title_and_trailing::<1>(""), None);
    }
}
