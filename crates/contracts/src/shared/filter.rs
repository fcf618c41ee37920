//! Client-side search over an already fetched page of records.
//!
//! Filtering never touches the server and never mutates the source page:
//! it is recomputed from scratch on every keystroke.

/// Record types that can be narrowed by a free-text query.
pub trait Searchable {
    /// Field values the query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match against any searched field.
    /// A blank query matches everything.
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = normalize_query(filter);
        if needle.is_empty() {
            return true;
        }
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

fn normalize_query(filter: &str) -> String {
    filter.trim().to_lowercase()
}

/// Returns the items matching `filter`, in their original order.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if normalize_query(filter).is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Splits `text` into `(segment, is_match)` parts for highlighting.
///
/// Texts where some character changes byte width when lowercased are
/// returned as one unmatched segment, since offsets in the lowercased text
/// would not map back onto `text`.
pub fn highlight_segments<'a>(text: &'a str, filter: &str) -> Vec<(&'a str, bool)> {
    let needle = normalize_query(filter);
    let same_width = text
        .chars()
        .all(|c| c.to_lowercase().map(char::len_utf8).sum::<usize>() == c.len_utf8());
    if needle.is_empty() || !same_width {
        return vec![(text, false)];
    }
    let haystack = text.to_lowercase();

    let mut segments = Vec::new();
    let mut last = 0;
    while let Some(pos) = haystack[last..].find(&needle) {
        let start = last + pos;
        let end = start + needle.len();
        if start > last {
            segments.push((&text[last..start], false));
        }
        segments.push((&text[start..end], true));
        last = end;
    }
    if last < text.len() || segments.is_empty() {
        segments.push((&text[last..], false));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: String,
        code: String,
    }

    impl Searchable for Item {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str(), self.code.as_str()]
        }
    }

    fn item(name: &str, code: &str) -> Item {
        Item {
            name: name.to_string(),
            code: code.to_string(),
        }
    }

    fn products() -> Vec<Item> {
        vec![
            item("Paracetamol 500mg", "P-001"),
            item("Amoxicillin", "A-002"),
            item("Vitamin C", "V-003"),
            item("Paracetamol Sirup", "P-004"),
            item("Antasida", "A-005"),
        ]
    }

    #[test]
    fn test_filter_returns_matches_in_order() {
        let source = products();
        let result = filter_list(&source, "paraceta");
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "Paracetamol 500mg");
        assert_eq!(result[1].name, "Paracetamol Sirup");
        assert_eq!(source.len(), 5);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_checks_all_fields() {
        let source = products();
        assert_eq!(filter_list(&source, "VITAMIN").len(), 1);
        assert_eq!(filter_list(&source, "a-00").len(), 2);
    }

    #[test]
    fn test_blank_query_keeps_everything() {
        let source = products();
        assert_eq!(filter_list(&source, ""), source);
        assert_eq!(filter_list(&source, "   "), source);
    }

    #[test]
    fn test_no_match_gives_empty() {
        assert!(filter_list(&products(), "insulin").is_empty());
    }

    #[test]
    fn test_highlight_segments() {
        assert_eq!(
            highlight_segments("Paracetamol Sirup", "SIR"),
            vec![("Paracetamol ", false), ("Sir", true), ("up", false)]
        );
        assert_eq!(
            highlight_segments("abab", "ab"),
            vec![("ab", true), ("ab", true)]
        );
        assert_eq!(highlight_segments("Antasida", ""), vec![("Antasida", false)]);
        assert_eq!(highlight_segments("Antasida", "xyz"), vec![("Antasida", false)]);
    }

    #[test]
    fn test_highlight_width_changing_letters() {
        // 'ẞ' shrinks and 'Ⱥ' grows when lowercased; total length is unchanged
        assert_eq!(highlight_segments("ẞȺ", "ⱥ"), vec![("ẞȺ", false)]);
        assert_eq!(highlight_segments("İbuprofen", "bu"), vec![("İbuprofen", false)]);
        assert_eq!(
            highlight_segments("Obat ÄRZTE", "ärz"),
            vec![("Obat ", false), ("ÄRZ", true), ("TE", false)]
        );
    }
}
