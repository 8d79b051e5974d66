//! Local search over already fetched collections.
//!
//! Parent and language listings come back whole; the dashboard narrows them
//! with a case-insensitive substring match over a few text fields before
//! paginating locally.

/// Types that can be matched against a free-text search term.
pub trait Searchable {
    /// Text fields the search term is matched against. Missing fields are
    /// simply skipped.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match. A blank term matches everything.
    fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

/// Items of `items` matching `term`, in their original order.
pub fn filter_search<'a, T: Searchable>(items: &'a [T], term: Option<&str>) -> Vec<&'a T> {
    match term {
        Some(term) => items.iter().filter(|item| item.matches(term)).collect(),
        None => items.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, Option<&'static str>);

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            std::iter::once(self.0).chain(self.1).collect()
        }
    }

    #[test]
    fn test_blank_term_matches_everything() {
        assert!(Row("Alice", None).matches("   "));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let row = Row("Alice Martin", Some("alice@example.com"));
        assert!(row.matches("MARTIN"));
        assert!(row.matches("example.COM"));
        assert!(!row.matches("bob"));
    }

    #[test]
    fn test_filter_search_keeps_order() {
        let rows = vec![Row("Ann", None), Row("Bob", None), Row("Anna", None)];
        let hits: Vec<_> = filter_search(&rows, Some("an"))
            .into_iter()
            .map(|r| r.0)
            .collect();
        assert_eq!(hits, vec!["Ann", "Anna"]);
        assert_eq!(filter_search(&rows, None).len(), 3);
    }
}
