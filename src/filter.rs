//! Filter View
//!
//! Title search over the canonical sequence.

use crate::models::Item;

/// Items whose title contains `predicate`, ignoring case, in canonical order.
/// An empty predicate returns the sequence as is.
pub fn filter_view(items: &[Item], predicate: &str) -> Vec<Item> {
    if predicate.is_empty() {
        return items.to_vec();
    }
    let needle = predicate.to_lowercase();
    items
        .iter()
        .filter(|item| item.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_filter_milk() {
        let items = vec![Item::new(1, "Milk", "buy")];
        assert_eq!(filter_view(&items, "mil"), items);
        assert!(filter_view(&items, "xyz").is_empty());
    }

    #[test]
    fn test_filter_is_case_insensitive_and_ordered() {
        let items = vec![
            Item::new(1, "Oat MILK", ""),
            Item::new(2, "Bread", ""),
            Item::new(3, "milkshake", ""),
        ];
        let titles: Vec<_> = filter_view(&items, "Milk").into_iter().map(|i| i.title).collect();
        assert_eq!(titles, vec!["Oat MILK", "milkshake"]);
    }

    #[test]
    fn test_empty_predicate_bypasses() {
        let items = vec![Item::new(1, "", ""), Item::new(2, "Eggs", "")];
        assert_eq!(filter_view(&items, ""), items);
    }

    #[test]
    fn test_body_is_not_searched() {
        let items = vec![Item::new(1, "Eggs", "milk")];
        assert!(filter_view(&items, "milk").is_empty());
    }

    fn is_subsequence(sub: &[Item], full: &[Item]) -> bool {
        let mut rest = full.iter();
        sub.iter().all(|s| rest.any(|f| f == s))
    }

    proptest! {
        #[test]
        fn filter_is_ordered_subsequence(
            titles in prop::collection::vec("[a-cA-C ]{0,6}", 0..10),
            predicate in "[a-cA-C]{0,2}",
        ) {
            let items: Vec<Item> = titles
                .into_iter()
                .enumerate()
                .map(|(i, t)| Item::new(i as u64, t, ""))
                .collect();
            let view = filter_view(&items, &predicate);
            prop_assert!(is_subsequence(&view, &items));
            for item in &view {
                prop_assert!(
                    predicate.is_empty()
                        || item.title.to_lowercase().contains(&predicate.to_lowercase())
                );
            }
        }
    }
}
