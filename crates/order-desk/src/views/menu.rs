//! Menu browsing.

use crate::model::{Menu, MenuItem};

/// Items whose name contains `query` (case-insensitive) and, when given, whose
/// category equals `category`. Catalog order is kept.
pub fn filter_menu<'a>(menu: &'a Menu, query: &str, category: Option<&str>) -> Vec<&'a MenuItem> {
    let needle = query.to_lowercase();
    menu.items()
        .iter()
        .filter(|item| category.map_or(true, |c| item.category == c))
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: Vec<&MenuItem>) -> Vec<&str> {
        items.into_iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn query_is_case_insensitive() {
        let menu = Menu::house();
        assert_eq!(ids(filter_menu(&menu, "HAMBURGUESA", None)), vec!["1", "2"]);
    }

    #[test]
    fn category_narrows_the_result() {
        let menu = Menu::house();
        assert_eq!(ids(filter_menu(&menu, "", Some("Drinks"))), vec!["6", "7"]);
        assert!(filter_menu(&menu, "café", Some("Burgers")).is_empty());
    }

    #[test]
    fn empty_query_keeps_catalog_order() {
        let menu = Menu::house();
        assert_eq!(filter_menu(&menu, "", None).len(), menu.items().len());
    }
}
