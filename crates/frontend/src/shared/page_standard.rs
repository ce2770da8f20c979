//! Page category constants.
//!
//! Every page declares an HTML `id` in the format `{resource}--{category}`
//! (e.g. `"a001_category--list"`) and a `data-page-category` with one of the
//! constants below, so a DOM id copied from the inspector leads straight to
//! the `domain/a001_category/` or `projections/p900_sales_report/` module.

/// Editable master-data list.
pub const PAGE_CAT_LIST: &str = "list";

/// Read-only report with totals.
pub const PAGE_CAT_REPORT: &str = "report";

pub fn page_id(code: &str, category: &str) -> String {
    format!("{code}--{category}")
}

/// Validate that a page id matches the `{resource}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((resource, category)) => !resource.is_empty() && !category.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        let id = page_id("a001_category", PAGE_CAT_LIST);
        assert_eq!(id, "a001_category--list");
        assert!(is_valid_page_id(&id));
        assert!(!is_valid_page_id("a001_category"));
        assert!(!is_valid_page_id("--list"));
    }
}
