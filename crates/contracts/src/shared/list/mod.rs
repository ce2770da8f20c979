//! Building blocks of every paginated resource list: the applied/draft filter
//! sets, page arithmetic, response normalization and the static description
//! of a resource endpoint.

pub mod filter;
pub mod page;
pub mod resource;
pub mod response;

pub use filter::{FilterEditor, FilterSet, FilterValue};
pub use page::Page;
pub use resource::{FilterField, FilterKind, ResourceDescriptor, ResourceRecord};
pub use response::ListPage;

/// Everything a single list request depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub filters: FilterSet,
    pub page: Page,
}

impl ListQuery {
    /// Flat `(name, value)` parameters: filter constraints followed by `page` and `page_size`.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = self.filters.to_query_pairs();
        params.push(("page".to_string(), self.page.index.to_string()));
        params.push(("page_size".to_string(), self.page.size.to_string()));
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_put_paging_last() {
        let filters = FilterSet::new().with_field("search", FilterValue::Text("para".into()));
        let query = ListQuery {
            filters,
            page: Page::new(25).go_to(1),
        };
        assert_eq!(
            query.to_params(),
            vec![
                ("search".to_string(), "para".to_string()),
                ("page".to_string(), "1".to_string()),
                ("page_size".to_string(), "25".to_string()),
            ]
        );
    }
}
