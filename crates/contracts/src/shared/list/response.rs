//! Normalization of the list envelopes the backend returns.
//!
//! Depending on the resource a page arrives as `{results, count}`,
//! `{data, total_items}`, `{items, total}` or a bare array. The list store only
//! ever sees [`ListPage`].

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub records: Vec<T>,
    pub total_count: usize,
}

impl<T> ListPage<T> {
    pub fn new(records: Vec<T>, total_count: usize) -> Self {
        Self {
            records,
            total_count,
        }
    }
}

#[derive(Deserialize)]
struct Envelope<T> {
    #[serde(alias = "data", alias = "items")]
    results: Vec<T>,
    #[serde(default, alias = "total_items", alias = "total")]
    count: Option<usize>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListShape<T> {
    Envelope(Envelope<T>),
    Bare(Vec<T>),
}

impl<T> From<ListShape<T>> for ListPage<T> {
    fn from(shape: ListShape<T>) -> Self {
        match shape {
            ListShape::Envelope(envelope) => {
                let total_count = envelope.count.unwrap_or(envelope.results.len());
                ListPage::new(envelope.results, total_count)
            }
            ListShape::Bare(records) => {
                let total_count = records.len();
                ListPage::new(records, total_count)
            }
        }
    }
}

impl<'de, T> Deserialize<'de> for ListPage<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        ListShape::<T>::deserialize(deserializer).map(ListPage::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: u32,
    }

    fn parse(json: &str) -> ListPage<Row> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_results_count_shape() {
        let page = parse(r#"{"results": [{"id": 1}, {"id": 2}], "count": 23}"#);
        assert_eq!(page.records, vec![Row { id: 1 }, Row { id: 2 }]);
        assert_eq!(page.total_count, 23);
    }

    #[test]
    fn test_data_total_items_shape() {
        let page = parse(r#"{"data": [{"id": 7}], "total_items": 41, "message": "ok"}"#);
        assert_eq!(page.records, vec![Row { id: 7 }]);
        assert_eq!(page.total_count, 41);
    }

    #[test]
    fn test_items_total_shape() {
        let page = parse(r#"{"items": [], "total": 0}"#);
        assert!(page.records.is_empty());
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn test_missing_count_falls_back_to_length() {
        assert_eq!(parse(r#"{"results": [{"id": 1}]}"#).total_count, 1);
        assert_eq!(parse(r#"[{"id": 1}, {"id": 2}, {"id": 3}]"#).total_count, 3);
    }

    #[test]
    fn test_unknown_shape_is_an_error() {
        let parsed: Result<ListPage<Row>, _> = serde_json::from_str(r#"{"rows": []}"#);
        assert!(parsed.is_err());
    }
}
