//! Static description of a backend resource and the trait its records implement.

use crate::shared::metadata::ValidationRules;

/// A record the list machinery can identify and, optionally, toggle.
///
/// Everything else about a record is opaque to the list store.
pub trait ResourceRecord: Clone {
    /// Stable primary key, rendered as the value of [`ResourceDescriptor::key_field`].
    fn key(&self) -> String;

    /// Human-readable name used in confirmation dialogs.
    fn label(&self) -> String {
        self.key()
    }

    /// Active/inactive flag for resources that support status toggling.
    fn status(&self) -> Option<bool> {
        None
    }

    fn set_status(&mut self, _active: bool) {}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterKind {
    Text,
    Date,
    /// `(value, label)` pairs
    Choice(&'static [(&'static str, &'static str)]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
    pub rules: ValidationRules,
}

/// Endpoint, identity and filter schema of one list page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceDescriptor {
    /// Short code used for DOM ids and saved filter state, e.g. `a001_category`
    pub code: &'static str,
    pub title: &'static str,
    /// Path below the API base, e.g. `/api/category`
    pub endpoint: &'static str,
    /// Query parameter naming the record in PUT/DELETE requests
    pub key_field: &'static str,
    /// Body field for status updates; `None` when records cannot be toggled
    pub status_field: Option<&'static str>,
    pub deletable: bool,
    pub filters: &'static [FilterField],
}

impl ResourceDescriptor {
    pub fn filter(&self, name: &str) -> Option<&FilterField> {
        self.filters.iter().find(|f| f.name == name)
    }

    pub fn supports_status(&self) -> bool {
        self.status_field.is_some()
    }

    /// True for read-only report lists.
    pub fn is_read_only(&self) -> bool {
        !self.deletable && self.status_field.is_none()
    }
}

/// `Active`/`Inactive` options shared by every master-data list.
pub const STATUS_OPTIONS: &[(&str, &str)] = &[("1", "Active"), ("0", "Inactive")];

/// Common free-text search filter.
pub const SEARCH_FILTER: FilterField = FilterField {
    name: "search",
    label: "Search",
    kind: FilterKind::Text,
    rules: ValidationRules::none().with_max_length(100),
};

/// Common status filter.
pub const STATUS_FILTER: FilterField = FilterField {
    name: "status",
    label: "Status",
    kind: FilterKind::Choice(STATUS_OPTIONS),
    rules: ValidationRules::none(),
};

/// Common report period filters.
pub const DATE_FROM_FILTER: FilterField = FilterField {
    name: "date_from",
    label: "From date",
    kind: FilterKind::Date,
    rules: ValidationRules::none(),
};

pub const DATE_TO_FILTER: FilterField = FilterField {
    name: "date_to",
    label: "To date",
    kind: FilterKind::Date,
    rules: ValidationRules::none(),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{a001_category, a002_gst, a009_delivery_zone};
    use crate::projections::{p900_sales_report, p903_tax_report};

    #[test]
    fn test_master_data_is_mutable_and_reports_are_read_only() {
        assert!(!a001_category::dto::DESCRIPTOR.is_read_only());
        assert!(a002_gst::dto::DESCRIPTOR.supports_status());
        assert!(p900_sales_report::dto::DESCRIPTOR.is_read_only());
        assert!(p903_tax_report::dto::DESCRIPTOR.is_read_only());
    }

    #[test]
    fn test_key_field_matches_record_key() {
        let zone = a009_delivery_zone::dto::DeliveryZoneDto {
            pincode: "560001".into(),
            area_name: None,
            city: None,
            delivery_charge: None,
            min_order_amount: None,
            estimated_days: None,
            status: true,
        };
        assert_eq!(a009_delivery_zone::dto::DESCRIPTOR.key_field, "pincode");
        assert_eq!(zone.key(), "560001");
    }

    #[test]
    fn test_filter_lookup() {
        let descriptor = p900_sales_report::dto::DESCRIPTOR;
        assert_eq!(descriptor.filter("date_to").map(|f| f.label), Some("To date"));
        assert!(descriptor.filter("status").is_none());
    }
}
