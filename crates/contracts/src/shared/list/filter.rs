//! Draft and applied filter sets.
//!
//! A list keeps two [`FilterSet`]s: the *applied* one drives requests, the
//! *draft* one is edited by the filter form. The draft is a copy taken when the
//! editor opens and replaces the applied set wholesale on commit.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::resource::{FilterField, FilterKind};
use crate::shared::metadata::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FilterValue {
    Text(String),
    Date(NaiveDate),
    Choice(String),
}

impl FilterValue {
    /// Empty text or choice means "no constraint".
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Text(s) | FilterValue::Choice(s) => s.trim().is_empty(),
            FilterValue::Date(_) => false,
        }
    }

    /// Value as sent to the backend.
    pub fn to_wire(&self) -> String {
        match self {
            FilterValue::Text(s) => s.trim().to_string(),
            FilterValue::Choice(s) => s.clone(),
            FilterValue::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }

    /// Value as shown on a filter chip.
    pub fn display(&self) -> String {
        match self {
            FilterValue::Date(d) => d.format("%d/%m/%Y").to_string(),
            other => other.to_wire(),
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FilterValue::Date(d) => Some(*d),
            _ => None,
        }
    }
}

/// Field name -> constraint. Never stores empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    fields: BTreeMap<String, FilterValue>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&FilterValue> {
        self.fields.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of constrained fields, shown on the filter panel badge.
    pub fn active_count(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns a copy with `field` set; an empty value removes the constraint.
    pub fn with_field(&self, field: &str, value: FilterValue) -> Self {
        let mut next = self.clone();
        if value.is_empty() {
            next.fields.remove(field);
        } else {
            next.fields.insert(field.to_string(), value);
        }
        next
    }

    /// Copy without the values that constrain nothing (blank text or choice).
    pub fn normalized(&self) -> Self {
        let mut next = self.clone();
        next.fields.retain(|_, value| !value.is_empty());
        next
    }

    pub fn without_field(&self, field: &str) -> Self {
        let mut next = self.clone();
        next.fields.remove(field);
        next
    }

    /// Query parameters in field-name order.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|(k, v)| (k.clone(), v.to_wire()))
            .collect()
    }

    /// Checks every constrained field against `schema`.
    ///
    /// Besides per-field rules, a `<name>_from` date must not be later than the
    /// matching `<name>_to` date.
    pub fn validate(&self, schema: &[FilterField]) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for field in schema {
            let result = match (self.get(field.name), field.kind) {
                (None, _) if field.rules.is_required() => Err(ValidationError::Required {
                    field: field.name.to_string(),
                    label: field.label.to_string(),
                }),
                (None, _) => Ok(()),
                (Some(FilterValue::Text(text)), _) => {
                    field.rules.validate_string(field.name, field.label, text)
                }
                (Some(FilterValue::Choice(choice)), FilterKind::Choice(options)) => {
                    if options.iter().any(|(value, _)| *value == choice.as_str()) {
                        Ok(())
                    } else {
                        Err(ValidationError::UnknownOption {
                            field: field.name.to_string(),
                            label: field.label.to_string(),
                        })
                    }
                }
                (Some(_), _) => Ok(()),
            };
            if let Err(e) = result {
                errors.push(e);
            }
        }

        for from_field in schema {
            let Some(prefix) = from_field.name.strip_suffix("_from") else {
                continue;
            };
            let to_name = format!("{}_to", prefix);
            let Some(to_field) = schema.iter().find(|f| f.name == to_name) else {
                continue;
            };
            let from = self.get(from_field.name).and_then(FilterValue::as_date);
            let to = self.get(to_field.name).and_then(FilterValue::as_date);
            if let (Some(from), Some(to)) = (from, to) {
                if from > to {
                    errors.push(ValidationError::InvertedRange {
                        field: to_field.name.to_string(),
                        from_label: from_field.label.to_string(),
                        to_label: to_field.label.to_string(),
                    });
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Returns a copy of `applied` for the filter form to edit.
pub fn open_editor(applied: &FilterSet) -> FilterSet {
    applied.clone()
}

/// Pure single-field update of a draft.
///
/// Text is kept exactly as typed, so an input bound to the draft is never
/// rewritten mid-edit; only a zero-length value removes the field. Blank
/// values are dropped when the draft is committed.
pub fn set_draft_field(draft: &FilterSet, field: &str, value: FilterValue) -> FilterSet {
    let mut next = draft.clone();
    match &value {
        FilterValue::Text(s) | FilterValue::Choice(s) if s.is_empty() => {
            next.fields.remove(field);
        }
        _ => {
            next.fields.insert(field.to_string(), value);
        }
    }
    next
}

/// Holds the applied set plus the draft being edited and its validation errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterEditor {
    applied: FilterSet,
    draft: FilterSet,
    errors: Vec<ValidationError>,
}

impl FilterEditor {
    pub fn new(applied: FilterSet) -> Self {
        Self {
            draft: open_editor(&applied),
            applied,
            errors: Vec::new(),
        }
    }

    pub fn applied(&self) -> &FilterSet {
        &self.applied
    }

    pub fn draft(&self) -> &FilterSet {
        &self.draft
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn error_for(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    /// Discards any pending edits and starts again from the applied set.
    pub fn open(&mut self) {
        self.draft = open_editor(&self.applied);
        self.errors.clear();
    }

    pub fn set_draft_field(&mut self, field: &str, value: FilterValue) {
        self.draft = set_draft_field(&self.draft, field, value);
        self.errors.retain(|e| e.field() != field);
    }

    /// Validates the draft and, when it passes, makes it the applied set.
    ///
    /// On failure the applied set is untouched and the errors stay available
    /// through [`FilterEditor::errors`].
    pub fn commit(&mut self, schema: &[FilterField]) -> Result<FilterSet, Vec<ValidationError>> {
        let draft = self.draft.normalized();
        match draft.validate(schema) {
            Ok(()) => {
                self.draft = draft.clone();
                self.applied = draft;
                self.errors.clear();
                Ok(self.applied.clone())
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Drops every constraint from both sets.
    pub fn clear(&mut self) -> FilterSet {
        self.applied = FilterSet::new();
        self.draft = FilterSet::new();
        self.errors.clear();
        self.applied.clone()
    }

    /// Removes one applied constraint (filter chip close button).
    pub fn remove(&mut self, field: &str) -> FilterSet {
        self.applied = self.applied.without_field(field);
        self.draft = self.draft.without_field(field);
        self.errors.retain(|e| e.field() != field);
        self.applied.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::ValidationRules;

    const STATUS_OPTIONS: &[(&str, &str)] = &[("1", "Active"), ("0", "Inactive")];

    const SCHEMA: &[FilterField] = &[
        FilterField {
            name: "search",
            label: "Search",
            kind: FilterKind::Text,
            rules: ValidationRules::none().with_max_length(10),
        },
        FilterField {
            name: "status",
            label: "Status",
            kind: FilterKind::Choice(STATUS_OPTIONS),
            rules: ValidationRules::none(),
        },
        FilterField {
            name: "date_from",
            label: "From date",
            kind: FilterKind::Date,
            rules: ValidationRules::none(),
        },
        FilterField {
            name: "date_to",
            label: "To date",
            kind: FilterKind::Date,
            rules: ValidationRules::none(),
        },
    ];

    fn date(y: i32, m: u32, d: u32) -> FilterValue {
        FilterValue::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_empty_values_are_not_stored() {
        let set = FilterSet::new()
            .with_field("search", FilterValue::Text("   ".into()))
            .with_field("status", FilterValue::Choice(String::new()));
        assert!(set.is_empty());

        let set = set
            .with_field("search", FilterValue::Text("crocin".into()))
            .with_field("search", FilterValue::Text(String::new()));
        assert!(set.get("search").is_none());
    }

    #[test]
    fn test_query_pairs_are_sorted_and_wire_formatted() {
        let set = FilterSet::new()
            .with_field("status", FilterValue::Choice("1".into()))
            .with_field("date_from", date(2024, 3, 5))
            .with_field("search", FilterValue::Text(" dolo ".into()));
        assert_eq!(
            set.to_query_pairs(),
            vec![
                ("date_from".to_string(), "2024-03-05".to_string()),
                ("search".to_string(), "dolo".to_string()),
                ("status".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_draft_keeps_text_as_typed_until_commit() {
        let mut editor = FilterEditor::default();
        editor.set_draft_field("search", FilterValue::Text(" ".into()));
        assert_eq!(editor.draft().get("search"), Some(&FilterValue::Text(" ".into())));

        editor.set_draft_field("search", FilterValue::Text(" do".into()));
        assert_eq!(editor.draft().get("search"), Some(&FilterValue::Text(" do".into())));

        editor.set_draft_field("search", FilterValue::Text("   ".into()));
        let applied = editor.commit(SCHEMA).unwrap();
        assert!(applied.is_empty());
        assert!(editor.draft().is_empty());
    }

    #[test]
    fn test_draft_edits_do_not_touch_applied() {
        let applied = FilterSet::new().with_field("search", FilterValue::Text("a".into()));
        let draft = open_editor(&applied);
        let draft = set_draft_field(&draft, "status", FilterValue::Choice("1".into()));
        assert_eq!(applied.active_count(), 1);
        assert_eq!(draft.active_count(), 2);
    }

    #[test]
    fn test_commit_replaces_applied_wholesale() {
        let mut editor = FilterEditor::new(
            FilterSet::new()
                .with_field("search", FilterValue::Text("old".into()))
                .with_field("status", FilterValue::Choice("1".into())),
        );
        editor.set_draft_field("search", FilterValue::Text(String::new()));
        editor.set_draft_field("date_from", date(2024, 1, 1));

        let applied = editor.commit(SCHEMA).unwrap();
        assert!(applied.get("search").is_none());
        assert_eq!(applied.get("status"), Some(&FilterValue::Choice("1".into())));
        assert!(applied.get("date_from").is_some());
        assert_eq!(editor.applied(), &applied);
    }

    #[test]
    fn test_failed_commit_keeps_applied() {
        let mut editor = FilterEditor::default();
        editor.set_draft_field("search", FilterValue::Text("far too long".into()));
        editor.set_draft_field("date_from", date(2024, 5, 2));
        editor.set_draft_field("date_to", date(2024, 5, 1));

        let errors = editor.commit(SCHEMA).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(editor.applied().is_empty());
        assert!(matches!(
            editor.error_for("date_to"),
            Some(ValidationError::InvertedRange { .. })
        ));

        editor.set_draft_field("date_to", date(2024, 5, 9));
        assert!(editor.error_for("date_to").is_none());
        assert!(editor.error_for("search").is_some());
    }

    #[test]
    fn test_unknown_choice_is_rejected() {
        let draft = FilterSet::new().with_field("status", FilterValue::Choice("2".into()));
        let errors = draft.validate(SCHEMA).unwrap_err();
        assert_eq!(errors[0].field(), "status");
    }

    #[test]
    fn test_open_discards_pending_draft() {
        let mut editor = FilterEditor::default();
        editor.set_draft_field("search", FilterValue::Text("abc".into()));
        editor.open();
        assert!(editor.draft().is_empty());
    }

    #[test]
    fn test_clear_and_remove() {
        let mut editor = FilterEditor::new(
            FilterSet::new()
                .with_field("search", FilterValue::Text("abc".into()))
                .with_field("status", FilterValue::Choice("0".into())),
        );
        let applied = editor.remove("status");
        assert_eq!(applied.active_count(), 1);
        assert!(editor.draft().get("status").is_none());

        assert!(editor.clear().is_empty());
        assert!(editor.draft().is_empty());
    }

    #[test]
    fn test_chip_display_for_dates() {
        assert_eq!(date(2024, 12, 31).display(), "31/12/2024");
        assert_eq!(FilterValue::Text(" x ".into()).display(), "x");
    }
}
