use contracts::domain::a003_variant::dto::{VariantDto, DESCRIPTOR};
use leptos::prelude::*;

use crate::shared::export::{CellValue, Column};
use crate::shared::list::{ListController, ResourceListPage};

pub fn columns() -> Vec<Column<VariantDto>> {
    vec![
        Column::text("Variant", |v: &VariantDto| (&v.variant_name).into()),
        Column::text("Type", |v: &VariantDto| (&v.variant_type).into()),
        Column::text("Values", |v: &VariantDto| CellValue::Text(v.variant_values.join(", "))),
        Column::flag("Status", |v: &VariantDto| v.status.into(), "Active", "Inactive"),
    ]
}

#[component]
pub fn VariantList() -> impl IntoView {
    let controller = ListController::<VariantDto>::for_descriptor(&DESCRIPTOR);
    view! { <ResourceListPage controller=controller columns=columns() /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_joined() {
        let variant = VariantDto {
            variant_id: 1,
            variant_name: "Pack size".into(),
            variant_type: None,
            variant_values: vec!["10 tabs".into(), "30 tabs".into()],
            status: false,
        };
        let cells: Vec<String> = columns().iter().map(|c| c.display_cell(&variant)).collect();
        assert_eq!(cells, vec!["Pack size", "", "10 tabs, 30 tabs", "Inactive"]);
    }
}
