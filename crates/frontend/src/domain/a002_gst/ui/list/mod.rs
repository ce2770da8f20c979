use contracts::domain::a002_gst::dto::{GstDto, DESCRIPTOR};
use leptos::prelude::*;

use crate::shared::export::Column;
use crate::shared::list::{ListController, ResourceListPage};

pub fn columns() -> Vec<Column<GstDto>> {
    vec![
        Column::text("HSN code", |g: &GstDto| (&g.hsn_code).into()),
        Column::text("Description", |g: &GstDto| (&g.description).into()),
        Column::percent("GST", |g: &GstDto| g.gst_rate.into()),
        Column::percent("CGST", |g: &GstDto| g.cgst.into()),
        Column::percent("SGST", |g: &GstDto| g.sgst.into()),
        Column::percent("IGST", |g: &GstDto| g.igst.into()),
        Column::flag("Status", |g: &GstDto| g.status.into(), "Active", "Inactive"),
    ]
}

#[component]
pub fn GstList() -> impl IntoView {
    let controller = ListController::<GstDto>::for_descriptor(&DESCRIPTOR);
    view! { <ResourceListPage controller=controller columns=columns() /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_render_as_two_decimal_percentages() {
        let slab: GstDto = serde_json::from_str(
            r#"{"gst_id": 4, "hsn_code": "3004", "gst_rate": "12", "cgst": 6, "sgst": "6.0", "status": true}"#,
        )
        .unwrap();
        let row: Vec<String> = columns().iter().map(|c| c.display_cell(&slab)).collect();
        assert_eq!(row, vec!["3004", "", "12.00%", "6.00%", "6.00%", "0.00%", "Active"]);
    }
}
