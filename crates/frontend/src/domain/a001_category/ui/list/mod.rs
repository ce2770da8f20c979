use contracts::domain::a001_category::dto::{CategoryDto, DESCRIPTOR};
use leptos::prelude::*;

use crate::shared::export::Column;
use crate::shared::list::{ListController, ResourceListPage};

pub fn columns() -> Vec<Column<CategoryDto>> {
    vec![
        Column::text("Category", |c: &CategoryDto| (&c.category_name).into()),
        Column::text("Parent", |c: &CategoryDto| (&c.parent_name).into()),
        Column::text("Description", |c: &CategoryDto| (&c.description).into()),
        Column::integer("Products", |c: &CategoryDto| c.product_count.into()),
        Column::date("Created", |c: &CategoryDto| (&c.created_at).into()),
        Column::flag("Status", |c: &CategoryDto| c.status.into(), "Active", "Inactive"),
    ]
}

#[component]
pub fn CategoryList() -> impl IntoView {
    let controller = ListController::<CategoryDto>::for_descriptor(&DESCRIPTOR);
    view! { <ResourceListPage controller=controller columns=columns() /> }
}
