use contracts::domain::a004_policy::dto::{PolicyDto, DESCRIPTOR};
use leptos::prelude::*;

use crate::shared::export::Column;
use crate::shared::list::{ListController, ResourceListPage};

pub fn columns() -> Vec<Column<PolicyDto>> {
    vec![
        Column::text("Title", |p: &PolicyDto| (&p.title).into()),
        Column::text("Type", |p: &PolicyDto| (&p.policy_type).into()),
        Column::date("Updated", |p: &PolicyDto| (&p.updated_at).into()),
        Column::flag("Status", |p: &PolicyDto| p.status.into(), "Active", "Inactive"),
    ]
}

#[component]
pub fn PolicyList() -> impl IntoView {
    let controller = ListController::<PolicyDto>::for_descriptor(&DESCRIPTOR);
    view! { <ResourceListPage controller=controller columns=columns() /> }
}
