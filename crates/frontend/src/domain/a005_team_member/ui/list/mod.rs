use contracts::domain::a005_team_member::dto::{TeamMemberDto, DESCRIPTOR};
use leptos::prelude::*;

use crate::shared::export::Column;
use crate::shared::list::{ListController, ResourceListPage};

pub fn columns() -> Vec<Column<TeamMemberDto>> {
    vec![
        Column::text("Name", |m: &TeamMemberDto| (&m.name).into()),
        Column::text("Designation", |m: &TeamMemberDto| (&m.designation).into()),
        Column::text("Email", |m: &TeamMemberDto| (&m.email).into()),
        Column::text("Phone", |m: &TeamMemberDto| (&m.phone).into()),
        Column::flag("Status", |m: &TeamMemberDto| m.status.into(), "Active", "Inactive"),
    ]
}

#[component]
pub fn TeamMemberList() -> impl IntoView {
    let controller = ListController::<TeamMemberDto>::for_descriptor(&DESCRIPTOR);
    view! { <ResourceListPage controller=controller columns=columns() /> }
}
