use contracts::domain::a008_career::dto::{CareerDto, DESCRIPTOR};
use leptos::prelude::*;

use crate::shared::export::Column;
use crate::shared::list::{ListController, ResourceListPage};

pub fn columns() -> Vec<Column<CareerDto>> {
    vec![
        Column::text("Job title", |c: &CareerDto| (&c.job_title).into()),
        Column::text("Department", |c: &CareerDto| (&c.department).into()),
        Column::text("Location", |c: &CareerDto| (&c.location).into()),
        Column::text("Experience", |c: &CareerDto| (&c.experience).into()),
        Column::integer("Openings", |c: &CareerDto| c.openings.map(i64::from).into()),
        Column::date("Posted", |c: &CareerDto| (&c.posted_on).into()),
        Column::flag("Status", |c: &CareerDto| c.status.into(), "Active", "Inactive"),
    ]
}

#[component]
pub fn CareerList() -> impl IntoView {
    let controller = ListController::<CareerDto>::for_descriptor(&DESCRIPTOR);
    view! { <ResourceListPage controller=controller columns=columns() /> }
}
