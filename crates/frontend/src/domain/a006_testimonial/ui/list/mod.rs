use contracts::domain::a006_testimonial::dto::{TestimonialDto, DESCRIPTOR};
use leptos::prelude::*;

use crate::shared::export::Column;
use crate::shared::list::{ListController, ResourceListPage};

pub fn columns() -> Vec<Column<TestimonialDto>> {
    vec![
        Column::text("Customer", |t: &TestimonialDto| (&t.customer_name).into()),
        Column::integer("Rating", |t: &TestimonialDto| t.rating.map(i64::from).into()),
        Column::text("Message", |t: &TestimonialDto| (&t.message).into()),
        Column::date("Received", |t: &TestimonialDto| (&t.created_at).into()),
        Column::flag("Status", |t: &TestimonialDto| t.status.into(), "Active", "Inactive"),
    ]
}

#[component]
pub fn TestimonialList() -> impl IntoView {
    let controller = ListController::<TestimonialDto>::for_descriptor(&DESCRIPTOR);
    view! { <ResourceListPage controller=controller columns=columns() /> }
}
