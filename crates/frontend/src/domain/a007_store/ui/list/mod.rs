use contracts::domain::a007_store::dto::{StoreDto, DESCRIPTOR};
use leptos::prelude::*;

use crate::shared::export::Column;
use crate::shared::list::{ListController, ResourceListPage};

pub fn columns() -> Vec<Column<StoreDto>> {
    vec![
        Column::text("Store", |s: &StoreDto| (&s.store_name).into()),
        Column::text("Address", |s: &StoreDto| (&s.address).into()),
        Column::text("City", |s: &StoreDto| (&s.city).into()),
        Column::text("State", |s: &StoreDto| (&s.state).into()),
        Column::text("Pincode", |s: &StoreDto| (&s.pincode).into()),
        Column::text("Phone", |s: &StoreDto| (&s.phone).into()),
        Column::flag("Status", |s: &StoreDto| s.status.into(), "Active", "Inactive"),
    ]
}

#[component]
pub fn StoreList() -> impl IntoView {
    let controller = ListController::<StoreDto>::for_descriptor(&DESCRIPTOR);
    view! { <ResourceListPage controller=controller columns=columns() /> }
}
