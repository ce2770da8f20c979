use contracts::domain::a009_delivery_zone::dto::{DeliveryZoneDto, DESCRIPTOR};
use leptos::prelude::*;

use crate::shared::config::Config;
use crate::shared::export::Column;
use crate::shared::list::{ListController, ResourceListPage};

pub fn columns(symbol: &str) -> Vec<Column<DeliveryZoneDto>> {
    vec![
        Column::text("Pincode", |z: &DeliveryZoneDto| (&z.pincode).into()),
        Column::text("Area", |z: &DeliveryZoneDto| (&z.area_name).into()),
        Column::text("City", |z: &DeliveryZoneDto| (&z.city).into()),
        Column::money("Delivery charge", |z: &DeliveryZoneDto| z.delivery_charge.into(), symbol),
        Column::money("Min. order", |z: &DeliveryZoneDto| z.min_order_amount.into(), symbol),
        Column::integer("Days", |z: &DeliveryZoneDto| z.estimated_days.map(i64::from).into()),
        Column::flag("Status", |z: &DeliveryZoneDto| z.status.into(), "Active", "Inactive"),
    ]
}

#[component]
pub fn DeliveryZoneList() -> impl IntoView {
    let config = expect_context::<Config>();
    let controller = ListController::<DeliveryZoneDto>::for_descriptor(&DESCRIPTOR);
    view! { <ResourceListPage controller=controller columns=columns(&config.list.currency_symbol) /> }
}
