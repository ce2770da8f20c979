//! Registry of the pages reachable from the sidebar.

use contracts::domain::{
    a001_category, a002_gst, a003_variant, a004_policy, a005_team_member, a006_testimonial,
    a007_store, a008_career, a009_delivery_zone,
};
use contracts::projections::{
    p900_sales_report, p901_purchase_report, p902_stock_report, p903_tax_report,
};
use contracts::shared::list::ResourceDescriptor;
use leptos::prelude::*;

use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_gst::ui::list::GstList;
use crate::domain::a003_variant::ui::list::VariantList;
use crate::domain::a004_policy::ui::list::PolicyList;
use crate::domain::a005_team_member::ui::list::TeamMemberList;
use crate::domain::a006_testimonial::ui::list::TestimonialList;
use crate::domain::a007_store::ui::list::StoreList;
use crate::domain::a008_career::ui::list::CareerList;
use crate::domain::a009_delivery_zone::ui::list::DeliveryZoneList;
use crate::projections::p900_sales_report::ui::list::SalesReportList;
use crate::projections::p901_purchase_report::ui::list::PurchaseReportList;
use crate::projections::p902_stock_report::ui::list::StockReportList;
use crate::projections::p903_tax_report::ui::list::TaxReportList;

pub struct MenuGroup {
    pub label: &'static str,
    pub icon: &'static str,
    pub pages: &'static [&'static ResourceDescriptor],
}

pub const MENU: &[MenuGroup] = &[
    MenuGroup {
        label: "Master data",
        icon: "master-data",
        pages: &[
            &a001_category::dto::DESCRIPTOR,
            &a002_gst::dto::DESCRIPTOR,
            &a003_variant::dto::DESCRIPTOR,
            &a004_policy::dto::DESCRIPTOR,
            &a005_team_member::dto::DESCRIPTOR,
            &a006_testimonial::dto::DESCRIPTOR,
            &a007_store::dto::DESCRIPTOR,
            &a008_career::dto::DESCRIPTOR,
            &a009_delivery_zone::dto::DESCRIPTOR,
        ],
    },
    MenuGroup {
        label: "Reports",
        icon: "reports",
        pages: &[
            &p900_sales_report::dto::DESCRIPTOR,
            &p901_purchase_report::dto::DESCRIPTOR,
            &p902_stock_report::dto::DESCRIPTOR,
            &p903_tax_report::dto::DESCRIPTOR,
        ],
    },
];

pub const DEFAULT_PAGE: &str = a001_category::dto::DESCRIPTOR.code;

pub fn render_page(code: &str) -> AnyView {
    match code {
        "a001_category" => view! { <CategoryList /> }.into_any(),
        "a002_gst" => view! { <GstList /> }.into_any(),
        "a003_variant" => view! { <VariantList /> }.into_any(),
        "a004_policy" => view! { <PolicyList /> }.into_any(),
        "a005_team_member" => view! { <TeamMemberList /> }.into_any(),
        "a006_testimonial" => view! { <TestimonialList /> }.into_any(),
        "a007_store" => view! { <StoreList /> }.into_any(),
        "a008_career" => view! { <CareerList /> }.into_any(),
        "a009_delivery_zone" => view! { <DeliveryZoneList /> }.into_any(),
        "p900_sales_report" => view! { <SalesReportList /> }.into_any(),
        "p901_purchase_report" => view! { <PurchaseReportList /> }.into_any(),
        "p902_stock_report" => view! { <StockReportList /> }.into_any(),
        "p903_tax_report" => view! { <TaxReportList /> }.into_any(),
        other => {
            log::warn!("unknown page: {}", other);
            view! { <div class="page page--missing">"Page not found"</div> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_menu_codes_are_unique() {
        let codes: Vec<&str> = MENU
            .iter()
            .flat_map(|group| group.pages.iter().map(|d| d.code))
            .collect();
        let unique: HashSet<&str> = codes.iter().copied().collect();
        assert_eq!(codes.len(), 13);
        assert_eq!(unique.len(), codes.len());
        assert!(codes.contains(&DEFAULT_PAGE));
    }

    #[test]
    fn test_reports_group_is_read_only() {
        let reports = MENU.iter().find(|g| g.label == "Reports").unwrap();
        assert!(reports.pages.iter().all(|d| d.is_read_only()));
        let master = MENU.iter().find(|g| g.label == "Master data").unwrap();
        assert!(master.pages.iter().all(|d| !d.is_read_only()));
    }
}
