use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::config::load_config;
use crate::shared::modal::{ConfirmHost, ConfirmService};
use crate::shared::notify::{NotificationHost, NotificationService};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    provide_context(load_config());
    provide_context(AppGlobalContext::new());
    provide_context(NotificationService::new());
    provide_context(ConfirmService::new());

    view! {
        <ConfigProvider>
            <Shell />
            <NotificationHost />
            <ConfirmHost />
        </ConfigProvider>
    }
}
