//! Sidebar: one collapsible group per menu section, one item per page.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::{MenuGroup, MENU};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            {MENU.iter().map(|group| view! { <SidebarGroup group=group /> }).collect_view()}
        </nav>
    }
}

#[component]
fn SidebarGroup(group: &'static MenuGroup) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let expanded = RwSignal::new(true);

    view! {
        <div class="sidebar__group">
            <button class="sidebar__group-header" on:click=move |_| expanded.update(|e| *e = !*e)>
                {icon(group.icon)}
                <span>{group.label}</span>
            </button>
            <Show when=move || expanded.get()>
                <ul class="sidebar__items">
                    {group
                        .pages
                        .iter()
                        .map(|descriptor| {
                            let code = descriptor.code;
                            view! {
                                <li
                                    class="sidebar__item"
                                    class:sidebar__item--active=move || ctx.is_active(code)
                                    on:click=move |_| ctx.open_page(code)
                                >
                                    {descriptor.title}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}
