//! PageFrame: standard root wrapper of every page shown in the content area.
//!
//! Sets `id` (`"{resource}--{category}"`) and `data-page-category` on the root
//! element; report pages get the `page--report` modifier.

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// Resource code, e.g. `"a001_category"`
    code: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_REPORT => "page page--report",
        _ => "page",
    };

    view! {
        <div id=page_id(code, category) class=class data-page-category=category>
            {children()}
        </div>
    }
}
