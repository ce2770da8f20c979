//! Modal overlay and the confirmation dialog service.
//!
//! Destructive list actions (delete, status toggle) never run directly; they
//! go through [`ConfirmService::ask`] and run only once the user confirms.

use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Overlay + positioned surface shared by every dialog.
#[component]
pub fn ModalFrame(
    /// Called on overlay click
    on_close: Callback<()>,
    #[prop(optional)] modal_class: &'static str,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    };

    // Press and release must both land on the overlay; a text selection that
    // ends outside the dialog does not close it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            defer(move || on_close.run(()));
        }
    };

    let class = if modal_class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {modal_class}")
    };

    view! {
        <div
            class="modal-overlay"
            style="z-index: 1000;"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=class style="position: relative;" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}

/// Runs `f` on the next tick.
///
/// Removing a dialog synchronously from inside its own click handler makes
/// Leptos call a handler that has already been dropped.
pub fn defer(f: impl FnOnce() + 'static) {
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        f();
    });
}

#[derive(Clone)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub on_confirm: Callback<()>,
}

/// Holds at most one pending confirmation; a newer request replaces it.
#[derive(Clone, Copy)]
pub struct ConfirmService {
    pending: RwSignal<Option<ConfirmRequest>>,
}

impl ConfirmService {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(None),
        }
    }

    pub fn ask(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        confirm_label: impl Into<String>,
        on_confirm: impl Fn() + Send + Sync + 'static,
    ) {
        let request = ConfirmRequest {
            title: title.into(),
            message: message.into(),
            confirm_label: confirm_label.into(),
            on_confirm: Callback::new(move |_| on_confirm()),
        };
        log::debug!("confirm: {}", request.title);
        self.pending.set(Some(request));
    }

    pub fn is_open(&self) -> bool {
        self.pending.with(Option::is_some)
    }

    pub fn confirm(&self) {
        let pending = self.pending;
        defer(move || {
            if let Some(request) = pending.try_update(Option::take).flatten() {
                request.on_confirm.run(());
            }
        });
    }

    pub fn cancel(&self) {
        let pending = self.pending;
        defer(move || pending.set(None));
    }
}

impl Default for ConfirmService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the pending confirmation. Mounted once at the application root.
#[component]
pub fn ConfirmHost() -> impl IntoView {
    let svc = expect_context::<ConfirmService>();

    view! {
        <Show when=move || svc.is_open()>
            {move || {
                svc.pending.get().map(|request| {
                    view! {
                        <ModalFrame on_close=Callback::new(move |_| svc.cancel()) modal_class="modal--confirm">
                            <div class="modal-header">
                                <h2 class="modal-title">{request.title.clone()}</h2>
                            </div>
                            <div class="modal-body">
                                <p>{request.message.clone()}</p>
                            </div>
                            <div class="modal-footer">
                                <Button appearance=ButtonAppearance::Secondary on_click=move |_| svc.cancel()>
                                    "Cancel"
                                </Button>
                                <Button appearance=ButtonAppearance::Primary on_click=move |_| svc.confirm()>
                                    {request.confirm_label.clone()}
                                </Button>
                            </div>
                        </ModalFrame>
                    }
                })
            }}
        </Show>
    }
}
