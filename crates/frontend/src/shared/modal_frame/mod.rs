use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

/// Overlay + surface of a modal dialog with a title bar.
///
/// Closes on Escape, on the close button and on an overlay click (only when
/// both press and release happened on the overlay, so selecting text inside
/// the form and releasing outside does not close it).
#[component]
pub fn ModalFrame(
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    /// Ignore close requests, e.g. while a submit is in flight
    #[prop(optional, into)]
    locked: Signal<bool>,
    #[prop(optional, into)] modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let request_close = move || {
        if !locked.get_untracked() {
            on_close.run(());
        }
    };

    let keydown = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" {
            request_close();
        }
    });
    on_cleanup(move || keydown.remove());

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // the overlay is removed by its own click handler otherwise
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                request_close();
            });
        }
    };

    let class = match modal_class {
        Some(extra) => format!("modal {}", extra),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=class role="dialog" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button
                        class="button button--icon modal__close"
                        disabled=move || locked.get()
                        on:click=move |_| request_close()
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
