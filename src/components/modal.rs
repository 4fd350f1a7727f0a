//! Modal Dialog
//!
//! Overlay plus dialog box. Clicking the overlay closes; clicks inside the
//! dialog stop propagation so they never reach the overlay handler.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>{title}</h3>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        "\u{2715}"
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
