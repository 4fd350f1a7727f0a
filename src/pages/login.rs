//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, LoginPayload};
use crate::session;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

#[component]
pub fn Login() -> impl IntoView {
    let store = session::use_session();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get_untracked();
        let password = password.get_untracked();
        if email.trim().is_empty() || password.is_empty() {
            set_error.set("Email dan password wajib diisi".to_string());
            return;
        }
        set_saving.set(true);
        set_error.set(String::new());
        let navigate = navigate.clone();
        spawn_local(async move {
            let payload = LoginPayload {
                email: email.trim().to_string(),
                password,
            };
            match api::login(&payload).await {
                Ok(data) => {
                    session::save_auth(&store, data.user, &data.token);
                    navigate("/", NavigateOptions::default());
                }
                Err(err) => set_error.set(err.message_or("Login gagal")),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=submit>
                <div class="login-brand">
                    <span class="logo-icon">"\u{2726}"</span>
                    <span class="logo-text">"FashionStore"</span>
                </div>
                <p class="login-subtitle">"Masuk ke panel admin"</p>

                <Show when=move || !error.get().is_empty()>
                    <div class="login-error">{move || error.get()}</div>
                </Show>

                <div class="form-group">
                    <label>"Email"</label>
                    <input
                        class="form-control"
                        type="email"
                        placeholder="admin@fashionstore.id"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Password"</label>
                    <input
                        class="form-control"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>

                <button class="btn btn-primary btn-block" type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Memproses..." } else { "Masuk" }}
                </button>
            </form>
        </div>
    }
}
