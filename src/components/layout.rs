//! Layout Shell
//!
//! Sidebar navigation plus the main content area. The footer shows the
//! signed-in profile and the logout button; logout deliberately ignores the
//! server outcome so the client session always ends.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::api;
use crate::session;

/// Sidebar entries, in display order
const NAV_ITEMS: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/products", "Products"),
    ("/categories", "Categories"),
    ("/stocks", "Stocks"),
    ("/orders", "Orders"),
    ("/transactions", "Transactions"),
    ("/users", "Users"),
];

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let store = session::use_session();
    let navigate = use_navigate();

    let initial = move || {
        session::current_user(&store)
            .and_then(|u| u.fullname.chars().next())
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "U".to_string())
    };
    let name = move || {
        session::current_user(&store)
            .map(|u| u.fullname)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "User".to_string())
    };
    let role = move || {
        session::current_user(&store)
            .map(|u| u.role)
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| "-".to_string())
    };

    let logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            // server outcome ignored, the client session ends either way
            if let Err(err) = api::logout().await {
                web_sys::console::warn_1(&format!("[AUTH] logout failed: {err}").into());
            }
            session::clear_auth(&store);
            navigate("/login", NavigateOptions::default());
        });
    };

    view! {
        <div class="layout">
            <aside class="sidebar">
                <div class="sidebar-header">
                    <span class="logo-icon">"\u{2726}"</span>
                    <span class="logo-text">"FashionStore"</span>
                </div>

                // active link styling keys off aria-current, which <A> manages
                <nav class="sidebar-nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <A href=*href exact={*href == "/"}>
                                    {*label}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="sidebar-footer">
                    <div class="user-info">
                        <div class="user-avatar">{initial}</div>
                        <div>
                            <div class="user-name">{name}</div>
                            <div class="user-role">{role}</div>
                        </div>
                    </div>
                    <button class="logout-btn" on:click=logout>
                        "Logout"
                    </button>
                </div>
            </aside>

            <main class="main-content">{children()}</main>
        </div>
    }
}
