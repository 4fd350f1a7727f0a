//! Session Guard
//!
//! Route wrapper gating the admin area on token presence. No expiry check
//! happens here; a stale token surfaces as an API failure on the next call.

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};

use crate::components::Layout;
use crate::session;

/// Guarded shell around every admin route
#[component]
pub fn ProtectedShell() -> impl IntoView {
    view! {
        <Show
            when=|| session::stored_token().is_some()
            fallback=|| view! { <Redirect path="/login"/> }
        >
            <Layout>
                <Outlet/>
            </Layout>
        </Show>
    }
}
