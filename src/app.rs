//! FashionStore Admin App
//!
//! Root component: provides the session store, mounts the router, and puts
//! every resource page behind the session guard.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::ProtectedShell;
use crate::pages::{
    Categories, Dashboard, Login, Orders, Products, Stocks, Transactions, Users,
};
use crate::session::{self, SessionStore};

#[component]
pub fn App() -> impl IntoView {
    let store: SessionStore = Store::new(session::init_session());
    provide_context(store);

    view! {
        <Router>
            <Routes fallback=|| view! { <div class="empty">"Halaman tidak ditemukan"</div> }>
                <Route path=path!("/login") view=Login/>
                <ParentRoute path=path!("") view=ProtectedShell>
                    <Route path=path!("") view=Dashboard/>
                    <Route path=path!("products") view=Products/>
                    <Route path=path!("categories") view=Categories/>
                    <Route path=path!("stocks") view=Stocks/>
                    <Route path=path!("orders") view=Orders/>
                    <Route path=path!("transactions") view=Transactions/>
                    <Route path=path!("users") view=Users/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
