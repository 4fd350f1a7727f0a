//! Resource Pages
//!
//! Every page follows the same list-modal-mutate shape: fetch on mount,
//! table over the fetched rows, modal draft for create/edit, full refetch
//! after any successful mutation.

mod categories;
mod dashboard;
mod login;
mod orders;
mod products;
mod stocks;
mod transactions;
mod users;

pub use categories::Categories;
pub use dashboard::Dashboard;
pub use login::Login;
pub use orders::Orders;
pub use products::Products;
pub use stocks::Stocks;
pub use transactions::Transactions;
pub use users::Users;

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::http::ApiError;

/// Which modal a page is showing
#[derive(Clone, Copy, PartialEq)]
pub enum ModalMode {
    Add,
    Edit(u32),
}

/// Shared mutate-then-reload sequence: flag saving, run the API call, then
/// either close + reload (success) or surface the inline message (failure).
pub fn submit_mutation<Fut>(
    fut: Fut,
    saving: WriteSignal<bool>,
    error: WriteSignal<String>,
    on_success: impl FnOnce() + 'static,
) where
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    saving.set(true);
    error.set(String::new());
    spawn_local(async move {
        match fut.await {
            Ok(()) => on_success(),
            Err(err) => {
                web_sys::console::warn_1(&format!("[API] save failed: {err}").into());
                error.set(err.save_message());
            }
        }
        saving.set(false);
    });
}

/// Interactive delete confirmation. Declining means no call, no state change.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}
