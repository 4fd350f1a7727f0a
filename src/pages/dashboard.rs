//! Dashboard Page
//!
//! Four independent stat fetches run in parallel; a failed one leaves its
//! counter at zero while the rest still report. Loading ends once all four
//! settle, tracked by a pending counter.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::format::locale_date_long;
use crate::session;

/// Quick links: path, label, description
const QUICK_LINKS: &[(&str, &str, &str)] = &[
    ("/products", "Products", "Kelola data produk"),
    ("/categories", "Categories", "Kelola kategori"),
    ("/stocks", "Stocks", "Riwayat stok masuk/keluar"),
    ("/orders", "Orders", "Kelola pesanan"),
    ("/transactions", "Transactions", "Riwayat transaksi"),
    ("/users", "Users", "Manajemen pengguna"),
];

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = session::use_session();

    let (products, set_products) = signal(0u64);
    let (orders, set_orders) = signal(0u64);
    let (transactions, set_transactions) = signal(0u64);
    let (users, set_users) = signal(0u64);
    let (pending, set_pending) = signal(4u8);

    let settle = move || set_pending.update(|p| *p = p.saturating_sub(1));

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(count) = api::count_products().await {
                set_products.set(count);
            }
            settle();
        });
        spawn_local(async move {
            // orders has no count field; the list length is the statistic
            if let Ok(list) = api::list_orders().await {
                set_orders.set(list.len() as u64);
            }
            settle();
        });
        spawn_local(async move {
            if let Ok(count) = api::count_transactions().await {
                set_transactions.set(count);
            }
            settle();
        });
        spawn_local(async move {
            if let Ok(count) = api::count_users().await {
                set_users.set(count);
            }
            settle();
        });
    });

    let loading = move || pending.get() > 0;
    let greeting = move || {
        let name = session::current_user(&store)
            .map(|u| u.fullname)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "Admin".to_string());
        format!("Selamat datang, {} — {}", name, locale_date_long())
    };

    view! {
        <div>
            <div class="page-header">
                <div>
                    <h1 class="page-title">"Dashboard"</h1>
                    <p class="page-subtitle">{greeting}</p>
                </div>
            </div>

            <Show
                when=move || !loading()
                fallback=|| view! { <div class="loading">"Memuat data..."</div> }
            >
                <div class="stats-grid">
                    <A href="/products">
                        <div class="stat-card">
                            <div class="stat-value">{move || products.get()}</div>
                            <div class="stat-label">"Total Produk"</div>
                        </div>
                    </A>
                    <A href="/orders">
                        <div class="stat-card">
                            <div class="stat-value">{move || orders.get()}</div>
                            <div class="stat-label">"Orders"</div>
                        </div>
                    </A>
                    <A href="/transactions">
                        <div class="stat-card">
                            <div class="stat-value">{move || transactions.get()}</div>
                            <div class="stat-label">"Transaksi"</div>
                        </div>
                    </A>
                    <A href="/users">
                        <div class="stat-card">
                            <div class="stat-value">{move || users.get()}</div>
                            <div class="stat-label">"Users"</div>
                        </div>
                    </A>
                </div>
            </Show>

            <h2 class="section-title">"Menu Cepat"</h2>
            <div class="quick-grid">
                {QUICK_LINKS
                    .iter()
                    .map(|(href, label, desc)| {
                        view! {
                            <A href=*href>
                                <div class="stat-card quick-card">
                                    <span class="quick-label">{*label}</span>
                                    <span class="quick-desc">{*desc}</span>
                                </div>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
