//! Stocks Page
//!
//! Append-only movement history: entries are created, never edited or
//! deleted from here. Stock arithmetic itself lives on the server.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, NewStockEntry};
use crate::components::Modal;
use crate::format::locale_datetime;
use crate::models::StockEntry;
use crate::pages::submit_mutation;

#[derive(Clone, PartialEq)]
struct StockForm {
    product_id: String,
    quantity_change: String,
    action: String,
}

impl Default for StockForm {
    fn default() -> Self {
        Self {
            product_id: String::new(),
            quantity_change: String::new(),
            action: "masuk".to_string(),
        }
    }
}

fn validate(form: &StockForm) -> Result<NewStockEntry, String> {
    if form.product_id.trim().is_empty()
        || form.quantity_change.trim().is_empty()
        || form.action.trim().is_empty()
    {
        return Err("Semua field wajib diisi".to_string());
    }
    let product_id: u32 = form
        .product_id
        .trim()
        .parse()
        .map_err(|_| "Product ID harus berupa angka".to_string())?;
    let quantity_change: i64 = form
        .quantity_change
        .trim()
        .parse()
        .map_err(|_| "Jumlah harus berupa angka".to_string())?;
    Ok(NewStockEntry {
        product_id,
        quantity_change,
        action: form.action.clone(),
    })
}

/// Signed display: "+10", "-5", "0".
fn signed_quantity(n: i64) -> String {
    if n > 0 {
        format!("+{n}")
    } else {
        n.to_string()
    }
}

fn quantity_class(n: i64) -> &'static str {
    if n > 0 {
        "qty qty-in"
    } else {
        "qty qty-out"
    }
}

fn action_badge(action: &str) -> &'static str {
    if action == "masuk" {
        "badge badge-green"
    } else {
        "badge badge-red"
    }
}

#[component]
pub fn Stocks() -> impl IntoView {
    let (items, set_items) = signal(Vec::<StockEntry>::new());
    let (loading, set_loading) = signal(true);
    let (modal, set_modal) = signal(false);
    let form = RwSignal::new(StockForm::default());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(String::new());
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload.get();
        spawn_local(async move {
            match api::list_stocks().await {
                Ok(list) => set_items.set(list),
                Err(_) => set_items.set(Vec::new()),
            }
            set_loading.set(false);
        });
    });

    let open_add = move |_| {
        form.set(StockForm::default());
        set_error.set(String::new());
        set_modal.set(true);
    };

    let submit = move |_| {
        let payload = match validate(&form.get_untracked()) {
            Ok(p) => p,
            Err(msg) => {
                set_error.set(msg);
                return;
            }
        };
        submit_mutation(
            async move { api::create_stock(&payload).await },
            set_saving,
            set_error,
            move || {
                set_modal.set(false);
                form.set(StockForm::default());
                set_reload.update(|n| *n += 1);
            },
        );
    };

    view! {
        <div>
            <div class="page-header">
                <div>
                    <h1 class="page-title">"Stocks"</h1>
                    <p class="page-subtitle">"Riwayat perubahan stok produk"</p>
                </div>
                <button class="btn btn-primary" on:click=open_add>
                    "+ Tambah Stok"
                </button>
            </div>

            <div class="table-wrap">
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="loading">"Memuat..."</div> }
                >
                    <table>
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Produk"</th>
                                <th>"Perubahan Qty"</th>
                                <th>"Aksi"</th>
                                <th>"Tanggal"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = items.get();
                                if rows.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="5" class="empty">"Belum ada riwayat stok"</td>
                                        </tr>
                                    }
                                        .into_any()
                                } else {
                                    rows.into_iter()
                                        .map(|s| {
                                            let product = s
                                                .product_name
                                                .clone()
                                                .unwrap_or_else(|| format!("Produk #{}", s.product_id));
                                            view! {
                                                <tr>
                                                    <td class="muted">{format!("#{}", s.id)}</td>
                                                    <td><strong>{product}</strong></td>
                                                    <td class=quantity_class(s.quantity_change)>
                                                        {signed_quantity(s.quantity_change)}
                                                    </td>
                                                    <td>
                                                        <span class=action_badge(&s.action)>{s.action.clone()}</span>
                                                    </td>
                                                    <td class="muted">
                                                        {locale_datetime(s.created_at.as_deref())}
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                            }}
                        </tbody>
                    </table>
                </Show>
            </div>

            {move || {
                modal
                    .get()
                    .then(|| {
                        view! {
                            <Modal
                                title="Tambah Riwayat Stok"
                                on_close=Callback::new(move |_| set_modal.set(false))
                            >
                                <Show when=move || !error.get().is_empty()>
                                    <div class="login-error">{move || error.get()}</div>
                                </Show>
                                <div class="form-group">
                                    <label>"Product ID"</label>
                                    <input
                                        class="form-control"
                                        type="number"
                                        placeholder="ID produk"
                                        prop:value=move || form.get().product_id
                                        on:input=move |ev| {
                                            form.update(|f| f.product_id = event_target_value(&ev))
                                        }
                                    />
                                </div>
                                <div class="form-row">
                                    <div class="form-group">
                                        <label>"Jumlah"</label>
                                        <input
                                            class="form-control"
                                            type="number"
                                            placeholder="Contoh: 10 atau -5"
                                            prop:value=move || form.get().quantity_change
                                            on:input=move |ev| {
                                                form.update(|f| f.quantity_change = event_target_value(&ev))
                                            }
                                        />
                                    </div>
                                    <div class="form-group">
                                        <label>"Tipe"</label>
                                        <select
                                            class="form-control"
                                            prop:value=move || form.get().action
                                            on:change=move |ev| {
                                                form.update(|f| f.action = event_target_value(&ev))
                                            }
                                        >
                                            <option value="masuk">"Masuk"</option>
                                            <option value="keluar">"Keluar"</option>
                                        </select>
                                    </div>
                                </div>
                                <div class="form-actions">
                                    <button class="btn btn-ghost" on:click=move |_| set_modal.set(false)>
                                        "Batal"
                                    </button>
                                    <button
                                        class="btn btn-primary"
                                        disabled=move || saving.get()
                                        on:click=submit
                                    >
                                        {move || if saving.get() { "Menyimpan..." } else { "Simpan" }}
                                    </button>
                                </div>
                            </Modal>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> StockForm {
        StockForm {
            product_id: "3".to_string(),
            quantity_change: "-5".to_string(),
            action: "keluar".to_string(),
        }
    }

    #[test]
    fn all_fields_required() {
        let mut form = filled();
        form.quantity_change.clear();
        assert_eq!(validate(&form), Err("Semua field wajib diisi".to_string()));
    }

    #[test]
    fn numbers_are_coerced_including_negatives() {
        let payload = validate(&filled()).unwrap();
        assert_eq!(payload.product_id, 3);
        assert_eq!(payload.quantity_change, -5);
        assert_eq!(payload.action, "keluar");
    }

    #[test]
    fn non_numeric_drafts_fail_closed() {
        let mut form = filled();
        form.product_id = "tiga".to_string();
        assert_eq!(
            validate(&form),
            Err("Product ID harus berupa angka".to_string())
        );
    }

    #[test]
    fn quantity_display_is_signed() {
        assert_eq!(signed_quantity(10), "+10");
        assert_eq!(signed_quantity(-5), "-5");
        assert_eq!(signed_quantity(0), "0");
        assert_eq!(quantity_class(10), "qty qty-in");
        assert_eq!(quantity_class(-5), "qty qty-out");
    }

    #[test]
    fn action_maps_to_badge() {
        assert_eq!(action_badge("masuk"), "badge badge-green");
        assert_eq!(action_badge("keluar"), "badge badge-red");
    }
}
