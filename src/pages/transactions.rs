//! Transactions Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, TransactionPayload};
use crate::components::Modal;
use crate::format::rupiah;
use crate::models::Transaction;
use crate::pages::{confirm, submit_mutation, ModalMode};

const PAYMENT_METHODS: &[&str] = &["cash", "transfer", "credit_card", "debit_card", "qris"];
const STATUS_OPTIONS: &[&str] = &["pending", "paid", "failed", "refunded"];

#[derive(Clone, PartialEq)]
struct TransactionForm {
    order_id: String,
    payment_method: String,
    total_amount: String,
    status: String,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            order_id: String::new(),
            payment_method: "cash".to_string(),
            total_amount: String::new(),
            status: "pending".to_string(),
        }
    }
}

fn validate(form: &TransactionForm) -> Result<TransactionPayload, String> {
    if form.order_id.trim().is_empty() || form.total_amount.trim().is_empty() {
        return Err("Order ID dan total wajib diisi".to_string());
    }
    let order_id: u32 = form
        .order_id
        .trim()
        .parse()
        .map_err(|_| "Order ID harus berupa angka".to_string())?;
    let total_amount: i64 = form
        .total_amount
        .trim()
        .parse()
        .map_err(|_| "Total harus berupa angka".to_string())?;
    Ok(TransactionPayload {
        order_id,
        payment_method: form.payment_method.clone(),
        total_amount,
        status: form.status.clone(),
    })
}

fn status_badge(status: &str) -> &'static str {
    match status {
        "paid" => "badge badge-green",
        "failed" => "badge badge-red",
        "pending" => "badge badge-yellow",
        _ => "badge badge-gray",
    }
}

#[component]
pub fn Transactions() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Transaction>::new());
    let (loading, set_loading) = signal(true);
    let (modal, set_modal) = signal::<Option<ModalMode>>(None);
    let form = RwSignal::new(TransactionForm::default());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(String::new());
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload.get();
        spawn_local(async move {
            match api::list_transactions().await {
                Ok(list) => set_items.set(list),
                Err(_) => set_items.set(Vec::new()),
            }
            set_loading.set(false);
        });
    });

    let open_add = move |_| {
        form.set(TransactionForm::default());
        set_error.set(String::new());
        set_modal.set(Some(ModalMode::Add));
    };

    let open_edit = move |t: Transaction| {
        form.set(TransactionForm {
            order_id: t.order_id.to_string(),
            payment_method: t
                .payment_method
                .clone()
                .unwrap_or_else(|| "cash".to_string()),
            total_amount: t.total_amount.to_string(),
            status: t.status.clone(),
        });
        set_error.set(String::new());
        set_modal.set(Some(ModalMode::Edit(t.id)));
    };

    let submit = move |_| {
        let payload = match validate(&form.get_untracked()) {
            Ok(p) => p,
            Err(msg) => {
                set_error.set(msg);
                return;
            }
        };
        let Some(mode) = modal.get_untracked() else {
            return;
        };
        submit_mutation(
            async move {
                match mode {
                    ModalMode::Add => api::create_transaction(&payload).await,
                    ModalMode::Edit(id) => api::update_transaction(id, &payload).await,
                }
            },
            set_saving,
            set_error,
            move || {
                set_modal.set(None);
                set_reload.update(|n| *n += 1);
            },
        );
    };

    let delete = move |id: u32| {
        if !confirm("Hapus transaksi ini?") {
            return;
        }
        spawn_local(async move {
            match api::delete_transaction(id).await {
                Ok(()) => set_reload.update(|n| *n += 1),
                Err(err) => {
                    web_sys::console::warn_1(&format!("[API] delete failed: {err}").into())
                }
            }
        });
    };

    view! {
        <div>
            <div class="page-header">
                <div>
                    <h1 class="page-title">"Transactions"</h1>
                    <p class="page-subtitle">{move || format!("{} transaksi", items.get().len())}</p>
                </div>
                <button class="btn btn-primary" on:click=open_add>
                    "+ Tambah Transaksi"
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
                                <th>"Order ID"</th>
                                <th>"Metode"</th>
                                <th>"Total"</th>
                                <th>"Status"</th>
                                <th>"Aksi"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = items.get();
                                if rows.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="6" class="empty">"Belum ada transaksi"</td>
                                        </tr>
                                    }
                                        .into_any()
                                } else {
                                    rows.into_iter()
                                        .map(|t| {
                                            let id = t.id;
                                            let edit = t.clone();
                                            let method = t
                                                .payment_method
                                                .clone()
                                                .unwrap_or_else(|| "-".to_string());
                                            view! {
                                                <tr>
                                                    <td class="muted">{format!("#{}", t.id)}</td>
                                                    <td>{format!("Order #{}", t.order_id)}</td>
                                                    <td>
                                                        <span class="badge badge-gray">{method}</span>
                                                    </td>
                                                    <td><strong>{rupiah(t.total_amount)}</strong></td>
                                                    <td>
                                                        <span class=status_badge(&t.status)>{t.status.clone()}</span>
                                                    </td>
                                                    <td>
                                                        <div class="actions">
                                                            <button
                                                                class="btn btn-ghost btn-sm"
                                                                on:click=move |_| open_edit(edit.clone())
                                                            >
                                                                "Edit"
                                                            </button>
                                                            <button
                                                                class="btn btn-danger btn-sm"
                                                                on:click=move |_| delete(id)
                                                            >
                                                                "Hapus"
                                                            </button>
                                                        </div>
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
                    .map(|mode| {
                        let title = match mode {
                            ModalMode::Add => "Tambah Transaksi",
                            ModalMode::Edit(_) => "Edit Transaksi",
                        };
                        view! {
                            <Modal title=title on_close=Callback::new(move |_| set_modal.set(None))>
                                <Show when=move || !error.get().is_empty()>
                                    <div class="login-error">{move || error.get()}</div>
                                </Show>
                                <div class="form-row">
                                    <div class="form-group">
                                        <label>"Order ID"</label>
                                        <input
                                            class="form-control"
                                            type="number"
                                            placeholder="ID order"
                                            prop:value=move || form.get().order_id
                                            on:input=move |ev| {
                                                form.update(|f| f.order_id = event_target_value(&ev))
                                            }
                                        />
                                    </div>
                                    <div class="form-group">
                                        <label>"Total (Rp)"</label>
                                        <input
                                            class="form-control"
                                            type="number"
                                            placeholder="150000"
                                            prop:value=move || form.get().total_amount
                                            on:input=move |ev| {
                                                form.update(|f| f.total_amount = event_target_value(&ev))
                                            }
                                        />
                                    </div>
                                </div>
                                <div class="form-row">
                                    <div class="form-group">
                                        <label>"Metode Pembayaran"</label>
                                        <select
                                            class="form-control"
                                            prop:value=move || form.get().payment_method
                                            on:change=move |ev| {
                                                form.update(|f| f.payment_method = event_target_value(&ev))
                                            }
                                        >
                                            {PAYMENT_METHODS
                                                .iter()
                                                .map(|m| view! { <option value=*m>{*m}</option> })
                                                .collect_view()}
                                        </select>
                                    </div>
                                    <div class="form-group">
                                        <label>"Status"</label>
                                        <select
                                            class="form-control"
                                            prop:value=move || form.get().status
                                            on:change=move |ev| {
                                                form.update(|f| f.status = event_target_value(&ev))
                                            }
                                        >
                                            {STATUS_OPTIONS
                                                .iter()
                                                .map(|s| view! { <option value=*s>{*s}</option> })
                                                .collect_view()}
                                        </select>
                                    </div>
                                </div>
                                <div class="form-actions">
                                    <button class="btn btn-ghost" on:click=move |_| set_modal.set(None)>
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

    fn filled() -> TransactionForm {
        TransactionForm {
            order_id: "7".to_string(),
            payment_method: "qris".to_string(),
            total_amount: "150000".to_string(),
            status: "paid".to_string(),
        }
    }

    #[test]
    fn order_id_and_total_are_required() {
        let mut form = filled();
        form.order_id.clear();
        assert_eq!(
            validate(&form),
            Err("Order ID dan total wajib diisi".to_string())
        );

        let mut form = filled();
        form.total_amount.clear();
        assert_eq!(
            validate(&form),
            Err("Order ID dan total wajib diisi".to_string())
        );
    }

    #[test]
    fn numeric_fields_are_coerced() {
        let payload = validate(&filled()).unwrap();
        assert_eq!(payload.order_id, 7);
        assert_eq!(payload.total_amount, 150000);
        assert_eq!(payload.payment_method, "qris");
    }

    #[test]
    fn status_maps_to_badge_classes() {
        assert_eq!(status_badge("paid"), "badge badge-green");
        assert_eq!(status_badge("failed"), "badge badge-red");
        assert_eq!(status_badge("pending"), "badge badge-yellow");
        assert_eq!(status_badge("refunded"), "badge badge-gray");
    }
}
