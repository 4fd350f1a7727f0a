//! Orders Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, OrderPayload};
use crate::components::Modal;
use crate::format::locale_datetime;
use crate::models::Order;
use crate::pages::{confirm, submit_mutation, ModalMode};

const STATUS_OPTIONS: &[&str] = &["pending", "processing", "completed", "cancelled"];

#[derive(Clone, PartialEq)]
struct OrderForm {
    customer_id: String,
    status: String,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            customer_id: String::new(),
            status: "pending".to_string(),
        }
    }
}

fn validate(form: &OrderForm) -> Result<OrderPayload, String> {
    if form.customer_id.trim().is_empty() {
        return Err("Customer ID wajib diisi".to_string());
    }
    let customer_id: u32 = form
        .customer_id
        .trim()
        .parse()
        .map_err(|_| "Customer ID harus berupa angka".to_string())?;
    Ok(OrderPayload {
        customer_id,
        status: form.status.clone(),
    })
}

fn status_badge(status: &str) -> &'static str {
    match status {
        "pending" => "badge badge-yellow",
        "completed" => "badge badge-green",
        "cancelled" => "badge badge-red",
        _ => "badge badge-gray",
    }
}

#[component]
pub fn Orders() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Order>::new());
    let (loading, set_loading) = signal(true);
    let (modal, set_modal) = signal::<Option<ModalMode>>(None);
    let form = RwSignal::new(OrderForm::default());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(String::new());
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload.get();
        spawn_local(async move {
            match api::list_orders().await {
                Ok(list) => set_items.set(list),
                Err(_) => set_items.set(Vec::new()),
            }
            set_loading.set(false);
        });
    });

    let open_add = move |_| {
        form.set(OrderForm::default());
        set_error.set(String::new());
        set_modal.set(Some(ModalMode::Add));
    };

    let open_edit = move |o: Order| {
        form.set(OrderForm {
            customer_id: o.customer_id.to_string(),
            status: o.status.clone(),
        });
        set_error.set(String::new());
        set_modal.set(Some(ModalMode::Edit(o.id)));
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
                    ModalMode::Add => api::create_order(&payload).await,
                    ModalMode::Edit(id) => api::update_order(id, &payload).await,
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
        if !confirm("Hapus order ini?") {
            return;
        }
        spawn_local(async move {
            match api::delete_order(id).await {
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
                    <h1 class="page-title">"Orders"</h1>
                    <p class="page-subtitle">{move || format!("{} pesanan", items.get().len())}</p>
                </div>
                <button class="btn btn-primary" on:click=open_add>
                    "+ Tambah Order"
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
                                <th>"Customer ID"</th>
                                <th>"Status"</th>
                                <th>"Tanggal"</th>
                                <th>"Aksi"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = items.get();
                                if rows.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="5" class="empty">"Belum ada order"</td>
                                        </tr>
                                    }
                                        .into_any()
                                } else {
                                    rows.into_iter()
                                        .map(|o| {
                                            let id = o.id;
                                            let edit = o.clone();
                                            view! {
                                                <tr>
                                                    <td class="muted">{format!("#{}", o.id)}</td>
                                                    <td>{format!("Customer #{}", o.customer_id)}</td>
                                                    <td>
                                                        <span class=status_badge(&o.status)>{o.status.clone()}</span>
                                                    </td>
                                                    <td class="muted">
                                                        {locale_datetime(o.order_date.as_deref())}
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
                            ModalMode::Add => "Tambah Order",
                            ModalMode::Edit(_) => "Edit Order",
                        };
                        view! {
                            <Modal title=title on_close=Callback::new(move |_| set_modal.set(None))>
                                <Show when=move || !error.get().is_empty()>
                                    <div class="login-error">{move || error.get()}</div>
                                </Show>
                                <div class="form-group">
                                    <label>"Customer ID"</label>
                                    <input
                                        class="form-control"
                                        type="number"
                                        placeholder="ID customer"
                                        prop:value=move || form.get().customer_id
                                        on:input=move |ev| {
                                            form.update(|f| f.customer_id = event_target_value(&ev))
                                        }
                                    />
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

    #[test]
    fn customer_id_is_required() {
        let form = OrderForm {
            customer_id: String::new(),
            status: "pending".to_string(),
        };
        assert_eq!(validate(&form), Err("Customer ID wajib diisi".to_string()));
    }

    #[test]
    fn customer_id_is_coerced() {
        let form = OrderForm {
            customer_id: " 42 ".to_string(),
            status: "processing".to_string(),
        };
        let payload = validate(&form).unwrap();
        assert_eq!(payload.customer_id, 42);
        assert_eq!(payload.status, "processing");
    }

    #[test]
    fn status_maps_to_badge_classes() {
        assert_eq!(status_badge("pending"), "badge badge-yellow");
        assert_eq!(status_badge("processing"), "badge badge-gray");
        assert_eq!(status_badge("completed"), "badge badge-green");
        assert_eq!(status_badge("cancelled"), "badge badge-red");
        assert_eq!(status_badge("unknown"), "badge badge-gray");
    }
}
