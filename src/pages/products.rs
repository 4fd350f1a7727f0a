//! Products Page
//!
//! Full CRUD plus client-side search over name/category.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ProductPayload};
use crate::components::Modal;
use crate::format::rupiah;
use crate::models::Product;
use crate::pages::{confirm, submit_mutation, ModalMode};

/// Draft of the product form, every field as typed text
#[derive(Clone, PartialEq)]
struct ProductForm {
    name: String,
    price: String,
    size: String,
    color: String,
    category: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            size: String::new(),
            color: String::new(),
            category: "clothing".to_string(),
        }
    }
}

impl ProductForm {
    fn from_product(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            price: p.price.to_string(),
            size: p.size.clone(),
            color: p.color.clone(),
            category: if p.category.is_empty() {
                "clothing".to_string()
            } else {
                p.category.clone()
            },
        }
    }
}

/// Required fields plus numeric coercion; failures never reach the wire.
fn validate(form: &ProductForm) -> Result<ProductPayload, String> {
    if form.name.trim().is_empty()
        || form.price.trim().is_empty()
        || form.size.trim().is_empty()
        || form.color.trim().is_empty()
    {
        return Err("Semua field wajib diisi".to_string());
    }
    let price: i64 = form
        .price
        .trim()
        .parse()
        .map_err(|_| "Harga harus berupa angka".to_string())?;
    Ok(ProductPayload {
        name: form.name.trim().to_string(),
        price,
        size: form.size.trim().to_string(),
        color: form.color.trim().to_string(),
        category: form.category.clone(),
    })
}

/// Case-insensitive substring match over name and category.
fn filter_products(items: &[Product], query: &str) -> Vec<Product> {
    let q = query.to_lowercase();
    items
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&q) || p.category.to_lowercase().contains(&q))
        .cloned()
        .collect()
}

fn availability_badge(available: bool) -> (&'static str, &'static str) {
    if available {
        ("badge badge-green", "Tersedia")
    } else {
        ("badge badge-red", "Habis")
    }
}

#[component]
pub fn Products() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (modal, set_modal) = signal::<Option<ModalMode>>(None);
    let form = RwSignal::new(ProductForm::default());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(String::new());
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload.get();
        spawn_local(async move {
            match api::list_products().await {
                Ok(list) => set_items.set(list),
                Err(_) => set_items.set(Vec::new()),
            }
            set_loading.set(false);
        });
    });

    let open_add = move |_| {
        form.set(ProductForm::default());
        set_error.set(String::new());
        set_modal.set(Some(ModalMode::Add));
    };

    let open_edit = move |p: Product| {
        form.set(ProductForm::from_product(&p));
        set_error.set(String::new());
        set_modal.set(Some(ModalMode::Edit(p.id)));
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
                    ModalMode::Add => api::create_product(&payload).await,
                    ModalMode::Edit(id) => api::update_product(id, &payload).await,
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
        if !confirm("Hapus produk ini?") {
            return;
        }
        spawn_local(async move {
            match api::delete_product(id).await {
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
                    <h1 class="page-title">"Products"</h1>
                    <p class="page-subtitle">
                        {move || format!("{} produk terdaftar", items.get().len())}
                    </p>
                </div>
                <button class="btn btn-primary" on:click=open_add>
                    "+ Tambah Produk"
                </button>
            </div>

            <div class="search-bar">
                <input
                    class="search-input"
                    placeholder="Cari nama atau kategori..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
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
                                <th>"Nama"</th>
                                <th>"Harga"</th>
                                <th>"Ukuran"</th>
                                <th>"Warna"</th>
                                <th>"Kategori"</th>
                                <th>"Status"</th>
                                <th>"Aksi"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let visible = filter_products(&items.get(), &search.get());
                                if visible.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="8" class="empty">"Tidak ada produk"</td>
                                        </tr>
                                    }
                                        .into_any()
                                } else {
                                    visible
                                        .into_iter()
                                        .map(|p| {
                                            let (badge_class, badge_label) = availability_badge(
                                                p.available,
                                            );
                                            let id = p.id;
                                            let edit = p.clone();
                                            view! {
                                                <tr>
                                                    <td class="muted">{format!("#{}", p.id)}</td>
                                                    <td><strong>{p.name.clone()}</strong></td>
                                                    <td>{rupiah(p.price)}</td>
                                                    <td>{p.size.clone()}</td>
                                                    <td>{p.color.clone()}</td>
                                                    <td>
                                                        <span class="badge badge-yellow">{p.category.clone()}</span>
                                                    </td>
                                                    <td>
                                                        <span class=badge_class>{badge_label}</span>
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
                            ModalMode::Add => "Tambah Produk",
                            ModalMode::Edit(_) => "Edit Produk",
                        };
                        view! {
                            <Modal title=title on_close=Callback::new(move |_| set_modal.set(None))>
                                <Show when=move || !error.get().is_empty()>
                                    <div class="login-error">{move || error.get()}</div>
                                </Show>
                                <div class="form-group">
                                    <label>"Nama Produk"</label>
                                    <input
                                        class="form-control"
                                        placeholder="Contoh: Kemeja Batik"
                                        prop:value=move || form.get().name
                                        on:input=move |ev| {
                                            form.update(|f| f.name = event_target_value(&ev))
                                        }
                                    />
                                </div>
                                <div class="form-row">
                                    <div class="form-group">
                                        <label>"Harga (Rp)"</label>
                                        <input
                                            class="form-control"
                                            type="number"
                                            placeholder="150000"
                                            prop:value=move || form.get().price
                                            on:input=move |ev| {
                                                form.update(|f| f.price = event_target_value(&ev))
                                            }
                                        />
                                    </div>
                                    <div class="form-group">
                                        <label>"Ukuran"</label>
                                        <input
                                            class="form-control"
                                            placeholder="S, M, L, XL"
                                            prop:value=move || form.get().size
                                            on:input=move |ev| {
                                                form.update(|f| f.size = event_target_value(&ev))
                                            }
                                        />
                                    </div>
                                </div>
                                <div class="form-row">
                                    <div class="form-group">
                                        <label>"Warna"</label>
                                        <input
                                            class="form-control"
                                            placeholder="Merah, Biru..."
                                            prop:value=move || form.get().color
                                            on:input=move |ev| {
                                                form.update(|f| f.color = event_target_value(&ev))
                                            }
                                        />
                                    </div>
                                    <div class="form-group">
                                        <label>"Kategori"</label>
                                        <select
                                            class="form-control"
                                            prop:value=move || form.get().category
                                            on:change=move |ev| {
                                                form.update(|f| f.category = event_target_value(&ev))
                                            }
                                        >
                                            <option value="clothing">"Clothing"</option>
                                            <option value="accessory">"Accessory"</option>
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

    fn sample(name: &str, category: &str) -> Product {
        Product {
            id: 1,
            name: name.to_string(),
            price: 150000,
            size: "M".to_string(),
            color: "Merah".to_string(),
            category: category.to_string(),
            available: true,
        }
    }

    fn filled_form() -> ProductForm {
        ProductForm {
            name: "Kemeja".to_string(),
            price: "150000".to_string(),
            size: "M".to_string(),
            color: "Merah".to_string(),
            category: "clothing".to_string(),
        }
    }

    #[test]
    fn validate_rejects_any_empty_required_field() {
        for missing in ["name", "price", "size", "color"] {
            let mut form = filled_form();
            match missing {
                "name" => form.name.clear(),
                "price" => form.price.clear(),
                "size" => form.size.clear(),
                _ => form.color.clear(),
            }
            assert_eq!(validate(&form), Err("Semua field wajib diisi".to_string()));
        }
    }

    #[test]
    fn validate_coerces_price_to_a_number() {
        let payload = validate(&filled_form()).unwrap();
        assert_eq!(payload.price, 150000);

        let mut form = filled_form();
        form.price = "seratus".to_string();
        assert_eq!(validate(&form), Err("Harga harus berupa angka".to_string()));
    }

    #[test]
    fn filter_is_case_insensitive_over_name_and_category() {
        let items = vec![sample("Kemeja Batik", "clothing"), sample("Gelang", "accessory")];
        assert_eq!(filter_products(&items, "KEMEJA").len(), 1);
        assert_eq!(filter_products(&items, "Accessory").len(), 1);
        assert_eq!(filter_products(&items, "").len(), 2);
        assert_eq!(filter_products(&items, "topi").len(), 0);
    }

    #[test]
    fn availability_maps_to_badge() {
        assert_eq!(availability_badge(true), ("badge badge-green", "Tersedia"));
        assert_eq!(availability_badge(false), ("badge badge-red", "Habis"));
    }

    #[test]
    fn edit_draft_defaults_blank_category() {
        let mut p = sample("Kemeja", "");
        p.category = String::new();
        assert_eq!(ProductForm::from_product(&p).category, "clothing");
    }
}
