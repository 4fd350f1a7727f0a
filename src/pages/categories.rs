//! Categories Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CategoryPayload};
use crate::components::Modal;
use crate::models::Category;
use crate::pages::{confirm, submit_mutation, ModalMode};

#[derive(Clone, Default, PartialEq)]
struct CategoryForm {
    name: String,
    description: String,
}

/// Only the name is required; the description stays optional.
fn validate(form: &CategoryForm) -> Result<CategoryPayload, String> {
    if form.name.trim().is_empty() {
        return Err("Nama kategori wajib diisi".to_string());
    }
    Ok(CategoryPayload {
        name: form.name.trim().to_string(),
        description: form.description.trim().to_string(),
    })
}

#[component]
pub fn Categories() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Category>::new());
    let (loading, set_loading) = signal(true);
    let (modal, set_modal) = signal::<Option<ModalMode>>(None);
    let form = RwSignal::new(CategoryForm::default());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(String::new());
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload.get();
        spawn_local(async move {
            match api::list_categories().await {
                Ok(list) => set_items.set(list),
                Err(_) => set_items.set(Vec::new()),
            }
            set_loading.set(false);
        });
    });

    let open_add = move |_| {
        form.set(CategoryForm::default());
        set_error.set(String::new());
        set_modal.set(Some(ModalMode::Add));
    };

    let open_edit = move |c: Category| {
        form.set(CategoryForm {
            name: c.name.clone(),
            description: c.description.clone().unwrap_or_default(),
        });
        set_error.set(String::new());
        set_modal.set(Some(ModalMode::Edit(c.id)));
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
                    ModalMode::Add => api::create_category(&payload).await,
                    ModalMode::Edit(id) => api::update_category(id, &payload).await,
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
        if !confirm("Hapus kategori ini?") {
            return;
        }
        spawn_local(async move {
            match api::delete_category(id).await {
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
                    <h1 class="page-title">"Categories"</h1>
                    <p class="page-subtitle">
                        {move || format!("{} kategori terdaftar", items.get().len())}
                    </p>
                </div>
                <button class="btn btn-primary" on:click=open_add>
                    "+ Tambah Kategori"
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
                                <th>"Nama"</th>
                                <th>"Deskripsi"</th>
                                <th>"Aksi"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = items.get();
                                if rows.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="4" class="empty">"Belum ada kategori"</td>
                                        </tr>
                                    }
                                        .into_any()
                                } else {
                                    rows.into_iter()
                                        .map(|c| {
                                            let id = c.id;
                                            let edit = c.clone();
                                            view! {
                                                <tr>
                                                    <td class="muted">{format!("#{}", c.id)}</td>
                                                    <td><strong>{c.name.clone()}</strong></td>
                                                    <td class="muted">
                                                        {c.description.clone().unwrap_or_else(|| "-".to_string())}
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
                            ModalMode::Add => "Tambah Kategori",
                            ModalMode::Edit(_) => "Edit Kategori",
                        };
                        view! {
                            <Modal title=title on_close=Callback::new(move |_| set_modal.set(None))>
                                <Show when=move || !error.get().is_empty()>
                                    <div class="login-error">{move || error.get()}</div>
                                </Show>
                                <div class="form-group">
                                    <label>"Nama Kategori"</label>
                                    <input
                                        class="form-control"
                                        placeholder="Contoh: Pakaian Pria"
                                        prop:value=move || form.get().name
                                        on:input=move |ev| {
                                            form.update(|f| f.name = event_target_value(&ev))
                                        }
                                    />
                                </div>
                                <div class="form-group">
                                    <label>"Deskripsi"</label>
                                    <input
                                        class="form-control"
                                        placeholder="Opsional"
                                        prop:value=move || form.get().description
                                        on:input=move |ev| {
                                            form.update(|f| f.description = event_target_value(&ev))
                                        }
                                    />
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
    fn empty_name_blocks_submission() {
        let form = CategoryForm {
            name: "  ".to_string(),
            description: "apa saja".to_string(),
        };
        assert_eq!(validate(&form), Err("Nama kategori wajib diisi".to_string()));
    }

    #[test]
    fn description_stays_optional() {
        let form = CategoryForm {
            name: "Pakaian Pria".to_string(),
            description: String::new(),
        };
        let payload = validate(&form).unwrap();
        assert_eq!(payload.name, "Pakaian Pria");
        assert_eq!(payload.description, "");
    }
}
