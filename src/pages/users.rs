//! Users Page
//!
//! Accounts are provisioned elsewhere; this page only edits and deletes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, UserUpdate};
use crate::components::Modal;
use crate::models::User;
use crate::pages::{confirm, submit_mutation};

#[derive(Clone, Default, PartialEq)]
struct UserForm {
    fullname: String,
    username: String,
    email: String,
    role: String,
    is_active_disabled: bool,
}

impl UserForm {
    fn from_user(u: &User) -> Self {
        Self {
            fullname: u.fullname.clone(),
            username: u.username.clone(),
            email: u.email.clone(),
            role: u.role.clone(),
            is_active_disabled: u.is_active_disabled,
        }
    }

    fn payload(&self) -> UserUpdate {
        UserUpdate {
            fullname: self.fullname.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            is_active_disabled: self.is_active_disabled,
        }
    }
}

/// Case-insensitive substring match over fullname and email.
fn filter_users(items: &[User], query: &str) -> Vec<User> {
    let q = query.to_lowercase();
    items
        .iter()
        .filter(|u| u.email.to_lowercase().contains(&q) || u.fullname.to_lowercase().contains(&q))
        .cloned()
        .collect()
}

fn role_badge(role: &str) -> &'static str {
    if role == "admin" {
        "badge badge-yellow"
    } else {
        "badge badge-gray"
    }
}

fn status_badge(disabled: bool) -> (&'static str, &'static str) {
    if disabled {
        ("badge badge-red", "Nonaktif")
    } else {
        ("badge badge-green", "Aktif")
    }
}

#[component]
pub fn Users() -> impl IntoView {
    let (items, set_items) = signal(Vec::<User>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (editing, set_editing) = signal::<Option<u32>>(None);
    let form = RwSignal::new(UserForm::default());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(String::new());
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload.get();
        spawn_local(async move {
            match api::list_users().await {
                Ok(list) => set_items.set(list),
                Err(_) => set_items.set(Vec::new()),
            }
            set_loading.set(false);
        });
    });

    let open_edit = move |u: User| {
        form.set(UserForm::from_user(&u));
        set_error.set(String::new());
        set_editing.set(Some(u.id));
    };

    let submit = move |_| {
        let Some(id) = editing.get_untracked() else {
            return;
        };
        let payload = form.get_untracked().payload();
        submit_mutation(
            async move { api::update_user(id, &payload).await },
            set_saving,
            set_error,
            move || {
                set_editing.set(None);
                set_reload.update(|n| *n += 1);
            },
        );
    };

    let delete = move |id: u32| {
        if !confirm("Hapus user ini? Tindakan ini tidak bisa dibatalkan.") {
            return;
        }
        spawn_local(async move {
            match api::delete_user(id).await {
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
                    <h1 class="page-title">"Users"</h1>
                    <p class="page-subtitle">
                        {move || format!("{} pengguna terdaftar", items.get().len())}
                    </p>
                </div>
            </div>

            <div class="search-bar">
                <input
                    class="search-input"
                    placeholder="Cari nama atau email..."
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
                                <th>"Username"</th>
                                <th>"Email"</th>
                                <th>"Role"</th>
                                <th>"Status"</th>
                                <th>"Aksi"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let visible = filter_users(&items.get(), &search.get());
                                if visible.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="7" class="empty">"Tidak ada user"</td>
                                        </tr>
                                    }
                                        .into_any()
                                } else {
                                    visible
                                        .into_iter()
                                        .map(|u| {
                                            let id = u.id;
                                            let edit = u.clone();
                                            let (status_class, status_label) = status_badge(
                                                u.is_active_disabled,
                                            );
                                            view! {
                                                <tr>
                                                    <td class="muted">{format!("#{}", u.id)}</td>
                                                    <td><strong>{u.fullname.clone()}</strong></td>
                                                    <td class="muted">{format!("@{}", u.username)}</td>
                                                    <td>{u.email.clone()}</td>
                                                    <td>
                                                        <span class=role_badge(&u.role)>{u.role.clone()}</span>
                                                    </td>
                                                    <td>
                                                        <span class=status_class>{status_label}</span>
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
                editing
                    .get()
                    .map(|_| {
                        view! {
                            <Modal title="Edit User" on_close=Callback::new(move |_| set_editing.set(None))>
                                <Show when=move || !error.get().is_empty()>
                                    <div class="login-error">{move || error.get()}</div>
                                </Show>
                                <div class="form-group">
                                    <label>"Nama Lengkap"</label>
                                    <input
                                        class="form-control"
                                        prop:value=move || form.get().fullname
                                        on:input=move |ev| {
                                            form.update(|f| f.fullname = event_target_value(&ev))
                                        }
                                    />
                                </div>
                                <div class="form-row">
                                    <div class="form-group">
                                        <label>"Username"</label>
                                        <input
                                            class="form-control"
                                            prop:value=move || form.get().username
                                            on:input=move |ev| {
                                                form.update(|f| f.username = event_target_value(&ev))
                                            }
                                        />
                                    </div>
                                    <div class="form-group">
                                        <label>"Role"</label>
                                        <select
                                            class="form-control"
                                            prop:value=move || form.get().role
                                            on:change=move |ev| {
                                                form.update(|f| f.role = event_target_value(&ev))
                                            }
                                        >
                                            <option value="admin">"Admin"</option>
                                            <option value="cashier">"Cashier"</option>
                                        </select>
                                    </div>
                                </div>
                                <div class="form-group">
                                    <label>"Email"</label>
                                    <input
                                        class="form-control"
                                        type="email"
                                        prop:value=move || form.get().email
                                        on:input=move |ev| {
                                            form.update(|f| f.email = event_target_value(&ev))
                                        }
                                    />
                                </div>
                                <label class="checkbox-label">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || form.get().is_active_disabled
                                        on:change=move |ev| {
                                            form.update(|f| {
                                                f.is_active_disabled = event_target_checked(&ev)
                                            })
                                        }
                                    />
                                    "Nonaktifkan akun ini"
                                </label>
                                <div class="form-actions">
                                    <button class="btn btn-ghost" on:click=move |_| set_editing.set(None)>
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

    fn sample(fullname: &str, email: &str) -> User {
        User {
            id: 1,
            fullname: fullname.to_string(),
            username: "u".to_string(),
            email: email.to_string(),
            role: "cashier".to_string(),
            is_active_disabled: false,
        }
    }

    #[test]
    fn filter_matches_fullname_or_email_case_insensitively() {
        let items = vec![
            sample("Siti Rahma", "siti@toko.id"),
            sample("Budi", "budi@toko.id"),
        ];
        assert_eq!(filter_users(&items, "RAHMA").len(), 1);
        assert_eq!(filter_users(&items, "budi@").len(), 1);
        assert_eq!(filter_users(&items, "").len(), 2);
        assert_eq!(filter_users(&items, "agus").len(), 0);
    }

    #[test]
    fn badges_reflect_role_and_disable_flag() {
        assert_eq!(role_badge("admin"), "badge badge-yellow");
        assert_eq!(role_badge("cashier"), "badge badge-gray");
        assert_eq!(status_badge(true), ("badge badge-red", "Nonaktif"));
        assert_eq!(status_badge(false), ("badge badge-green", "Aktif"));
    }

    #[test]
    fn edit_draft_round_trips_the_disable_flag() {
        let mut user = sample("Siti", "siti@toko.id");
        user.is_active_disabled = true;
        let payload = UserForm::from_user(&user).payload();
        assert!(payload.is_active_disabled);
        assert_eq!(payload.email, "siti@toko.id");
    }
}
