//! Dashboard page — greeting, logout, and the items CRUD list.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Item, NewItem};
use crate::state::session::{self, SessionState};
use crate::storage::BrowserStorage;

/// Dashboard page — shows who is logged in, a logout action, and the
/// items list with create/edit/delete. Reached only through the route
/// guard, so the session is hydrated and authenticated here.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let items = LocalResource::new(|| async {
        match crate::net::api::fetch_items().await {
            Ok(list) => list,
            Err(err) => {
                leptos::logging::warn!("failed to load items: {err}");
                Vec::new()
            }
        }
    });

    let username = move || {
        session
            .get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        session.update(|state| session::logout(state, &BrowserStorage));
        navigate("/login", NavigateOptions::default());
    };

    // Create-item form state.
    let new_name = RwSignal::new(String::new());
    let new_price = RwSignal::new(String::new());
    let creating = RwSignal::new(false);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get_untracked();
        let Ok(price) = new_price.get_untracked().parse::<f64>() else {
            return;
        };
        if name.trim().is_empty() || creating.get_untracked() {
            return;
        }

        creating.set(true);
        let item = NewItem { name: name.trim().to_owned(), price };
        let items = items.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::create_item(&item).await {
                Ok(_) => {
                    new_name.set(String::new());
                    new_price.set(String::new());
                    items.refetch();
                }
                Err(err) => leptos::logging::warn!("failed to create item: {err}"),
            }
            creating.set(false);
        });
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <span class="dashboard-page__title">"Dashboard"</span>
                <div class="dashboard-page__user">
                    <span>{username}</span>
                    <button on:click=on_logout>"Log out"</button>
                </div>
            </header>

            <main class="dashboard-page__main">
                <section class="card">
                    <h2>{move || format!("Welcome, {}!", username())}</h2>
                    <p>"You are now logged in and can access protected content."</p>
                </section>

                <section class="card">
                    <h2>"Items"</h2>

                    <form class="item-form" on:submit=on_create>
                        <label>
                            "Name"
                            <input
                                type="text"
                                required
                                prop:value=move || new_name.get()
                                on:input=move |ev| new_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Price"
                            <input
                                type="number"
                                step="0.01"
                                min="0"
                                required
                                prop:value=move || new_price.get()
                                on:input=move |ev| new_price.set(event_target_value(&ev))
                            />
                        </label>
                        <button type="submit" disabled=move || creating.get()>
                            {move || if creating.get() { "Adding..." } else { "Add Item" }}
                        </button>
                    </form>

                    <Suspense fallback=move || view! { <p>"Loading items..."</p> }>
                        {move || {
                            items
                                .get()
                                .map(|list| {
                                    if list.is_empty() {
                                        view! { <p class="items-empty">"No items yet"</p> }
                                            .into_any()
                                    } else {
                                        view! {
                                            <ul class="item-list">
                                                {list
                                                    .into_iter()
                                                    .map(|item| {
                                                        view! { <ItemRow item=item items=items/> }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                        }
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </section>
            </main>
        </div>
    }
}

/// One row of the items list, with inline edit and delete.
#[component]
fn ItemRow(item: Item, items: LocalResource<Vec<Item>>) -> impl IntoView {
    let editing = RwSignal::new(false);
    let edit_name = RwSignal::new(item.name.clone());
    let edit_price = RwSignal::new(format!("{:.2}", item.price));
    let item_id = item.item_id;

    let start_edit = move |_| {
        editing.set(true);
    };

    let save_edit = move |_| {
        let name = edit_name.get_untracked();
        let Ok(price) = edit_price.get_untracked().parse::<f64>() else {
            return;
        };
        if name.trim().is_empty() {
            return;
        }

        let update = NewItem { name: name.trim().to_owned(), price };
        let items = items.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::update_item(item_id, &update).await {
                Ok(_) => {
                    editing.set(false);
                    items.refetch();
                }
                Err(err) => leptos::logging::warn!("failed to update item: {err}"),
            }
        });
    };

    let delete = move |_| {
        let items = items.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_item(item_id).await {
                Ok(()) => items.refetch(),
                Err(err) => leptos::logging::warn!("failed to delete item: {err}"),
            }
        });
    };

    view! {
        <li class="item-list__row">
            <Show
                when=move || editing.get()
                fallback=move || {
                    let name = item.name.clone();
                    view! {
                        <span class="item-list__name">{name}</span>
                        <span class="item-list__price">{format!("${:.2}", item.price)}</span>
                        <button on:click=start_edit>"Edit"</button>
                        <button on:click=delete>"Delete"</button>
                    }
                }
            >
                <input
                    type="text"
                    prop:value=move || edit_name.get()
                    on:input=move |ev| edit_name.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    step="0.01"
                    min="0"
                    prop:value=move || edit_price.get()
                    on:input=move |ev| edit_price.set(event_target_value(&ev))
                />
                <button on:click=save_edit>"Save"</button>
                <button on:click=move |_| editing.set(false)>"Cancel"</button>
            </Show>
        </li>
    }
}
