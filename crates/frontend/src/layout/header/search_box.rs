use contracts::domain::catalog::{search, store};
use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::layout::global_context::StorefrontContext;

/// How long a blurred input keeps its dropdown alive, so a mousedown on a
/// suggestion can land before the list disappears.
const BLUR_CLOSE_DELAY_MS: u32 = 150;

/// Controlled search input with the autocomplete dropdown.
///
/// The query lives in [`StorefrontContext`], so the desktop box and the
/// mobile overlay are two views of the same state. Suggestions are a memo
/// over the prefix engine; selecting one adopts its name and closes the
/// list synchronously.
#[component]
pub fn SearchBox(#[prop(optional)] autofocus: bool) -> impl IntoView {
    let ctx = leptos::context::use_context::<StorefrontContext>()
        .expect("StorefrontContext context not found");

    let suggestions = Memo::new(move |_| {
        let query = ctx.query.get();
        search::suggestions(&query, store::combined())
    });

    let input_ref = NodeRef::<Input>::new();
    if autofocus {
        Effect::new(move |_| {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        });
    }

    let on_blur = move |_| {
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(BLUR_CLOSE_DELAY_MS).await;
            ctx.close_suggestions();
        });
    };

    view! {
        <div class="search-box">
            <input
                node_ref=input_ref
                type="text"
                class="search-box__input"
                placeholder="Search perfumes..."
                prop:value=move || ctx.query.get()
                on:input=move |ev| ctx.set_query(event_target_value(&ev))
                on:focus=move |_| ctx.open_suggestions()
                on:blur=on_blur
            />
            <Show when=move || {
                ctx.suggestions_open.get() && suggestions.with(|hits| !hits.is_empty())
            }>
                <ul class="search-box__suggestions">
                    <For
                        each=move || suggestions.get()
                        key=|product| product.key()
                        children=move |product| {
                            view! {
                                <li
                                    class="search-box__suggestion"
                                    on:mousedown=move |_| ctx.select_suggestion(&product.name)
                                >
                                    {product.name.as_str()}
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
