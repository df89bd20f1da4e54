use contracts::domain::catalog::{search, store};
use contracts::enums::Collection;
use leptos::prelude::*;

use crate::domain::catalog::ui::product_card::ProductCard;
use crate::layout::global_context::StorefrontContext;

/// Appear-animation offset between neighbouring cards.
const CARD_STAGGER_MS: u32 = 80;

/// Titled product grid for one collection, narrowed live by the query.
/// A query matching nothing renders an empty-state line, never an error.
#[component]
pub fn CollectionSection(collection: Collection) -> impl IntoView {
    let ctx = leptos::context::use_context::<StorefrontContext>()
        .expect("StorefrontContext context not found");

    let products = store::collection(collection);
    let visible = Memo::new(move |_| {
        let query = ctx.query.get();
        search::filter(&query, products)
    });

    view! {
        <section class="collection">
            <h2 class="collection__title">{collection.display_name()}</h2>
            <Show
                when=move || visible.with(|hits| !hits.is_empty())
                fallback=move || {
                    view! { <p class="collection__empty">"No perfumes match your search."</p> }
                }
            >
                <div class="collection__grid">
                    <For
                        each=move || visible.get().into_iter().enumerate()
                        key=|(_, product)| product.key()
                        children=move |(index, product)| {
                            view! {
                                <ProductCard
                                    product=product
                                    delay_ms={index as u32 * CARD_STAGGER_MS}
                                />
                            }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}
