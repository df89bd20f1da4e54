use contracts::domain::catalog::Product;
use leptos::prelude::*;

use crate::shared::components::CardAnimated;
use crate::shared::purchase;

/// One perfume on the grid: image, name, optional blurb, struck list
/// price next to the deal price, and the "Buy Now" hand-off to WhatsApp.
#[component]
pub fn ProductCard(product: &'static Product, #[prop(optional)] delay_ms: u32) -> impl IntoView {
    view! {
        <CardAnimated delay_ms=delay_ms>
            <div class="product-card">
                <img
                    class="product-card__image"
                    src=product.image.as_str()
                    alt=product.name.as_str()
                    width="140"
                    height="140"
                />
                <h3 class="product-card__name">{product.name.as_str()}</h3>
                {product
                    .description
                    .as_deref()
                    .map(|text| view! { <p class="product-card__description">{text}</p> })}
                <div class="product-card__prices">
                    <span class="product-card__price product-card__price--list">
                        {format!("₹{}", product.price)}
                    </span>
                    <span class="product-card__price product-card__price--deal">
                        {format!("₹{}", product.discount_price)}
                    </span>
                </div>
                <button
                    class="button button--buy"
                    on:click=move |_| purchase::open_purchase_chat(&product.name)
                >
                    "Buy Now"
                </button>
            </div>
        </CardAnimated>
    }
}
