use contracts::enums::Collection;
use leptos::prelude::*;

use crate::config;
use crate::domain::catalog::ui::CollectionSection;

/// The whole storefront: hero, the two collection grids, about block.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero__title">"Timeless Scents for Every Mood"</h1>
            <p class="hero__subtitle">
                "Discover our exquisite collection of premium perfumes crafted with passion"
            </p>
        </section>

        {Collection::all()
            .into_iter()
            .map(|collection| view! { <CollectionSection collection=collection /> })
            .collect_view()}

        <AboutSection />
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <h2 class="about__title">{format!("About {}", config::BRAND_NAME)}</h2>
            <p class="about__text">
                "Luxe Perfumes is dedicated to providing high-quality, unique fragrances for \
                 both men and women. Our carefully curated collections are designed to \
                 evoke emotions and create lasting impressions. Experience the essence \
                 of elegance and charm with every scent."
            </p>
        </section>
    }
}
