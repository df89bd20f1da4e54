//! CardAnimated — Thaw Card wrapper with an appear animation.
//!
//! Drop-in for `<Card attr:style="...">`. The animation itself is defined
//! in `static/styles.css` (`@keyframes card-appear`); `delay_ms` staggers
//! sibling cards.

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds (for a stagger effect across a grid).
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles, appended after the animation.
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    };

    view! {
        <Card attr:style=full_style>
            {children()}
        </Card>
    }
}
