use leptos::prelude::*;

use crate::config;
use crate::layout::global_context::StorefrontContext;
use crate::layout::header::search_box::SearchBox;
use crate::layout::header::search_state::MobileSearchEvent;
use crate::shared::icons;
use crate::shared::listener::ScopedEventListener;
use crate::shared::viewport::use_viewport_width;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<StorefrontContext>()
        .expect("StorefrontContext context not found");

    let viewport_width = use_viewport_width();
    let narrow = Memo::new(move |_| viewport_width.get() <= config::NARROW_VIEWPORT_MAX_PX);

    // Widening past the breakpoint folds the mobile overlay away.
    Effect::new(move |_| {
        if !narrow.get() {
            ctx.apply_mobile_search(MobileSearchEvent::ViewportWidened);
        }
    });

    // The dismissal listener exists only while an overlay is showing; the
    // guard detaches it when the flag clears or the header unmounts.
    let dismiss_guard = StoredValue::new_local(None::<ScopedEventListener>);
    Effect::new(move |_| {
        let overlay_open = ctx.suggestions_open.get() || ctx.mobile_search.get().is_expanded();
        if overlay_open {
            if dismiss_guard.with_value(|guard| guard.is_none()) {
                dismiss_guard.set_value(ScopedEventListener::on_window("click", move |_| {
                    ctx.dismiss_overlays();
                }));
            }
        } else {
            dismiss_guard.set_value(None);
        }
    });
    on_cleanup(move || dismiss_guard.set_value(None));

    view! {
        <header data-zone="header" class="header">
            <div class="header__brand">
                <img
                    class="header__logo"
                    src="/pictures/logo.png"
                    alt="Fragnance logo"
                    width="60"
                    height="60"
                />
                <span class="header__title">{config::SHOP_NAME}</span>
            </div>
            // Clicks inside the search area must not reach the window-level
            // dismissal listener.
            <div class="header__search" on:click=move |ev| ev.stop_propagation()>
                <Show when=move || narrow.get() fallback=move || view! { <SearchBox /> }>
                    <MobileSearch />
                </Show>
            </div>
        </header>
    }
}

/// Icon-or-input rendering of the search area on narrow viewports.
#[component]
fn MobileSearch() -> impl IntoView {
    let ctx = leptos::context::use_context::<StorefrontContext>()
        .expect("StorefrontContext context not found");

    view! {
        <Show
            when=move || ctx.mobile_search.get().is_expanded()
            fallback=move || {
                view! {
                    <button
                        class="header__search-toggle"
                        aria-label="Open search"
                        on:click=move |_| ctx.apply_mobile_search(MobileSearchEvent::IconTapped)
                    >
                        {icons::icon("search")}
                    </button>
                }
            }
        >
            <div class="header__search-overlay">
                <SearchBox autofocus=true />
                <button
                    class="header__search-close"
                    aria-label="Close search"
                    on:click=move |_| ctx.apply_mobile_search(MobileSearchEvent::CloseTapped)
                >
                    {icons::icon("close")}
                </button>
            </div>
        </Show>
    }
}
