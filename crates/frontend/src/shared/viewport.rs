use leptos::prelude::*;
use web_sys::window;

use crate::shared::listener::ScopedEventListener;

fn current_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|value| value.as_f64())
        // No window means no mobile layout to collapse into.
        .unwrap_or(f64::INFINITY)
}

/// Live viewport width in CSS pixels. The resize subscription is released
/// when the calling scope is cleaned up.
pub fn use_viewport_width() -> ReadSignal<f64> {
    let (width, set_width) = signal(current_width());

    let subscription = StoredValue::new_local(ScopedEventListener::on_window("resize", move |_| {
        set_width.set(current_width());
    }));
    on_cleanup(move || subscription.set_value(None));

    width
}
