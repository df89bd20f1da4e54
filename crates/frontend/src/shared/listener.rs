//! Scoped DOM event subscription.
//!
//! Wraps `addEventListener` in a guard that removes the listener when
//! dropped, so an overlay can hold one exactly as long as it is visible
//! and nothing leaks when the owning view goes away.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

pub struct ScopedEventListener {
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl ScopedEventListener {
    /// Attaches `handler` to `event` on the window. Returns `None` outside
    /// a browser context.
    pub fn on_window(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let window = window()?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        window
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { event, closure })
    }
}

impl Drop for ScopedEventListener {
    fn drop(&mut self) {
        if let Some(window) = window() {
            let _ = window.remove_event_listener_with_callback(
                self.event,
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
