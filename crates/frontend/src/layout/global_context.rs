use leptos::prelude::*;

use crate::layout::header::search_state::{MobileSearchEvent, MobileSearchState};

/// UI state shared across the page: the live search query plus the
/// visibility flags of the two dismissable overlays (suggestion dropdown,
/// mobile search input). The catalog itself is static and lives in
/// `contracts`; nothing here survives a reload.
#[derive(Clone, Copy)]
pub struct StorefrontContext {
    pub query: RwSignal<String>,
    pub suggestions_open: RwSignal<bool>,
    pub mobile_search: RwSignal<MobileSearchState>,
}

impl StorefrontContext {
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(String::new()),
            suggestions_open: RwSignal::new(false),
            mobile_search: RwSignal::new(MobileSearchState::Icon),
        }
    }

    /// Every keystroke updates the query and re-opens the dropdown.
    pub fn set_query(&self, text: String) {
        self.query.set(text);
        self.suggestions_open.set(true);
    }

    pub fn open_suggestions(&self) {
        self.suggestions_open.set(true);
    }

    pub fn close_suggestions(&self) {
        self.suggestions_open.set(false);
    }

    /// Picking a suggestion adopts its name as the query and hides the
    /// dropdown in the same update, before the next render.
    pub fn select_suggestion(&self, name: &str) {
        self.query.set(name.to_string());
        self.suggestions_open.set(false);
    }

    pub fn apply_mobile_search(&self, event: MobileSearchEvent) {
        self.mobile_search
            .update(|state| *state = state.transition(event));
    }

    /// A click outside the search area closes whatever overlay is open.
    pub fn dismiss_overlays(&self) {
        self.suggestions_open.set(false);
        self.apply_mobile_search(MobileSearchEvent::OutsideClicked);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_suggestion_sets_query_and_hides_dropdown() {
        let ctx = StorefrontContext::new();
        ctx.set_query("Lav".to_string());
        assert!(ctx.suggestions_open.get_untracked());

        ctx.select_suggestion("Lavender Dream");

        assert_eq!(ctx.query.get_untracked(), "Lavender Dream");
        assert!(!ctx.suggestions_open.get_untracked());
    }

    #[test]
    fn test_dismiss_overlays_closes_dropdown_and_mobile_search() {
        let ctx = StorefrontContext::new();
        ctx.open_suggestions();
        ctx.apply_mobile_search(MobileSearchEvent::IconTapped);
        assert_eq!(ctx.mobile_search.get_untracked(), MobileSearchState::Expanded);

        ctx.dismiss_overlays();

        assert!(!ctx.suggestions_open.get_untracked());
        assert_eq!(ctx.mobile_search.get_untracked(), MobileSearchState::Icon);
    }
}
