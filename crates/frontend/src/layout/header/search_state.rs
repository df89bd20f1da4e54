//! Presentation state of the header search on narrow viewports.
//!
//! Below the breakpoint the search box hides behind an icon; tapping it
//! swaps in the input, and closing, clicking elsewhere, or widening the
//! viewport swaps the icon back. The machine is total and knows nothing
//! about the query or the suggestion engine.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MobileSearchState {
    #[default]
    Icon,
    Expanded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MobileSearchEvent {
    IconTapped,
    CloseTapped,
    OutsideClicked,
    ViewportWidened,
}

impl MobileSearchState {
    pub fn transition(self, event: MobileSearchEvent) -> Self {
        match (self, event) {
            (MobileSearchState::Icon, MobileSearchEvent::IconTapped) => MobileSearchState::Expanded,
            (MobileSearchState::Icon, _) => MobileSearchState::Icon,
            (MobileSearchState::Expanded, MobileSearchEvent::IconTapped) => {
                MobileSearchState::Expanded
            }
            (MobileSearchState::Expanded, _) => MobileSearchState::Icon,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == MobileSearchState::Expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use MobileSearchEvent::*;
    use MobileSearchState::*;

    #[test]
    fn test_icon_expands_only_on_tap() {
        assert_eq!(Icon.transition(IconTapped), Expanded);
        assert_eq!(Icon.transition(CloseTapped), Icon);
        assert_eq!(Icon.transition(OutsideClicked), Icon);
        assert_eq!(Icon.transition(ViewportWidened), Icon);
    }

    #[test]
    fn test_expanded_collapses_on_any_dismissal() {
        assert_eq!(Expanded.transition(CloseTapped), Icon);
        assert_eq!(Expanded.transition(OutsideClicked), Icon);
        assert_eq!(Expanded.transition(ViewportWidened), Icon);
    }

    #[test]
    fn test_expanded_stays_expanded_on_repeat_tap() {
        assert_eq!(Expanded.transition(IconTapped), Expanded);
    }

    #[test]
    fn test_widening_always_lands_on_icon() {
        for state in [Icon, Expanded] {
            assert_eq!(state.transition(ViewportWidened), Icon);
        }
    }
}
