use dioxus::prelude::*;

use crate::{icons, Icon};

const CARDS_CSS: Asset = asset!("/assets/styling/cards.css");

/// Visibility of a disclosure card's detail block.
///
/// Exactly two states; `toggle` is symmetric in both directions and a card
/// always mounts collapsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Disclosure {
    #[default]
    Collapsed,
    Expanded,
}

impl Disclosure {
    /// Flip between `Collapsed` and `Expanded`.
    pub fn toggle(&mut self) {
        *self = match self {
            Disclosure::Collapsed => Disclosure::Expanded,
            Disclosure::Expanded => Disclosure::Collapsed,
        };
    }

    pub fn is_expanded(self) -> bool {
        matches!(self, Disclosure::Expanded)
    }
}

/// A card with an always-visible summary and a togglable detail block.
///
/// Each card owns its own `Signal<Disclosure>`, so toggling one card never
/// affects another.
#[component]
pub fn DisclosureCard(summary: Element, children: Element) -> Element {
    let mut state = use_signal(Disclosure::default);
    let expanded = state().is_expanded();

    rsx! {
        document::Link { rel: "stylesheet", href: CARDS_CSS }

        div {
            class: "card",
            {summary}

            button {
                class: "card-toggle",
                onclick: move |_| {
                    state.write().toggle();
                    tracing::debug!(expanded = state.peek().is_expanded(), "card toggled");
                },
                if expanded {
                    Icon { width: 20, height: 20, icon: icons::FaChevronUp }
                    span { "Show Less" }
                } else {
                    Icon { width: 20, height: 20, icon: icons::FaChevronDown }
                    span { "Show More" }
                }
            }

            if expanded {
                div { class: "card-details", {children} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_starts_collapsed() {
        assert_eq!(Disclosure::default(), Disclosure::Collapsed);
        assert!(!Disclosure::default().is_expanded());
    }

    #[test]
    fn test_toggle_is_symmetric() {
        let mut state = Disclosure::default();

        state.toggle();
        assert_eq!(state, Disclosure::Expanded);

        // Toggling again returns to the initial state
        state.toggle();
        assert_eq!(state, Disclosure::Collapsed);
    }

    #[test]
    fn test_rapid_toggles_alternate_deterministically() {
        let mut state = Disclosure::default();
        for i in 1..=10 {
            state.toggle();
            assert_eq!(state.is_expanded(), i % 2 == 1);
        }
    }

    #[test]
    fn test_initial_render_hides_details() {
        fn app() -> Element {
            rsx! {
                DisclosureCard {
                    summary: rsx! { h3 { "summary headline" } },
                    p { "hidden detail text" }
                }
            }
        }

        let html = render(app);
        assert!(html.contains("summary headline"));
        assert!(html.contains("Show More"));
        assert!(!html.contains("Show Less"));
        assert!(!html.contains("hidden detail text"));
    }

    #[test]
    fn test_cards_do_not_share_state() {
        fn app() -> Element {
            rsx! {
                DisclosureCard {
                    summary: rsx! { h3 { "first" } },
                    p { "first detail" }
                }
                DisclosureCard {
                    summary: rsx! { h3 { "second" } },
                    p { "second detail" }
                }
            }
        }

        // Two cards, two independent collapsed flags
        let html = render(app);
        assert_eq!(html.matches("Show More").count(), 2);
        assert!(!html.contains("detail"));
    }
}
