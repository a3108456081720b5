//! Landing page composition.
//!
//! [`compose_layout`] turns a theme and a list of features into a
//! [`RenderTree`]: hero, feature grid, then two closing panels. It performs no
//! I/O and keeps no state, so it can run on every theme change.

mod tree;

pub use tree::{Destination, Motion, Node, RegionKind, RenderTree, TextRole};

use crate::models::{FeatureDescriptor, Palette, RegionStyle, Theme};

pub const HOME_ROUTE: &str = "/home";
pub const HOW_TO_USE_ROUTE: &str = "/how-to-use";
pub const DOCUMENTATION_URL: &str = "https://github.com/hoangsonww/DocuThinker-AI-App";

const HERO_TITLE: &str = "Welcome to DocuThinker";
const HERO_SUBTITLE: &str = "Your AI-powered solution for document summarization and analysis.\n\
                             Upload your documents and get insights in seconds!";

const WHY_CHOOSE_TITLE: &str = "Why Choose DocuThinker?";
const WHY_CHOOSE_BODY: &str = "Our platform is designed to simplify document analysis, provide \
    valuable insights, and enhance productivity. Experience the future of document management \
    with AI-powered features.";

const LEARN_MORE_TITLE: &str = "Learn More";
const LEARN_MORE_BODY: &str = "Visit our documentation to explore the features, functionalities, \
    and how to get started with DocuThinker.";

// Entrance timings, milliseconds
const HERO_ENTRANCE: u32 = 500;
const CARD_ENTRANCE: u32 = 600;
const CARD_STAGGER: u32 = 200;
const WHY_CHOOSE_ENTRANCE: u32 = 800;
const LEARN_MORE_ENTRANCE: u32 = 1000;

/// Build the landing page for `theme` with one card per entry of `content`,
/// in order. An empty `content` yields an empty grid; the hero and both
/// closing panels are always present.
pub fn compose_layout(theme: Theme, content: &[FeatureDescriptor]) -> RenderTree {
    let palette = Palette::for_theme(theme);

    let cards = content
        .iter()
        .enumerate()
        .map(|(index, feature)| feature_card(feature, index, &palette.card))
        .collect();

    let root = Node::region(
        RegionKind::Page,
        palette.page,
        vec![
            hero(&palette.hero),
            Node::container(RegionKind::Grid, cards),
            why_choose_panel(&palette.panel),
            learn_more_panel(&palette.info_panel),
        ],
    );

    tracing::debug!(%theme, cards = content.len(), "composed landing layout");

    RenderTree { theme, root }
}

fn hero(style: &RegionStyle) -> Node {
    Node::region(
        RegionKind::Hero,
        *style,
        vec![
            Node::text(TextRole::Title, HERO_TITLE),
            Node::text(TextRole::Subtitle, HERO_SUBTITLE),
            Node::action(
                "How to Use",
                Destination::Internal(HOW_TO_USE_ROUTE.into()),
                style.action,
            ),
        ],
    )
    .with_motion(Motion::entrance(HERO_ENTRANCE))
}

fn feature_card(feature: &FeatureDescriptor, index: usize, style: &RegionStyle) -> Node {
    Node::region(
        RegionKind::Card,
        *style,
        vec![
            Node::text(TextRole::Heading, feature.title),
            Node::text(TextRole::Body, feature.description),
            Node::action(
                feature.action_label,
                Destination::Internal(feature.target.into()),
                style.action,
            ),
        ],
    )
    .with_key(feature.title)
    .with_motion(Motion::staggered(CARD_ENTRANCE, CARD_STAGGER, index))
}

fn why_choose_panel(style: &RegionStyle) -> Node {
    Node::region(
        RegionKind::Panel,
        *style,
        vec![
            Node::text(TextRole::Heading, WHY_CHOOSE_TITLE),
            Node::text(TextRole::Body, WHY_CHOOSE_BODY),
            Node::action(
                "Get Started",
                Destination::Internal(HOME_ROUTE.into()),
                style.action,
            ),
        ],
    )
    .with_motion(Motion::entrance(WHY_CHOOSE_ENTRANCE))
}

fn learn_more_panel(style: &RegionStyle) -> Node {
    Node::region(
        RegionKind::Panel,
        *style,
        vec![
            Node::text(TextRole::Heading, LEARN_MORE_TITLE),
            Node::text(TextRole::Body, LEARN_MORE_BODY),
            Node::action(
                "Documentation",
                Destination::External(DOCUMENTATION_URL.into()),
                style.action,
            ),
        ],
    )
    .with_motion(Motion::entrance(LEARN_MORE_ENTRANCE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{features, resolve_palette};
    use pretty_assertions::assert_eq;

    fn card_fields(card: &Node) -> (&str, &str, &str, &str) {
        let (label, destination) = card.first_action().expect("card action");
        (
            card.text_of(TextRole::Heading).expect("card title"),
            card.text_of(TextRole::Body).expect("card description"),
            label,
            destination.href(),
        )
    }

    #[test]
    fn cards_preserve_content_and_order() {
        for theme in Theme::all() {
            let tree = compose_layout(theme, features());
            let cards = tree.cards();
            assert_eq!(cards.len(), features().len());

            for (card, feature) in cards.iter().zip(features()) {
                assert_eq!(card.kind(), Some(RegionKind::Card));
                assert_eq!(
                    card_fields(card),
                    (
                        feature.title,
                        feature.description,
                        feature.action_label,
                        feature.target
                    )
                );
            }
        }
    }

    #[test]
    fn composition_is_idempotent() {
        assert_eq!(
            compose_layout(Theme::Dark, features()),
            compose_layout(Theme::Dark, features())
        );
    }

    #[test]
    fn grid_carries_no_colours_of_its_own() {
        for theme in Theme::all() {
            let tree = compose_layout(theme, features());
            let grid = tree.grid().expect("grid");
            assert_eq!(grid.style(), None);
            assert!(tree.cards().iter().all(|card| card.style().is_some()));
        }
    }

    #[test]
    fn empty_content_renders_no_cards() {
        let tree = compose_layout(Theme::Light, &[]);
        assert!(tree.grid().is_some());
        assert!(tree.cards().is_empty());
        assert!(tree.hero().is_some());
        assert_eq!(tree.panels().len(), 2);
    }

    #[test]
    fn dark_reference_layout() {
        let tree = compose_layout(Theme::Dark, features());
        let hero = tree.hero().expect("hero");
        assert_eq!(hero.style(), Some(&resolve_palette(Theme::Dark).hero));
        assert_eq!(hero.text_of(TextRole::Title), Some("Welcome to DocuThinker"));

        assert_eq!(tree.cards().len(), 9);
        let (title, _, _, target) = card_fields(&tree.cards()[0]);
        assert_eq!((title, target), ("Upload Documents", "/home"));
    }

    #[test]
    fn light_layout_differs_only_in_style() {
        let light = compose_layout(Theme::Light, features());
        let dark = compose_layout(Theme::Dark, features());

        let light_hero = light.hero().and_then(Node::style).expect("light hero");
        let dark_hero = dark.hero().and_then(Node::style).expect("dark hero");
        assert_ne!(light_hero.background, dark_hero.background);

        let titles = |tree: &RenderTree| -> Vec<String> {
            tree.cards()
                .iter()
                .filter_map(|card| card.text_of(TextRole::Heading).map(str::to_string))
                .collect()
        };
        assert_eq!(titles(&light), titles(&dark));
    }

    #[test]
    fn single_entry_still_renders_panels() {
        let tree = compose_layout(Theme::Light, &features()[..1]);
        assert_eq!(tree.cards().len(), 1);

        let panels = tree.panels();
        assert_eq!(panels.len(), 2);
        assert_eq!(
            panels[0].text_of(TextRole::Heading),
            Some("Why Choose DocuThinker?")
        );
        assert_eq!(panels[1].text_of(TextRole::Heading), Some("Learn More"));
    }

    #[test]
    fn card_entrances_are_staggered() {
        let tree = compose_layout(Theme::Light, features());
        let delays: Vec<u32> = tree
            .cards()
            .iter()
            .filter_map(|card| card.motion().map(|m| m.delay_ms))
            .collect();
        assert_eq!(delays.len(), 9);
        assert!(delays.windows(2).all(|pair| pair[1] == pair[0] + 200));
        assert_eq!(delays[0], 0);
    }

    #[test]
    fn only_documentation_link_is_external() {
        let tree = compose_layout(Theme::Dark, features());
        let external: Vec<_> = tree
            .actions()
            .into_iter()
            .filter(|(_, destination)| destination.is_external())
            .collect();
        assert_eq!(external.len(), 1);
        assert_eq!(external[0].0, "Documentation");
        assert_eq!(external[0].1.href(), DOCUMENTATION_URL);

        let (label, destination) = tree.hero().and_then(Node::first_action).expect("hero action");
        assert_eq!(label, "How to Use");
        assert_eq!(destination, &Destination::Internal("/how-to-use".into()));
        assert_eq!(tree.panels()[0].first_action().map(|(_, d)| d.href()), Some("/home"));
    }

    #[test]
    fn card_keys_follow_titles() {
        let tree = compose_layout(Theme::Light, features());
        for (card, feature) in tree.cards().iter().zip(features()) {
            assert!(matches!(card, Node::Region { key: Some(k), .. } if k == feature.title));
        }
    }
}
