//! Render tree: a backend-independent description of what the landing page shows.

use serde::Serialize;

use crate::models::{ActionStyle, RegionStyle, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    Page,
    Hero,
    Grid,
    Card,
    Panel,
}

impl RegionKind {
    pub fn class_name(&self) -> &'static str {
        match self {
            RegionKind::Page => "landing-page",
            RegionKind::Hero => "hero",
            RegionKind::Grid => "feature-grid",
            RegionKind::Card => "feature-card",
            RegionKind::Panel => "closing-panel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextRole {
    Title,
    /// May span several lines separated by `\n`
    Subtitle,
    Heading,
    Body,
}

/// Where an action leads. Resolution is left to the router or the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "href", rename_all = "snake_case")]
pub enum Destination {
    /// Route inside the application
    Internal(String),
    /// Absolute URL, opened in a new browsing context
    External(String),
}

impl Destination {
    pub fn href(&self) -> &str {
        match self {
            Destination::Internal(href) | Destination::External(href) => href,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Destination::External(_))
    }
}

/// Slide-up entrance animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Motion {
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Motion {
    pub const fn entrance(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
        }
    }

    /// Entrance delayed by `step_ms` per position, so items reveal in order
    pub fn staggered(duration_ms: u32, step_ms: u32, index: usize) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        Self {
            duration_ms,
            delay_ms: step_ms.saturating_mul(index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    Region {
        kind: RegionKind,
        /// `None` for layout-only regions that inherit their parent's colours
        style: Option<RegionStyle>,
        motion: Option<Motion>,
        key: Option<String>,
        children: Vec<Node>,
    },
    Text {
        role: TextRole,
        content: String,
    },
    Action {
        label: String,
        destination: Destination,
        style: ActionStyle,
    },
}

impl Node {
    pub fn region(kind: RegionKind, style: RegionStyle, children: Vec<Node>) -> Self {
        Node::Region {
            kind,
            style: Some(style),
            motion: None,
            key: None,
            children,
        }
    }

    /// Unstyled region, used purely for arrangement
    pub fn container(kind: RegionKind, children: Vec<Node>) -> Self {
        Node::Region {
            kind,
            style: None,
            motion: None,
            key: None,
            children,
        }
    }

    pub fn text(role: TextRole, content: impl Into<String>) -> Self {
        Node::Text {
            role,
            content: content.into(),
        }
    }

    pub fn action(label: impl Into<String>, destination: Destination, style: ActionStyle) -> Self {
        Node::Action {
            label: label.into(),
            destination,
            style,
        }
    }

    /// No-op on non-region nodes
    pub fn with_motion(mut self, value: Motion) -> Self {
        if let Node::Region { motion, .. } = &mut self {
            *motion = Some(value);
        }
        self
    }

    /// No-op on non-region nodes
    pub fn with_key(mut self, value: impl Into<String>) -> Self {
        if let Node::Region { key, .. } = &mut self {
            *key = Some(value.into());
        }
        self
    }

    pub fn kind(&self) -> Option<RegionKind> {
        match self {
            Node::Region { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Region { children, .. } => children,
            _ => &[],
        }
    }

    pub fn motion(&self) -> Option<Motion> {
        match self {
            Node::Region { motion, .. } => *motion,
            _ => None,
        }
    }

    pub fn style(&self) -> Option<&RegionStyle> {
        match self {
            Node::Region { style, .. } => style.as_ref(),
            _ => None,
        }
    }

    /// Content of the first direct text child with the given role
    pub fn text_of(&self, role: TextRole) -> Option<&str> {
        self.children().iter().find_map(|child| match child {
            Node::Text { role: r, content } if *r == role => Some(content.as_str()),
            _ => None,
        })
    }

    /// Label and destination of the first direct action child
    pub fn first_action(&self) -> Option<(&str, &Destination)> {
        self.children().iter().find_map(|child| match child {
            Node::Action {
                label, destination, ..
            } => Some((label.as_str(), destination)),
            _ => None,
        })
    }

    fn collect_actions<'a>(&'a self, out: &mut Vec<(&'a str, &'a Destination)>) {
        match self {
            Node::Action {
                label, destination, ..
            } => out.push((label, destination)),
            Node::Region { children, .. } => {
                for child in children {
                    child.collect_actions(out);
                }
            }
            Node::Text { .. } => {}
        }
    }
}

/// Composed landing page, ready for a rendering backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderTree {
    pub theme: Theme,
    pub root: Node,
}

impl RenderTree {
    fn top_level(&self, kind: RegionKind) -> impl Iterator<Item = &Node> {
        self.root
            .children()
            .iter()
            .filter(move |node| node.kind() == Some(kind))
    }

    pub fn hero(&self) -> Option<&Node> {
        self.top_level(RegionKind::Hero).next()
    }

    pub fn grid(&self) -> Option<&Node> {
        self.top_level(RegionKind::Grid).next()
    }

    pub fn cards(&self) -> &[Node] {
        self.grid().map(Node::children).unwrap_or(&[])
    }

    pub fn panels(&self) -> Vec<&Node> {
        self.top_level(RegionKind::Panel).collect()
    }

    /// Every action in the tree, depth-first
    pub fn actions(&self) -> Vec<(&str, &Destination)> {
        let mut out = Vec::new();
        self.root.collect_actions(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resolve_palette;

    #[test]
    fn stagger_grows_with_index() {
        let delays: Vec<u32> = (0..4)
            .map(|i| Motion::staggered(600, 200, i).delay_ms)
            .collect();
        assert_eq!(delays, vec![0, 200, 400, 600]);
        assert_eq!(Motion::staggered(600, 200, usize::MAX).delay_ms, u32::MAX);
    }

    #[test]
    fn builders_only_touch_regions() {
        let style = resolve_palette(Theme::Light).card;
        let text = Node::text(TextRole::Body, "x").with_key("k");
        assert_eq!(text, Node::text(TextRole::Body, "x"));

        let region = Node::region(RegionKind::Card, style, vec![]).with_key("k");
        assert!(matches!(region, Node::Region { key: Some(ref k), .. } if k == "k"));
    }

    #[test]
    fn destination_serializes_with_kind_tag() {
        let json = serde_json::to_value(Destination::External("https://x.test".into())).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "external", "href": "https://x.test" }));
        assert!(!Destination::Internal("/home".into()).is_external());
    }
}
