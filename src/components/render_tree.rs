use leptos::prelude::*;

use crate::layout::{Motion, Node, RegionKind, RenderTree, TextRole};
use crate::models::RegionStyle;

/// Renders a composed [`RenderTree`] as HTML.
///
/// Internal destinations are plain anchors: inside a `<Router>` the router
/// intercepts same-origin clicks, and outside one (static rendering) they stay
/// ordinary links.
#[component]
pub fn RenderTreeView(tree: RenderTree) -> impl IntoView {
    let class = format!("landing theme-{}", tree.theme);

    view! {
        <div class=class>
            {render_node(tree.root)}
        </div>
    }
}

fn render_node(node: Node) -> AnyView {
    match node {
        Node::Region {
            kind,
            style,
            motion,
            key,
            children,
        } => {
            let style = region_css(style.as_ref(), motion).unwrap_or_default();
            let children = children.into_iter().map(render_node).collect_view();
            match kind {
                RegionKind::Hero | RegionKind::Panel => view! {
                    <section class=kind.class_name() style=style data-key=key>
                        {children}
                    </section>
                }
                .into_any(),
                RegionKind::Page | RegionKind::Grid | RegionKind::Card => view! {
                    <div class=kind.class_name() style=style data-key=key>
                        {children}
                    </div>
                }
                .into_any(),
            }
        }
        Node::Text { role, content } => render_text(role, content),
        Node::Action {
            label,
            destination,
            style,
        } => {
            let style = style.css();
            let external = destination.is_external();
            let href = destination.href().to_string();
            if external {
                view! {
                    <a
                        href=href
                        class="btn btn-action"
                        style=style
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {label}
                    </a>
                }
                .into_any()
            } else {
                view! { <a href=href class="btn btn-action" style=style>{label}</a> }.into_any()
            }
        }
    }
}

fn render_text(role: TextRole, content: String) -> AnyView {
    match role {
        TextRole::Title => view! { <h1 class="region-title">{content}</h1> }.into_any(),
        TextRole::Subtitle => {
            let lines: Vec<String> = content.lines().map(str::to_string).collect();
            view! {
                <p class="region-subtitle">
                    {lines
                        .into_iter()
                        .enumerate()
                        .map(|(i, line)| view! { {(i > 0).then(|| view! { <br/> })} {line} })
                        .collect_view()}
                </p>
            }
            .into_any()
        }
        TextRole::Heading => view! { <h3 class="region-heading">{content}</h3> }.into_any(),
        TextRole::Body => view! { <p class="region-body">{content}</p> }.into_any(),
    }
}

/// Inline animation for the `slide-up` keyframes in the stylesheet
pub fn motion_css(motion: Motion) -> String {
    format!(
        "animation: slide-up {}ms ease-out {}ms both;",
        motion.duration_ms, motion.delay_ms
    )
}

/// `None` when the region has neither colours nor motion
fn region_css(style: Option<&RegionStyle>, motion: Option<Motion>) -> Option<String> {
    match (style, motion) {
        (Some(style), Some(motion)) => Some(format!("{} {}", style.css(), motion_css(motion))),
        (Some(style), None) => Some(style.css()),
        (None, Some(motion)) => Some(motion_css(motion)),
        (None, None) => None,
    }
}
