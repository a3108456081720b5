mod nav;
mod render_tree;

pub use nav::Nav;
pub use render_tree::{motion_css, RenderTreeView};
