pub mod app;
pub mod components;
pub mod layout;
pub mod models;
pub mod pages;
pub mod state;

#[cfg(feature = "ssr")]
pub mod config;

// Re-export for convenience
pub use app::App;
pub use layout::{compose_layout, RenderTree};
pub use models::{features, resolve_palette, FeatureDescriptor, Palette, Theme};

/// Static HTML of the landing view for `theme`, without the app shell
#[cfg(feature = "ssr")]
pub fn render_landing_html(theme: Theme) -> String {
    use components::RenderTreeView;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    let tree = compose_layout(theme, features());
    view! { <RenderTreeView tree/> }.to_html()
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let initial_theme = state::document_theme().unwrap_or_default();
    leptos::mount::hydrate_body(move || view! { <App initial_theme/> });
}
