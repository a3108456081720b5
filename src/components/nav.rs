use leptos::prelude::*;
use leptos_router::components::A;

use crate::layout::HOW_TO_USE_ROUTE;
use crate::models::{Palette, Theme};
use crate::state::use_theme;

fn toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "Dark Mode",
        Theme::Dark => "Light Mode",
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    let theme = use_theme();
    let page_style = move || Palette::for_theme(theme.get()).page;

    view! {
        <nav class="main-nav" style=move || page_style().css()>
            <div class="nav-brand">
                <A href="/">"DocuThinker"</A>
            </div>

            <div class="nav-links">
                <A href="/home">"Home"</A>
                <A href=HOW_TO_USE_ROUTE>"How to Use"</A>
                <A href="/register">"Register"</A>
                <button
                    type="button"
                    class="btn btn-small theme-toggle"
                    style=move || page_style().action.css()
                    on:click=move |_| theme.toggle()
                >
                    {move || toggle_label(theme.get())}
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_names_the_other_theme() {
        assert_eq!(toggle_label(Theme::Light), "Dark Mode");
        assert_eq!(toggle_label(Theme::Dark), "Light Mode");
    }
}
