use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::Nav;
use crate::models::Theme;
use crate::pages::*;
use crate::state::ThemeState;

#[component]
pub fn App(#[prop(optional)] initial_theme: Theme) -> impl IntoView {
    provide_meta_context();
    let theme = ThemeState::provide(initial_theme);

    view! {
        <Stylesheet id="leptos" href="/pkg/docuthinker.css"/>
        <Title text="DocuThinker - AI Document Summarization and Analysis"/>
        <Meta name="description" content="Upload your documents and get AI-powered summaries and insights in seconds"/>

        <Router>
            <Nav/>
            <main class=move || format!("theme-{}", theme.get())>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/landing") view=LandingPage/>
                </Routes>
            </main>
        </Router>
    }
}
