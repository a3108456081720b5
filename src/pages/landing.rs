use leptos::prelude::*;

use crate::components::RenderTreeView;
use crate::layout::compose_layout;
use crate::models::features;
use crate::state::use_theme;

#[component]
pub fn LandingPage() -> impl IntoView {
    let theme = use_theme();
    let layout = Memo::new(move |_| compose_layout(theme.get(), features()));

    view! {
        {move || view! { <RenderTreeView tree=layout.get()/> }}
    }
}
