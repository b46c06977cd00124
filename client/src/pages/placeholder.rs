//! Titled stand-in for routes whose screens are not built yet.

use leptos::prelude::*;

#[component]
pub fn RoutePlaceholder(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <section class="placeholder">
            <h1 class="placeholder__title">{title}</h1>
            <p class="placeholder__body">"This page is coming soon."</p>
        </section>
    }
}
