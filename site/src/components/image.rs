//! Image component
//!
//! Renders a static asset as a lazily loaded `<img>`. Fetching and decoding
//! are left to the browser.

use leptos::prelude::*;

#[component]
pub fn Image(
    src: &'static str,
    alt: &'static str,
    #[prop(optional)] class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <img src=src alt=alt class=class loading="lazy" decoding="async" />
    }
}
