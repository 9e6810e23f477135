//! Site header component

use leptos::prelude::*;
use leptos_router::components::A;
use shared::{class, HeaderContent};

use super::Image;

/// logo and navigation on the left, sign-in on the right
#[component]
pub fn SiteHeader() -> impl IntoView {
    let content = HeaderContent::site();
    log::debug!("rendering site header with {} nav links", content.nav_links.len());

    view! {
        <div class=class::CONTAINER>
            <div class=class::LEFT>
                <div>
                    <Image src=content.logo.src alt=content.logo.alt class=class::LOGO />
                </div>
                {content
                    .nav_links
                    .into_iter()
                    .map(|link| view! { <A href=link.path>{link.label}</A> })
                    .collect_view()}
            </div>
            <div class=class::RIGHT>
                <a href=content.cta.href class=class::CTA>{content.cta.label}</a>
            </div>
        </div>
    }
}
