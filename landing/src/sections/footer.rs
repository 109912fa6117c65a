use leptos::prelude::*;

use crate::content::{Brand, FooterContent};

#[component]
pub fn Footer(brand: Brand, footer: FooterContent) -> impl IntoView {
    let links = footer
        .links
        .into_iter()
        .map(|link| {
            let aria_label = link.accessible_label.clone();
            view! {
                <a href=link.destination class="footer-link" aria-label=aria_label>
                    {link.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-title">{brand.name}</span>
                    <span class="footer-tagline">{brand.tagline}</span>
                </div>
                <nav class="footer-links" aria-label="Footer">{links}</nav>
                <p class="footer-copyright">{footer.copyright}</p>
            </div>
        </footer>
    }
}
