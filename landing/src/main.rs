// Lumen Studio landing page — Leptos 0.8 CSR
// Developed by the Lumen Studio web team (c)2025

mod analytics;
mod content;
mod dom;
mod logger;
mod sections;

use content::SiteContent;
use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();

    let (content, load_error) = match SiteContent::embedded() {
        Ok(content) => (content, None),
        Err(err) => (SiteContent::default(), Some(err)),
    };
    logger::init(content.logging.level_filter());
    if let Some(err) = load_error {
        tracing::error!(%err, "site content rejected; rendering built-in defaults");
    }

    tracing::info!(brand = %content.brand.name, "mounting landing page");
    leptos::mount::mount_to_body(move || view! { <App content=content /> });
}

#[component]
fn App(content: SiteContent) -> impl IntoView {
    let SiteContent {
        brand,
        nav,
        hero,
        features,
        product,
        contact,
        footer,
        analytics,
        ..
    } = content;

    view! {
        <a href="#main" class="skip-link">"Skip to content"</a>
        <Nav brand=brand.clone() nav=nav analytics=analytics />
        <main id="main" tabindex="-1">
            <Hero hero=hero />
            <Features features=features />
            <Product product=product />
            <Contact contact=contact />
        </main>
        <Footer brand=brand footer=footer />
    }
}
