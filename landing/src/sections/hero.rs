use leptos::prelude::*;
use nav_overlay::NavigationLink;

use crate::content::HeroContent;

#[component]
pub fn Hero(hero: HeroContent) -> impl IntoView {
    let HeroContent {
        eyebrow,
        title,
        accent,
        description,
        primary,
        secondary,
    } = hero;

    view! {
        <section class="hero" aria-labelledby="hero-title">
            <div class="container">
                <div class="hero-content">
                    {(!eyebrow.is_empty()).then(|| view! {
                        <div class="hero-badge">
                            <span class="hero-badge-dot" aria-hidden="true"></span>
                            {eyebrow}
                        </div>
                    })}
                    <h1 id="hero-title" class="hero-title">
                        {title}
                        <br />
                        <span class="hero-title-accent">{accent}</span>
                    </h1>
                    <p class="hero-description">{description}</p>
                    <div class="hero-actions">
                        {primary.map(|link| view! { <HeroAction link=link variant="btn btn-primary" /> })}
                        {secondary.map(|link| view! { <HeroAction link=link variant="btn btn-secondary" /> })}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn HeroAction(link: NavigationLink, variant: &'static str) -> impl IntoView {
    let aria_label = link.accessible_label.clone();
    view! {
        <a href=link.destination class=variant aria-label=aria_label>
            {link.label}
        </a>
    }
}
