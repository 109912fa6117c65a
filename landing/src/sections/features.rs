use leptos::prelude::*;

use crate::content::{Feature, FeaturesContent};

#[component]
pub fn Features(features: FeaturesContent) -> impl IntoView {
    let cards = features
        .items
        .into_iter()
        .map(|feature| view! { <FeatureCard feature=feature /> })
        .collect_view();

    view! {
        <section id="services" class="features" aria-labelledby="services-title">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">{features.eyebrow}</p>
                    <h2 id="services-title" class="section-title">{features.title}</h2>
                    <p class="section-description">{features.description}</p>
                </div>
                <div class="features-grid">{cards}</div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon" aria-hidden="true">{feature.icon}</div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </article>
    }
}
