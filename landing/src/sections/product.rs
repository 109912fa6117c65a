use leptos::prelude::*;

use crate::content::{Plan, ProductContent};

/// Product details plus the pricing block the `#pricing` nav link targets.
#[component]
pub fn Product(product: ProductContent) -> impl IntoView {
    let rows = product
        .rows
        .into_iter()
        .map(|row| {
            view! {
                <div class="product-row">
                    <dt>{row.label}</dt>
                    <dd>{row.value}</dd>
                </div>
            }
        })
        .collect_view();

    let plans = product
        .plans
        .into_iter()
        .map(|plan| view! { <PlanCard plan=plan /> })
        .collect_view();

    view! {
        <section id="product" class="product" aria-labelledby="product-title">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">{product.eyebrow}</p>
                    <h2 id="product-title" class="section-title">{product.title}</h2>
                    <p class="section-description">{product.description}</p>
                </div>
                <dl class="product-specs">{rows}</dl>
                <div id="pricing" class="pricing-grid">{plans}</div>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(plan: Plan) -> impl IntoView {
    view! {
        <article class="plan-card">
            <h3 class="plan-name">{plan.name}</h3>
            <p class="plan-price">{plan.price}</p>
            <p class="plan-summary">{plan.summary}</p>
        </article>
    }
}
