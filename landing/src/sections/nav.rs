use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;
use nav_overlay::{KeyPress, NavigationLink, OverlayController};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::analytics::BeaconSink;
use crate::content::{AnalyticsSettings, Brand, NavContent};
use crate::dom::{BodyScrollLock, DomHost, KeydownHandler};

type NavController = OverlayController<DomHost, BodyScrollLock>;
type ControllerSlot = StoredValue<Option<NavController>, LocalStorage>;

const PANEL_ID: &str = "mobile-menu";

/// Run `op` against the controller (once mounted) and mirror its state into `set_open`.
fn drive<R>(
    controller: ControllerSlot,
    set_open: WriteSignal<bool>,
    op: impl FnOnce(&mut NavController) -> R,
) -> Option<R> {
    let (result, is_open) = controller
        .try_update_value(|slot| {
            slot.as_mut().map(|nav| {
                let result = op(nav);
                (result, nav.is_open())
            })
        })
        .flatten()?;
    set_open.set(is_open);
    Some(result)
}

#[component]
pub fn Nav(brand: Brand, nav: NavContent, analytics: AnalyticsSettings) -> impl IntoView {
    let (open, set_open) = signal(false);
    let trigger_ref = NodeRef::<html::Button>::new();
    let panel_ref = NodeRef::<html::Div>::new();
    let backdrop_ref = NodeRef::<html::Div>::new();
    let controller: ControllerSlot = StoredValue::new_local(None);

    let menu_label = nav.menu_label.clone();

    // The trigger reference is fixed once the header is mounted.
    Effect::new(move || {
        let (Some(trigger), Some(panel)) = (trigger_ref.get(), panel_ref.get()) else {
            return;
        };
        if controller.with_value(Option::is_some) {
            return;
        }
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let on_keydown: KeydownHandler = Rc::new(move |event: KeyboardEvent| {
            let press = KeyPress::from_event(&event.key(), event.shift_key());
            if let Some(outcome) = drive(controller, set_open, |overlay| overlay.handle_keydown(press)) {
                if outcome.prevents_default() {
                    event.prevent_default();
                }
                if outcome.stops_propagation() {
                    event.stop_propagation();
                }
            }
        });

        let host = DomHost::new(
            document.clone(),
            panel.unchecked_into(),
            backdrop_ref.get().map(|b| b.unchecked_into()),
            on_keydown,
        );
        let mut overlay = OverlayController::new(
            host,
            trigger.unchecked_into(),
            BodyScrollLock::new(&document),
        )
        .with_label(menu_label.clone());
        if let Some(sink) = BeaconSink::from_settings(&analytics) {
            tracing::debug!(endpoint = sink.endpoint(), "analytics beacon enabled");
            overlay = overlay.with_analytics(sink);
        }

        tracing::debug!("navigation overlay mounted");
        controller.set_value(Some(overlay));
    });

    let desktop_links = nav
        .links
        .iter()
        .map(|link| {
            view! {
                <a href=link.destination.clone() class="nav-link" aria-label=link.accessible_label.clone()>
                    {link.label.clone()}
                </a>
            }
        })
        .collect_view();

    let drawer_links = nav
        .links
        .iter()
        .chain(&nav.cta)
        .cloned()
        .map(|link| view! { <DrawerLink link=link controller=controller set_open=set_open /> })
        .collect_view();

    let cta = nav.cta.clone().map(|cta| {
        view! {
            <a href=cta.destination.clone() class="nav-cta" aria-label=cta.accessible_label.clone()>
                {cta.label.clone()}
            </a>
        }
    });

    view! {
        <nav class="nav" aria-label="Primary">
            <div class="nav-inner">
                <a href="#main" class="nav-brand">
                    {brand.logo.clone().map(|src| view! {
                        <span class="nav-logo"><img src=src alt="" /></span>
                    })}
                    <span class="nav-title">{brand.name.clone()}</span>
                </a>
                <div class="nav-links">
                    {desktop_links}
                    {cta}
                </div>
                <button
                    node_ref=trigger_ref
                    class=move || if open.get() { "nav-menu-toggle active" } else { "nav-menu-toggle" }
                    aria-controls=PANEL_ID
                    aria-expanded=move || if open.get() { "true" } else { "false" }
                    aria-label=move || if open.get() { "Close menu" } else { "Open menu" }
                    on:click=move |_| {
                        drive(controller, set_open, |overlay| overlay.toggle());
                    }
                >
                    <span class="nav-menu-bar"></span>
                    <span class="nav-menu-bar"></span>
                    <span class="nav-menu-bar"></span>
                </button>
            </div>

            <div
                node_ref=backdrop_ref
                class="nav-backdrop"
                hidden=true
                on:click=move |_| {
                    drive(controller, set_open, |overlay| overlay.handle_backdrop_activate());
                }
            ></div>

            <div
                node_ref=panel_ref
                id=PANEL_ID
                class="nav-drawer"
                role="dialog"
                aria-modal="true"
                aria-label="Site navigation"
                hidden=true
            >
                <div class="nav-drawer-inner">
                    <ul class="nav-drawer-links">{drawer_links}</ul>
                    <button
                        class="nav-drawer-close"
                        on:click=move |_| {
                            drive(controller, set_open, |overlay| overlay.close());
                        }
                    >
                        "Close menu"
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn DrawerLink(
    link: NavigationLink,
    controller: ControllerSlot,
    set_open: WriteSignal<bool>,
) -> impl IntoView {
    let href = link.destination.clone();
    let label = link.label.clone();
    let aria_label = link.accessible_label.clone();

    view! {
        <li>
            <a
                href=href
                class="nav-drawer-link"
                aria-label=aria_label
                on:click=move |ev| {
                    let outcome = drive(controller, set_open, |overlay| overlay.handle_link_activate(&link));
                    if outcome.is_some_and(|o| o.prevents_default()) {
                        ev.prevent_default();
                    }
                }
            >
                {label}
            </a>
        </li>
    }
}
