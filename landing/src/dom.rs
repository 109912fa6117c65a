//! `web-sys` implementations of the overlay collaborators.

use std::rc::Rc;

use nav_overlay::{OverlayHost, ScrollLock};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions};

/// Interactive descendants, in document order.
const FOCUSABLE_SELECTOR: &str = "a[href], button:not([disabled]), input:not([disabled]), \
     select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex='-1'])";

/// Class on `<body>` that sets `overflow: hidden`.
pub const SCROLL_LOCKED_CLASS: &str = "scroll-locked";

/// Callback invoked for every document keydown while the overlay is open.
pub type KeydownHandler = Rc<dyn Fn(KeyboardEvent)>;

/// The mobile menu panel inside the live document.
pub struct DomHost {
    document: Document,
    panel: HtmlElement,
    backdrop: Option<HtmlElement>,
    on_keydown: KeydownHandler,
}

impl DomHost {
    pub fn new(
        document: Document,
        panel: HtmlElement,
        backdrop: Option<HtmlElement>,
        on_keydown: KeydownHandler,
    ) -> Self {
        Self {
            document,
            panel,
            backdrop,
            on_keydown,
        }
    }
}

impl OverlayHost for DomHost {
    type Node = HtmlElement;
    type Listener = KeydownListener;

    fn focusable_nodes(&self) -> Vec<HtmlElement> {
        let Ok(list) = self.panel.query_selector_all(FOCUSABLE_SELECTOR) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn active_node(&self) -> Option<HtmlElement> {
        self.document.active_element()?.dyn_into().ok()
    }

    fn focus(&self, node: &HtmlElement) {
        if let Err(err) = node.focus() {
            tracing::debug!(?err, "focus() rejected");
        }
    }

    fn is_connected(&self, node: &HtmlElement) -> bool {
        node.is_connected()
    }

    fn set_panel_visible(&self, visible: bool) {
        self.panel.set_hidden(!visible);
        if let Some(backdrop) = &self.backdrop {
            backdrop.set_hidden(!visible);
        }
    }

    fn scroll_to_anchor(&self, id: &str) -> bool {
        let Some(target) = self.document.get_element_by_id(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn listen_keydown(&self) -> KeydownListener {
        KeydownListener::attach(&self.document, self.on_keydown.clone())
    }
}

/// Document keydown subscription, removed on drop.
pub struct KeydownListener {
    target: Document,
    callback: js_sys::Function,
}

impl KeydownListener {
    fn attach(document: &Document, handler: KeydownHandler) -> Self {
        let closure = Closure::<dyn Fn(KeyboardEvent)>::new(move |event: KeyboardEvent| handler(event));
        // Owned by the JS GC from here on, so removing the listener from inside
        // its own invocation (Escape) is safe.
        let callback: js_sys::Function = closure.into_js_value().unchecked_into();
        if let Err(err) = document.add_event_listener_with_callback("keydown", &callback) {
            tracing::warn!(?err, "failed to attach keydown listener");
        }
        Self {
            target: document.clone(),
            callback,
        }
    }
}

impl Drop for KeydownListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("keydown", &self.callback);
    }
}

/// Locks page scroll by toggling a class on `<body>`.
pub struct BodyScrollLock {
    body: Option<HtmlElement>,
}

impl BodyScrollLock {
    pub fn new(document: &Document) -> Self {
        Self {
            body: document.body(),
        }
    }

    fn set_class(&self, locked: bool) {
        let Some(body) = &self.body else {
            return;
        };
        let classes = body.class_list();
        let result = if locked {
            classes.add_1(SCROLL_LOCKED_CLASS)
        } else {
            classes.remove_1(SCROLL_LOCKED_CLASS)
        };
        if let Err(err) = result {
            tracing::debug!(?err, locked, "scroll lock class update failed");
        }
    }
}

impl ScrollLock for BodyScrollLock {
    fn lock(&self) {
        self.set_class(true);
    }

    fn unlock(&self) {
        self.set_class(false);
    }
}
