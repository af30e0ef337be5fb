use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Date, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::motion::reveal::{RevealEngine, RevealStyle, TargetId, REVEAL_THRESHOLD};

const TARGET_ATTR: &str = "data-reveal-id";

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct RevealRegistry {
    engine: RevealEngine,
    observer: Option<IntersectionObserver>,
    listeners: HashMap<TargetId, (Element, Callback<RevealStyle>)>,
    _on_entries: Option<EntriesCallback>,
}

/// Shared handle to the page's single intersection observer.
#[derive(Clone)]
pub struct RevealHandle(Rc<RefCell<RevealRegistry>>);

impl PartialEq for RevealHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl RevealHandle {
    pub fn new() -> Self {
        let registry = Rc::new(RefCell::new(RevealRegistry {
            engine: RevealEngine::new(),
            observer: None,
            listeners: HashMap::new(),
            _on_entries: None,
        }));

        if !observer_supported() {
            debug!("IntersectionObserver unavailable, reveals are immediate");
            registry.borrow_mut().engine = RevealEngine::without_observer();
            return Self(registry);
        }

        let weak: Weak<RefCell<RevealRegistry>> = Rc::downgrade(&registry);
        let on_entries = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            if let Some(registry) = weak.upgrade() {
                RevealHandle(registry).handle_entries(entries);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let mut options = IntersectionObserverInit::new();
        #[allow(deprecated)]
        options.threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

        match IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                let mut state = registry.borrow_mut();
                state.observer = Some(observer);
                state._on_entries = Some(on_entries);
            }
            Err(e) => {
                warn!("Could not create IntersectionObserver: {:?}", e);
                registry.borrow_mut().engine = RevealEngine::without_observer();
            }
        }
        Self(registry)
    }

    /// Start watching `element`. `on_reveal` fires once, possibly right away
    /// when the browser can't observe.
    pub fn observe(&self, element: Element, on_reveal: Callback<RevealStyle>) -> TargetId {
        let (id, immediate) = {
            let mut state = self.0.borrow_mut();
            let id = state.engine.register();
            let immediate = state.engine.target(id).and_then(|t| t.style());
            if immediate.is_none() {
                let _ = element.set_attribute(TARGET_ATTR, &id.to_string());
                if let Some(observer) = state.observer.as_ref() {
                    observer.observe(&element);
                }
                state.listeners.insert(id, (element, on_reveal.clone()));
            }
            (id, immediate)
        };
        if let Some(style) = immediate {
            on_reveal.emit(style);
        }
        id
    }

    pub fn forget(&self, id: TargetId) {
        let mut state = self.0.borrow_mut();
        state.engine.forget(id);
        if let Some((element, _)) = state.listeners.remove(&id) {
            if let Some(observer) = state.observer.as_ref() {
                observer.unobserve(&element);
            }
        }
    }

    pub fn record_scroll(&self, position: f64, at_ms: f64) {
        self.0.borrow_mut().engine.record_scroll(position, at_ms);
    }

    fn handle_entries(&self, entries: Array) {
        let mut revealed = Vec::new();
        {
            let mut state = self.0.borrow_mut();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let Some(id) = entry
                    .target()
                    .get_attribute(TARGET_ATTR)
                    .and_then(|raw| TargetId::parse(&raw))
                else {
                    continue;
                };
                let ratio = if entry.is_intersecting() { entry.intersection_ratio() } else { 0.0 };
                if let Some(style) = state.engine.on_intersection(id, ratio) {
                    if let Some((element, listener)) = state.listeners.remove(&id) {
                        if let Some(observer) = state.observer.as_ref() {
                            observer.unobserve(&element);
                        }
                        revealed.push((listener, style));
                    }
                }
            }
        }
        for (listener, style) in revealed {
            listener.emit(style);
        }
    }
}

impl Default for RevealHandle {
    fn default() -> Self {
        Self::new()
    }
}

fn observer_supported() -> bool {
    web_sys::window()
        .map(|window| Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct RevealProviderProps {
    pub children: Children,
}

#[function_component(RevealProvider)]
pub fn reveal_provider(props: &RevealProviderProps) -> Html {
    let handle = use_state(RevealHandle::new);

    {
        let handle = (*handle).clone();
        use_event_with_window("scroll", move |_: Event| {
            if let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                handle.record_scroll(y, Date::now());
            }
        });
    }

    html! {
        <ContextProvider<RevealHandle> context={(*handle).clone()}>
            { for props.children.iter() }
        </ContextProvider<RevealHandle>>
    }
}

/// The style an element was revealed with, or `None` while still hidden.
#[hook]
pub fn use_reveal(node: NodeRef) -> Option<RevealStyle> {
    let handle = use_context::<RevealHandle>();
    let revealed = use_state(|| None::<RevealStyle>);
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let registration = match (handle, node.cast::<Element>()) {
                    (Some(handle), Some(element)) => {
                        let on_reveal = Callback::from(move |style| revealed.set(Some(style)));
                        let id = handle.observe(element, on_reveal);
                        Some((handle, id))
                    }
                    // Nothing to observe with, so just show it.
                    _ => {
                        revealed.set(Some(RevealStyle::INSTANT));
                        None
                    }
                };
                move || {
                    if let Some((handle, id)) = registration {
                        handle.forget(id);
                    }
                }
            },
            (),
        );
    }
    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay_ms: u32,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let style = use_reveal(node.clone());

    let inline = match style {
        Some(style) if props.delay_ms > 0 && style.duration_ms > 0 => {
            format!("{} animation-delay: {}ms;", style.css(), props.delay_ms)
        }
        Some(style) => style.css(),
        None => String::new(),
    };

    html! {
        <div
            ref={node}
            class={classes!("reveal", style.is_some().then(|| "reveal-visible"), props.class.clone())}
            style={inline}
        >
            { for props.children.iter() }
        </div>
    }
}
