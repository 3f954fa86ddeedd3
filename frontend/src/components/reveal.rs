use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

use crate::effects::reveal::{RevealRule, RevealLedger, CONTENT_BLOCKS, FLOWER, REVEAL_KEY_ATTR};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe(document: &Document, rule: RevealRule) -> Result<RevealObserver, JsValue> {
    let ledger = Rc::new(RefCell::new(RevealLedger::<u32>::default()));

    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let first_time = target
                    .get_attribute(REVEAL_KEY_ATTR)
                    .and_then(|key| key.parse::<u32>().ok())
                    .map_or(true, |key| ledger.borrow_mut().mark(key));
                if first_time {
                    if let Err(e) = target.class_list().add_1(rule.class) {
                        warn!("Could not add .{}: {:?}", rule.class, e);
                    }
                }
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(rule.threshold));
    options.set_root_margin(rule.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    let nodes = document.query_selector_all(rule.selector)?;
    for index in 0..nodes.length() {
        let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        element.set_attribute(REVEAL_KEY_ATTR, &index.to_string())?;
        observer.observe(&element);
    }
    info!("Observing {} element(s) for .{}", nodes.length(), rule.class);

    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}

/// Adds the reveal classes to content blocks and the about-section flower as they scroll into view.
#[hook]
pub fn use_reveal_on_view(enabled: bool) {
    use_effect_with_deps(
        move |enabled| {
            let mut observers = Vec::new();
            if let (true, Some(document)) = (*enabled, web_sys::window().and_then(|w| w.document())) {
                for rule in [CONTENT_BLOCKS, FLOWER] {
                    match observe(&document, rule) {
                        Ok(observer) => observers.push(observer),
                        Err(e) => warn!("Reveal observer for {} failed: {:?}", rule.selector, e),
                    }
                }
            }
            move || drop(observers)
        },
        enabled,
    );
}
