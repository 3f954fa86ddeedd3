use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use stylist::yew::styled_component;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    /// Fired once the overlay starts hiding; the page starts its animations here.
    pub on_ready: Callback<()>,
}

fn preload_hero_images() {
    for src in config::HERO_IMAGES {
        match HtmlImageElement::new() {
            Ok(img) => img.set_src(src),
            Err(e) => warn!("Could not preload {}: {:?}", src, e),
        }
    }
}

#[styled_component(Loader)]
pub fn loader(props: &LoaderProps) -> Html {
    let hidden = use_state(|| false);

    {
        let hidden = hidden.clone();
        let on_ready = props.on_ready.clone();
        use_effect_with_deps(
            move |_| {
                preload_hero_images();

                let pending: Rc<RefCell<Option<Timeout>>> = Default::default();
                let start = {
                    let pending = pending.clone();
                    move || {
                        let hidden = hidden.clone();
                        let on_ready = on_ready.clone();
                        *pending.borrow_mut() = Some(Timeout::new(config::LOADER_DELAY_MS, move || {
                            info!("Page loaded, starting animations");
                            hidden.set(true);
                            on_ready.emit(());
                        }));
                    }
                };

                let window = web_sys::window();
                let already_loaded = window
                    .as_ref()
                    .and_then(|w| w.document())
                    .map(|d| d.ready_state() == "complete")
                    .unwrap_or(true);

                let mut load_listener = None;
                if already_loaded {
                    start();
                } else if let Some(window) = window.clone() {
                    let listener = Closure::once(start);
                    if let Err(e) = window.add_event_listener_with_callback(
                        "load",
                        listener.as_ref().unchecked_ref(),
                    ) {
                        warn!("Could not listen for window load: {:?}", e);
                    }
                    load_listener = Some(listener);
                }

                move || {
                    if let (Some(window), Some(listener)) = (window, load_listener.as_ref()) {
                        let _ = window.remove_event_listener_with_callback(
                            "load",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                    drop(load_listener);
                    pending.borrow_mut().take();
                }
            },
            (),
        );
    }

    let overlay = css!(
        r#"
        position: fixed;
        inset: 0;
        z-index: 1000;
        display: flex;
        align-items: center;
        justify-content: center;
        background: #faf4dc;
        transition: opacity 0.8s ease, visibility 0.8s ease;

        &.hide {
            opacity: 0;
            visibility: hidden;
            pointer-events: none;
        }
    "#
    );

    html! {
        <div id="loader" class={classes!(overlay, "loader", (*hidden).then_some("hide"))}>
            <div class="loader-crown">
                <span class="loader-mark">{"M"}</span>
                <span class="loader-line"></span>
            </div>
        </div>
    }
}
