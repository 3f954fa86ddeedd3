use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};
use yew::prelude::*;

use crate::config;
use crate::effects::motion::{FrameGate, HeroFrame};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    /// Parallax is attached only once the loader is gone.
    pub animate: bool,
}

fn scroll_metrics(window: &Window) -> (f64, f64) {
    let scrolled = window.scroll_y().unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    (scrolled, height)
}

fn paint(back: &NodeRef, front_text: &NodeRef, frame: HeroFrame) {
    if let Some(back) = back.cast::<HtmlElement>() {
        if let Err(e) = back.style().set_property("transform", &frame.transform()) {
            warn!("Could not move hero background: {:?}", e);
        }
    }
    if let Some(text) = front_text.cast::<HtmlElement>() {
        if let Err(e) = text.style().set_property("opacity", &frame.opacity.to_string()) {
            warn!("Could not fade hero text: {:?}", e);
        }
    }
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let hero_back = use_node_ref();
    let circular_container = use_node_ref();

    {
        let hero_back = hero_back.clone();
        let circular_container = circular_container.clone();
        use_effect_with_deps(
            move |animate| {
                let mut teardown: Option<Box<dyn FnOnce()>> = None;

                if let (true, Some(window)) = (*animate, web_sys::window()) {
                    let gate = Rc::new(RefCell::new(FrameGate::default()));
                    let frame_handle = Rc::new(Cell::new(None::<i32>));

                    let update = {
                        let gate = gate.clone();
                        let frame_handle = frame_handle.clone();
                        let window = window.clone();
                        Rc::new(Closure::wrap(Box::new(move |_timestamp: f64| {
                            let (scrolled, height) = scroll_metrics(&window);
                            paint(&hero_back, &circular_container, HeroFrame::at(scrolled, height));
                            frame_handle.set(None);
                            gate.borrow_mut().complete();
                        }) as Box<dyn FnMut(f64)>))
                    };

                    let request_tick = {
                        let window = window.clone();
                        let frame_handle = frame_handle.clone();
                        let update = update.clone();
                        Closure::wrap(Box::new(move || {
                            if !gate.borrow_mut().request() {
                                return;
                            }
                            match window.request_animation_frame((*update).as_ref().unchecked_ref()) {
                                Ok(handle) => frame_handle.set(Some(handle)),
                                Err(e) => {
                                    warn!("requestAnimationFrame failed: {:?}", e);
                                    gate.borrow_mut().complete();
                                }
                            }
                        }) as Box<dyn FnMut()>)
                    };

                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", request_tick.as_ref().unchecked_ref())
                    {
                        warn!("Could not attach parallax listener: {:?}", e);
                    }

                    teardown = Some(Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            request_tick.as_ref().unchecked_ref(),
                        );
                        if let Some(handle) = frame_handle.take() {
                            let _ = window.cancel_animation_frame(handle);
                        }
                        drop(request_tick);
                        drop(update);
                    }));
                }

                move || {
                    if let Some(teardown) = teardown {
                        teardown();
                    }
                }
            },
            props.animate,
        );
    }

    html! {
        <header class="hero-section" id="top">
            <div class="hero-layers">
                <img
                    ref={hero_back}
                    id="heroBack"
                    class="hero-back"
                    src={config::HERO_IMAGES[0]}
                    alt=""
                />
                <img
                    id="heroFront"
                    class="hero-front"
                    src={config::HERO_IMAGES[1]}
                    alt="Model in an ivory couture gown"
                />
            </div>
            <div ref={circular_container} id="circularContainer" class="circular-container">
                <img class="hero-crown" src={config::HERO_IMAGES[2]} alt="" />
                <h1 id="heroTitle" class="hero-title">{"Maison Lumière"}</h1>
                <p class="hero-subtitle">{"Couture, cut by hand"}</p>
            </div>
        </header>
    }
}
