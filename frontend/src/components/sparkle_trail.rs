use gloo_timers::callback::Timeout;
use log::warn;
use stylist::yew::styled_component;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Math;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::effects::sparkle::SparkleTrail as Trail;

fn now_ms() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64
}

#[styled_component(SparkleTrail)]
pub fn sparkle_trail() -> Html {
    let trail = use_mut_ref(Trail::default);
    let redraw = use_force_update();

    {
        let trail = trail.clone();
        let redraw = redraw.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());

                let on_move = Closure::wrap(Box::new(move |e: MouseEvent| {
                    let spawned = trail.borrow_mut().try_spawn(
                        now_ms(),
                        e.client_x() as f64,
                        e.client_y() as f64,
                        Math::random(),
                    );
                    let Some(id) = spawned else {
                        return;
                    };
                    redraw.force_update();

                    {
                        let trail = trail.clone();
                        let redraw = redraw.clone();
                        Timeout::new(config::SPARKLE_SETTLE_MS, move || {
                            if trail.borrow_mut().settle(id, Math::random(), Math::random()) {
                                redraw.force_update();
                            }
                        })
                        .forget();
                    }
                    {
                        let trail = trail.clone();
                        let redraw = redraw.clone();
                        Timeout::new(config::SPARKLE_LIFETIME_MS, move || {
                            if trail.borrow_mut().retire(id) {
                                redraw.force_update();
                            }
                        })
                        .forget();
                    }
                }) as Box<dyn FnMut(MouseEvent)>);

                if let Some(document) = &document {
                    if let Err(e) = document
                        .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
                    {
                        warn!("Could not attach sparkle trail: {:?}", e);
                    }
                }

                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "mousemove",
                            on_move.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let layer = css!(
        r#"
        position: fixed;
        inset: 0;
        pointer-events: none;
        z-index: 999;

        .cursor-sparkle {
            position: fixed;
            width: 6px;
            height: 6px;
            border-radius: 50%;
            transform: translate(0, 0) scale(1);
            transition: transform 0.6s ease-out, opacity 0.6s ease-out;
        }
    "#
    );

    let trail = trail.borrow();
    html! {
        <div class={classes!(layer, "sparkle-layer")} aria-hidden="true">
            { for trail.live().map(|sparkle| html! {
                <div key={sparkle.id} class="cursor-sparkle" style={sparkle.style()}></div>
            }) }
        </div>
    }
}
