use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlInputElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::components::luxury_button::LuxuryButton;
use crate::effects::button::ButtonPhase;
use crate::effects::capture::{CaptureAction, CaptureState, SubmitError, SubmitPhase};

const BUTTON_LABEL: &str = "Join the List";

/// Posts the address the way a plain HTML form would, asking for a JSON reply.
async fn submit_email(endpoint: &str, email: &str) -> Result<(), SubmitError> {
    let form = FormData::new().map_err(|e| SubmitError::Encode(format!("{:?}", e)))?;
    form.append_with_str("email", email)
        .map_err(|e| SubmitError::Encode(format!("{:?}", e)))?;

    let response = Request::post(endpoint)
        .header("Accept", "application/json")
        .body(form)
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Rejected {
            status: response.status(),
        })
    }
}

#[function_component(EmailCaptureBar)]
pub fn email_capture_bar() -> Html {
    let state = use_reducer_eq(CaptureState::default);

    {
        let state = state.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                state.dispatch(CaptureAction::Escape);
            }
        });
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |phase: &SubmitPhase| {
                let timeout = phase
                    .settle_after_ms()
                    .map(|ms| Timeout::new(ms, move || dispatcher.dispatch(CaptureAction::Settle)));
                move || drop(timeout)
            },
            state.phase,
        );
    }

    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(CaptureAction::Input(input.value()));
        })
    };

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(email) = state.submission() else {
                return;
            };
            state.dispatch(CaptureAction::Submit);

            let dispatcher = state.dispatcher();
            spawn_local(async move {
                let outcome = submit_email(config::form_endpoint(), &email).await;
                match &outcome {
                    Ok(()) => info!("Email capture submitted"),
                    Err(e) => error!("Form submission error: {}", e),
                }
                dispatcher.dispatch(CaptureAction::Finished(outcome));
            });
        })
    };

    let onclose = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CaptureAction::Dismiss))
    };

    let phase = if state.is_loading() {
        ButtonPhase::Loading
    } else {
        ButtonPhase::Idle
    };

    html! {
        <div
            id="emailCaptureBar"
            class="email-capture-bar"
            style={(!state.visible).then_some("display: none;")}
        >
            <p class="email-capture-copy">{"Private viewings and new collections, first."}</p>
            <form id="emailCaptureForm" class="email-capture-form" action={config::form_endpoint()} method="POST" {onsubmit}>
                <input
                    class="email-capture-input"
                    type="email"
                    name="email"
                    placeholder="Your email"
                    value={state.email.clone()}
                    {oninput}
                    required={true}
                />
                <LuxuryButton
                    class="email-capture-button"
                    button_type="submit"
                    label={state.label(BUTTON_LABEL).to_string()}
                    {phase}
                />
            </form>
            <button id="emailCaptureClose" class="email-capture-close" aria-label="Close" onclick={onclose}>
                {"×"}
            </button>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, EventInit, HtmlElement, KeyboardEventInit};

    use crate::effects::capture::ERROR_LABEL;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn mount() -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<EmailCaptureBar>::with_root(root.clone()).render();
        TimeoutFuture::new(20).await;
        root
    }

    fn find<T: JsCast>(root: &Element, selector: &str) -> T {
        root.query_selector(selector).unwrap().unwrap().unchecked_into()
    }

    fn is_hidden(root: &Element) -> bool {
        let bar: HtmlElement = find(root, "#emailCaptureBar");
        bar.style().get_property_value("display").unwrap() == "none"
    }

    fn label(root: &Element) -> String {
        let text: HtmlElement = find(root, ".email-capture-button .button-text");
        text.text_content().unwrap_or_default()
    }

    fn press_escape() {
        let init = KeyboardEventInit::new();
        init.set_key("Escape");
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        web_sys::window().unwrap().dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    async fn escape_hides_a_visible_bar() {
        let root = mount().await;
        assert!(!is_hidden(&root));

        press_escape();
        TimeoutFuture::new(20).await;
        assert!(is_hidden(&root));

        press_escape();
        TimeoutFuture::new(20).await;
        assert!(is_hidden(&root));
    }

    #[wasm_bindgen_test]
    async fn close_button_hides_the_bar() {
        let root = mount().await;
        find::<HtmlElement>(&root, "#emailCaptureClose").click();
        TimeoutFuture::new(20).await;
        assert!(is_hidden(&root));
    }

    #[wasm_bindgen_test]
    async fn empty_address_does_not_start_loading() {
        let root = mount().await;
        let input: HtmlInputElement = find(&root, ".email-capture-input");
        assert!(input.required());
        let form: web_sys::HtmlFormElement = find(&root, "#emailCaptureForm");
        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        form.dispatch_event(&web_sys::Event::new_with_event_init_dict("submit", &init).unwrap())
            .unwrap();
        TimeoutFuture::new(20).await;

        let button: HtmlElement = find(&root, ".email-capture-button");
        assert!(!button.class_list().contains("loading"));
        assert_eq!(label(&root), BUTTON_LABEL);
    }

    #[wasm_bindgen_test]
    async fn unreachable_endpoint_shows_the_error_label_then_restores_it() {
        let root = mount().await;
        let input: HtmlInputElement = find(&root, ".email-capture-input");
        input.set_value("ada@example.com");
        let init = EventInit::new();
        init.set_bubbles(true);
        input
            .dispatch_event(&web_sys::Event::new_with_event_init_dict("input", &init).unwrap())
            .unwrap();
        TimeoutFuture::new(20).await;

        find::<HtmlElement>(&root, ".email-capture-button").click();

        let mut waited = 0;
        while label(&root) != ERROR_LABEL && waited < 5_000 {
            TimeoutFuture::new(50).await;
            waited += 50;
        }
        assert_eq!(label(&root), ERROR_LABEL);
        assert_eq!(input.value(), "ada@example.com");

        TimeoutFuture::new(2_200).await;
        assert_eq!(label(&root), BUTTON_LABEL);
        assert!(!is_hidden(&root));
    }
}
