use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::header::scroll_to_anchor;
use crate::effects::button::{classify_click, ButtonPhase, ClickAction};

#[derive(Properties, PartialEq)]
pub struct LuxuryButtonProps {
    pub label: AttrValue,
    /// Renders an anchor instead of a button.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// When set, the parent drives the phase and clicks do not start a cycle.
    #[prop_or_default]
    pub phase: Option<ButtonPhase>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(LuxuryButton)]
pub fn luxury_button(props: &LuxuryButtonProps) -> Html {
    let own_phase = use_state_eq(ButtonPhase::default);

    {
        let setter = own_phase.setter();
        use_effect_with_deps(
            move |phase: &ButtonPhase| {
                let next = phase.next();
                let timeout = phase
                    .hold_ms()
                    .map(|ms| Timeout::new(ms, move || setter.set(next)));
                move || drop(timeout)
            },
            *own_phase,
        );
    }

    let phase = props.phase.unwrap_or(*own_phase);
    let controlled = props.phase.is_some();

    let onclick = {
        let own_phase = own_phase.clone();
        let href = props.href.clone();
        let disabled = props.disabled;
        let onclick = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if !controlled {
                match classify_click(disabled, href.as_deref(), *own_phase) {
                    ClickAction::Ignore => return,
                    ClickAction::Navigate => {}
                    ClickAction::ScrollTo => {
                        e.prevent_default();
                        if let Some(href) = href.as_deref() {
                            scroll_to_anchor(href);
                        }
                    }
                    ClickAction::Animate { prevent_default } => {
                        if prevent_default {
                            e.prevent_default();
                        }
                        own_phase.set(ButtonPhase::Loading);
                    }
                }
            }
            onclick.emit(e);
        })
    };

    let class = classes!(
        "luxury-button",
        props.class.clone(),
        phase.class(),
        props.disabled.then_some("disabled")
    );

    let inner = html! {
        <>
            <span class="button-text">{props.label.clone()}</span>
            <span class="loading-text">{"Loading"}</span>
            <span class="loading-progress"></span>
            <span class="sparkle-1"></span>
            <span class="sparkle-2"></span>
            <span class="sparkle-3"></span>
        </>
    };

    match &props.href {
        Some(href) => html! {
            <a href={href.clone()} {class} {onclick} aria-disabled={props.disabled.to_string()}>
                { inner }
            </a>
        },
        None => html! {
            <button type={props.button_type.clone()} {class} {onclick} disabled={props.disabled}>
                { inner }
            </button>
        },
    }
}
