use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::effects::anchor::anchor_target;
use crate::effects::motion::HeaderTone;

const NAV_LINKS: [(&str, &str); 5] = [
    ("#about", "Atelier"),
    ("#services", "Services"),
    ("#materials", "Materials"),
    ("#process", "Process"),
    ("#contact", "Contact"),
];

/// Smoothly scrolls to the element an `#anchor` link points at.
pub fn scroll_to_anchor(href: &str) {
    let Some(id) = anchor_target(href) else {
        return;
    };
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match target {
        Some(target) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => debug!("No element for anchor {}", href),
    }
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_anchor(&href);
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[function_component(LuxuryHeader)]
pub fn luxury_header() -> Html {
    let tone = use_state_eq(HeaderTone::default);

    {
        let tone = tone.clone();
        use_event_with_window("scroll", move |_: Event| {
            let scrolled = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            tone.set(HeaderTone::for_scroll(scrolled));
        });
    }

    html! {
        <header class="luxury-header" style={tone.style()}>
            <div class="header-inner">
                <AnchorLink href="#top" class="header-logo">{"Maison Lumière"}</AnchorLink>
                <nav class="header-nav">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <AnchorLink href={*href} class="header-link">{*label}</AnchorLink>
                    }) }
                </nav>
            </div>
        </header>
    }
}
