use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::effects::modal::{MaterialDetails, ModalAction, ModalState};

#[derive(Clone, PartialEq)]
pub struct Material {
    pub name: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

const CARD_SELECTOR: &str = ".clickable-material";

/// Reads the clicked card back out of the DOM, the same data a plain markup card would carry.
fn details_from_card(card: &Element) -> MaterialDetails {
    let image_src = card
        .query_selector(".material-image")
        .ok()
        .flatten()
        .and_then(|img| img.dyn_into::<HtmlImageElement>().ok())
        .map(|img| img.src());
    MaterialDetails::from_attributes(|name| card.get_attribute(name), image_src)
}

/// Finds the card a click landed in. Yew delegates events, so `currentTarget` is not the card.
fn clicked_card(e: &MouseEvent) -> Option<Element> {
    e.target_dyn_into::<Element>()?
        .closest(CARD_SELECTOR)
        .ok()
        .flatten()
}

fn lock_body_scroll(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let overflow = if locked { "hidden" } else { "" };
        if let Err(e) = body.style().set_property("overflow", overflow) {
            warn!("Could not set body overflow: {:?}", e);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MaterialGalleryProps {
    pub materials: Vec<Material>,
}

#[function_component(MaterialGallery)]
pub fn material_gallery(props: &MaterialGalleryProps) -> Html {
    let modal = use_reducer_eq(ModalState::default);
    let backdrop_ref = use_node_ref();

    {
        let modal = modal.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                modal.dispatch(ModalAction::Escape);
            }
        });
    }

    use_effect_with_deps(
        |active| {
            lock_body_scroll(*active);
            || ()
        },
        modal.active,
    );

    let open = {
        let modal = modal.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(card) = clicked_card(&e) else {
                return;
            };
            let details = details_from_card(&card);
            debug!("Opening material preview for {}", details.name);
            modal.dispatch(ModalAction::Open(details));
        })
    };

    let close = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.dispatch(ModalAction::Close))
    };

    let backdrop = {
        let modal = modal.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let on_backdrop = match (e.target_dyn_into::<Element>(), backdrop_ref.cast::<Element>()) {
                (Some(target), Some(backdrop)) => target == backdrop,
                _ => false,
            };
            modal.dispatch(ModalAction::Backdrop { on_backdrop });
        })
    };

    let details = &modal.details;

    html! {
        <>
            <div class="materials-grid">
                { for props.materials.iter().map(|m| html! {
                    <div
                        class="material-item clickable-material"
                        data-material={m.name}
                        data-type={m.kind}
                        data-description={m.description}
                        onclick={open.clone()}
                    >
                        <img class="material-image" src={m.image} alt={m.name} loading="lazy" />
                        <span class="material-name">{m.name}</span>
                    </div>
                }) }
            </div>

            <div
                ref={backdrop_ref}
                id="materialModal"
                class={classes!("material-modal", modal.active.then_some("active"))}
                onclick={backdrop}
            >
                <div class="modal-content">
                    <button id="modalClose" class="modal-close" aria-label="Close" onclick={close}>
                        {"×"}
                    </button>
                    <img
                        id="modalImage"
                        class="modal-image"
                        src={details.image_src.clone()}
                        alt={details.name.clone()}
                    />
                    <div class="modal-text">
                        <h3 id="modalMaterialName">{details.name.clone()}</h3>
                        <p id="modalMaterialType" class="modal-type">{details.kind.clone()}</p>
                        <p id="modalDescription">{details.description.clone()}</p>
                    </div>
                </div>
            </div>
        </>
    }
}

pub fn catalogue() -> Vec<Material> {
    vec![
        Material {
            name: "Duchess Satin",
            kind: "Silk",
            description: "A heavy, lustrous satin that holds sculpted bodices and long trains.",
            image: "/assets/materials/duchess-satin.jpg",
        },
        Material {
            name: "Chantilly Lace",
            kind: "Lace",
            description: "Fine bobbin lace with scalloped edges, appliquéd by hand.",
            image: "/assets/materials/chantilly-lace.jpg",
        },
        Material {
            name: "Silk Organza",
            kind: "Silk",
            description: "Sheer and crisp, used for structured overlays and volume.",
            image: "/assets/materials/silk-organza.jpg",
        },
        Material {
            name: "Irish Linen",
            kind: "Linen",
            description: "Breathable summer linen with a soft natural slub.",
            image: "/assets/materials/irish-linen.jpg",
        },
    ]
}
