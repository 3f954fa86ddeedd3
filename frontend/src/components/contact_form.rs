use gloo_console::log;
use log::warn;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::components::luxury_button::LuxuryButton;
use crate::effects::contact::{ContactMessage, THANK_YOU};

const SERVICES: [&str; 4] = ["Bridal", "Evening", "Bespoke Tailoring", "Alterations"];

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form_ref = use_node_ref();

    let onsubmit = {
        let form_ref = form_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };

            let data = match FormData::new_with_form(&form) {
                Ok(data) => data,
                Err(e) => {
                    warn!("Could not read contact form: {:?}", e);
                    return;
                }
            };
            let message = ContactMessage::from_fields(|name| data.get(name).as_string());

            // Enquiries are only logged for now; there is no inbox to deliver them to.
            match serde_json::to_string(&message) {
                Ok(json) => log!("Form submitted:", json),
                Err(e) => warn!("Could not serialize contact form: {}", e),
            }

            if let Some(window) = web_sys::window() {
                if let Err(e) = window.alert_with_message(THANK_YOU) {
                    warn!("Could not show contact confirmation: {:?}", e);
                }
            }
            form.reset();
        })
    };

    html! {
        <form id="contactForm" class="contact-form" ref={form_ref} {onsubmit}>
            <div class="form-row">
                <input type="text" name="name" placeholder="Name" required={true} />
                <input type="email" name="email" placeholder="Email" required={true} />
            </div>
            <select name="service">
                <option value="">{"Select a service"}</option>
                { for SERVICES.iter().map(|service| html! {
                    <option value={*service}>{*service}</option>
                }) }
            </select>
            <textarea name="message" rows="5" placeholder="Tell us about your occasion"></textarea>
            <LuxuryButton button_type="submit" label="Send Enquiry" />
        </form>
    }
}
