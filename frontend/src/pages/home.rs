use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::contact_form::ContactForm;
use crate::components::email_capture::EmailCaptureBar;
use crate::components::header::{AnchorLink, LuxuryHeader};
use crate::components::hero::Hero;
use crate::components::loader::Loader;
use crate::components::luxury_button::LuxuryButton;
use crate::components::material_modal::{catalogue, MaterialGallery};
use crate::components::reveal::use_reveal_on_view;
use crate::components::sparkle_trail::SparkleTrail;

const SERVICES: [(&str, &str); 3] = [
    ("Bridal", "Gowns drafted from your measurements and fitted over three sessions."),
    ("Evening", "Occasion wear in silk, velvet and hand-beaded tulle."),
    ("Bespoke Tailoring", "Suits and separates cut from a personal block pattern."),
];

const PACKAGES: [(&str, &str, &str); 3] = [
    ("Atelier", "from €2,400", "One garment, two fittings, a single fabric consultation."),
    ("Signature", "from €4,800", "Full design process with sketches, toile and three fittings."),
    ("Heirloom", "by enquiry", "Hand embroidery, archival materials and lifetime alterations."),
];

const PROCESS: [(&str, &str); 4] = [
    ("Consultation", "We talk through the occasion, the silhouette and your references."),
    ("Design", "Sketches and material swatches, refined until they feel right."),
    ("Toile", "A calico mock-up is fitted and adjusted on you."),
    ("Finishing", "The final garment is cut, sewn and finished by hand."),
];

const TESTIMONIALS: [(&str, &str); 2] = [
    ("The dress moved exactly the way I imagined it would.", "Clara, June bride"),
    ("Every fitting felt unhurried. The finish is extraordinary.", "Hélène, evening client"),
];

#[function_component(Home)]
pub fn home() -> Html {
    let ready = use_state(|| false);

    let on_ready = {
        let ready = ready.clone();
        Callback::from(move |_| ready.set(true))
    };

    use_reveal_on_view(*ready);

    html! {
        <div class="landing-page">
            <style>{PAGE_CSS}</style>
            <Loader {on_ready} />
            <LuxuryHeader />
            <Hero animate={*ready} />

            <section id="about" class="about-section">
                <div class="flower" aria-hidden="true"></div>
                <h2 class="section-title">{"The Atelier"}</h2>
                <p class="section-text">
                    {"A small studio where every garment is drafted, cut and finished under one roof. \
                      We work with a handful of clients each season so that nothing is rushed."}
                </p>
            </section>

            <section id="services" class="services-section">
                <h2 class="section-title">{"Services"}</h2>
                <div class="card-grid">
                    { for SERVICES.iter().map(|(title, text)| html! {
                        <article class="service-card">
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </article>
                    }) }
                </div>
                <div class="card-grid">
                    { for PACKAGES.iter().map(|(name, price, text)| html! {
                        <article class="package-card">
                            <h3>{*name}</h3>
                            <p class="package-price">{*price}</p>
                            <p>{*text}</p>
                            <LuxuryButton href="#contact" label="Enquire" />
                        </article>
                    }) }
                </div>
            </section>

            <section id="materials" class="materials-section">
                <h2 class="section-title">{"Materials"}</h2>
                <p class="section-text">{"Select a swatch to see it up close."}</p>
                <MaterialGallery materials={catalogue()} />
            </section>

            <section id="process" class="process-section">
                <h2 class="section-title">{"Process"}</h2>
                <ol class="process-steps">
                    { for PROCESS.iter().enumerate().map(|(i, (title, text))| html! {
                        <li class="process-step">
                            <span class="step-number">{format!("{:02}", i + 1)}</span>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </li>
                    }) }
                </ol>
            </section>

            <section class="testimonials-section">
                { for TESTIMONIALS.iter().map(|(quote, who)| html! {
                    <blockquote class="testimonial-card">
                        <p>{*quote}</p>
                        <cite>{*who}</cite>
                    </blockquote>
                }) }
            </section>

            <section class="submissions-section">
                <h2 class="section-title">{"Press & Submissions"}</h2>
                <p class="section-text">{"Editorial and styling requests are reviewed every month."}</p>
                <LuxuryButton href="#" label="Request a Lookbook" />
            </section>

            <section class="cta-section">
                <div class="cta-content">
                    <h2>{"Begin your commission"}</h2>
                    <AnchorLink href="#contact" class="cta-link">{"Book a consultation"}</AnchorLink>
                </div>
            </section>

            <section id="contact" class="contact-section">
                <h2 class="section-title">{"Contact"}</h2>
                <ContactForm />
            </section>

            <footer class="luxury-footer">
                <p>{"© Maison Lumière"}</p>
            </footer>

            <EmailCaptureBar />
            if *ready {
                <>
                    <SparkleTrail />
                    <BackToTop />
                </>
            }
        </div>
    }
}

const PAGE_CSS: &str = r#"
.landing-page {
    background: #faf4dc;
    color: #2b2620;
    font-family: "Cormorant Garamond", Georgia, serif;
}
.luxury-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 100;
    transition: background 0.3s ease, box-shadow 0.3s ease;
}
.header-inner {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1rem 2rem;
}
.header-nav { display: flex; gap: 1.5rem; }
.header-link, .header-logo { color: inherit; text-decoration: none; }
.hero-section {
    position: relative;
    height: 100vh;
    overflow: hidden;
}
.hero-layers img {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
}
.hero-back { will-change: transform; }
.circular-container {
    position: absolute;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%);
    text-align: center;
}
.section-title, .section-text, .service-card, .package-card,
.process-step, .testimonial-card, .cta-content, .submissions-section {
    opacity: 0;
    transform: translateY(40px);
    transition: opacity 0.8s ease, transform 0.8s ease;
}
.in-view {
    opacity: 1;
    transform: translateY(0);
}
.about-section .flower {
    width: 120px;
    height: 120px;
    margin: 0 auto;
    transform: scale(0.6) rotate(-20deg);
    opacity: 0;
    transition: transform 1.2s ease, opacity 1.2s ease;
}
.about-section.flower-visible .flower {
    transform: scale(1) rotate(0);
    opacity: 1;
}
.card-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 2rem;
}
.luxury-button {
    position: relative;
    overflow: hidden;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    padding: 0.9rem 2.2rem;
    border: 1px solid #928333;
    background: transparent;
    color: #2b2620;
    cursor: pointer;
}
.luxury-button .loading-text,
.luxury-button .loading-progress { display: none; }
.luxury-button.loading .button-text { visibility: hidden; }
.luxury-button.loading .loading-text { display: inline; position: absolute; }
.luxury-button.loading .loading-progress {
    display: block;
    position: absolute;
    bottom: 0;
    left: 0;
    height: 2px;
    background: #928333;
    animation: progress 1.5s linear forwards;
}
.luxury-button.success { background: #c7bd89; }
.luxury-button.disabled { opacity: 0.5; cursor: default; }
@keyframes progress {
    from { width: 0; }
    to { width: 100%; }
}
.materials-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
    gap: 1.5rem;
}
.clickable-material { cursor: pointer; }
.material-image { width: 100%; aspect-ratio: 1; object-fit: cover; }
.material-modal {
    position: fixed;
    inset: 0;
    z-index: 500;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(43, 38, 32, 0.7);
    opacity: 0;
    visibility: hidden;
    transition: opacity 0.3s ease, visibility 0.3s ease;
}
.material-modal.active { opacity: 1; visibility: visible; }
.modal-content {
    position: relative;
    display: flex;
    gap: 2rem;
    max-width: 820px;
    padding: 2rem;
    background: #faf4dc;
}
.modal-image { width: 50%; object-fit: cover; }
.modal-close {
    position: absolute;
    top: 0.5rem;
    right: 0.75rem;
    border: none;
    background: none;
    font-size: 1.6rem;
    cursor: pointer;
}
.back-to-top {
    position: fixed;
    right: 2rem;
    bottom: 6rem;
    width: 3rem;
    height: 3rem;
    border: 1px solid #928333;
    background: #faf4dc;
    opacity: 0;
    visibility: hidden;
    transition: opacity 0.3s ease, visibility 0.3s ease;
}
.back-to-top.visible { opacity: 1; visibility: visible; }
.email-capture-bar {
    position: fixed;
    left: 0;
    right: 0;
    bottom: 0;
    z-index: 200;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 1.5rem;
    padding: 0.9rem 3rem;
    background: #2b2620;
    color: #faf4dc;
}
.email-capture-form { display: flex; gap: 0.75rem; }
.email-capture-close {
    position: absolute;
    right: 1rem;
    border: none;
    background: none;
    color: inherit;
    font-size: 1.4rem;
    cursor: pointer;
}
.contact-form {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    max-width: 640px;
    margin: 0 auto;
}
.form-row { display: flex; gap: 1rem; }
@media (max-width: 768px) {
    .header-nav { display: none; }
    .modal-content { flex-direction: column; }
    .modal-image { width: 100%; }
    .email-capture-bar { flex-direction: column; padding: 1rem; }
}
"#;
