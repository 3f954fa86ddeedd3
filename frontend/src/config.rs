
#[cfg(debug_assertions)]
pub fn form_endpoint() -> &'static str {
    // Local form sink when running with `trunk serve`
    option_env!("FORM_ENDPOINT").unwrap_or("http://localhost:3001/f/newsletter")
}

#[cfg(not(debug_assertions))]
pub fn form_endpoint() -> &'static str {
    option_env!("FORM_ENDPOINT").unwrap_or("https://formspree.io/f/newsletter")
}

// Page lifecycle
pub const LOADER_DELAY_MS: u32 = 1_500;

// Hero parallax and header
pub const PARALLAX_FACTOR: f64 = 0.1;
pub const PARALLAX_MAX_PX: f64 = 50.0;
pub const HERO_FADE_SPAN: f64 = 0.5; // fraction of the viewport height
pub const HEADER_SOLID_AFTER_PX: f64 = 100.0;
pub const BACK_TO_TOP_AFTER_PX: f64 = 300.0;

// Sparkle trail
pub const SPARKLE_INTERVAL_MS: f64 = 50.0;
pub const SPARKLE_SETTLE_MS: u32 = 10;
pub const SPARKLE_LIFETIME_MS: u32 = 600;
pub const MAX_LIVE_SPARKLES: usize = 16;

// Luxury buttons
pub const BUTTON_LOADING_MS: u32 = 1_500;
pub const BUTTON_SUCCESS_MS: u32 = 800;

// Email capture
pub const JOINED_LABEL_MS: u32 = 1_500;
pub const ERROR_LABEL_MS: u32 = 2_000;

pub const HERO_IMAGES: [&str; 3] = [
    "/assets/hero-back.png",
    "/assets/hero-front.png",
    "/assets/hero-crown.png",
];
