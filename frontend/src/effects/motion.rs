//! Scroll driven geometry for the hero, the header and the back-to-top control.

use crate::config;

/// How far the hero background has moved up, in pixels.
pub fn parallax_offset(scrolled: f64) -> f64 {
    (scrolled.max(0.0) * config::PARALLAX_FACTOR).min(config::PARALLAX_MAX_PX)
}

/// Opacity of the circular hero text. Reaches zero after half a viewport of scrolling.
pub fn hero_opacity(scrolled: f64, viewport_height: f64) -> f64 {
    let span = viewport_height * config::HERO_FADE_SPAN;
    if span <= 0.0 {
        return if scrolled > 0.0 { 0.0 } else { 1.0 };
    }
    (1.0 - scrolled / span).clamp(0.0, 1.0)
}

pub fn back_to_top_visible(scrolled: f64) -> bool {
    scrolled > config::BACK_TO_TOP_AFTER_PX
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroFrame {
    pub offset: f64,
    pub opacity: f64,
}

impl HeroFrame {
    pub fn at(scrolled: f64, viewport_height: f64) -> Self {
        Self {
            offset: parallax_offset(scrolled),
            opacity: hero_opacity(scrolled, viewport_height),
        }
    }

    pub fn transform(&self) -> String {
        format!("translateY(-{}px)", self.offset)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HeaderTone {
    #[default]
    Translucent,
    Solid,
}

impl HeaderTone {
    pub fn for_scroll(scrolled: f64) -> Self {
        if scrolled > config::HEADER_SOLID_AFTER_PX {
            HeaderTone::Solid
        } else {
            HeaderTone::Translucent
        }
    }

    pub fn style(self) -> &'static str {
        match self {
            HeaderTone::Solid => {
                "background: rgba(250, 244, 220, 0.98); box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1);"
            }
            HeaderTone::Translucent => "background: rgba(250, 244, 220, 0.95); box-shadow: none;",
        }
    }
}

/// Coalesces bursts of scroll events into a single animation frame.
#[derive(Debug, Default)]
pub struct FrameGate {
    ticking: bool,
}

impl FrameGate {
    /// Returns true when the caller should request a frame.
    pub fn request(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    pub fn complete(&mut self) {
        self.ticking = false;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.ticking
    }
}
