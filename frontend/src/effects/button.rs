use crate::config;
use crate::effects::anchor::anchor_target;

/// Visual cycle of a luxury button: idle, loading, success, back to idle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonPhase {
    #[default]
    Idle,
    Loading,
    Success,
}

impl ButtonPhase {
    pub fn class(self) -> Option<&'static str> {
        match self {
            ButtonPhase::Idle => None,
            ButtonPhase::Loading => Some("loading"),
            ButtonPhase::Success => Some("success"),
        }
    }

    pub fn next(self) -> Self {
        match self {
            ButtonPhase::Idle => ButtonPhase::Idle,
            ButtonPhase::Loading => ButtonPhase::Success,
            ButtonPhase::Success => ButtonPhase::Idle,
        }
    }

    /// How long the phase is held before moving on. Idle is held forever.
    pub fn hold_ms(self) -> Option<u32> {
        match self {
            ButtonPhase::Idle => None,
            ButtonPhase::Loading => Some(config::BUTTON_LOADING_MS),
            ButtonPhase::Success => Some(config::BUTTON_SUCCESS_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickAction {
    /// Disabled, or a cycle is already running.
    Ignore,
    /// A real link; let the browser follow it.
    Navigate,
    /// An in-page `#section` link, scrolled to smoothly instead of jumped to.
    ScrollTo,
    Animate { prevent_default: bool },
}

pub fn classify_click(disabled: bool, href: Option<&str>, phase: ButtonPhase) -> ClickAction {
    if disabled || phase != ButtonPhase::Idle {
        return ClickAction::Ignore;
    }
    match href {
        Some("#") => ClickAction::Animate { prevent_default: true },
        Some(href) if anchor_target(href).is_some() => ClickAction::ScrollTo,
        Some(href) if !href.is_empty() => ClickAction::Navigate,
        _ => ClickAction::Animate { prevent_default: false },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_runs_idle_loading_success_idle() {
        let mut phase = ButtonPhase::Loading;
        let mut seen = vec![phase];
        while phase.hold_ms().is_some() {
            phase = phase.next();
            seen.push(phase);
        }
        assert_eq!(
            seen,
            vec![ButtonPhase::Loading, ButtonPhase::Success, ButtonPhase::Idle]
        );
    }

    #[test]
    fn phases_hold_for_fixed_durations() {
        assert_eq!(ButtonPhase::Loading.hold_ms(), Some(1_500));
        assert_eq!(ButtonPhase::Success.hold_ms(), Some(800));
        assert_eq!(ButtonPhase::Idle.hold_ms(), None);
    }

    #[test]
    fn phase_classes() {
        assert_eq!(ButtonPhase::Idle.class(), None);
        assert_eq!(ButtonPhase::Loading.class(), Some("loading"));
        assert_eq!(ButtonPhase::Success.class(), Some("success"));
    }

    #[test]
    fn disabled_buttons_never_animate() {
        assert_eq!(classify_click(true, None, ButtonPhase::Idle), ClickAction::Ignore);
        assert_eq!(classify_click(true, Some("#"), ButtonPhase::Idle), ClickAction::Ignore);
    }

    #[test]
    fn navigation_links_are_left_alone() {
        assert_eq!(
            classify_click(false, Some("/collections"), ButtonPhase::Idle),
            ClickAction::Navigate
        );
    }

    #[test]
    fn section_links_scroll_instead_of_jumping() {
        assert_eq!(
            classify_click(false, Some("#contact"), ButtonPhase::Idle),
            ClickAction::ScrollTo
        );
        assert_eq!(
            classify_click(true, Some("#contact"), ButtonPhase::Idle),
            ClickAction::Ignore
        );
    }

    #[test]
    fn hash_links_prevent_default_and_animate() {
        assert_eq!(
            classify_click(false, Some("#"), ButtonPhase::Idle),
            ClickAction::Animate { prevent_default: true }
        );
        assert_eq!(
            classify_click(false, None, ButtonPhase::Idle),
            ClickAction::Animate { prevent_default: false }
        );
        assert_eq!(
            classify_click(false, Some(""), ButtonPhase::Idle),
            ClickAction::Animate { prevent_default: false }
        );
    }

    #[test]
    fn clicks_during_a_cycle_are_ignored() {
        assert_eq!(classify_click(false, None, ButtonPhase::Loading), ClickAction::Ignore);
        assert_eq!(classify_click(false, None, ButtonPhase::Success), ClickAction::Ignore);
    }
}
