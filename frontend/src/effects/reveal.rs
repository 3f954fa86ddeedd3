use std::collections::HashSet;
use std::hash::Hash;

/// Attribute carrying the per-observer index of an observed element.
pub const REVEAL_KEY_ATTR: &str = "data-reveal-key";

/// One intersection observer: which elements, when, and what class they get.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealRule {
    pub selector: &'static str,
    pub threshold: f64,
    pub root_margin: &'static str,
    pub class: &'static str,
}

pub const CONTENT_BLOCKS: RevealRule = RevealRule {
    selector: ".section-title, .section-text, .service-card, .package-card, .process-step, .testimonial-card, .cta-content, .submissions-section",
    threshold: 0.1,
    root_margin: "0px 0px -100px 0px",
    class: "in-view",
};

pub const FLOWER: RevealRule = RevealRule {
    selector: ".about-section",
    threshold: 0.3,
    root_margin: "0px",
    class: "flower-visible",
};

/// Remembers which elements were revealed. Reveals are one-way.
#[derive(Debug)]
pub struct RevealLedger<K> {
    revealed: HashSet<K>,
}

impl<K> Default for RevealLedger<K> {
    fn default() -> Self {
        Self { revealed: HashSet::new() }
    }
}

impl<K: Eq + Hash> RevealLedger<K> {
    /// Records a reveal. True only the first time a key is seen.
    pub fn mark(&mut self, key: K) -> bool {
        self.revealed.insert(key)
    }

    #[cfg(test)]
    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_is_revealed_exactly_once() {
        let mut ledger = RevealLedger::default();
        assert!(ledger.mark(3u32));
        assert!(!ledger.mark(3));
        assert!(!ledger.mark(3));
        assert!(ledger.is_revealed(&3));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn elements_are_tracked_independently() {
        let mut ledger = RevealLedger::default();
        assert!(ledger.mark(1u32));
        assert!(!ledger.is_revealed(&2));
        assert!(ledger.mark(2));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn observers_use_their_own_thresholds() {
        assert_eq!(CONTENT_BLOCKS.threshold, 0.1);
        assert_eq!(CONTENT_BLOCKS.root_margin, "0px 0px -100px 0px");
        assert_eq!(FLOWER.threshold, 0.3);
        assert_eq!(FLOWER.class, "flower-visible");
        assert!(CONTENT_BLOCKS.selector.split(", ").any(|s| s == ".testimonial-card"));
    }
}
