//! Pointer sparkle trail bookkeeping.
//!
//! Randomness is passed in as `[0, 1)` rolls so the trail can be driven by
//! `Math.random()` in the browser and by fixed values in tests.

use std::collections::VecDeque;

use crate::config;

pub const PALETTE: [&str; 3] = ["#c7bd89", "#a36d61", "#928333"];
pub const DRIFT_SPREAD_PX: f64 = 50.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Sparkle {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub color: &'static str,
    /// Set once the sparkle starts flying off.
    pub drift: Option<(f64, f64)>,
}

impl Sparkle {
    pub fn style(&self) -> String {
        let mut style = format!(
            "left: {}px; top: {}px; background-color: {};",
            self.x, self.y, self.color
        );
        if let Some((dx, dy)) = self.drift {
            style.push_str(&format!(
                " transform: translate({}px, {}px) scale(0); opacity: 0;",
                dx, dy
            ));
        }
        style
    }
}

pub fn pick_color(roll: f64) -> &'static str {
    let index = (roll.clamp(0.0, 1.0) * PALETTE.len() as f64) as usize;
    PALETTE[index.min(PALETTE.len() - 1)]
}

pub fn drift_from(roll: f64) -> f64 {
    (roll - 0.5) * DRIFT_SPREAD_PX
}

#[derive(Debug)]
pub struct SparkleTrail {
    last_spawn_ms: Option<f64>,
    live: VecDeque<Sparkle>,
    next_id: u64,
    capacity: usize,
}

impl Default for SparkleTrail {
    fn default() -> Self {
        Self::with_capacity(config::MAX_LIVE_SPARKLES)
    }
}

impl SparkleTrail {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            last_spawn_ms: None,
            live: VecDeque::with_capacity(capacity),
            next_id: 0,
            capacity: capacity.max(1),
        }
    }

    /// Spawns a sparkle unless one was spawned within the throttle interval.
    pub fn try_spawn(&mut self, now_ms: f64, x: f64, y: f64, color_roll: f64) -> Option<u64> {
        if let Some(last) = self.last_spawn_ms {
            if now_ms - last <= config::SPARKLE_INTERVAL_MS {
                return None;
            }
        }
        self.last_spawn_ms = Some(now_ms);

        if self.live.len() >= self.capacity {
            self.live.pop_front();
        }

        let id = self.next_id;
        self.next_id += 1;
        self.live.push_back(Sparkle {
            id,
            x,
            y,
            color: pick_color(color_roll),
            drift: None,
        });
        Some(id)
    }

    /// Starts the fly-off animation. False if the sparkle is already gone.
    pub fn settle(&mut self, id: u64, dx_roll: f64, dy_roll: f64) -> bool {
        match self.live.iter_mut().find(|s| s.id == id) {
            Some(sparkle) => {
                sparkle.drift = Some((drift_from(dx_roll), drift_from(dy_roll)));
                true
            }
            None => false,
        }
    }

    pub fn retire(&mut self, id: u64) -> bool {
        let before = self.live.len();
        self.live.retain(|s| s.id != id);
        self.live.len() != before
    }

    pub fn live(&self) -> impl Iterator<Item = &Sparkle> {
        self.live.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_move_always_spawns() {
        let mut trail = SparkleTrail::default();
        assert_eq!(trail.try_spawn(0.0, 10.0, 20.0, 0.0), Some(0));
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn spawns_are_throttled_to_one_per_fifty_ms() {
        let mut trail = SparkleTrail::default();
        assert!(trail.try_spawn(1_000.0, 0.0, 0.0, 0.1).is_some());
        assert!(trail.try_spawn(1_020.0, 0.0, 0.0, 0.1).is_none());
        assert!(trail.try_spawn(1_050.0, 0.0, 0.0, 0.1).is_none());
        assert!(trail.try_spawn(1_051.0, 0.0, 0.0, 0.1).is_some());
        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn retired_sparkles_leave_the_tracking_list() {
        let mut trail = SparkleTrail::default();
        let a = trail.try_spawn(0.0, 1.0, 1.0, 0.0).unwrap();
        let b = trail.try_spawn(100.0, 2.0, 2.0, 0.5).unwrap();
        assert!(trail.retire(a));
        assert!(!trail.retire(a));
        let ids: Vec<u64> = trail.live().map(|s| s.id).collect();
        assert_eq!(ids, vec![b]);
        assert!(trail.retire(b));
        assert!(trail.is_empty());
    }

    #[test]
    fn settle_sets_drift_within_spread() {
        let mut trail = SparkleTrail::default();
        let id = trail.try_spawn(0.0, 5.0, 6.0, 0.9).unwrap();
        assert!(trail.settle(id, 0.0, 0.75));
        let sparkle = trail.live().next().unwrap();
        assert_eq!(sparkle.drift, Some((-25.0, 12.5)));
        assert!(sparkle.style().contains("translate(-25px, 12.5px) scale(0)"));
        assert!(sparkle.style().contains("opacity: 0"));
        assert!(!trail.settle(id + 1, 0.5, 0.5));
    }

    #[test]
    fn colors_come_from_the_palette() {
        assert_eq!(pick_color(0.0), "#c7bd89");
        assert_eq!(pick_color(0.5), "#a36d61");
        assert_eq!(pick_color(0.99), "#928333");
        assert_eq!(pick_color(1.0), "#928333");
    }

    #[test]
    fn oldest_sparkle_is_evicted_at_capacity() {
        let mut trail = SparkleTrail::with_capacity(2);
        trail.try_spawn(0.0, 0.0, 0.0, 0.0);
        trail.try_spawn(100.0, 0.0, 0.0, 0.0);
        trail.try_spawn(200.0, 0.0, 0.0, 0.0);
        let ids: Vec<u64> = trail.live().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn fresh_sparkle_is_positioned_at_the_pointer() {
        let mut trail = SparkleTrail::default();
        trail.try_spawn(0.0, 40.0, 75.0, 0.0);
        let style = trail.live().next().unwrap().style();
        assert_eq!(style, "left: 40px; top: 75px; background-color: #c7bd89;");
    }
}
