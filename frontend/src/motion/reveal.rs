//! One-shot scroll reveal bookkeeping.
//!
//! The engine knows nothing about the DOM: the observer glue in
//! `components::reveal` reports intersection ratios and scroll samples, and
//! applies whatever [`RevealStyle`] comes back. A target moves from hidden to
//! visible at most once.

use std::collections::HashMap;

use super::velocity::ScrollVelocity;

/// Minimum intersection ratio that counts as "in view".
pub const REVEAL_THRESHOLD: f64 = 0.12;

const SLOW_DURATION_MS: f64 = 900.0;
const FAST_DURATION_MS: f64 = 350.0;
const SLOW_OFFSET_PX: f64 = 24.0;
const FAST_OFFSET_PX: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(usize);

impl TargetId {
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse().ok().map(TargetId)
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a target animates in, fixed at the moment it is revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub duration_ms: u32,
    pub offset_px: f64,
}

impl RevealStyle {
    /// Used when there is nothing to animate against (no observer support).
    pub const INSTANT: RevealStyle = RevealStyle { duration_ms: 0, offset_px: 0.0 };

    /// Slower scrolling gets a longer, taller rise.
    pub fn for_intensity(intensity: f64) -> Self {
        let t = intensity.clamp(0.0, 1.0);
        let duration = SLOW_DURATION_MS + (FAST_DURATION_MS - SLOW_DURATION_MS) * t;
        let offset = SLOW_OFFSET_PX + (FAST_OFFSET_PX - SLOW_OFFSET_PX) * t;
        Self {
            duration_ms: duration.round() as u32,
            offset_px: offset,
        }
    }

    pub fn css(&self) -> String {
        if self.duration_ms == 0 {
            return "animation: none; opacity: 1; transform: none;".to_string();
        }
        format!(
            "--reveal-offset: {:.1}px; animation: reveal-rise {}ms cubic-bezier(0.22, 1, 0.36, 1) both;",
            self.offset_px, self.duration_ms
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealTarget {
    style: Option<RevealStyle>,
}

impl RevealTarget {
    /// `Some` once revealed, and never cleared afterwards.
    pub fn style(&self) -> Option<RevealStyle> {
        self.style
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealEngine {
    targets: HashMap<TargetId, RevealTarget>,
    next_id: usize,
    velocity: ScrollVelocity,
    observing: bool,
}

impl RevealEngine {
    pub fn new() -> Self {
        Self {
            targets: HashMap::new(),
            next_id: 0,
            velocity: ScrollVelocity::new(),
            observing: true,
        }
    }

    /// Engine for a browser without `IntersectionObserver`: every target is
    /// shown the moment it registers.
    pub fn without_observer() -> Self {
        Self {
            observing: false,
            ..Self::new()
        }
    }

    /// Ids are never reused, so a stale report for a forgotten target is
    /// simply ignored.
    pub fn register(&mut self) -> TargetId {
        let id = TargetId(self.next_id);
        self.next_id += 1;
        let style = if self.observing { None } else { Some(RevealStyle::INSTANT) };
        self.targets.insert(id, RevealTarget { style });
        id
    }

    /// Drops a target whose element has unmounted.
    pub fn forget(&mut self, id: TargetId) -> Option<RevealTarget> {
        self.targets.remove(&id)
    }

    pub fn record_scroll(&mut self, position: f64, at_ms: f64) {
        self.velocity.sample(position, at_ms);
    }

    /// Returns the style to apply when this report reveals the target. The
    /// caller should stop observing it at that point. Already visible or
    /// unknown targets, and ratios under the threshold, yield `None`.
    pub fn on_intersection(&mut self, id: TargetId, ratio: f64) -> Option<RevealStyle> {
        let style = RevealStyle::for_intensity(self.velocity.intensity());
        let target = self.targets.get_mut(&id)?;
        if target.style.is_some() || !(ratio >= REVEAL_THRESHOLD) {
            return None;
        }
        target.style = Some(style);
        Some(style)
    }

    pub fn target(&self, id: TargetId) -> Option<&RevealTarget> {
        self.targets.get(&id)
    }
}

impl Default for RevealEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(engine: &RevealEngine, id: TargetId) -> bool {
        engine.target(id).and_then(RevealTarget::style).is_some()
    }

    #[test]
    fn targets_start_hidden() {
        let mut engine = RevealEngine::new();
        let id = engine.register();
        assert!(!visible(&engine, id));
        assert_eq!(engine.target(id).and_then(|t| t.style()), None);
    }

    #[test]
    fn below_threshold_keeps_target_hidden() {
        let mut engine = RevealEngine::new();
        let id = engine.register();
        assert_eq!(engine.on_intersection(id, 0.05), None);
        assert_eq!(engine.on_intersection(id, f64::NAN), None);
        assert!(!visible(&engine, id));
    }

    #[test]
    fn reveals_exactly_once() {
        let mut engine = RevealEngine::new();
        let id = engine.register();
        let first = engine.on_intersection(id, 0.5);
        assert!(first.is_some());
        assert!(visible(&engine, id));

        // Scrolling away and back never produces a second reveal or hides it.
        assert_eq!(engine.on_intersection(id, 0.0), None);
        assert_eq!(engine.on_intersection(id, 1.0), None);
        assert!(visible(&engine, id));
        assert_eq!(engine.target(id).and_then(|t| t.style()), first);
    }

    #[test]
    fn visibility_is_monotonic_over_any_sequence() {
        let mut engine = RevealEngine::new();
        let ids: Vec<_> = (0..4).map(|_| engine.register()).collect();
        let ratios: [f64; 8] = [0.0, 0.3, 0.01, 0.9, 0.0, 0.12, 0.11, 1.0];
        let mut seen_visible = vec![false; ids.len()];
        let mut reveal_counts = vec![0; ids.len()];

        for (step, ratio) in ratios.iter().enumerate() {
            for (i, id) in ids.iter().enumerate() {
                let shifted = ratios[(step + i) % ratios.len()].min(*ratio + 0.5);
                if engine.on_intersection(*id, shifted).is_some() {
                    reveal_counts[i] += 1;
                }
                let now_visible = visible(&engine, *id);
                assert!(!(seen_visible[i] && !now_visible), "target {i} was hidden again");
                seen_visible[i] = now_visible;
            }
        }
        assert!(reveal_counts.iter().all(|count| *count <= 1));
    }

    #[test]
    fn without_observer_everything_is_visible_on_register() {
        let mut engine = RevealEngine::without_observer();
        let ids: Vec<_> = (0..3).map(|_| engine.register()).collect();
        assert!(ids.iter().all(|id| visible(&engine, *id)));
        assert_eq!(
            engine.target(ids[0]).and_then(|t| t.style()),
            Some(RevealStyle::INSTANT)
        );
    }

    #[test]
    fn forgotten_targets_are_released_and_ids_not_reused() {
        let mut engine = RevealEngine::new();
        let first = engine.register();
        let second = engine.register();

        assert!(engine.forget(first).is_some());
        assert!(engine.target(first).is_none());
        assert!(engine.forget(first).is_none());
        assert_eq!(engine.on_intersection(first, 1.0), None);

        let third = engine.register();
        assert_ne!(third, first);
        assert_ne!(third, second);
        assert!(engine.target(second).is_some());
    }

    #[test]
    fn mount_and_unmount_cycles_do_not_accumulate() {
        let mut engine = RevealEngine::new();
        let mut last = None;
        for _ in 0..1000 {
            let id = engine.register();
            engine.on_intersection(id, 1.0);
            engine.forget(id);
            last = Some(id);
        }
        assert_eq!(engine.targets.len(), 0);
        assert_eq!(last, Some(TargetId(999)));
    }

    #[test]
    fn fast_scrolling_shortens_the_animation() {
        let mut idle = RevealEngine::new();
        let slow_id = idle.register();
        let slow = idle.on_intersection(slow_id, 1.0).unwrap();
        assert_eq!(slow.duration_ms, 900);
        assert_eq!(slow.offset_px, 24.0);

        let mut busy = RevealEngine::new();
        let fast_id = busy.register();
        busy.record_scroll(0.0, 0.0);
        for step in 1..100 {
            busy.record_scroll(step as f64 * 500.0, step as f64 * 16.0);
        }
        let fast = busy.on_intersection(fast_id, 1.0).unwrap();
        assert!(fast.duration_ms < slow.duration_ms);
        assert!(fast.duration_ms >= 350);
        assert!(fast.offset_px < slow.offset_px);
    }

    #[test]
    fn unknown_targets_are_ignored() {
        let mut engine = RevealEngine::new();
        assert_eq!(engine.on_intersection(TargetId(7), 1.0), None);
        assert!(!visible(&engine, TargetId(7)));
    }

    #[test]
    fn target_ids_round_trip_through_attributes() {
        let mut engine = RevealEngine::new();
        engine.register();
        let id = engine.register();
        assert_eq!(TargetId::parse(&id.to_string()), Some(id));
        assert_eq!(TargetId::parse("nope"), None);
    }

    #[test]
    fn instant_style_disables_animation() {
        assert!(RevealStyle::INSTANT.css().contains("animation: none"));
        assert!(RevealStyle::for_intensity(0.0).css().contains("900ms"));
    }
}
