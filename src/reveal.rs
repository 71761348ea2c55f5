use crate::{
    config::RevealConfig,
    ops::{StageOp, Target},
};

pub const VISIBLE_CLASS: &str = "is-visible";

/// Result of one fallback scroll check.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FallbackOutcome {
    pub ops: Vec<StageOp>,
    /// The host should remove its scroll listener. Only the stats-band
    /// variant ever asks for this; the fade-sections listener stays
    /// attached for the life of the page.
    pub detach_listener: bool,
}

/// One-shot viewport reveal over a set of targets.
///
/// Preferred path: the host runs an intersection observer at
/// [`threshold`](Self::threshold) and forwards entries. Fallback path
/// (no observer capability): the host forwards element tops on every
/// scroll. Either way a target is marked visible exactly once and never
/// un-marked.
#[derive(Clone, Debug)]
pub struct Revealer {
    targets: Vec<Target>,
    visible: Vec<bool>,
    threshold: f64,
    fallback_fraction: f64,
    detach_when_done: bool,
}

impl Revealer {
    /// The stats band: a single target, revealed at a 0.2 intersection
    /// ratio by default; its fallback listener detaches once it fires.
    pub fn stats_band(cfg: RevealConfig) -> Self {
        Self {
            targets: vec![Target::StatsBand],
            visible: vec![false],
            threshold: cfg.stats_threshold,
            fallback_fraction: cfg.fallback_fraction,
            detach_when_done: true,
        }
    }

    /// Generic fade sections: many targets, one shared fallback listener
    /// that stays attached even after every section has revealed.
    pub fn fade_sections(cfg: RevealConfig, count: usize) -> Self {
        Self {
            targets: (0..count).map(Target::Fader).collect(),
            visible: vec![false; count],
            threshold: cfg.fade_threshold,
            fallback_fraction: cfg.fallback_fraction,
            detach_when_done: false,
        }
    }

    /// Intersection ratio the host should configure its observer with.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Observer path: first intersection marks the target and stops
    /// observation; anything after that is ignored.
    pub fn on_intersection(&mut self, index: usize, intersecting: bool) -> Vec<StageOp> {
        if !intersecting || index >= self.targets.len() || self.visible[index] {
            return Vec::new();
        }
        self.visible[index] = true;
        let target = self.targets[index];
        vec![
            StageOp::add_class(target, VISIBLE_CLASS),
            StageOp::StopObserving { target },
        ]
    }

    /// Fallback path: reveal every still-hidden target whose top has
    /// crossed `viewport_h * fallback_fraction`. Called once at setup so
    /// above-the-fold targets reveal without waiting for a scroll.
    pub fn on_scroll_fallback(&mut self, viewport_h: f64, tops: &[f64]) -> FallbackOutcome {
        let limit = viewport_h * self.fallback_fraction;
        let mut ops = Vec::new();
        for (i, &top) in tops.iter().enumerate().take(self.targets.len()) {
            if !self.visible[i] && top < limit {
                self.visible[i] = true;
                ops.push(StageOp::add_class(self.targets[i], VISIBLE_CLASS));
            }
        }
        let detach_listener = self.detach_when_done && self.visible.iter().all(|&v| v);
        FallbackOutcome {
            ops,
            detach_listener,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> RevealConfig {
        RevealConfig {
            stats_threshold: 0.2,
            fade_threshold: 0.15,
            fallback_fraction: 0.85,
        }
    }

    #[test]
    fn intersection_reveal_is_one_shot() {
        let mut r = Revealer::stats_band(cfg());
        let ops = r.on_intersection(0, true);
        assert_eq!(
            ops,
            vec![
                StageOp::add_class(Target::StatsBand, VISIBLE_CLASS),
                StageOp::StopObserving {
                    target: Target::StatsBand
                },
            ]
        );
        // Later entries never re-fire and never un-mark.
        assert!(r.on_intersection(0, false).is_empty());
        assert!(r.on_intersection(0, true).is_empty());
        assert!(r.is_visible(0));
    }

    #[test]
    fn non_intersecting_entries_do_nothing() {
        let mut r = Revealer::fade_sections(cfg(), 2);
        assert!(r.on_intersection(0, false).is_empty());
        assert!(!r.is_visible(0));
    }

    #[test]
    fn fallback_reveals_below_85_percent_of_viewport() {
        let mut r = Revealer::fade_sections(cfg(), 3);
        // viewport 1000 => limit 850
        let out = r.on_scroll_fallback(1000.0, &[900.0, 849.0, 850.0]);
        assert_eq!(
            out.ops,
            vec![StageOp::add_class(Target::Fader(1), VISIBLE_CLASS)]
        );
        assert!(!out.detach_listener);
    }

    #[test]
    fn stats_band_fallback_detaches_after_firing() {
        let mut r = Revealer::stats_band(cfg());
        let out = r.on_scroll_fallback(1000.0, &[2000.0]);
        assert!(out.ops.is_empty());
        assert!(!out.detach_listener);

        let out = r.on_scroll_fallback(1000.0, &[100.0]);
        assert_eq!(out.ops.len(), 1);
        assert!(out.detach_listener);
    }

    #[test]
    fn fade_sections_listener_never_detaches() {
        let mut r = Revealer::fade_sections(cfg(), 2);
        let out = r.on_scroll_fallback(1000.0, &[0.0, 0.0]);
        assert_eq!(out.ops.len(), 2);
        assert!(!out.detach_listener);
        // Even fully revealed, repeated checks stay attached and emit nothing.
        let out = r.on_scroll_fallback(1000.0, &[0.0, 0.0]);
        assert!(out.ops.is_empty());
        assert!(!out.detach_listener);
    }
}
