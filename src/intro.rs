use tracing::debug;

use crate::{
    config::IntroTiming,
    core::Millis,
    ops::{StageOp, Target},
};

pub const CURTAIN_CLASS: &str = "intro-curtain";
/// Root marker that hides reveal targets before the sequence starts.
pub const HAS_REVEAL_CLASS: &str = "has-reveal";
pub const REVEAL_BG_CLASS: &str = "is-reveal-bg";
pub const HIDE_CLASS: &str = "is-hide";
pub const READY_CLASS: &str = "is-ready";
pub const HERO_IN_CLASS: &str = "is-hero-in";

/// Phases of the entry timeline, strictly linear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum IntroPhase {
    Idle,
    /// Curtain at full color.
    Hold,
    /// Background recovering from curtain color to transparent.
    BgFade,
    /// Curtain exit fade issued; waiting out the pre-reveal gap.
    HiddenWait,
    Revealed,
}

#[derive(Clone, Copy, Debug)]
struct Deadlines {
    bg_fade: Millis,
    hide: Millis,
    reveal: Millis,
}

/// Entry sequencer: curtain hold, background recovery, curtain exit, text
/// reveal. All transitions are deadline-driven against the injected clock;
/// the host polls once per frame.
///
/// Under reduced motion the sequencer jumps straight to `Revealed` and the
/// curtain is never mounted.
#[derive(Clone, Debug)]
pub struct IntroSequencer {
    timing: IntroTiming,
    phase: IntroPhase,
    deadlines: Option<Deadlines>,
    hide_issued: bool,
    overlay_unmounted: bool,
}

impl IntroSequencer {
    pub fn new(timing: IntroTiming) -> Self {
        Self {
            timing,
            phase: IntroPhase::Idle,
            deadlines: None,
            hide_issued: false,
            overlay_unmounted: false,
        }
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    /// Begin the timeline. Starting twice is a no-op.
    pub fn start(&mut self, now: Millis, reduce_motion: bool) -> Vec<StageOp> {
        if self.phase != IntroPhase::Idle {
            return Vec::new();
        }

        // Hide reveal targets before anything else becomes visible.
        let mut ops = vec![StageOp::add_class(Target::Root, HAS_REVEAL_CLASS)];

        if reduce_motion {
            debug!("reduced motion: revealing immediately, no curtain");
            self.phase = IntroPhase::Revealed;
            ops.push(StageOp::add_class(Target::Root, READY_CLASS));
            ops.push(StageOp::add_class(Target::Root, HERO_IN_CLASS));
            return ops;
        }

        ops.push(StageOp::MountOverlay {
            class: CURTAIN_CLASS.to_string(),
        });
        self.deadlines = Some(Deadlines {
            bg_fade: self.timing.bg_fade_at(now),
            hide: self.timing.hide_at(now),
            reveal: self.timing.reveal_at(now),
        });
        self.phase = IntroPhase::Hold;
        ops
    }

    /// Fire every deadline that is due, in schedule order. A long frame gap
    /// may advance several phases in one poll.
    pub fn poll(&mut self, now: Millis) -> Vec<StageOp> {
        let Some(deadlines) = self.deadlines else {
            return Vec::new();
        };

        let mut ops = Vec::new();
        loop {
            match self.phase {
                IntroPhase::Hold if now >= deadlines.bg_fade => {
                    debug!(at = now.0, "intro: background recovery begins");
                    ops.push(StageOp::add_class(Target::Overlay, REVEAL_BG_CLASS));
                    self.phase = IntroPhase::BgFade;
                }
                IntroPhase::BgFade if now >= deadlines.hide => {
                    debug!(at = now.0, "intro: curtain exit fade begins");
                    ops.push(StageOp::add_class(Target::Overlay, HIDE_CLASS));
                    self.hide_issued = true;
                    self.phase = IntroPhase::HiddenWait;
                }
                IntroPhase::HiddenWait if now >= deadlines.reveal => {
                    debug!(at = now.0, "intro: hero revealed");
                    ops.push(StageOp::add_class(Target::Root, READY_CLASS));
                    ops.push(StageOp::add_class(Target::Root, HERO_IN_CLASS));
                    self.phase = IntroPhase::Revealed;
                }
                _ => break,
            }
        }
        ops
    }

    /// The host saw the curtain's exit transition finish. Unmount once; a
    /// report before the exit fade was issued, or a duplicate report, is
    /// ignored (the whole sequence is best-effort).
    pub fn overlay_transition_ended(&mut self) -> Vec<StageOp> {
        if !self.hide_issued || self.overlay_unmounted {
            return Vec::new();
        }
        self.overlay_unmounted = true;
        vec![StageOp::UnmountOverlay]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing() -> IntroTiming {
        IntroTiming {
            hold_ms: 400,
            bg_ms: 700,
            gap_ms: 350,
            hide_overlap_ms: 150,
        }
    }

    fn started(now: Millis) -> IntroSequencer {
        let mut seq = IntroSequencer::new(timing());
        seq.start(now, false);
        seq
    }

    #[test]
    fn reduced_motion_reveals_synchronously_without_overlay() {
        let mut seq = IntroSequencer::new(timing());
        let ops = seq.start(Millis(0), true);
        assert_eq!(seq.phase(), IntroPhase::Revealed);
        assert!(
            !ops.iter()
                .any(|op| matches!(op, StageOp::MountOverlay { .. }))
        );
        assert!(ops.contains(&StageOp::add_class(Target::Root, READY_CLASS)));
        assert!(ops.contains(&StageOp::add_class(Target::Root, HERO_IN_CLASS)));
    }

    #[test]
    fn deadlines_fire_at_400_950_1450() {
        let mut seq = started(Millis(0));
        assert!(seq.poll(Millis(399)).is_empty());

        let ops = seq.poll(Millis(400));
        assert_eq!(
            ops,
            vec![StageOp::add_class(Target::Overlay, REVEAL_BG_CLASS)]
        );
        assert_eq!(seq.phase(), IntroPhase::BgFade);

        assert!(seq.poll(Millis(949)).is_empty());
        let ops = seq.poll(Millis(950));
        assert_eq!(ops, vec![StageOp::add_class(Target::Overlay, HIDE_CLASS)]);

        assert!(seq.poll(Millis(1449)).is_empty());
        let ops = seq.poll(Millis(1450));
        assert_eq!(
            ops,
            vec![
                StageOp::add_class(Target::Root, READY_CLASS),
                StageOp::add_class(Target::Root, HERO_IN_CLASS),
            ]
        );
        assert_eq!(seq.phase(), IntroPhase::Revealed);
    }

    #[test]
    fn long_frame_gap_fires_all_due_phases_in_order() {
        let mut seq = started(Millis(100));
        let ops = seq.poll(Millis(5000));
        assert_eq!(
            ops,
            vec![
                StageOp::add_class(Target::Overlay, REVEAL_BG_CLASS),
                StageOp::add_class(Target::Overlay, HIDE_CLASS),
                StageOp::add_class(Target::Root, READY_CLASS),
                StageOp::add_class(Target::Root, HERO_IN_CLASS),
            ]
        );
    }

    #[test]
    fn overlay_unmounts_once_after_exit_fade() {
        let mut seq = started(Millis(0));
        // Transition-end before the exit fade is ignored.
        assert!(seq.overlay_transition_ended().is_empty());

        seq.poll(Millis(950));
        assert_eq!(seq.overlay_transition_ended(), vec![StageOp::UnmountOverlay]);
        assert!(seq.overlay_transition_ended().is_empty());
    }

    #[test]
    fn starting_twice_is_a_no_op() {
        let mut seq = started(Millis(0));
        assert!(seq.start(Millis(10), false).is_empty());
    }
}
