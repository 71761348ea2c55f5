use crate::{
    config::HeaderConfig,
    ops::{StageOp, Target},
};

pub const SHRINK_CLASS: &str = "is-shrink";
pub const AT_TOP_CLASS: &str = "is-at-top";

/// Scroll-derived header flags. Both start unknown, so the first sample
/// always emits ops; after that, ops are emitted only on change to avoid
/// redundant style recalculation.
#[derive(Clone, Debug)]
pub struct HeaderState {
    cfg: HeaderConfig,
    shrink: Option<bool>,
    at_top: Option<bool>,
}

impl HeaderState {
    pub fn new(cfg: HeaderConfig) -> Self {
        Self {
            cfg,
            shrink: None,
            at_top: None,
        }
    }

    pub fn shrink(&self) -> Option<bool> {
        self.shrink
    }

    pub fn at_top(&self) -> Option<bool> {
        self.at_top
    }

    /// Recompute both flags from the scroll offset.
    pub fn sample(&mut self, scroll_y: f64) -> Vec<StageOp> {
        let mut ops = Vec::new();

        let shrink = scroll_y > self.cfg.shrink_y;
        if self.shrink != Some(shrink) {
            ops.push(class_op(SHRINK_CLASS, shrink));
            self.shrink = Some(shrink);
        }

        let at_top = scroll_y <= self.cfg.top_eps;
        if self.at_top != Some(at_top) {
            ops.push(class_op(AT_TOP_CLASS, at_top));
            self.at_top = Some(at_top);
        }

        ops
    }
}

fn class_op(class: &str, on: bool) -> StageOp {
    if on {
        StageOp::add_class(Target::Body, class)
    } else {
        StageOp::remove_class(Target::Body, class)
    }
}
