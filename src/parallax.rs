use crate::{
    config::ParallaxConfig,
    core::ExpSmooth,
    ops::{StageOp, Target},
};

pub const SHIFT_CACTUS_VAR: &str = "shift-cactus";
pub const SHIFT_CLOUD_VAR: &str = "shift-cloud";
/// Compat alias consumed by older stylesheets; mirrors the cactus layer.
pub const DECOR_SHIFT_VAR: &str = "decor-shift";

#[derive(Clone, Debug)]
struct SectionOffsets {
    cactus: ExpSmooth,
    cloud: ExpSmooth,
}

/// Per-frame parallax smoothing for decorated sections.
///
/// Each tick moves every section's running offsets one ease fraction toward
/// `scroll_y * speed` and writes them out as style variables. The loop has
/// no cancellation; it runs for the life of the page.
#[derive(Clone, Debug)]
pub struct Parallax {
    cfg: ParallaxConfig,
    sections: Vec<SectionOffsets>,
}

impl Parallax {
    pub fn new(cfg: ParallaxConfig, section_count: usize) -> Self {
        let sections = (0..section_count)
            .map(|_| SectionOffsets {
                cactus: ExpSmooth::new(cfg.ease),
                cloud: ExpSmooth::new(cfg.ease),
            })
            .collect();
        Self { cfg, sections }
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Advance every section one frame toward the scroll-proportional
    /// target and emit the style writes.
    pub fn tick(&mut self, scroll_y: f64) -> Vec<StageOp> {
        let mut ops = Vec::with_capacity(self.sections.len() * 3);
        for (i, sec) in self.sections.iter_mut().enumerate() {
            let c = sec.cactus.step(scroll_y * self.cfg.cactus_speed);
            let l = sec.cloud.step(scroll_y * self.cfg.cloud_speed);
            let target = Target::Section(i);
            ops.push(StageOp::set_var(target, SHIFT_CACTUS_VAR, px(c)));
            ops.push(StageOp::set_var(target, SHIFT_CLOUD_VAR, px(l)));
            ops.push(StageOp::set_var(target, DECOR_SHIFT_VAR, px(c)));
        }
        ops
    }

    /// Current cactus offset of one section, for tests and diagnostics.
    pub fn cactus_offset(&self, section: usize) -> Option<f64> {
        self.sections.get(section).map(|s| s.cactus.value())
    }
}

fn px(v: f64) -> String {
    format!("{v:.2}px")
}
