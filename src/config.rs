use crate::{
    core::Millis,
    error::{CurtainError, CurtainResult},
};

/// Immutable timing/threshold configuration for every effect.
///
/// Defaults reproduce the tuned production values; hosts that want a
/// different feel deserialize their own copy and pass it to
/// [`Stage::new`](crate::stage::Stage::new), which validates it once.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct EffectsConfig {
    pub intro: IntroTiming,
    pub chars: CharTimings,
    pub header: HeaderConfig,
    pub parallax: ParallaxConfig,
    pub reveal: RevealConfig,
    pub carousel: CarouselConfig,
}

/// Entry timeline: curtain hold, background recovery, and the deliberate
/// pause before the hero text starts appearing.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct IntroTiming {
    /// How long the curtain stays at full color.
    pub hold_ms: u64,
    /// Background recovery duration. Must match the stylesheet transition.
    pub bg_ms: u64,
    /// Pause between the end of background recovery and text reveal.
    pub gap_ms: u64,
    /// The curtain's exit fade starts this long before the background
    /// recovery nominally ends, so the detach never shows a hard edge.
    pub hide_overlap_ms: u64,
}

impl IntroTiming {
    pub fn bg_fade_at(&self, start: Millis) -> Millis {
        start + Millis(self.hold_ms)
    }

    pub fn hide_at(&self, start: Millis) -> Millis {
        start + Millis(self.hold_ms) + Millis(self.bg_ms.saturating_sub(self.hide_overlap_ms))
    }

    pub fn reveal_at(&self, start: Millis) -> Millis {
        start + Millis(self.hold_ms) + Millis(self.bg_ms) + Millis(self.gap_ms)
    }
}

/// Base delay plus per-character stagger for one hero text block.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct CharTiming {
    pub base_ms: u64,
    pub stagger_ms: u64,
}

/// Per-block character timings for the hero.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct CharTimings {
    pub eyebrow: CharTiming,
    pub line1: CharTiming,
    pub line2: CharTiming,
    pub brand: CharTiming,
    /// First title line's sweep delay in seconds; each further line adds
    /// `sweep_step_s`.
    pub sweep_base_s: f64,
    pub sweep_step_s: f64,
}

impl CharTimings {
    pub fn line(&self, index: usize) -> CharTiming {
        if index == 0 { self.line1 } else { self.line2 }
    }

    pub fn sweep_delay(&self, index: usize) -> String {
        format!("{}s", self.sweep_base_s + index as f64 * self.sweep_step_s)
    }
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct HeaderConfig {
    /// Scroll offset beyond which the header shrinks.
    pub shrink_y: f64,
    /// Offsets at or below this count as "at top".
    pub top_eps: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            shrink_y: 40.0,
            top_eps: 4.0,
        }
    }
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct ParallaxConfig {
    pub cactus_speed: f64,
    pub cloud_speed: f64,
    /// Smoothing fraction per frame, in `(0, 1]`.
    pub ease: f64,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct RevealConfig {
    /// Intersection ratio that reveals the stats band.
    pub stats_threshold: f64,
    /// Intersection ratio that reveals a fade section.
    pub fade_threshold: f64,
    /// Fallback path: reveal when an element's top crosses this fraction of
    /// the viewport height.
    pub fallback_fraction: f64,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct CarouselConfig {
    /// Scroll settle debounce before the active dot is recomputed.
    pub settle_ms: u64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            intro: IntroTiming {
                hold_ms: 400,
                bg_ms: 700,
                gap_ms: 350,
                hide_overlap_ms: 150,
            },
            chars: CharTimings {
                eyebrow: CharTiming {
                    base_ms: 700,
                    stagger_ms: 28,
                },
                line1: CharTiming {
                    base_ms: 900,
                    stagger_ms: 26,
                },
                line2: CharTiming {
                    base_ms: 1000,
                    stagger_ms: 26,
                },
                brand: CharTiming {
                    base_ms: 1050,
                    stagger_ms: 30,
                },
                sweep_base_s: 1.0,
                sweep_step_s: 0.12,
            },
            header: HeaderConfig::default(),
            parallax: ParallaxConfig {
                cactus_speed: 0.30,
                cloud_speed: 0.30,
                ease: 0.10,
            },
            reveal: RevealConfig {
                stats_threshold: 0.2,
                fade_threshold: 0.15,
                fallback_fraction: 0.85,
            },
            carousel: CarouselConfig { settle_ms: 60 },
        }
    }
}

impl EffectsConfig {
    pub fn validate(&self) -> CurtainResult<()> {
        if self.intro.bg_ms < self.intro.hide_overlap_ms {
            return Err(CurtainError::validation(
                "intro bg_ms must be >= hide_overlap_ms",
            ));
        }
        if !(self.parallax.ease > 0.0 && self.parallax.ease <= 1.0) {
            return Err(CurtainError::validation(
                "parallax ease must be in (0, 1]",
            ));
        }
        for (name, v) in [
            ("stats_threshold", self.reveal.stats_threshold),
            ("fade_threshold", self.reveal.fade_threshold),
            ("fallback_fraction", self.reveal.fallback_fraction),
        ] {
            if !(v > 0.0 && v <= 1.0) {
                return Err(CurtainError::validation(format!(
                    "reveal {name} must be in (0, 1]"
                )));
            }
        }
        if self.carousel.settle_ms == 0 {
            return Err(CurtainError::validation("carousel settle_ms must be > 0"));
        }
        Ok(())
    }
}
