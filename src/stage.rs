use tracing::debug;

use crate::{
    carousel::Carousel,
    config::EffectsConfig,
    core::Millis,
    error::CurtainResult,
    header::HeaderState,
    intro::{IntroPhase, IntroSequencer},
    ops::{StageOp, Target},
    parallax::Parallax,
    reveal::Revealer,
    split::TextBlock,
};

/// Style variable carrying a title line's sweep delay.
pub const SWEEP_DELAY_VAR: &str = "sweep-delay";

/// Host environment capabilities, read once at startup.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct HostCaps {
    /// The user asked for non-essential animation to be suppressed.
    pub reduced_motion: bool,
    /// The host can observe viewport intersection; when false the
    /// revealers run their scroll-polling fallback.
    pub intersection_observer: bool,
}

/// Hero block with labeled sub-elements. Any of them may be absent.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Hero {
    pub eyebrow: Option<TextBlock>,
    pub lines: Vec<TextBlock>,
    pub brand: Option<TextBlock>,
}

/// Structural description of the page the engine drives. Every part is
/// optional; missing markup silently disables the matching effect.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct PageDoc {
    pub hero: Option<Hero>,
    /// Number of decorated (parallax-eligible) sections.
    pub decorated_sections: usize,
    pub stats_band: bool,
    /// Number of generic fade sections.
    pub fade_sections: usize,
    /// Item left-offsets of the carousel track, when one exists.
    pub carousel_items: Option<Vec<f64>>,
}

/// Scroll geometry forwarded by the host. Element tops are only consulted
/// on the fallback reveal path; observer-capable hosts may leave them empty.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ScrollSnapshot {
    pub y: f64,
    pub viewport_h: f64,
    pub stats_top: Option<f64>,
    pub fader_tops: Vec<f64>,
}

/// Which revealer an intersection entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RevealZone {
    StatsBand,
    FadeSections,
}

/// Wires every effect to the page lifecycle and owns all of their state.
///
/// The host forwards events (each with the current clock) and applies the
/// returned ops in order. Components never call each other; the single
/// cross-component dependency is that the stage splits the hero text right
/// before starting the intro timeline.
#[derive(Clone, Debug)]
pub struct Stage {
    cfg: EffectsConfig,
    caps: HostCaps,
    hero: Option<Hero>,
    header: HeaderState,
    intro: IntroSequencer,
    parallax: Option<Parallax>,
    stats: Option<Revealer>,
    faders: Option<Revealer>,
    carousel: Option<Carousel>,
    /// True while the stats-band fallback listener is attached.
    stats_fallback_attached: bool,
    scroll_y: f64,
    scroll_dirty: bool,
    track_left: f64,
}

impl Stage {
    pub fn new(cfg: EffectsConfig, doc: PageDoc, caps: HostCaps) -> CurtainResult<Self> {
        cfg.validate()?;

        let parallax = (doc.decorated_sections > 0)
            .then(|| Parallax::new(cfg.parallax, doc.decorated_sections));
        let stats = doc.stats_band.then(|| Revealer::stats_band(cfg.reveal));
        let faders =
            (doc.fade_sections > 0).then(|| Revealer::fade_sections(cfg.reveal, doc.fade_sections));
        let carousel = doc
            .carousel_items
            .as_ref()
            .filter(|items| !items.is_empty())
            .map(|items| Carousel::new(cfg.carousel, items.clone()));

        let stats_fallback_attached = stats.is_some() && !caps.intersection_observer;

        Ok(Self {
            header: HeaderState::new(cfg.header),
            intro: IntroSequencer::new(cfg.intro),
            hero: doc.hero,
            parallax,
            stats,
            faders,
            carousel,
            stats_fallback_attached,
            scroll_y: 0.0,
            scroll_dirty: false,
            track_left: 0.0,
            cfg,
            caps,
        })
    }

    /// Split hero text once the blocks exist; the host re-renders them
    /// from the updated model.
    fn split_hero(&mut self) -> Vec<StageOp> {
        let chars = self.cfg.chars;
        let Some(hero) = self.hero.as_mut() else {
            return Vec::new();
        };

        let mut ops = Vec::new();
        if let Some(eyebrow) = hero.eyebrow.as_mut() {
            eyebrow.split_chars(chars.eyebrow);
        }
        for (i, line) in hero.lines.iter_mut().enumerate() {
            line.split_chars(chars.line(i));
            ops.push(StageOp::set_var(
                Target::Line(i),
                SWEEP_DELAY_VAR,
                chars.sweep_delay(i),
            ));
        }
        if let Some(brand) = hero.brand.as_mut() {
            brand.split_chars(chars.brand);
        }
        ops
    }

    /// Page load: split the hero, start the intro, take the initial header
    /// sample, run the immediate fallback reveal checks, mount the dots.
    #[tracing::instrument(skip_all, fields(now = now.0))]
    pub fn on_load(&mut self, snapshot: &ScrollSnapshot, now: Millis) -> Vec<StageOp> {
        let mut ops = self.split_hero();
        ops.extend(self.intro.start(now, self.caps.reduced_motion));

        self.scroll_y = snapshot.y;
        ops.extend(self.header.sample(snapshot.y));

        if !self.caps.intersection_observer {
            ops.extend(self.fallback_checks(snapshot));
        }

        if let Some(carousel) = &self.carousel {
            ops.extend(carousel.mount_ops());
        }

        debug!(ops = ops.len(), "stage loaded");
        ops
    }

    /// Window scroll event. Header work is deferred to the next frame (one
    /// sample per frame, however many events arrive); the fallback reveal
    /// listeners react to the event itself.
    pub fn on_scroll(&mut self, snapshot: &ScrollSnapshot, _now: Millis) -> Vec<StageOp> {
        self.scroll_y = snapshot.y;
        self.scroll_dirty = true;

        if self.caps.intersection_observer {
            return Vec::new();
        }
        self.fallback_checks(snapshot)
    }

    fn fallback_checks(&mut self, snapshot: &ScrollSnapshot) -> Vec<StageOp> {
        let mut ops = Vec::new();

        if self.stats_fallback_attached
            && let Some(stats) = self.stats.as_mut()
            && let Some(top) = snapshot.stats_top
        {
            let out = stats.on_scroll_fallback(snapshot.viewport_h, &[top]);
            ops.extend(out.ops);
            if out.detach_listener {
                debug!("stats band revealed, fallback listener detached");
                self.stats_fallback_attached = false;
            }
        }

        if let Some(faders) = self.faders.as_mut() {
            let out = faders.on_scroll_fallback(snapshot.viewport_h, &snapshot.fader_tops);
            ops.extend(out.ops);
        }

        ops
    }

    /// Animation frame: pending header sample, parallax step, intro poll,
    /// carousel settle poll.
    pub fn frame(&mut self, now: Millis) -> Vec<StageOp> {
        let mut ops = Vec::new();

        if self.scroll_dirty {
            self.scroll_dirty = false;
            ops.extend(self.header.sample(self.scroll_y));
        }

        if !self.caps.reduced_motion
            && let Some(parallax) = self.parallax.as_mut()
        {
            ops.extend(parallax.tick(self.scroll_y));
        }

        ops.extend(self.intro.poll(now));

        if let Some(carousel) = self.carousel.as_mut() {
            ops.extend(carousel.poll(now, self.track_left));
        }

        ops
    }

    /// Intersection observer entry forwarded by the host.
    pub fn on_intersection(
        &mut self,
        zone: RevealZone,
        index: usize,
        intersecting: bool,
    ) -> Vec<StageOp> {
        let revealer = match zone {
            RevealZone::StatsBand => self.stats.as_mut(),
            RevealZone::FadeSections => self.faders.as_mut(),
        };
        match revealer {
            Some(r) => r.on_intersection(index, intersecting),
            None => Vec::new(),
        }
    }

    pub fn on_overlay_transition_end(&mut self) -> Vec<StageOp> {
        self.intro.overlay_transition_ended()
    }

    pub fn on_track_scroll(&mut self, left: f64, now: Millis) {
        self.track_left = left;
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.track_scrolled(now);
        }
    }

    pub fn on_dot_click(&self, index: usize) -> Vec<StageOp> {
        match &self.carousel {
            Some(carousel) => carousel.dot_clicked(index),
            None => Vec::new(),
        }
    }

    pub fn intro_phase(&self) -> IntroPhase {
        self.intro.phase()
    }

    /// The hero model, with split results once `on_load` ran.
    pub fn hero(&self) -> Option<&Hero> {
        self.hero.as_ref()
    }

    pub fn header(&self) -> &HeaderState {
        &self.header
    }
}
