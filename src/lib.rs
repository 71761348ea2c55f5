#![forbid(unsafe_code)]

pub mod carousel;
pub mod config;
pub mod core;
pub mod error;
pub mod guide;
pub mod header;
pub mod intro;
pub mod ops;
pub mod parallax;
pub mod reveal;
pub mod split;
pub mod stage;

pub use carousel::Carousel;
pub use config::{EffectsConfig, IntroTiming};
pub use crate::core::Millis;
pub use error::{CurtainError, CurtainResult};
pub use header::HeaderState;
pub use intro::{IntroPhase, IntroSequencer};
pub use ops::{StageOp, Target};
pub use parallax::Parallax;
pub use reveal::Revealer;
pub use split::{InlineNode, TextBlock};
pub use stage::{Hero, HostCaps, PageDoc, RevealZone, ScrollSnapshot, Stage};
