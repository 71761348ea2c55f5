//! # Curtain guide (v0.1.0)
//!
//! This module is a standalone walkthrough of Curtain's architecture and
//! public API. If you are integrating a host shim or adding an effect,
//! start here.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`EffectsConfig`](crate::EffectsConfig): immutable timing/threshold
//!   configuration, validated once at stage construction
//! - [`PageDoc`](crate::PageDoc): structural description of the page the
//!   engine drives; every part is optional
//! - [`Stage`](crate::Stage): wires the effects to the page lifecycle and
//!   owns all of their state
//! - [`StageOp`](crate::StageOp): one presentation instruction (class
//!   change, style variable, overlay mount, scroll command)
//! - [`Millis`](crate::Millis): the injected clock; the engine never reads
//!   wall time
//!
//! ---
//!
//! ## "No DOM in the engine" (and why)
//!
//! Curtain wants every effect to be deterministic and testable without a
//! rendering environment. Engine code therefore never touches a document.
//! The host forwards events (load, scroll, animation frame, intersection
//! entries, transition-end, dot clicks), each stamped with the current
//! clock, and applies the returned op stream to the real page in order.
//!
//! There are no timers: each sequencer stores deadlines and is polled on
//! each frame. A test drives the same timeline by calling
//! [`Stage::frame`](crate::Stage::frame) with fabricated timestamps.
//!
//! ---
//!
//! ## The effects
//!
//! - [`IntroSequencer`](crate::IntroSequencer): the entry timeline. It
//!   holds the curtain, recovers the background, fades the curtain out and
//!   then reveals the hero text. Reduced motion short-circuits straight to
//!   `Revealed` and the curtain is never mounted.
//! - [`TextBlock::split_chars`](crate::TextBlock::split_chars): wraps each
//!   non-whitespace character in an indexed span so the stylesheet can
//!   stagger the reveal (`base + index * stagger`). Idempotent.
//! - [`HeaderState`](crate::HeaderState): scroll-derived `is-shrink` /
//!   `is-at-top` body flags, one sample per frame, ops only on change.
//! - [`Parallax`](crate::Parallax): exponential smoothing of per-section
//!   offsets toward `scroll_y * speed`, written out as style variables
//!   every frame.
//! - [`Revealer`](crate::Revealer): one-shot viewport reveal, observer
//!   path plus a scroll-polling fallback. The stats-band variant detaches
//!   its fallback listener after firing; the fade-sections variant keeps
//!   it attached for the life of the page.
//! - [`Carousel`](crate::Carousel): indicator dots for a scrollable track;
//!   the active dot is derived from scroll position after a settle
//!   debounce, never stored anywhere else.
//!
//! Each component owns a disjoint set of class names, so op streams from
//! different components never conflict.
//!
//! ---
//!
//! ## Failure semantics
//!
//! Missing markup is a silent no-op, never an error: a page without a
//! carousel simply gets no dots. `Result` appears only at the
//! configuration seam ([`EffectsConfig::validate`](crate::EffectsConfig::validate),
//! checked by [`Stage::new`](crate::Stage::new)). Runtime evaluation is
//! infallible: a dropped op degrades to "no animation", not to broken
//! content.
