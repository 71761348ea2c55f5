/// Addressable page element the engine may direct an op at.
///
/// The engine never holds DOM references; the host resolves each target to a
/// real element, or drops the op when the element is gone. All effects are
/// best-effort.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Target {
    /// Document root (`<html>`): reveal/ready markers live here.
    Root,
    /// `<body>`: header shrink markers live here.
    Body,
    /// The intro curtain overlay.
    Overlay,
    Eyebrow,
    /// n-th hero title line.
    Line(usize),
    Brand,
    /// n-th decorated (parallax) section.
    Section(usize),
    StatsBand,
    /// n-th fade section.
    Fader(usize),
    /// The carousel's scrollable track.
    Track,
    /// n-th carousel indicator dot.
    Dot(usize),
}

/// One presentation instruction for the host to apply.
///
/// Ops are emitted in a deterministic order and carry no engine state; a
/// stream of `StageOp`s is the engine's entire observable output, which is
/// what the integration tests assert on.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum StageOp {
    AddClass {
        target: Target,
        class: String,
    },
    RemoveClass {
        target: Target,
        class: String,
    },
    /// Write a style variable (`--name: value`) on the target.
    SetVar {
        target: Target,
        name: String,
        value: String,
    },
    /// Insert the full-viewport curtain overlay.
    MountOverlay {
        class: String,
    },
    /// Detach the curtain overlay.
    UnmountOverlay,
    /// Create the carousel indicator dots, with one already active.
    MountDots {
        count: usize,
        active: usize,
    },
    /// The target's one-shot reveal fired; stop observing it.
    StopObserving {
        target: Target,
    },
    /// Scroll the target so its content offset aligns to `left`.
    ScrollTo {
        target: Target,
        left: f64,
        smooth: bool,
    },
}

impl StageOp {
    pub fn add_class(target: Target, class: impl Into<String>) -> Self {
        Self::AddClass {
            target,
            class: class.into(),
        }
    }

    pub fn remove_class(target: Target, class: impl Into<String>) -> Self {
        Self::RemoveClass {
            target,
            class: class.into(),
        }
    }

    pub fn set_var(target: Target, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::SetVar {
            target,
            name: name.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ops_serialize_to_stable_json() {
        let op = StageOp::add_class(Target::Root, "is-ready");
        let s = serde_json::to_string(&op).unwrap();
        assert!(s.contains("AddClass"));
        assert!(s.contains("is-ready"));
        let de: StageOp = serde_json::from_str(&s).unwrap();
        assert_eq!(de, op);
    }
}
