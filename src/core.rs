/// Millisecond timestamp or duration on the host's injected clock.
///
/// The engine never reads a wall clock; every entry point receives the
/// current `Millis` from the host, so timelines are replayable in tests.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    pub fn saturating_add(self, rhs: Millis) -> Millis {
        Millis(self.0.saturating_add(rhs.0))
    }

    pub fn saturating_sub(self, rhs: Millis) -> Millis {
        Millis(self.0.saturating_sub(rhs.0))
    }

    /// CSS `<time>` rendering in seconds: `Millis(700)` → `"0.7s"`,
    /// `Millis(1050)` → `"1.05s"`, `Millis(0)` → `"0s"`.
    pub fn to_css_seconds(self) -> String {
        format!("{}s", self.0 as f64 / 1000.0)
    }
}

impl std::ops::Add for Millis {
    type Output = Millis;

    fn add(self, rhs: Millis) -> Millis {
        Millis(self.0.saturating_add(rhs.0))
    }
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Exponential smoothing filter: each step moves the running value a fixed
/// fraction toward the target. Not a physical spring; convergence is
/// geometric with ratio `1 - ease` per step.
#[derive(Clone, Copy, Debug)]
pub struct ExpSmooth {
    value: f64,
    ease: f64,
}

impl ExpSmooth {
    pub fn new(ease: f64) -> Self {
        Self { value: 0.0, ease }
    }

    pub fn step(&mut self, target: f64) -> f64 {
        self.value = lerp(self.value, target, self.ease);
        self.value
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}
