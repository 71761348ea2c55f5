use crate::{
    config::CarouselConfig,
    core::Millis,
    ops::{StageOp, Target},
};

pub const DOT_ACTIVE_CLASS: &str = "is-active";

/// Indicator-dot carousel over a horizontally scrollable track.
///
/// The engine holds each item's left offset within the track; the active
/// dot is derived from scroll position after a short settle debounce, never
/// stored anywhere else.
#[derive(Clone, Debug)]
pub struct Carousel {
    offsets: Vec<f64>,
    active: usize,
    settle: Millis,
    /// Deadline armed by the latest track scroll; each event re-arms it.
    pending: Option<Millis>,
}

impl Carousel {
    pub fn new(cfg: CarouselConfig, item_offsets: Vec<f64>) -> Self {
        Self {
            offsets: item_offsets,
            active: 0,
            settle: Millis(cfg.settle_ms),
            pending: None,
        }
    }

    pub fn item_count(&self) -> usize {
        self.offsets.len()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Build the indicator dots; index 0 starts active.
    pub fn mount_ops(&self) -> Vec<StageOp> {
        vec![StageOp::MountDots {
            count: self.offsets.len(),
            active: 0,
        }]
    }

    /// Clicking dot `i` smooth-scrolls the track to item `i`'s offset.
    pub fn dot_clicked(&self, index: usize) -> Vec<StageOp> {
        match self.offsets.get(index) {
            Some(&left) => vec![StageOp::ScrollTo {
                target: Target::Track,
                left,
                smooth: true,
            }],
            None => Vec::new(),
        }
    }

    /// A track scroll event arrived; hold off recomputing until the stream
    /// settles.
    pub fn track_scrolled(&mut self, now: Millis) {
        self.pending = Some(now + self.settle);
    }

    /// Item whose offset is closest to `scroll_left`; first wins on a tie.
    pub fn nearest_index(&self, scroll_left: f64) -> usize {
        let mut best = f64::INFINITY;
        let mut idx = 0;
        for (i, &off) in self.offsets.iter().enumerate() {
            let d = (off - scroll_left).abs();
            if d < best {
                best = d;
                idx = i;
            }
        }
        idx
    }

    /// Once the settle deadline passes, sync the active dot to the nearest
    /// item. Emits ops only when the active index actually changes.
    pub fn poll(&mut self, now: Millis, scroll_left: f64) -> Vec<StageOp> {
        match self.pending {
            Some(deadline) if now >= deadline => self.pending = None,
            _ => return Vec::new(),
        }

        let next = self.nearest_index(scroll_left);
        if next == self.active {
            return Vec::new();
        }
        let prev = self.active;
        self.active = next;
        vec![
            StageOp::remove_class(Target::Dot(prev), DOT_ACTIVE_CLASS),
            StageOp::add_class(Target::Dot(next), DOT_ACTIVE_CLASS),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel() -> Carousel {
        Carousel::new(CarouselConfig { settle_ms: 60 }, vec![0.0, 300.0, 600.0])
    }

    #[test]
    fn nearest_index_picks_minimal_distance() {
        let c = carousel();
        assert_eq!(c.nearest_index(280.0), 1);
        assert_eq!(c.nearest_index(0.0), 0);
        assert_eq!(c.nearest_index(999.0), 2);
        // Tie goes to the earlier item.
        assert_eq!(c.nearest_index(150.0), 0);
    }

    #[test]
    fn starts_with_dot_zero_active() {
        let c = carousel();
        assert_eq!(
            c.mount_ops(),
            vec![StageOp::MountDots {
                count: 3,
                active: 0
            }]
        );
        assert_eq!(c.active(), 0);
    }

    #[test]
    fn dot_click_smooth_scrolls_to_item_offset() {
        let c = carousel();
        assert_eq!(
            c.dot_clicked(2),
            vec![StageOp::ScrollTo {
                target: Target::Track,
                left: 600.0,
                smooth: true,
            }]
        );
        assert!(c.dot_clicked(9).is_empty());
    }

    #[test]
    fn settle_debounce_defers_and_rearms() {
        let mut c = carousel();
        c.track_scrolled(Millis(0));
        assert!(c.poll(Millis(59), 280.0).is_empty());

        // Another scroll before the deadline pushes it out.
        c.track_scrolled(Millis(50));
        assert!(c.poll(Millis(60), 280.0).is_empty());

        let ops = c.poll(Millis(110), 280.0);
        assert_eq!(
            ops,
            vec![
                StageOp::remove_class(Target::Dot(0), DOT_ACTIVE_CLASS),
                StageOp::add_class(Target::Dot(1), DOT_ACTIVE_CLASS),
            ]
        );
        assert_eq!(c.active(), 1);
    }

    #[test]
    fn settled_scroll_near_current_item_emits_nothing() {
        let mut c = carousel();
        c.track_scrolled(Millis(0));
        assert!(c.poll(Millis(100), 20.0).is_empty());
        assert_eq!(c.active(), 0);
    }
}
