//! Smooth scrolling driver for the page body.
//!
//! Owned by [`crate::LandingPage`]; registered in the scroll store as a weak
//! handle so any component can drive it without owning it.

use std::cell::RefCell;
use std::time::Duration;

use landing_types::ui::{ScrollController, ScrollTarget, Section, ease_out_cubic};

#[derive(Debug, Clone, Copy)]
struct Glide {
    from: u16,
    to: u16,
    elapsed: Duration,
    duration: Duration,
}

impl Glide {
    fn position(&self) -> u16 {
        let t = if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
        };
        let eased = ease_out_cubic(t);
        let from = f32::from(self.from);
        let to = f32::from(self.to);
        (from + (to - from) * eased).round() as u16
    }

    fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[derive(Debug)]
struct Inner {
    current: u16,
    max_offset: u16,
    glide: Option<Glide>,
    anchors: Vec<(Section, u16)>,
    duration: Duration,
    reduced_motion: bool,
}

impl Inner {
    fn resolve(&self, target: ScrollTarget) -> u16 {
        let raw = match target {
            ScrollTarget::Top => 0,
            ScrollTarget::Bottom => self.max_offset,
            ScrollTarget::Offset(offset) => offset,
            ScrollTarget::Section(section) => self
                .anchors
                .iter()
                .find(|(candidate, _)| *candidate == section)
                .map_or(0, |(_, line)| *line),
        };
        raw.min(self.max_offset)
    }

    fn jump(&mut self, offset: u16) {
        self.glide = None;
        self.current = offset.min(self.max_offset);
    }
}

/// Eased scroll position with a line-based offset.
#[derive(Debug)]
pub struct SmoothScroller {
    inner: RefCell<Inner>,
}

impl SmoothScroller {
    /// `reduced_motion` turns every programmatic scroll into a jump.
    #[must_use]
    pub fn new(duration: Duration, reduced_motion: bool) -> Self {
        Self {
            inner: RefCell::new(Inner {
                current: 0,
                max_offset: 0,
                glide: None,
                anchors: Vec::new(),
                duration,
                reduced_motion,
            }),
        }
    }

    /// Section start lines, in page order.
    pub fn set_anchors(&self, anchors: Vec<(Section, u16)>) {
        self.inner.borrow_mut().anchors = anchors;
    }

    /// Update the scrollable range after a resize. Clamps the current
    /// position and any in-flight glide.
    pub fn set_bounds(&self, content_height: u16, viewport_height: u16) {
        let mut inner = self.inner.borrow_mut();
        inner.max_offset = content_height.saturating_sub(viewport_height);
        let max = inner.max_offset;
        inner.current = inner.current.min(max);
        if let Some(glide) = inner.glide.as_mut() {
            glide.to = glide.to.min(max);
            glide.from = glide.from.min(max);
        }
    }

    #[must_use]
    pub fn max_offset(&self) -> u16 {
        self.inner.borrow().max_offset
    }

    /// Where the current glide will land, or the current offset when idle.
    #[must_use]
    pub fn target(&self) -> u16 {
        let inner = self.inner.borrow();
        inner.glide.map_or(inner.current, |glide| glide.to)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.inner.borrow().glide.is_some()
    }

    /// Advance the glide. Returns whether the offset moved.
    pub fn tick(&self, delta: Duration) -> bool {
        let mut inner = self.inner.borrow_mut();
        let Some(mut glide) = inner.glide else {
            return false;
        };
        glide.elapsed = glide.elapsed.saturating_add(delta);
        let before = inner.current;
        inner.current = glide.position();
        inner.glide = if glide.is_finished() {
            None
        } else {
            Some(glide)
        };
        inner.current != before
    }
}

impl ScrollController for SmoothScroller {
    fn scroll_to(&self, target: ScrollTarget) {
        let mut inner = self.inner.borrow_mut();
        let to = inner.resolve(target);
        if inner.reduced_motion || inner.duration.is_zero() || to == inner.current {
            inner.jump(to);
            return;
        }
        tracing::trace!(from = inner.current, to, "scroll glide started");
        inner.glide = Some(Glide {
            from: inner.current,
            to,
            elapsed: Duration::ZERO,
            duration: inner.duration,
        });
    }

    fn scroll_by(&self, lines: i32) {
        let mut inner = self.inner.borrow_mut();
        let max = inner.max_offset;
        let next = (i32::from(inner.current) + lines).clamp(0, i32::from(max));
        inner.jump(u16::try_from(next).unwrap_or(max));
    }

    fn offset(&self) -> u16 {
        self.inner.borrow().current
    }
}

#[cfg(test)]
mod tests {
    use super::SmoothScroller;
    use landing_types::ui::{ScrollController, ScrollTarget, Section};
    use std::time::Duration;

    fn scroller(reduced_motion: bool) -> SmoothScroller {
        let scroller = SmoothScroller::new(Duration::from_millis(400), reduced_motion);
        scroller.set_anchors(vec![
            (Section::Hero, 0),
            (Section::Architecture, 20),
            (Section::MarginEngine, 45),
        ]);
        scroller.set_bounds(100, 30);
        scroller
    }

    #[test]
    fn glide_reaches_anchor_after_duration() {
        let scroller = scroller(false);
        scroller.scroll_to(ScrollTarget::Section(Section::Architecture));
        assert!(scroller.is_animating());
        assert_eq!(scroller.target(), 20);
        assert_eq!(scroller.offset(), 0);

        assert!(scroller.tick(Duration::from_millis(100)));
        let midway = scroller.offset();
        assert!(midway > 0 && midway < 20, "midway = {midway}");

        scroller.tick(Duration::from_millis(400));
        assert_eq!(scroller.offset(), 20);
        assert!(!scroller.is_animating());
        assert!(!scroller.tick(Duration::from_millis(16)));
    }

    #[test]
    fn reduced_motion_jumps() {
        let scroller = scroller(true);
        scroller.scroll_to(ScrollTarget::Section(Section::MarginEngine));
        assert!(!scroller.is_animating());
        assert_eq!(scroller.offset(), 45);
    }

    #[test]
    fn targets_clamp_to_scrollable_range() {
        let scroller = scroller(true);
        scroller.scroll_to(ScrollTarget::Offset(500));
        assert_eq!(scroller.offset(), 70);
        scroller.scroll_to(ScrollTarget::Bottom);
        assert_eq!(scroller.offset(), 70);
        scroller.scroll_to(ScrollTarget::Top);
        assert_eq!(scroller.offset(), 0);
    }

    #[test]
    fn scroll_by_cancels_glide_and_clamps() {
        let scroller = scroller(false);
        scroller.scroll_to(ScrollTarget::Bottom);
        scroller.scroll_by(-5);
        assert!(!scroller.is_animating());
        assert_eq!(scroller.offset(), 0);

        scroller.scroll_by(3);
        assert_eq!(scroller.offset(), 3);
        scroller.scroll_by(1_000);
        assert_eq!(scroller.offset(), 70);
    }

    #[test]
    fn shrinking_content_clamps_position() {
        let scroller = scroller(true);
        scroller.scroll_to(ScrollTarget::Bottom);
        scroller.set_bounds(40, 30);
        assert_eq!(scroller.offset(), 10);
        assert_eq!(scroller.max_offset(), 10);
    }

    #[test]
    fn unknown_anchor_resolves_to_top() {
        let scroller = scroller(true);
        scroller.scroll_by(10);
        scroller.scroll_to(ScrollTarget::Section(Section::Risk));
        assert_eq!(scroller.offset(), 0);
    }
}
