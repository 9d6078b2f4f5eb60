//! Reveal-on-view transitions
//!
//! A [`RevealLatch`] turns a visibility signal into a one-way "revealed"
//! flag, and a [`Reveal`] turns that flag into inline CSS. Neither knows
//! which renderer or observer is in use.

/// Easing shared by every reveal transition
pub const EASE: &str = "cubic-bezier(0.25, 0.1, 0.25, 1)";

pub const DEFAULT_DURATION_MS: u32 = 600;

/// How a hidden element enters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealStyle {
    /// Opacity only
    Fade,
    /// Fade while sliding up from `offset_px` below
    Rise { offset_px: f64 },
    /// Fade while scaling up from 95%
    Pop,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub style: RevealStyle,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Reveal {
    pub fn new(style: RevealStyle) -> Self {
        Self {
            style,
            duration_ms: DEFAULT_DURATION_MS,
            delay_ms: 0,
        }
    }

    pub fn fade() -> Self {
        Self::new(RevealStyle::Fade)
    }

    pub fn rise(offset_px: f64) -> Self {
        Self::new(RevealStyle::Rise { offset_px })
    }

    pub fn pop() -> Self {
        Self::new(RevealStyle::Pop)
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Delay the `index`-th sibling by `step_ms` per position
    pub fn stagger(mut self, index: usize, step_ms: u32) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_ms = self
            .delay_ms
            .saturating_add(index.saturating_mul(step_ms));
        self
    }

    /// Inline style for the hidden or revealed state
    pub fn css(&self, visible: bool) -> String {
        let state = match (self.style, visible) {
            (_, true) => "opacity: 1; transform: none;".to_string(),
            (RevealStyle::Fade, false) => "opacity: 0;".to_string(),
            (RevealStyle::Rise { offset_px }, false) => {
                format!("opacity: 0; transform: translateY({offset_px}px);")
            }
            (RevealStyle::Pop, false) => "opacity: 0; transform: scale(0.95);".to_string(),
        };
        let Reveal {
            duration_ms: duration,
            delay_ms: delay,
            ..
        } = *self;
        format!(
            "{state} transition: opacity {duration}ms {EASE} {delay}ms, transform {duration}ms {EASE} {delay}ms;"
        )
    }
}

/// Latches the first "visible" signal. Elements reveal once and stay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Feed a visibility change; returns the latched state
    pub fn observe(&mut self, visible: bool) -> bool {
        self.revealed |= visible;
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_stays_revealed() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.observe(false));
        assert!(latch.revealed());
    }

    #[test]
    fn test_rise_hidden_css() {
        let css = Reveal::rise(40.0).css(false);
        assert!(css.starts_with("opacity: 0; transform: translateY(40px);"));
        assert!(css.contains("transition: opacity 600ms"));
    }

    #[test]
    fn test_staggered_rise_css_snapshot() {
        insta::assert_snapshot!(
            Reveal::rise(20.0).stagger(1, 100).css(false),
            @"opacity: 0; transform: translateY(20px); transition: opacity 600ms cubic-bezier(0.25, 0.1, 0.25, 1) 100ms, transform 600ms cubic-bezier(0.25, 0.1, 0.25, 1) 100ms;"
        );
    }

    #[test]
    fn test_visible_css_clears_transform() {
        for reveal in [Reveal::fade(), Reveal::rise(20.0), Reveal::pop()] {
            assert!(reveal.css(true).starts_with("opacity: 1; transform: none;"));
        }
    }

    #[test]
    fn test_pop_hidden_css() {
        assert!(Reveal::pop().css(false).contains("scale(0.95)"));
    }

    #[test]
    fn test_stagger_adds_to_base_delay() {
        let reveal = Reveal::fade().with_delay(100).stagger(3, 150);
        assert_eq!(reveal.delay_ms, 550);
        assert!(reveal.css(false).ends_with(" 550ms;"));
    }

    #[test]
    fn test_stagger_saturates() {
        let reveal = Reveal::fade().stagger(usize::MAX, u32::MAX);
        assert_eq!(reveal.delay_ms, u32::MAX);
    }

    #[test]
    fn test_duration_override() {
        let css = Reveal::pop().with_duration(400).css(true);
        assert!(css.contains("opacity 400ms"));
        assert!(css.contains("transform 400ms"));
    }
}
