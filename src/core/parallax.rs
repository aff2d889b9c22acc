use super::constants::PARALLAX_SCALE;
use super::schedule::FrameScheduler;
use std::cell::RefCell;
use std::rc::Rc;

/// Latest scroll offset plus the "frame already queued" flag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub last_offset: f64,
    pub pending: bool,
}

/// Coalesces scroll events into at most one update per refresh.
#[derive(Clone, Debug)]
pub struct ScrollReactor {
    state: ScrollState,
    scale: f64,
}

impl Default for ScrollReactor {
    fn default() -> Self {
        Self::new(PARALLAX_SCALE)
    }
}

impl ScrollReactor {
    pub fn new(scale: f64) -> Self {
        Self {
            state: ScrollState::default(),
            scale,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Records `offset`. Returns `true` when the caller has to request a
    /// frame; `false` means the queued one will pick this offset up.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.state.last_offset = offset;
        if self.state.pending {
            return false;
        }
        self.state.pending = true;
        true
    }

    /// Drops the pending mark after the host refused the frame, so the next
    /// scroll asks again.
    pub fn cancel_pending(&mut self) {
        self.state.pending = false;
    }

    /// Consumes the pending update and returns the value to apply.
    pub fn on_frame(&mut self) -> f64 {
        self.state.pending = false;
        self.derived()
    }

    #[inline]
    pub fn derived(&self) -> f64 {
        self.state.last_offset * self.scale
    }
}

pub fn parallax_rule_css(offset: f64) -> String {
    format!("body::before {{ transform: translate3d(0, {offset}px, 0); }}")
}

/// A `<style>` rule owned by one effect. Each `set_text` replaces the
/// previous contents.
pub trait StyleRule {
    fn set_text(&self, css: &str);
    fn remove(&self);
}

struct ParallaxInner {
    reactor: RefCell<ScrollReactor>,
    rule: RefCell<Option<Box<dyn StyleRule>>>,
    scheduler: Rc<dyn FrameScheduler>,
}

impl ParallaxInner {
    fn apply_frame(&self) {
        let derived = self.reactor.borrow_mut().on_frame();
        if let Some(rule) = self.rule.borrow().as_ref() {
            rule.set_text(&parallax_rule_css(derived));
        }
    }
}

/// Scroll-driven background shift, throttled to the display refresh.
#[derive(Clone)]
pub struct Parallax {
    inner: Rc<ParallaxInner>,
}

impl Parallax {
    pub fn new(scheduler: Rc<dyn FrameScheduler>, scale: f64) -> Self {
        Self {
            inner: Rc::new(ParallaxInner {
                reactor: RefCell::new(ScrollReactor::new(scale)),
                rule: RefCell::new(None),
                scheduler,
            }),
        }
    }

    /// Takes ownership of `rule`, removing whichever rule was attached before.
    pub fn attach(&self, rule: Box<dyn StyleRule>) {
        let previous = self.inner.rule.replace(Some(rule));
        if let Some(previous) = previous {
            previous.remove();
        }
    }

    pub fn detach(&self) {
        let rule = self.inner.rule.borrow_mut().take();
        if let Some(rule) = rule {
            rule.remove();
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn has_rule(&self) -> bool {
        self.inner.rule.borrow().is_some()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn state(&self) -> ScrollState {
        self.inner.reactor.borrow().state()
    }

    pub fn on_scroll(&self, offset: f64) {
        let needs_frame = self.inner.reactor.borrow_mut().on_scroll(offset);
        if needs_frame {
            let inner = Rc::clone(&self.inner);
            let scheduled = self
                .inner
                .scheduler
                .request_frame(Box::new(move || inner.apply_frame()));
            if !scheduled {
                self.inner.reactor.borrow_mut().cancel_pending();
            }
        }
    }
}
