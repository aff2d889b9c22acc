use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Work to run on the next display refresh.
pub type FrameCallback = Box<dyn FnOnce()>;

/// Source of per-refresh callbacks (`requestAnimationFrame` in the browser).
pub trait FrameScheduler {
    /// Returns `false` when the host refused; `callback` is dropped unrun.
    fn request_frame(&self, callback: FrameCallback) -> bool;
}

/// Scheduler driven by explicit `run_frame` calls instead of a display.
///
/// Callbacks requested while a frame is running land in the next frame,
/// the same way `requestAnimationFrame` behaves inside a frame callback.
#[derive(Clone, Default)]
#[cfg_attr(not(test), allow(dead_code))]
pub struct FrameQueue {
    queued: Rc<RefCell<Vec<FrameCallback>>>,
}

#[cfg_attr(not(test), allow(dead_code))]
impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callbacks waiting for the next refresh.
    pub fn pending(&self) -> usize {
        self.queued.borrow().len()
    }

    /// Simulates one refresh. Returns how many callbacks ran.
    pub fn run_frame(&self) -> usize {
        let batch = std::mem::take(&mut *self.queued.borrow_mut());
        let ran = batch.len();
        for callback in batch {
            callback();
        }
        ran
    }

    pub fn run_frames(&self, count: usize) -> usize {
        (0..count).map(|_| self.run_frame()).sum()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&self, callback: FrameCallback) -> bool {
        self.queued.borrow_mut().push(callback);
        true
    }
}

/// Stop signal for a self-rescheduling task, checked before every iteration.
#[derive(Clone, Debug)]
pub struct RunFlag(Rc<Cell<bool>>);

impl RunFlag {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.0.get()
    }

    pub fn stop(&self) {
        self.0.set(false);
    }
}
