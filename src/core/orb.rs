use super::follower::{translate_css, Follower, PointerState, Viewport};
use super::schedule::{FrameScheduler, RunFlag};
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;

/// Element whose inline transform the follower drives.
pub trait TransformTarget {
    fn set_transform(&self, css: &str);
}

struct FollowerTask {
    follower: RefCell<Follower>,
    target: Box<dyn TransformTarget>,
    scheduler: Rc<dyn FrameScheduler>,
    run: RunFlag,
}

impl FollowerTask {
    fn step(&self) {
        let offset = self.follower.borrow_mut().tick();
        self.target.set_transform(&translate_css(offset));
    }
}

fn schedule_tick(task: &Rc<FollowerTask>) {
    let next = Rc::clone(task);
    let scheduled = task.scheduler.request_frame(Box::new(move || {
        if !next.run.is_active() {
            return;
        }
        next.step();
        schedule_tick(&next);
    }));
    if !scheduled {
        task.run.stop();
    }
}

/// A running follower loop. Stopping (or dropping the handle) lets the
/// already-queued frame run as a no-op and requests nothing further.
pub struct FollowerHandle {
    task: Rc<FollowerTask>,
}

impl FollowerHandle {
    pub fn pointer_moved(&self, client: DVec2, viewport: Viewport) {
        self.task
            .follower
            .borrow_mut()
            .on_pointer_move(client, viewport);
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn state(&self) -> PointerState {
        self.task.follower.borrow().state()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn position(&self) -> DVec2 {
        self.state().current
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_running(&self) -> bool {
        self.task.run.is_active()
    }

    pub fn stop(&self) {
        self.task.run.stop();
    }
}

impl Drop for FollowerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Starts the per-refresh loop that eases `target` after the pointer.
///
/// With no target element nothing is scheduled and `None` comes back. If the
/// host refuses a frame the loop ends and the handle reports it stopped.
pub fn spawn_follower(
    scheduler: Rc<dyn FrameScheduler>,
    target: Option<Box<dyn TransformTarget>>,
    follower: Follower,
) -> Option<FollowerHandle> {
    let target = target?;
    let task = Rc::new(FollowerTask {
        follower: RefCell::new(follower),
        target,
        scheduler,
        run: RunFlag::new(),
    });
    schedule_tick(&task);
    Some(FollowerHandle { task })
}
