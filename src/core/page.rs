use super::bus::{ListenerOptions, PageEvents, PointerMove, ScrollEvent, SubscriptionId};
use super::config::{ConfigError, EffectsConfig};
use super::constants::NAVBAR_SCROLLED_CLASS;
use super::follower::{Follower, Viewport};
use super::nav::navbar_scrolled;
use super::orb::{spawn_follower, FollowerHandle, TransformTarget};
use super::parallax::{Parallax, StyleRule};
use super::schedule::FrameScheduler;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;

/// Class list of an element, as far as the navbar toggle needs it.
pub trait ClassTarget {
    fn set_class(&self, class: &str, on: bool);
}

/// Elements found on the page at mount time. Any of them may be missing.
#[derive(Default)]
pub struct PageTargets {
    pub orb: Option<Box<dyn TransformTarget>>,
    pub navbar: Option<Box<dyn ClassTarget>>,
    pub parallax_rule: Option<Box<dyn StyleRule>>,
}

/// Owns the scroll and pointer effects of one page and their subscriptions.
pub struct PageEffects {
    events: Rc<RefCell<PageEvents>>,
    follower: Option<Rc<FollowerHandle>>,
    parallax: Parallax,
    scroll_subs: Vec<SubscriptionId>,
    pointer_subs: Vec<SubscriptionId>,
    mounted: bool,
}

impl PageEffects {
    pub fn mount(
        config: &EffectsConfig,
        scheduler: Rc<dyn FrameScheduler>,
        targets: PageTargets,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let events = Rc::new(RefCell::new(PageEvents::default()));
        let mut scroll_subs = Vec::new();
        let mut pointer_subs = Vec::new();

        let parallax = Parallax::new(scheduler.clone(), config.parallax_scale);
        if let Some(rule) = targets.parallax_rule {
            parallax.attach(rule);
        }
        {
            let parallax = parallax.clone();
            let id = events
                .borrow_mut()
                .scroll
                .subscribe(ListenerOptions::PASSIVE, move |ev, _| {
                    parallax.on_scroll(ev.offset)
                });
            scroll_subs.push(id);
        }

        if let Some(navbar) = targets.navbar {
            let threshold = config.navbar_threshold;
            let id = events
                .borrow_mut()
                .scroll
                .subscribe(ListenerOptions::PASSIVE, move |ev, _| {
                    navbar.set_class(NAVBAR_SCROLLED_CLASS, navbar_scrolled(ev.offset, threshold))
                });
            scroll_subs.push(id);
        }

        let follower = spawn_follower(
            scheduler,
            targets.orb,
            Follower::new(config.orb_smoothing, config.orb_sensitivity),
        )
        .map(Rc::new);
        if let Some(handle) = &follower {
            let handle = Rc::clone(handle);
            let id = events
                .borrow_mut()
                .pointer
                .subscribe(ListenerOptions::PASSIVE, move |ev, _| {
                    handle.pointer_moved(ev.client, ev.viewport)
                });
            pointer_subs.push(id);
        }

        Ok(Self {
            events,
            follower,
            parallax,
            scroll_subs,
            pointer_subs,
            mounted: true,
        })
    }

    /// Shared event sources; the host feeds DOM events into these.
    pub fn events(&self) -> Rc<RefCell<PageEvents>> {
        Rc::clone(&self.events)
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn dispatch_scroll(&self, offset: f64) -> bool {
        self.events
            .borrow_mut()
            .scroll
            .dispatch(&ScrollEvent { offset })
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn dispatch_pointer(&self, client: DVec2, viewport: Viewport) -> bool {
        self.events
            .borrow_mut()
            .pointer
            .dispatch(&PointerMove { client, viewport })
    }

    pub fn follower(&self) -> Option<&FollowerHandle> {
        self.follower.as_deref()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn parallax(&self) -> &Parallax {
        &self.parallax
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Unsubscribes everything, stops the follower loop and removes the
    /// parallax rule. Safe to call more than once.
    pub fn teardown(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        {
            let mut events = self.events.borrow_mut();
            for id in self.scroll_subs.drain(..) {
                events.scroll.unsubscribe(id);
            }
            for id in self.pointer_subs.drain(..) {
                events.pointer.unsubscribe(id);
            }
        }
        if let Some(handle) = self.follower.take() {
            handle.stop();
        }
        self.parallax.detach();
    }
}

impl Drop for PageEffects {
    fn drop(&mut self) {
        self.teardown();
    }
}
