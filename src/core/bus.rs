use super::follower::Viewport;
use glam::DVec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEvent {
    pub offset: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerMove {
    pub client: DVec2,
    pub viewport: Viewport,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    /// A passive listener can never cancel the default action.
    pub passive: bool,
}

impl ListenerOptions {
    #[cfg_attr(not(test), allow(dead_code))]
    pub const ACTIVE: Self = Self { passive: false };
    pub const PASSIVE: Self = Self { passive: true };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Default-action state handed to each listener during dispatch.
#[derive(Debug, Default)]
pub struct EventControl {
    passive: bool,
    default_prevented: bool,
}

impl EventControl {
    pub fn prevent_default(&mut self) {
        if self.passive {
            log::warn!("[bus] prevent_default ignored inside a passive listener");
            return;
        }
        self.default_prevented = true;
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_passive(&self) -> bool {
        self.passive
    }
}

type Handler<E> = Box<dyn FnMut(&E, &mut EventControl)>;

struct Listener<E> {
    id: SubscriptionId,
    options: ListenerOptions,
    handler: Handler<E>,
}

/// Named event source with explicit subscribe/unsubscribe.
pub struct EventSource<E> {
    next_id: u64,
    listeners: SmallVec<[Listener<E>; 4]>,
}

impl<E> Default for EventSource<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            listeners: SmallVec::new(),
        }
    }
}

impl<E> EventSource<E> {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        options: ListenerOptions,
        handler: impl FnMut(&E, &mut EventControl) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener {
            id,
            options,
            handler: Box::new(handler),
        });
        id
    }

    /// Returns `false` if `id` was not (or no longer) subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        match self.listeners.iter().position(|l| l.id == id) {
            Some(index) => {
                self.listeners.remove(index);
                true
            }
            None => false,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Runs every listener synchronously in registration order. Returns
    /// `true` when a non-passive listener cancelled the default action.
    pub fn dispatch(&mut self, event: &E) -> bool {
        let mut prevented = false;
        for listener in self.listeners.iter_mut() {
            let mut control = EventControl {
                passive: listener.options.passive,
                default_prevented: prevented,
            };
            (listener.handler)(event, &mut control);
            prevented = control.default_prevented;
        }
        prevented
    }
}

/// Event sources the page effects subscribe to.
#[derive(Default)]
pub struct PageEvents {
    pub scroll: EventSource<ScrollEvent>,
    pub pointer: EventSource<PointerMove>,
}
