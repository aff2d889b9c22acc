// Host-side tests for the event bus: ordering, unsubscription and passive listeners.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod fx {
    pub mod bus {
        include!("../src/core/bus.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod follower {
        include!("../src/core/follower.rs");
    }
    pub mod highlight {
        include!("../src/core/highlight.rs");
    }
    pub mod nav {
        include!("../src/core/nav.rs");
    }
    pub mod orb {
        include!("../src/core/orb.rs");
    }
    pub mod page {
        include!("../src/core/page.rs");
    }
    pub mod parallax {
        include!("../src/core/parallax.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
    pub mod schedule {
        include!("../src/core/schedule.rs");
    }
}

use fx::bus::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn listeners_run_in_registration_order() {
    let mut source = EventSource::<ScrollEvent>::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    for tag in ["a", "b", "c"] {
        let seen = seen.clone();
        source.subscribe(ListenerOptions::PASSIVE, move |ev: &ScrollEvent, _| {
            seen.borrow_mut().push((tag, ev.offset))
        });
    }

    source.dispatch(&ScrollEvent { offset: 7.0 });
    assert_eq!(*seen.borrow(), vec![("a", 7.0), ("b", 7.0), ("c", 7.0)]);
}

#[test]
fn unsubscribed_listener_is_not_invoked() {
    let mut source = EventSource::<ScrollEvent>::new();
    let hits = Rc::new(RefCell::new(0));
    let h = hits.clone();
    let id = source.subscribe(ListenerOptions::PASSIVE, move |_, _| *h.borrow_mut() += 1);
    assert_eq!(source.len(), 1);

    assert!(source.unsubscribe(id));
    assert!(!source.unsubscribe(id));
    assert!(source.is_empty());

    source.dispatch(&ScrollEvent { offset: 1.0 });
    assert_eq!(*hits.borrow(), 0);
}

#[test]
fn unsubscribing_one_keeps_the_others() {
    let mut source = EventSource::<ScrollEvent>::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut ids = Vec::new();
    for tag in 0..3 {
        let seen = seen.clone();
        ids.push(source.subscribe(ListenerOptions::PASSIVE, move |_, _| {
            seen.borrow_mut().push(tag)
        }));
    }
    source.unsubscribe(ids[1]);
    source.dispatch(&ScrollEvent { offset: 0.0 });
    assert_eq!(*seen.borrow(), vec![0, 2]);
}

#[test]
fn passive_listener_cannot_cancel_the_default_action() {
    let mut source = EventSource::<ScrollEvent>::new();
    source.subscribe(ListenerOptions::PASSIVE, |_, control| {
        assert!(control.is_passive());
        control.prevent_default();
        assert!(!control.default_prevented());
    });
    assert!(!source.dispatch(&ScrollEvent { offset: 3.0 }));
}

#[test]
fn active_listener_can_cancel_the_default_action() {
    let mut source = EventSource::<ScrollEvent>::new();
    source.subscribe(ListenerOptions::ACTIVE, |_, control| control.prevent_default());
    let later = Rc::new(RefCell::new(None));
    let l = later.clone();
    source.subscribe(ListenerOptions::PASSIVE, move |_, control| {
        *l.borrow_mut() = Some(control.default_prevented())
    });

    assert!(source.dispatch(&ScrollEvent { offset: 3.0 }));
    assert_eq!(*later.borrow(), Some(true));
}

#[test]
fn dispatch_without_listeners_is_a_no_op() {
    let mut events = PageEvents::default();
    assert!(events.scroll.is_empty());
    assert!(events.pointer.is_empty());
    assert!(!events.scroll.dispatch(&ScrollEvent { offset: 1.0 }));
}
