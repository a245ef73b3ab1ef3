//! Test collaborators for observing the lifecycle of stored values.
//!
//! A [`Lifecycle`] is created per test and handed explicitly to every [`Tracked`] value, so
//! counters never leak between test cases.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZeroSizedType;

/// Counts the lifecycle events of every [`Tracked`] value created from it.
#[derive(Debug, Default)]
pub struct Lifecycle {
    constructed: Cell<usize>,
    cloned: Cell<usize>,
    clone_assigned: Cell<usize>,
    dropped: Cell<usize>,
}

impl Lifecycle {
    pub fn new() -> Rc<Lifecycle> {
        Rc::new(Lifecycle::default())
    }

    /// Creates a new tracked value, counted as a construction.
    pub fn track(self: &Rc<Self>, value: i32) -> Tracked {
        Tracked::new(self, value)
    }

    pub fn constructed(&self) -> usize {
        self.constructed.get()
    }

    pub fn cloned(&self) -> usize {
        self.cloned.get()
    }

    pub fn clone_assigned(&self) -> usize {
        self.clone_assigned.get()
    }

    pub fn dropped(&self) -> usize {
        self.dropped.get()
    }

    /// The number of tracked values that currently exist.
    pub fn live(&self) -> usize {
        self.constructed() + self.cloned() - self.dropped()
    }

    fn bump(counter: &Cell<usize>) {
        counter.set(counter.get() + 1);
    }
}

/// A value which reports construction, cloning, clone-assignment and dropping to a [`Lifecycle`].
#[derive(Debug)]
pub struct Tracked {
    pub value: i32,
    lifecycle: Rc<Lifecycle>,
}

impl Tracked {
    pub fn new(lifecycle: &Rc<Lifecycle>, value: i32) -> Tracked {
        Lifecycle::bump(&lifecycle.constructed);
        Tracked {
            value,
            lifecycle: Rc::clone(lifecycle),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Lifecycle::bump(&self.lifecycle.cloned);
        Tracked {
            value: self.value,
            lifecycle: Rc::clone(&self.lifecycle),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        Lifecycle::bump(&self.lifecycle.clone_assigned);
        self.value = source.value;
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        Lifecycle::bump(&self.lifecycle.dropped);
    }
}
