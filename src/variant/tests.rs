#![cfg(test)]

use std::rc::Rc;

use super::*;
use crate::util::alloc::{Lifecycle, Tracked};
use crate::util::panic::assert_panics;

crate::variant! {
    #[derive(Debug, PartialEq)]
    enum Value {
        #[default]
        Int(i32),
        Text(String),
        Float(f64),
    }
    impl Clone;
}

crate::variant! {
    #[derive(Debug)]
    enum Slot {
        Held(Tracked),
        Number(u64),
        Shared(Rc<str>),
    }
    impl Clone;
}

/// A value whose clone always panics, for observing what a failed copy leaves behind.
#[derive(Debug)]
struct Explosive;

impl Clone for Explosive {
    fn clone(&self) -> Self {
        panic!("explosive clone");
    }
}

crate::variant! {
    #[derive(Debug)]
    enum Fragile {
        Safe(u8),
        Bomb(Explosive),
    }
    impl Clone;
}

#[test]
fn test_construction_and_index() {
    let value = Value::default();
    assert_eq!(value, Value::Int(0));
    assert_eq!(value.index(), Some(0));

    let value = Value::new(String::from("text"));
    assert_eq!(value.index(), Some(1));
    assert_eq!(value.alternative_name(), Some("String"));

    let value = Value::from(2.5);
    assert_eq!(value.index(), Some(2));
    assert_eq!(value.index_or_npos(), 2);

    assert_eq!(Value::ALTERNATIVES, ["i32", "String", "f64"]);
    assert_eq!(<String as Alternative<Value>>::INDEX, 1);
}

#[test]
fn test_exclusivity() {
    let value = Value::new(7);
    assert!(value.holds::<i32>());
    assert!(!value.holds::<String>());
    assert!(!value.holds::<f64>());
    assert!(!value.is_valueless());

    let live: Vec<bool> = vec![
        value.try_get::<i32>().is_some(),
        value.try_get::<String>().is_some(),
        value.try_get::<f64>().is_some(),
    ];
    assert_eq!(live.iter().filter(|held| **held).count(), 1, "Exactly one alternative is live.");
}

#[test]
fn test_get() {
    let mut value = Value::new(String::from("abc"));
    assert_eq!(value.get::<String>().map(String::as_str), Ok("abc"));
    assert_eq!(value.get::<i32>(), Err(BadVariantAccess { requested: 0, live: Some(1) }));

    value.get_mut::<String>().unwrap().push('d');
    assert_eq!(value.try_get::<String>().map(String::as_str), Some("abcd"));
    assert!(value.try_get_mut::<f64>().is_none());
    assert!(value.get_mut::<f64>().is_err());

    assert_eq!(value.get_at::<1>().map(String::len), Ok(4));
    assert!(value.get_at::<0>().is_err());
    *value.get_at_mut::<1>().unwrap() = String::from("z");
    assert_eq!(value, Value::Text(String::from("z")));

    value.reset();
    assert_eq!(value.get::<String>(), Err(BadVariantAccess { requested: 1, live: None }));
    assert_eq!(
        value.get::<String>().unwrap_err().to_string(),
        "Bad variant access, requested alternative 1 from a valueless variant!"
    );
}

#[test]
fn test_into_alternative() {
    let value = Value::new(1.5);
    let value = value.into_alternative::<i32>().unwrap_err();
    assert_eq!(value.into_alternative::<f64>(), Ok(1.5));
}

#[test]
fn test_same_type_assignment_reuses_value() {
    let lifecycle = Lifecycle::new();
    let mut slot = Slot::new(lifecycle.track(1));
    let replacement = lifecycle.track(2);

    slot.assign_clone(&replacement);
    assert_eq!(slot.get::<Tracked>().map(|t| t.value), Ok(2));
    assert_eq!(lifecycle.clone_assigned(), 1, "The live value should be assigned over.");
    assert_eq!(lifecycle.cloned(), 0, "No new value should be constructed.");
    assert_eq!(lifecycle.dropped(), 0, "The live value shouldn't be destroyed.");

    slot.assign(lifecycle.track(3));
    assert_eq!(slot.get::<Tracked>().map(|t| t.value), Ok(3));
    assert_eq!(lifecycle.dropped(), 1, "Moving in a value replaces the old one in place.");
}

#[test]
fn test_different_type_assignment_destroys() {
    let lifecycle = Lifecycle::new();
    let mut slot = Slot::new(lifecycle.track(1));

    slot.assign(5_u64);
    assert_eq!(lifecycle.dropped(), 1, "The old alternative should be destroyed.");
    assert_eq!(slot.get::<u64>(), Ok(&5));

    let tracked = lifecycle.track(9);
    slot.assign_clone(&tracked);
    assert_eq!(lifecycle.cloned(), 1, "A different alternative should be copy constructed.");
    assert_eq!(lifecycle.clone_assigned(), 0);
    assert!(slot.holds::<Tracked>());

    drop(slot);
    drop(tracked);
    assert_eq!(lifecycle.live(), 0);
}

#[test]
fn test_emplace_always_reconstructs() {
    let lifecycle = Lifecycle::new();
    let mut slot = Slot::new(lifecycle.track(1));

    let stored = slot.emplace(lifecycle.track(2));
    stored.value += 1;
    assert_eq!(lifecycle.dropped(), 1, "Emplacing should destroy even a matching alternative.");
    assert_eq!(slot.get::<Tracked>().map(|t| t.value), Ok(3));
}

#[test]
fn test_valueless() {
    let lifecycle = Lifecycle::new();
    let mut slot = Slot::new(lifecycle.track(1));

    let moved = slot.take();
    assert!(slot.is_valueless(), "Moving out should leave the source valueless.");
    assert_eq!(slot.index(), None);
    assert_eq!(slot.index_or_npos(), VARIANT_NPOS);
    assert_eq!(slot.alternative_name(), None);
    assert!(moved.holds::<Tracked>());
    assert_eq!(lifecycle.dropped(), 0);

    let mut moved = moved;
    moved.reset();
    assert_eq!(lifecycle.dropped(), 1);
    assert!(moved.is_valueless());
    moved.reset();
    assert_eq!(lifecycle.dropped(), 1, "Resetting a valueless variant should do nothing.");
}

#[test]
fn test_clone() {
    let lifecycle = Lifecycle::new();
    let original = Slot::new(lifecycle.track(4));

    let copy = original.clone();
    assert_eq!(lifecycle.cloned(), 1);
    assert_eq!(copy.get::<Tracked>().map(|t| t.value), Ok(4));

    let mut target = Slot::new(lifecycle.track(0));
    target.clone_from(&original);
    assert_eq!(lifecycle.clone_assigned(), 1, "Matching alternatives should be assigned in place.");
    assert_eq!(lifecycle.cloned(), 1);

    let mut target = Slot::new(Rc::<str>::from("shared"));
    target.clone_from(&original);
    assert_eq!(lifecycle.cloned(), 2, "Different alternatives should be copy constructed.");
    assert!(target.holds::<Tracked>());

    target.clone_from(&Slot::valueless());
    assert!(target.is_valueless(), "Copying a valueless variant should leave the target valueless.");
    assert!(Slot::valueless().clone().is_valueless());

    let value = Value::new(String::from("copy"));
    assert_eq!(value.clone(), value);
}

#[test]
fn test_failed_copy_leaves_valueless() {
    let source = Fragile::new(Explosive);
    let mut target = Fragile::new(1_u8);

    assert_panics!({ target.clone_from(&source) });
    assert!(target.is_valueless(), "A panicking copy should leave the target valueless.");

    let mut target = Fragile::new(2_u8);
    assert_panics!({ target.assign_clone(&Explosive) });
    assert!(target.is_valueless());
}
