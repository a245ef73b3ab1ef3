#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use proptest::prelude::*;

use super::*;
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

fn bits(vec: &BitVector) -> Vec<bool> {
    vec.iter().collect()
}

#[test]
fn test_construction() {
    let vec = BitVector::new();
    assert_eq!((vec.len(), vec.cap()), (0, 0), "A new BitVector shouldn't allocate.");

    let vec = BitVector::repeat(true, 5);
    assert_eq!(bits(&vec), [true; 5]);
    assert_eq!(vec.cap(), 8);

    let vec = BitVector::with_len(17);
    assert_eq!(bits(&vec), [false; 17]);
    assert_eq!(vec.cap(), 32);

    let vec = BitVector::repeat(true, 0);
    assert_eq!((vec.len(), vec.cap()), (0, 0));

    let mut vec = BitVector::repeat(true, 20);
    vec.assign(false, 3);
    assert_eq!(bits(&vec), [false; 3]);
    assert_eq!(vec.cap(), 32, "Assigning shouldn't release capacity.");
}

#[test]
fn test_capacity_floor() {
    let mut vec = BitVector::new();
    vec.push(true);
    assert_eq!(vec.cap(), 8, "A single bit should still allocate a whole byte.");

    vec.reserve(3);
    assert_eq!(vec.cap(), 8);
    vec.reserve(9);
    assert_eq!(vec.cap(), 16);
    vec.reserve(100);
    assert_eq!(vec.cap(), 128);

    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 8);
    vec.clear();
    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 0, "An empty BitVector should release its allocation.");
}

#[test]
fn test_push_and_pop() {
    let mut vec = BitVector::new();
    let mut caps = Vec::new();
    for i in 0..17 {
        vec.push(i % 3 == 0);
        caps.push(vec.cap());
    }
    assert_eq!(caps[..8], [8; 8]);
    assert_eq!(caps[8..16], [16; 8]);
    assert_eq!(caps[16], 32);

    for i in (0..17).rev() {
        assert_eq!(vec.pop(), Some(i % 3 == 0));
    }
    assert_eq!(vec.pop(), None);
    assert_eq!(vec.cap(), 32, "Popping shouldn't change capacity.");
    assert_eq!(vec.arr.iter().copied().max(), Some(0), "Popped bits should be cleared.");
}

#[test]
fn test_flip_is_isolated() {
    let mut vec = BitVector::repeat(true, 5);
    vec.flip(3);
    assert_eq!(bits(&vec), [true, true, true, false, true]);
    vec.flip(3);
    assert_eq!(bits(&vec), [true; 5]);

    assert_panics!({ vec.flip(5) });
    assert_panics!({ vec.set(5, true) });
}

#[test]
fn test_access() {
    let mut vec: BitVector = [true, false, false, true, true, false, true, false, true]
        .into_iter()
        .collect();

    assert_eq!(vec.get(3), Some(true));
    assert_eq!(vec.get(9), None);
    assert_eq!(vec.at(8), Ok(true));
    assert_eq!(vec.at(9), Err(IndexOutOfBounds { index: 9, len: 9 }));
    assert!(vec[0]);
    assert!(!vec[1]);
    assert_panics!({
        let _bit = vec[9];
    });

    assert_eq!(vec.front(), Some(true));
    assert_eq!(vec.back(), Some(true));
    vec.back_mut().unwrap().set(false);
    vec.front_mut().unwrap().flip();
    assert_eq!(vec.front(), Some(false));
    assert_eq!(vec.back(), Some(false));

    vec.set(1, true);
    assert_eq!(vec.at_mut(1).map(|bit| bit.get()), Ok(true));
    assert!(vec.at_mut(9).is_err());

    let mut empty = BitVector::new();
    assert_eq!((empty.front(), empty.back()), (None, None));
    assert!(empty.front_mut().is_none());
    assert!(empty.back_mut().is_none());
}

#[test]
fn test_bit_ref() {
    let mut vec = BitVector::with_len(10);
    {
        let mut bit = vec.at_mut(9).unwrap();
        assert!(!bit.get());
        assert!(!bit.replace(true));
        assert_eq!(bit, true);
        assert!(bool::from(&bit));
    }
    assert_eq!(vec.count_ones(), 1);
    assert_eq!(vec.get(8), Some(false), "Neighbouring bits should be untouched.");
}

#[test]
fn test_bit_ref_swaps() {
    let mut vec: BitVector = [true, false, false, false, false, false, false, false, false, true]
        .into_iter()
        .collect();

    {
        let mut iter = vec.iter_mut();
        let mut first = iter.next().unwrap();
        let mut second = iter.next().unwrap();
        first.swap(&mut second);
    }
    assert_eq!(bits(&vec)[..2], [false, true], "Swapping within a byte should work.");

    {
        let mut iter = vec.iter_mut();
        let mut first = iter.next().unwrap();
        let mut last = iter.next_back().unwrap();
        last.swap(&mut first);
        assert_eq!((first.get(), last.get()), (true, false), "Swapping across bytes should work.");
    }

    let mut plain = true;
    vec.at_mut(4).unwrap().swap_bool(&mut plain);
    assert!(!plain);
    assert_eq!(vec.get(4), Some(true));
}

#[test]
fn test_index_round_trip() {
    for index in [0, 1, 7, 8, 9, 63, 64, 1000] {
        assert_eq!(BitPos::from_index(index).index(), index);
    }
    assert_eq!(BitPos::from_index(13), BitPos { byte: 1, offset: 5 });
    assert_eq!(BitPos::from_index(13).mask(), 0b0010_0000);
}

#[test]
fn test_step_across_bytes() {
    let pos = BitPos::from_index(7);
    assert_eq!(pos.inc(), BitPos { byte: 1, offset: 0 }, "Incrementing should carry.");
    assert_eq!(pos.inc().dec(), Some(pos), "Decrementing should borrow.");
    assert_eq!(BitPos::from_index(0).dec(), None);
}

#[test]
fn test_seek() {
    let pos = BitPos::from_index(5);
    assert_eq!(pos.seek(3), Some(BitPos { byte: 1, offset: 0 }));
    assert_eq!(pos.seek(20), Some(BitPos::from_index(25)));
    assert_eq!(pos.seek(-5), Some(BitPos::from_index(0)));
    assert_eq!(pos.seek(-6), None, "Seeking before the first bit should fail.");

    let pos = BitPos::from_index(33);
    assert_eq!(pos.seek(-18), Some(BitPos::from_index(15)), "Borrowing should span bytes.");
    assert_eq!(pos.seek(-9), Some(BitPos { byte: 3, offset: 0 }));
    assert_eq!(pos.seek(0), Some(pos));
}

#[test]
fn test_resize_and_truncate() {
    let mut vec = BitVector::with_len(3);
    vec.resize(21, true);
    assert_eq!(vec.len(), 21);
    assert_eq!(vec.count_ones(), 18);
    assert_eq!(bits(&vec)[..3], [false; 3]);

    vec.truncate(9);
    assert_eq!(vec.count_ones(), 6, "Truncated bits should be cleared.");
    vec.resize(21, false);
    assert_eq!(vec.count_ones(), 6, "Growing again shouldn't resurrect old bits.");
    assert_eq!(bits(&vec)[9..], [false; 12]);

    vec.truncate(30);
    assert_eq!(vec.len(), 21);
    vec.resize(0, true);
    assert!(vec.is_empty());
    assert_eq!(vec.count_ones(), 0);
}

#[test]
fn test_resize_from_partial_byte() {
    // (old length, new length): within one byte, up to the next byte and across several bytes.
    for (old, new) in [(3, 6), (11, 12), (5, 20), (7, 8), (9, 16)] {
        let mut vec = BitVector::with_len(old);
        vec.resize(new, true);

        let expected: Vec<bool> = (0..new).map(|i| i >= old).collect();
        assert_eq!(bits(&vec), expected, "Growing {old} to {new} should keep the old bits.");
        assert_eq!(vec.count_ones(), new - old);
    }

    let mut vec = BitVector::from(vec![true, false, true]);
    vec.resize(6, true);
    assert_eq!(bits(&vec), [true, false, true, true, true, true]);
    vec.resize(13, false);
    vec.resize(14, true);
    assert_eq!(vec.count_ones(), 6);
    assert_eq!(vec.get(12), Some(false));
    assert_eq!(vec.get(13), Some(true));
}

#[test]
fn test_iterators() {
    let source: Vec<bool> = (0..20).map(|i| i % 3 == 1).collect();
    let vec = BitVector::from(source.clone());

    assert_eq!(vec.iter().len(), 20);
    assert_eq!(bits(&vec), source);
    assert_eq!(vec.iter().rev().collect::<Vec<_>>(), source.iter().rev().copied().collect::<Vec<_>>());

    let mut iter = vec.iter();
    assert_eq!(iter.nth(7), Some(source[7]), "Seeking should carry into the next byte.");
    assert_eq!(iter.next(), Some(source[8]));
    assert_eq!(iter.next_back(), Some(source[19]));
    assert_eq!(iter.nth(9), Some(source[18]));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let mut iter = vec.iter();
    assert_eq!(iter.nth(usize::MAX), None);
    assert_eq!(iter.len(), 0);

    let mut iter = vec.iter();
    iter.nth(15);
    assert_eq!(iter.next_back(), Some(source[19]));
    assert_eq!(iter.next_back(), Some(source[18]));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.collect::<Vec<_>>(), source[16..18]);
}

#[test]
fn test_iter_mut() {
    let mut vec = BitVector::with_len(12);
    for mut bit in vec.iter_mut().rev().step_by(3) {
        bit.flip();
    }
    assert_eq!(vec.to_string(), "001001001001");

    for mut bit in &mut vec {
        bit.flip();
    }
    assert_eq!(vec.to_string(), "110110110110");
}

#[test]
fn test_cursor() {
    let mut vec: BitVector = "0110100111".chars().map(|c| c == '1').collect();
    let mut cursor = vec.cursor_front();

    assert_eq!(cursor.read(), Some(false));
    assert_eq!(cursor.move_next().read(), Some(true));
    assert_eq!(cursor.move_offset(7).index(), 8, "Seeking should carry across the byte.");
    assert_eq!(cursor.read(), Some(true));
    assert_eq!(cursor.move_prev().index(), 7);
    assert_eq!(cursor.move_offset(-3).index(), 4);
    assert_eq!(cursor.write(false), Some(true));

    cursor.move_offset(10);
    assert!(cursor.is_end());
    assert_eq!(cursor.read(), None);
    assert_eq!(cursor.write(true), None);
    assert!(cursor.bit().is_none());
    assert_eq!(cursor.move_next().index(), 10, "Moving past the end should stop there.");

    cursor.move_offset(isize::MIN);
    assert_eq!(cursor.index(), 0);
    assert_eq!(cursor.move_prev().index(), 0, "Moving before the start should stop there.");

    assert!(cursor.try_move_to(11).is_err());
    assert_eq!(cursor.index(), 0);
    cursor.move_to(9).bit().unwrap().flip();
    assert_panics!({ cursor.move_to(11); });

    assert_eq!(vec.to_string(), "0110000110");
    assert!(vec.cursor_at(10).is_ok());
    assert_eq!(vec.cursor_at(11).err(), Some(IndexOutOfBounds { index: 11, len: 10 }));
}

#[test]
fn test_swap_and_take() {
    let mut a = BitVector::repeat(true, 3);
    let mut b = BitVector::with_len(12);
    a.swap_with(&mut b);
    assert_eq!((a.len(), b.len()), (12, 3));
    assert_eq!((a.cap(), b.cap()), (16, 8));

    let taken = b.take();
    assert_eq!((b.len(), b.cap()), (0, 0), "Taking should leave an empty BitVector.");
    assert_eq!(bits(&taken), [true; 3]);
}

#[test]
fn test_equality_and_hash() {
    let a: BitVector = [true, false, true].into_iter().collect();
    let mut b = BitVector::repeat(true, 3);
    b.flip(1);
    b.reserve(100);
    assert_eq!(a, b, "Capacity shouldn't affect equality.");

    let state = RandomState::new();
    assert_eq!(state.hash_one(&a), state.hash_one(&b));

    let mut c = a.clone();
    c.push(false);
    assert_ne!(a, c, "Length should affect equality even when the extra bits are zero.");
    assert_eq!(a.clone(), a);
    assert_eq!(a.clone().cap(), a.cap());
}

#[test]
fn test_formatting() {
    let vec: BitVector = [true, false, true].into_iter().collect();
    assert_eq!(vec.to_string(), "101");
    assert_eq!(format!("{vec:?}"), "BitVector { contents: \"101\", len: 3, cap: 8 }");
    assert_eq!(format!("{:?}", vec.iter().collect::<Vec<_>>()), "[true, false, true]");
}

#[derive(Debug, Clone)]
enum Op {
    Push(bool),
    Pop,
    Flip(usize),
    Resize(usize, bool),
    Truncate(usize),
    Shrink,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<bool>().prop_map(Op::Push),
        Just(Op::Pop),
        (0_usize..100).prop_map(Op::Flip),
        (0_usize..100, any::<bool>()).prop_map(|(n, v)| Op::Resize(n, v)),
        (0_usize..100).prop_map(Op::Truncate),
        Just(Op::Shrink),
    ]
}

proptest! {
    #[test]
    fn matches_std_vec_of_bool(ops in proptest::collection::vec(arb_op(), 0..100)) {
        let mut vec = BitVector::new();
        let mut std_vec: Vec<bool> = Vec::new();
        for op in ops {
            match op {
                Op::Push(v) => {
                    vec.push(v);
                    std_vec.push(v);
                },
                Op::Pop => prop_assert_eq!(vec.pop(), std_vec.pop()),
                Op::Flip(i) => if i < std_vec.len() {
                    vec.flip(i);
                    std_vec[i] = !std_vec[i];
                },
                Op::Resize(n, v) => {
                    vec.resize(n, v);
                    std_vec.resize(n, v);
                },
                Op::Truncate(n) => {
                    vec.truncate(n);
                    std_vec.truncate(n);
                },
                Op::Shrink => vec.shrink_to_fit(),
            }
            prop_assert_eq!(bits(&vec), std_vec.clone());
            prop_assert_eq!(vec.count_ones(), std_vec.iter().filter(|bit| **bit).count());
            prop_assert!(vec.cap() >= vec.len());
            prop_assert_eq!(vec.cap() % 8, 0);
        }
    }

    #[test]
    fn capacity_follows_the_bit_policy(requested in 0_usize..5000) {
        let mut vec = BitVector::new();
        vec.reserve(requested);
        let expected = match requested {
            0 => 0,
            n => n.next_power_of_two().max(8),
        };
        prop_assert_eq!(vec.cap(), expected);
    }

    #[test]
    fn iterator_seeks_match_indexing(len in 1_usize..200, steps in proptest::collection::vec(0_usize..20, 0..20)) {
        let vec: BitVector = (0..len).map(|i| i.count_ones() % 2 == 0).collect();
        let mut iter = vec.iter();
        let mut index = 0;
        for step in steps {
            let expected = vec.get(index + step);
            prop_assert_eq!(iter.nth(step), expected);
            index = (index + step + 1).min(len);
        }
    }
}
