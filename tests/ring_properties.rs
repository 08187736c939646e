//! Property tests for RingBuffer
//!
//! Random operation sequences checked against a `VecDeque<u8>` model bounded
//! to `capacity - 1` bytes.

use std::collections::VecDeque;

use bytering::{ ReadAmount, RingBuffer };
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Write(Vec<u8>),
    Read(usize),
    ReadAll,
    Peek(usize),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => prop::collection::vec(any::<u8>(), 0..40).prop_map(Op::Write),
        3 => (0usize..40).prop_map(Op::Read),
        1 => Just(Op::ReadAll),
        2 => (0usize..40).prop_map(Op::Peek),
        1 => Just(Op::Clear),
    ]
}

fn capacity() -> impl Strategy<Value = usize> {
    (0u32..7).prop_map(|shift| 1usize << shift)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_matches_bounded_deque(cap in capacity(), ops in prop::collection::vec(op(), 1..200)) {
        let mut ring = RingBuffer::new(cap).unwrap();
        let mut model: VecDeque<u8> = VecDeque::new();
        let limit = cap - 1;

        for op in ops {
            match op {
                Op::Write(data) => {
                    let room = limit - model.len();
                    let expected = data.len().min(room);
                    prop_assert_eq!(ring.write(&data), expected);
                    model.extend(&data[..expected]);
                }
                Op::Read(n) => {
                    let take = n.min(model.len());
                    let expected: Vec<u8> = model.drain(..take).collect();
                    prop_assert_eq!(ring.read(ReadAmount::AtMost(n)), expected);
                }
                Op::ReadAll => {
                    let expected: Vec<u8> = model.drain(..).collect();
                    prop_assert_eq!(ring.read(ReadAmount::All), expected);
                }
                Op::Peek(i) => {
                    match model.get(i) {
                        Some(&b) => prop_assert_eq!(ring.peek(i).unwrap(), b),
                        None => prop_assert!(ring.peek(i).is_err()),
                    }
                }
                Op::Clear => {
                    ring.clear();
                    model.clear();
                }
            }

            prop_assert_eq!(ring.used_count(), model.len());
            prop_assert_eq!(ring.used_count() + ring.free_space(), cap - 1);
        }
    }

    #[test]
    fn prop_round_trip_from_empty(data in prop::collection::vec(any::<u8>(), 0..255)) {
        let mut ring = RingBuffer::new(256).unwrap();
        prop_assert_eq!(ring.write(&data), data.len());
        prop_assert_eq!(ring.read(ReadAmount::All), data);
        prop_assert_eq!(ring.used_count(), 0);
    }

    #[test]
    fn prop_non_power_of_two_rejected(cap in 1usize..10_000) {
        prop_assume!(!cap.is_power_of_two());
        prop_assert!(RingBuffer::new(cap).is_err());
    }
}
