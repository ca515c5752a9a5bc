//! Compares `FixedList` against a `VecDeque` model over long random operation sequences.

use std::collections::VecDeque;
use std::ptr;

use fixed_list::{Error, FixedList};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const CAPACITY: usize = 8;
const OPERATIONS: usize = 10_000;

/// Enough payloads that the list sees both repeated references and references it never held.
const PAYLOAD_COUNT: usize = 12;

fn check_same_items(list: &FixedList<'_, u32, CAPACITY>, model: &VecDeque<&u32>) {
    assert_eq!(list.len(), model.len());
    assert_eq!(list.is_empty(), model.is_empty());
    assert_eq!(list.is_full(), model.len() == CAPACITY);

    assert!(list.iter().zip(model.iter()).all(|(a, b)| ptr::eq(a, *b)));
    assert!(list.iter().rev().zip(model.iter().rev()).all(|(a, b)| ptr::eq(a, *b)));
}

fn same_reference(actual: Option<&u32>, expected: Option<&u32>) -> bool {
    match (actual, expected) {
        (Some(actual), Some(expected)) => ptr::eq(actual, expected),
        (None, None) => true,
        _ => false,
    }
}

#[test]
fn matches_model() {
    for seed in [1_u64, 2, 3, 0x5EED] {
        // All payloads share one value so that only identity can tell them apart.
        let payloads = [0_u32; PAYLOAD_COUNT];

        let mut rng = SmallRng::seed_from_u64(seed);
        let mut list = FixedList::<u32, CAPACITY>::new();
        let mut model: VecDeque<&u32> = VecDeque::new();

        for _ in 0..OPERATIONS {
            let payload = &payloads[rng.random_range(0..PAYLOAD_COUNT)];

            match rng.random_range(0..6) {
                0 => {
                    let result = list.append(payload);

                    if model.len() == CAPACITY {
                        assert_eq!(result, Err(Error::Full { capacity: CAPACITY }));
                    } else {
                        assert_eq!(result, Ok(()));
                        model.push_back(payload);
                    }
                }
                1 => {
                    let result = list.push(payload);

                    if model.len() == CAPACITY {
                        assert_eq!(result, Err(Error::Full { capacity: CAPACITY }));
                    } else {
                        assert_eq!(result, Ok(()));
                        model.push_front(payload);
                    }
                }
                2 => assert!(same_reference(list.pop(), model.pop_front())),
                3 => assert!(same_reference(list.pop_tail(), model.pop_back())),
                4 => {
                    let expected = model
                        .iter()
                        .position(|item| ptr::eq(*item, payload))
                        .and_then(|position| model.remove(position));

                    assert!(same_reference(list.remove(payload), expected));
                }
                _ => {
                    assert!(same_reference(list.peek(), model.front().copied()));
                    assert!(same_reference(list.peek_tail(), model.back().copied()));
                }
            }

            check_same_items(&list, &model);
        }
    }
}
