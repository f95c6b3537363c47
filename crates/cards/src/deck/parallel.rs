// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand iteration.
use std::thread;

use super::{Deck, MAX_HAND_SIZE};
use crate::Card;

/// Pascal triangle for n <= 52 and k <= 7.
const fn make_binomials() -> [[u64; MAX_HAND_SIZE + 1]; Deck::SIZE + 1] {
    let mut t = [[0u64; MAX_HAND_SIZE + 1]; Deck::SIZE + 1];
    let mut n = 0;

    while n <= Deck::SIZE {
        t[n][0] = 1;

        let mut k = 1;
        while k <= MAX_HAND_SIZE && n > 0 {
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const BINOMIALS: [[u64; MAX_HAND_SIZE + 1]; Deck::SIZE + 1] = make_binomials();

/// Returns the binomial coefficient n choose k.
#[inline]
fn nck(n: usize, k: usize) -> u64 {
    assert!(n <= Deck::SIZE, "n={n} must be 0 <= n <= 52");
    assert!(k <= MAX_HAND_SIZE, "k={k} must be 0 <= k <= 7");
    BINOMIALS[n][k]
}

/// Returns the positions of the nth k-combination of 0..n in lexicographic
/// order.
fn nth_combination(mut nth: u64, n: usize, k: usize) -> [usize; MAX_HAND_SIZE] {
    let mut pos = [0; MAX_HAND_SIZE];
    let mut next = 0;

    for (i, p) in pos.iter_mut().enumerate().take(k) {
        // Skip all the combinations that start with next at position i.
        loop {
            let skipped = nck(n - next - 1, k - i - 1);
            if nth < skipped {
                break;
            }

            nth -= skipped;
            next += 1;
        }

        *p = next;
        next += 1;
    }

    pos
}

impl Deck {
    /// Parallel for each, calls the `f` closure for each k-cards hand.
    ///
    /// The closure takes an usize that is the task identifier (0..num_task)
    /// and a slice of cards of length k, each task visits a contiguous range
    /// of hands.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn par_for_each<F>(&self, num_tasks: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((1..=MAX_HAND_SIZE).contains(&k), "1 <= k <= 7");
        assert!(num_tasks > 0);

        let n = self.cards.len();
        if k > n {
            return;
        }

        let num_hands = nck(n, k);
        let hands_per_task = num_hands.div_ceil(num_tasks as u64);

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let start = task_id as u64 * hands_per_task;
                if start >= num_hands {
                    break;
                }

                let f = &f;
                s.spawn(move || {
                    let mut pos = nth_combination(start, n, k);
                    let count = hands_per_task.min(num_hands - start) as usize;
                    self.visit_from(k, &mut pos, count, |hand| f(task_id, hand));
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::next_combination;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn test_nck() {
        [1, 52, 1326, 22100, 270725, 2598960, 20358520, 133784560]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(52, k), v));

        [1, 5, 10, 10, 5, 1, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(5, k), v));

        assert_eq!(nck(0, 0), 1);
        assert_eq!(nck(2, 3), 0);
    }

    #[test]
    fn test_nth_combination() {
        let (n, k) = (12, 5);
        let mut pos = [0, 1, 2, 3, 4];
        let mut nth = 0;

        loop {
            assert_eq!(nth_combination(nth, n, k)[..k], pos);
            nth += 1;

            if next_combination(&mut pos, n).is_none() {
                break;
            }
        }

        assert_eq!(nth, nck(n, k));
    }

    #[test]
    fn par_for_each_counts() {
        let deck = Deck::default();

        for tasks in [1, 3, 8] {
            let counter = AtomicU64::new(0);
            deck.par_for_each(tasks, 5, |task_id, hand| {
                assert!(task_id < tasks);
                assert_eq!(hand.len(), 5);
                counter.fetch_add(1, Ordering::Relaxed);
            });

            assert_eq!(counter.load(Ordering::Relaxed), 2_598_960);
        }
    }
}
