/*
seeded_random.rs

Copyright 2025 Hervé Quatremain

This file is part of Pathquest.

Pathquest is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Pathquest is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Pathquest. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Reproducible pseudo-random numbers derived from a seed string.
//!
//! The same seed string always produces the same sequence, on every platform, so a maze can be
//! shared by giving its seed.

/// Multiplier of the linear congruential step.
const MULTIPLIER: i64 = 9301;

/// Increment of the linear congruential step.
const INCREMENT: i64 = 49297;

/// Modulus of the linear congruential step. Returned values are `state / MODULUS`.
const MODULUS: i64 = 233280;

/// Stateful pseudo-random source.
///
/// One object is created per seed and owned by the code that consumes it. There is no shared
/// state between two objects, even when they were created from the same seed.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    /// Current value of the register. Holds the 32-bit seed hash until the first draw, and a
    /// value in `[0, MODULUS)` afterwards.
    state: i64,
}

impl SeededRandom {
    /// Create a [`SeededRandom`] object for the given seed.
    pub fn new(seed: &str) -> Self {
        Self {
            state: i64::from(Self::hash(seed)),
        }
    }

    /// Compute the 32-bit polynomial rolling hash of the seed (`hash * 31 + code unit`, wrapping
    /// at each step). The seed is read as UTF-16 code units.
    pub fn hash(seed: &str) -> i32 {
        seed.encode_utf16().fold(0i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
    }

    /// Advance the generator and return a value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        // Euclidean remainder: a negative seed hash must not produce a negative value
        self.state = (self.state * MULTIPLIER + INCREMENT).rem_euclid(MODULUS);
        self.state as f64 / MODULUS as f64
    }

    /// Return a random index in `0..bound`, or 0 when `bound` is zero.
    fn next_index(&mut self, bound: usize) -> usize {
        let i: usize = (self.next_f64() * bound as f64).floor() as usize;
        // Guard against rounding at the upper end
        i.min(bound.saturating_sub(1))
    }

    /// Shuffle the slice in place with the Fisher-Yates algorithm, from the last element down.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j: usize = self.next_index(i + 1);
            items.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn hash_matches_rolling_polynomial() {
        assert_eq!(SeededRandom::hash(""), 0);
        assert_eq!(SeededRandom::hash("abc"), 96354);
        assert_eq!(SeededRandom::hash("hello world"), 1794106052);
        // Wraps around to a negative value
        assert_eq!(SeededRandom::hash("zzzzzzzz"), -1910022912);
    }

    #[test]
    fn empty_seed_sequence() {
        let mut random = SeededRandom::new("");
        assert!(close(random.next_f64(), 49297.0 / 233280.0));
        assert!(close(random.next_f64(), 165494.0 / 233280.0));
        assert!(close(random.next_f64(), 127551.0 / 233280.0));
    }

    #[test]
    fn negative_hash_stays_in_range() {
        let mut random = SeededRandom::new("zzzzzzzz");
        assert!(close(random.next_f64(), 183505.0 / 233280.0));
        for _ in 0..1000 {
            let v: f64 = random.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededRandom::new("maze");
        let mut b = SeededRandom::new("maze");
        for _ in 0..100 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        }
    }

    #[test]
    fn index_stays_in_bounds() {
        let mut random = SeededRandom::new("bounds");
        assert_eq!(random.next_index(0), 0);
        assert_eq!(random.next_index(1), 0);
        for _ in 0..1000 {
            assert!(random.next_index(4) < 4);
        }
    }

    #[test]
    fn shuffle_short_slices() {
        let mut random = SeededRandom::new("short");
        let mut empty: [u8; 0] = [];
        random.shuffle(&mut empty);
        let mut one: [u8; 1] = [7];
        random.shuffle(&mut one);
        assert_eq!(one, [7]);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut random = SeededRandom::new("shuffle");
        let mut items: [u8; 4] = [0, 1, 2, 3];
        random.shuffle(&mut items);
        let mut sorted = items;
        sorted.sort_unstable();
        assert_eq!(sorted, [0, 1, 2, 3]);
    }
}
