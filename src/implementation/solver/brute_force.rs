// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the implementation of an exhaustive solver. That is
//! a solver which enumerates all the 2^n subsets of the items and keeps track
//! of all the feasible subsets which reach the maximum benefit.
//!
//! Obviously, this is not the implementation you will want to use if you are
//! after solving anything but tiny instances. It is however very handy as a
//! reference when testing the other solvers.

use bit_vec::BitVec;
use fxhash::FxHashSet;
use log::debug;

use crate::{Error, ItemId, ItemPool, Solution, Solver};

/// Converts `k` into a selection of `n` bits. The most significant of these
/// bits comes first (it decides the fate of the item with identity 1).
///
/// # Example
/// ```
/// # use knapsack::generate_subset;
/// let bits = generate_subset(6, 4);
/// assert_eq!(vec![false, true, true, false], bits.iter().collect::<Vec<_>>());
/// ```
pub fn generate_subset(k: usize, n: usize) -> BitVec {
    (0..n).map(|i| {
            let shift = n - 1 - i;
            shift < usize::BITS as usize && (k >> shift) & 1 == 1
        })
        .collect()
}

/// The exhaustive solver. It returns *all* the distinct optimal subsets,
/// sorted by their sequence of identities.
#[derive(Debug, Default, Clone, Copy)]
pub struct BruteForce;

impl BruteForce {
    pub fn new() -> Self {
        BruteForce
    }
}

impl Solver for BruteForce {
    type Outcome = Vec<Solution>;

    fn solve(&mut self, pool: &mut ItemPool) -> Result<Self::Outcome, Error> {
        pool.check_unpartitioned()?;

        let n = pool.len();
        let nb_subsets = u32::try_from(n).ok()
            .and_then(|shift| 1_usize.checked_shl(shift))
            .ok_or(Error::TooManyItems { nb_items: n })?;
        debug!("brute force: enumerating {} subsets", nb_subsets);

        let capacity = pool.capacity();
        let mut largest  = 0;
        let mut optimal  = vec![];
        let mut distinct = FxHashSet::<Vec<ItemId>>::default();

        for k in 0..nb_subsets {
            pool.partition_by_selection(&generate_subset(k, n))?;
            let current = pool.kept_solution();
            pool.reset();

            if !current.is_feasible(capacity) {
                continue;
            }
            if current.benefit() > largest {
                debug!("brute force: benefit improved from {} to {}", largest, current.benefit());
                largest = current.benefit();
                optimal.clear();
                distinct.clear();
            }
            if current.benefit() == largest && distinct.insert(current.items().to_vec()) {
                optimal.push(current);
            }
        }

        optimal.sort_unstable_by(|a: &Solution, b: &Solution| a.items().cmp(b.items()));
        debug!("brute force: {} optimal subset(s) of benefit {}", optimal.len(), largest);
        Ok(optimal)
    }
}

#[cfg(test)]
mod test_brute_force {
    use bit_vec::BitVec;

    use crate::{BruteForce, Solver, ItemPool, ItemId, PoolState, Error, generate_subset};

    fn ids(v: &[usize]) -> Vec<ItemId> {
        v.iter().copied().map(ItemId).collect()
    }

    #[test]
    fn generate_subset_pads_with_leading_zeroes() {
        let expected = [false, false, false, true].iter().copied().collect::<BitVec>();
        assert_eq!(expected, generate_subset(1, 4));
    }
    #[test]
    fn generate_subset_enumerates_every_selection_once() {
        let all = (0..8).map(|k| generate_subset(k, 3)).collect::<Vec<_>>();
        for i in 0..all.len() {
            for j in i + 1..all.len() {
                assert_ne!(all[i], all[j]);
            }
        }
    }
    #[test]
    fn generate_subset_of_zero_bits_is_empty() {
        assert!(generate_subset(0, 0).is_empty());
    }

    #[test]
    fn finds_the_optimum() {
        let mut pool = ItemPool::build(10, &[2, 3, 4, 5], &[3, 4, 5, 6]).unwrap();
        let sols = BruteForce.solve(&mut pool).unwrap();
        assert!(!sols.is_empty());
        for s in sols.iter() {
            assert_eq!(13, s.benefit());
            assert!(s.weight() <= 10);
        }
    }
    #[test]
    fn collects_all_optimal_subsets() {
        // {1,2} and {3} both reach 10
        let mut pool = ItemPool::build(5, &[2, 3, 5], &[4, 6, 10]).unwrap();
        let sols = BruteForce.solve(&mut pool).unwrap();
        assert_eq!(2, sols.len());
        assert_eq!(ids(&[1, 2]), sols[0].items());
        assert_eq!(ids(&[3]), sols[1].items());
        assert!(sols.iter().all(|s| s.benefit() == 10));
    }
    #[test]
    fn restarts_the_collection_on_a_strict_improvement() {
        let mut pool = ItemPool::build(3, &[1, 1, 3], &[1, 1, 5]).unwrap();
        let sols = BruteForce.solve(&mut pool).unwrap();
        assert_eq!(1, sols.len());
        assert_eq!(ids(&[3]), sols[0].items());
    }
    #[test]
    fn empty_instance_yields_the_empty_set() {
        let mut pool = ItemPool::build(10, &[], &[]).unwrap();
        let sols = BruteForce.solve(&mut pool).unwrap();
        assert_eq!(1, sols.len());
        assert!(sols[0].is_empty());
    }
    #[test]
    fn item_heavier_than_the_sack_yields_the_empty_set() {
        let mut pool = ItemPool::build(3, &[4], &[7]).unwrap();
        let sols = BruteForce.solve(&mut pool).unwrap();
        assert_eq!(1, sols.len());
        assert!(sols[0].is_empty());
        assert_eq!(0, sols[0].benefit());
    }
    #[test]
    fn zero_capacity_yields_the_empty_set() {
        let mut pool = ItemPool::build(0, &[1, 2], &[3, 4]).unwrap();
        let sols = BruteForce.solve(&mut pool).unwrap();
        assert_eq!(1, sols.len());
        assert!(sols[0].is_empty());
    }
    #[test]
    fn leaves_the_pool_unpartitioned() {
        let mut pool = ItemPool::build(10, &[2, 3], &[3, 4]).unwrap();
        BruteForce.solve(&mut pool).unwrap();
        assert_eq!(PoolState::Unpartitioned, pool.state());
    }
    #[test]
    fn refuses_a_partitioned_pool() {
        let mut pool = ItemPool::build(10, &[2, 3], &[3, 4]).unwrap();
        pool.partition_by_greedy(10).unwrap();
        let err = BruteForce.solve(&mut pool).unwrap_err();
        assert!(matches!(err, Error::InvalidState { .. }));
    }
    #[test]
    fn refuses_to_enumerate_too_many_subsets() {
        let weights  = vec![1; usize::BITS as usize];
        let benefits = vec![1; usize::BITS as usize];
        let mut pool = ItemPool::build(10, &weights, &benefits).unwrap();
        let err = BruteForce.solve(&mut pool).unwrap_err();
        assert_eq!(Error::TooManyItems { nb_items: usize::BITS as usize }, err);
    }
}
