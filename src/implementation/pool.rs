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

//! This module provides the implementation of the item pool. The pool owns
//! all the items of one knapsack instance and keeps track of the bucket each
//! of them currently belongs to. All solvers work by partitioning the pool
//! into a set of *kept* items (those that go in the sack) and a set of
//! *discarded* items.
//!
//! The pool follows a very simple state machine:
//! ```text
//! Unpartitioned --[partition_*]--> Partitioned --[reset]--> Unpartitioned
//! ```
//! Attempting to partition a pool which is already partitioned is an error.

use std::fmt;

use binary_heap_plus::BinaryHeap;
use bit_vec::BitVec;
use log::{debug, warn};

use crate::{Item, ItemId, Solution, Error, ByRatioThenIdentity};

/// The bucket an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// The pool is not partitioned
    Unassigned,
    /// The item goes in the sack
    Kept,
    /// The item stays out of the sack
    Discarded,
}

/// The state of the pool as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolState {
    /// All items are unassigned
    Unpartitioned,
    /// Every item is either kept or discarded
    Partitioned,
}
impl fmt::Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PoolState::Unpartitioned => write!(f, "unpartitioned"),
            PoolState::Partitioned   => write!(f, "partitioned"),
        }
    }
}

/// The working collection of items of one knapsack instance.
#[derive(Debug, Clone)]
pub struct ItemPool {
    /// The maximum total weight of the sack
    capacity: usize,
    /// The items sorted by ascending identity: `items[i].id() == ItemId(i+1)`
    items: Vec<Item>,
    /// The bucket of each item (same indexing as `items`)
    buckets: Vec<Bucket>,
    /// Whether the pool is currently partitioned
    state: PoolState,
    /// The sum of all the weights
    total_weight: usize,
    /// The sum of all the benefits
    total_benefit: usize,
}

impl ItemPool {
    /// Creates a pool holding one item per (weight, benefit) pair. The i-th
    /// pair (0 based) yields the item whose identity is `i+1`.
    ///
    /// # Example
    /// ```
    /// # use knapsack::*;
    /// let pool = ItemPool::build(10, &[2, 3], &[3, 4]).unwrap();
    /// assert_eq!(2, pool.len());
    /// assert_eq!(Some(3), pool.item(ItemId(2)).map(|i| i.weight()));
    ///
    /// assert!(ItemPool::build(10, &[2, 3], &[3]).is_err());
    /// assert!(ItemPool::build(10, &[2, 0], &[3, 4]).is_err());
    /// ```
    ///
    /// The total weight and the total benefit of the instance must both fit
    /// in a `usize`, so that no sum over a subset of the items can overflow.
    pub fn build(capacity: usize, weights: &[isize], benefits: &[isize]) -> Result<Self, Error> {
        if weights.len() != benefits.len() {
            return Err(Error::InvalidInstance {
                reason: format!("{} weights but {} benefits", weights.len(), benefits.len()),
            });
        }

        let mut items = Vec::with_capacity(weights.len());
        let mut total_weight  = 0_usize;
        let mut total_benefit = 0_usize;
        for (i, (w, b)) in weights.iter().zip(benefits.iter()).enumerate() {
            let item = Item::new(ItemId(i + 1), *w, *b)
                .map_err(|e| Error::InvalidInstance { reason: e.to_string() })?;
            total_weight = total_weight.checked_add(item.weight())
                .ok_or_else(|| Error::InvalidInstance { reason: "the total weight overflows".to_string() })?;
            total_benefit = total_benefit.checked_add(item.benefit())
                .ok_or_else(|| Error::InvalidInstance { reason: "the total benefit overflows".to_string() })?;
            items.push(item);
        }

        let useless = items.iter()
            .filter(|i| i.benefit() == 0)
            .map(|i| i.id().id())
            .collect::<Vec<_>>();
        if !useless.is_empty() {
            warn!("zero-benefit items in the instance: {:?}", useless);
        }

        let buckets = vec![Bucket::Unassigned; items.len()];
        Ok(ItemPool { capacity, items, buckets, state: PoolState::Unpartitioned, total_weight, total_benefit })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    pub fn state(&self) -> PoolState {
        self.state
    }
    /// The weight of the whole set of items
    pub fn total_weight(&self) -> usize {
        self.total_weight
    }
    /// The benefit of the whole set of items
    pub fn total_benefit(&self) -> usize {
        self.total_benefit
    }
    /// All the items by ascending identity
    pub fn items(&self) -> &[Item] {
        &self.items
    }
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        id.id().checked_sub(1).and_then(|i| self.items.get(i))
    }
    pub fn bucket(&self, id: ItemId) -> Option<Bucket> {
        id.id().checked_sub(1).and_then(|i| self.buckets.get(i)).copied()
    }
    /// The items that currently go in the sack
    pub fn kept(&self) -> impl Iterator<Item = &Item> {
        self.in_bucket(Bucket::Kept)
    }
    /// The items that currently stay out of the sack
    pub fn discarded(&self) -> impl Iterator<Item = &Item> {
        self.in_bucket(Bucket::Discarded)
    }
    /// The items which are neither kept nor discarded
    pub fn unassigned(&self) -> impl Iterator<Item = &Item> {
        self.in_bucket(Bucket::Unassigned)
    }
    fn in_bucket(&self, bucket: Bucket) -> impl Iterator<Item = &Item> {
        self.items.iter().zip(self.buckets.iter())
            .filter(move |(_, b)| **b == bucket)
            .map(|(i, _)| i)
    }
    /// The solution made of the kept items
    pub fn kept_solution(&self) -> Solution {
        Solution::from_items(self.kept())
    }
    /// Reads the current partition back as a selection vector (the i-th bit
    /// is set iff the i-th item by ascending identity is kept).
    pub fn selection(&self) -> BitVec {
        self.buckets.iter().map(|b| *b == Bucket::Kept).collect()
    }

    /// Fails with `InvalidState` unless the pool is unpartitioned.
    pub fn check_unpartitioned(&self) -> Result<(), Error> {
        match self.state {
            PoolState::Unpartitioned => Ok(()),
            actual => Err(Error::InvalidState { expected: PoolState::Unpartitioned, actual }),
        }
    }

    /// Splits the pool in kept (bit set) and discarded (bit unset) items.
    /// The i-th bit of the selection decides the fate of the i-th item by
    /// ascending identity.
    pub fn partition_by_selection(&mut self, selection: &BitVec) -> Result<(), Error> {
        self.check_unpartitioned()?;
        if selection.len() != self.items.len() {
            return Err(Error::InvalidInstance {
                reason: format!("selection of {} bits for {} items", selection.len(), self.items.len()),
            });
        }

        for (bucket, selected) in self.buckets.iter_mut().zip(selection.iter()) {
            *bucket = if selected { Bucket::Kept } else { Bucket::Discarded };
        }
        self.state = PoolState::Partitioned;
        Ok(())
    }

    /// Greedily fills a sack of the given capacity: the items are considered
    /// by decreasing ratio (on equal ratio, the largest identity comes first).
    /// An item is kept whenever it fits in the remaining space (an exact fit
    /// counts) and discarded otherwise.
    pub fn partition_by_greedy(&mut self, capacity: usize) -> Result<(), Error> {
        self.check_unpartitioned()?;

        let mut heap = BinaryHeap::from_vec_cmp(self.items.clone(), ByRatioThenIdentity);
        let mut remaining = capacity;
        while let Some(item) = heap.pop() {
            let index = item.id().index();
            if item.weight() <= remaining {
                remaining -= item.weight();
                self.buckets[index] = Bucket::Kept;
            } else {
                self.buckets[index] = Bucket::Discarded;
            }
        }
        debug!("greedy partition leaves {} unused capacity", remaining);

        self.state = PoolState::Partitioned;
        Ok(())
    }

    /// Collapses the kept and discarded items back into one unpartitioned
    /// pool. This is a no-op when the pool is not partitioned.
    pub fn reset(&mut self) {
        self.buckets.iter_mut().for_each(|b| *b = Bucket::Unassigned);
        self.state = PoolState::Unpartitioned;
    }
}
