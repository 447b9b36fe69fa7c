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

//! This module provides the two total orders that are defined over the items
//! of an instance. Both are zero sized `Compare` objects so that they can be
//! used to parameterize the behavior of an ordered collection (e.g. a heap).

use std::cmp::Ordering;

use compare::Compare;
use ordered_float::OrderedFloat;

use crate::Item;

/// Orders the items by ascending identity. This is the order in which the
/// items are stored in the pool, considered by the dynamic programming table
/// and listed in a `Solution`. It agrees with `Ord for Item`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ByIdentity;
impl Compare<Item> for ByIdentity {
    fn compare(&self, l: &Item, r: &Item) -> Ordering {
        l.id().cmp(&r.id())
    }
}

/// Orders the items by ascending ratio (benefit / weight). Items having the
/// same ratio are ordered by ascending identity.
///
/// # Example
/// ```
/// # use knapsack::*;
/// # use compare::Compare;
/// # use binary_heap_plus::BinaryHeap;
/// let a = Item::new(ItemId(1), 2, 4).unwrap(); // ratio 2.0
/// let b = Item::new(ItemId(2), 1, 3).unwrap(); // ratio 3.0
/// let c = Item::new(ItemId(3), 3, 6).unwrap(); // ratio 2.0
///
/// assert_eq!(std::cmp::Ordering::Less, ByRatioThenIdentity.compare(&a, &b));
/// assert_eq!(std::cmp::Ordering::Less, ByRatioThenIdentity.compare(&a, &c));
///
/// // used as the comparator of a heap, it pops the best ratio first
/// let mut heap = BinaryHeap::from_vec_cmp(vec![a, b, c], ByRatioThenIdentity);
/// assert_eq!(Some(b), heap.pop());
/// assert_eq!(Some(c), heap.pop());
/// assert_eq!(Some(a), heap.pop());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ByRatioThenIdentity;
impl Compare<Item> for ByRatioThenIdentity {
    fn compare(&self, l: &Item, r: &Item) -> Ordering {
        OrderedFloat(l.ratio()).cmp(&OrderedFloat(r.ratio()))
            .then_with(|| l.id().cmp(&r.id()))
    }
}
