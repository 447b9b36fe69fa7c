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

//! This module defines the errors that can be raised while building a knapsack
//! instance or while solving it.

use crate::PoolState;

/// This enumeration groups the kind of errors that might occur when using the
/// library. None of these is ever raised because some subset of items exceeds
/// the capacity of the sack: that is the normal infeasible case which the
/// solvers simply skip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An item was given a non positive weight or a negative benefit
    #[error("invalid item #{id} (weight: {weight}, benefit: {benefit})")]
    InvalidItem { id: usize, weight: isize, benefit: isize },
    /// The data used to describe the instance is malformed
    #[error("invalid instance: {reason}")]
    InvalidInstance { reason: String },
    /// The item pool is not in the state required by the operation
    #[error("invalid state: expected an {expected} pool but it was {actual}")]
    InvalidState { expected: PoolState, actual: PoolState },
    /// There are too many items to enumerate all the subsets
    #[error("too many items ({nb_items}) to enumerate all subsets")]
    TooManyItems { nb_items: usize },
    /// The benefit table of the dynamic programming solver cannot be indexed
    #[error("a benefit table for {nb_items} items and capacity {capacity} is too large")]
    TableTooLarge { nb_items: usize, capacity: usize },
}
