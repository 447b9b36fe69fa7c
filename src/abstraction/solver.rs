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

//! This module defines the `Solver` trait.

use crate::{Error, ItemPool};

/// This is the solver abstraction. It is implemented by the structures that
/// select a subset of the items of a pool so as to maximize the total
/// benefit without exceeding the capacity of the sack.
///
/// A solver has exclusive access to the pool while it runs: it repartitions
/// the pool as it sees fit and it resets it before returning. Hence, a solver
/// must be given an unpartitioned pool, and the pool it hands back is
/// unpartitioned as well.
pub trait Solver {
    /// What the solver produces: one single solution for most solvers, all
    /// the optimal ones for an exhaustive enumeration.
    type Outcome;

    /// Solves the knapsack instance described by the given pool.
    ///
    /// # Errors
    /// * `InvalidState` when the pool is partitioned at the time of the call.
    fn solve(&mut self, pool: &mut ItemPool) -> Result<Self::Outcome, Error>;
}
