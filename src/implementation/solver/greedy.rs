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

//! This module provides the greedy approximation solver. It fills the sack
//! with the items having the best benefit/weight ratio first.
//!
//! # Note:
//! For the 0/1 knapsack problem, this greedy strategy offers no guarantee at
//! all on the quality of the solution it finds (unlike for the fractional
//! relaxation of the problem where it is optimal). A single heavy item with
//! a slightly lower ratio than a tiny item is enough to make it arbitrarily
//! bad. Use `DynamicProgramming` when you need the optimum.

use log::debug;

use crate::{Error, ItemPool, Solution, Solver};

/// The greedy approximation solver.
#[derive(Debug, Default, Clone, Copy)]
pub struct Greedy;

impl Greedy {
    pub fn new() -> Self {
        Greedy
    }
}

impl Solver for Greedy {
    type Outcome = Solution;

    fn solve(&mut self, pool: &mut ItemPool) -> Result<Self::Outcome, Error> {
        pool.check_unpartitioned()?;

        let capacity = pool.capacity();
        pool.partition_by_greedy(capacity)?;
        let solution = pool.kept_solution();
        pool.reset();

        debug!("greedy: approximate benefit {}", solution.benefit());
        Ok(solution)
    }
}
