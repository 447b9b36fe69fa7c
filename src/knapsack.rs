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

//! This module provides the `Knapsack` type: the entry point for client code
//! which simply wants to solve one instance with any of the three solvers
//! without caring about the item pool.

use std::fmt;

use crate::{BruteForce, DynamicProgramming, Error, Greedy, ItemPool, Solution, Solver, DpTable};

/// One instance of the 0/1 knapsack problem.
///
/// # Example
/// ```
/// # use knapsack::*;
/// let mut sack = Knapsack::new(50, &[10, 20, 30], &[60, 100, 120]).unwrap();
///
/// let optimal = sack.dynamic_programming_solve().unwrap();
/// assert_eq!(220, optimal.benefit());
///
/// let approx = sack.greedy_solve().unwrap();
/// assert_eq!(160, approx.benefit());
///
/// let all = sack.brute_force_solve().unwrap();
/// assert_eq!(vec![optimal], all);
/// ```
#[derive(Debug, Clone)]
pub struct Knapsack {
    pool: ItemPool,
}

impl Knapsack {
    /// Creates an instance with the given capacity. The weights and benefits
    /// are parallel arrays: the i-th item (0 based) has identity `i+1`.
    ///
    /// # Errors
    /// * `InvalidInstance` when the arrays have different lengths or when
    ///   some weight is not strictly positive (or some benefit negative).
    pub fn new(capacity: usize, weights: &[isize], benefits: &[isize]) -> Result<Self, Error> {
        Ok(Knapsack { pool: ItemPool::build(capacity, weights, benefits)? })
    }
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }
    /// The number of items
    pub fn len(&self) -> usize {
        self.pool.len()
    }
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
    pub fn pool(&self) -> &ItemPool {
        &self.pool
    }

    /// Returns all the distinct optimal subsets of items. This takes an
    /// exponential time: only use it on small instances.
    pub fn brute_force_solve(&mut self) -> Result<Vec<Solution>, Error> {
        BruteForce.solve(&mut self.pool)
    }
    /// Returns one optimal subset of items.
    pub fn dynamic_programming_solve(&mut self) -> Result<Solution, Error> {
        DynamicProgramming::new().solve(&mut self.pool)
    }
    /// Returns one optimal subset of items along with the benefit table that
    /// was built to find it. The table stops at the total weight of the items
    /// when the sack is larger than that.
    pub fn dynamic_programming_solve_with_table(&mut self) -> Result<(Solution, DpTable), Error> {
        DynamicProgramming::new().solve_with_table(&mut self.pool)
    }
    /// Returns the approximate subset of items chosen by the greedy strategy.
    pub fn greedy_solve(&mut self) -> Result<Solution, Error> {
        Greedy.solve(&mut self.pool)
    }

    /// The benefit of an optimal solution
    pub fn optimal_benefit(&mut self) -> Result<usize, Error> {
        self.dynamic_programming_solve().map(|s| s.benefit())
    }
    /// The benefit of the greedy solution
    pub fn approximate_benefit(&mut self) -> Result<usize, Error> {
        self.greedy_solve().map(|s| s.benefit())
    }
}

impl fmt::Display for Knapsack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let weights  = self.pool.items().iter().map(|i| i.weight()).collect::<Vec<_>>();
        let benefits = self.pool.items().iter().map(|i| i.benefit()).collect::<Vec<_>>();
        writeln!(f, "Knapsack Problem Instance")?;
        writeln!(f, "Number of items = {}  Knapsack Capacity = {}", self.len(), self.capacity())?;
        writeln!(f, "Input weights:  {:?}", weights)?;
        write!(f, "Input benefits: {:?}", benefits)
    }
}
