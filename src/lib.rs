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

//! # Knapsack
//! This crate solves single instances of the 0/1 knapsack problem: given a
//! sack of fixed capacity and `n` items, each with an integer weight and an
//! integer benefit, pick the subset of items with the largest total benefit
//! whose total weight fits in the sack.
//!
//! Three independent strategies are provided:
//! * `BruteForce` enumerates all the 2^n subsets and returns *all* the
//!   optimal ones. It is only meant for tiny instances.
//! * `DynamicProgramming` fills the classic benefit table and walks it
//!   backwards to recover one optimal subset.
//! * `Greedy` fills the sack with the best benefit/weight ratios first. It
//!   is fast, but it offers no guarantee on the quality of its solution.
//!
//! All solvers operate on an `ItemPool` which owns the items of the instance
//! and which they partition into *kept* and *discarded* items.
//!
//! ## Quick Example
//! ```
//! # use knapsack::*;
//! // 1. Create an instance of the knapsack problem
//! let mut pool = ItemPool::build(10, &[2, 3, 4, 5], &[3, 4, 5, 6]).unwrap();
//! // 2. Solve it to optimality
//! let optimal = DynamicProgramming::new().solve(&mut pool).unwrap();
//! assert_eq!(13, optimal.benefit());
//! // 3. Or find an approximate solution
//! let approx = Greedy.solve(&mut pool).unwrap();
//! assert!(approx.benefit() <= optimal.benefit());
//! ```
//!
//! The `Knapsack` type wraps a pool and offers one method per solver in case
//! you do not care about the pool at all.

mod common;
mod error;
mod abstraction;
mod implementation;
mod knapsack;
pub mod io_utils;

pub use common::*;
pub use error::*;
pub use abstraction::*;
pub use implementation::*;
pub use crate::knapsack::*;
pub use io_utils::{read_instance, parse_instance};
