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

//! This module provides the implementation of the classic dynamic programming
//! solver for the 0/1 knapsack problem. It fills the benefit table `B` row by
//! row (one row per item, by ascending identity) and then walks the table
//! backwards to recover one optimal subset of the items.
//!
//! This solver is guaranteed to find an optimal solution. Its time and memory
//! requirements are in O(n * min(capacity, total weight)): no subset of the
//! items ever weighs more than all of them together, so the columns beyond the
//! total weight would only repeat the last one.

use bit_vec::BitVec;
use log::{debug, trace};

use crate::{DpTable, Error, Item, ItemPool, Solution, Solver};

/// Fills the benefit table for the given items (which must be sorted by
/// ascending identity) and the given capacity.
///
/// # Errors
/// * `TableTooLarge` when the table cannot be indexed
pub fn fill_table(items: &[Item], capacity: usize) -> Result<DpTable, Error> {
    let mut table = DpTable::new(items.len(), capacity)?;
    for (k, item) in (1..=items.len()).zip(items.iter()) {
        for w in 1..=capacity {
            let without = table.get(k - 1, w);
            let value   = if item.weight() > w {
                without
            } else {
                without.max(item.benefit() + table.get(k - 1, w - item.weight()))
            };
            table.set(k, w, value);
        }
        trace!("B[{}] = {:?}", k, table.row(k));
    }
    Ok(table)
}

/// Walks the table backwards from `B[n][capacity]` and returns the selection
/// (one bit per item, by ascending identity) of an optimal subset. The
/// capacity must be the one the table was filled for.
pub fn backtrack(table: &DpTable, items: &[Item], capacity: usize) -> BitVec {
    let mut selection = BitVec::from_elem(items.len(), false);
    let mut w = capacity;
    for k in (1..=items.len()).rev() {
        // the benefit improved: the k-th item is part of the solution
        if table.get(k, w) != table.get(k - 1, w) {
            selection.set(k - 1, true);
            w -= items[k - 1].weight();
        }
    }
    selection
}

/// The dynamic programming solver. Once it has solved an instance, the table
/// it built remains available for inspection until the next call to `solve`.
#[derive(Debug, Default, Clone)]
pub struct DynamicProgramming {
    /// The table built during the last resolution
    table: Option<DpTable>,
}

impl DynamicProgramming {
    pub fn new() -> Self {
        Self::default()
    }
    /// The benefit table of the last resolution (if any)
    pub fn table(&self) -> Option<&DpTable> {
        self.table.as_ref()
    }
    pub fn into_table(self) -> Option<DpTable> {
        self.table
    }

    /// Solves the instance and hands back the benefit table along with the
    /// optimal solution. The table has one column per capacity from 0 up to
    /// the smallest of the sack capacity and the total weight of the items.
    pub fn solve_with_table(&self, pool: &mut ItemPool) -> Result<(Solution, DpTable), Error> {
        pool.check_unpartitioned()?;

        let reach     = pool.capacity().min(pool.total_weight());
        let table     = fill_table(pool.items(), reach)?;
        let selection = backtrack(&table, pool.items(), reach);

        pool.partition_by_selection(&selection)?;
        let solution = pool.kept_solution();
        pool.reset();

        debug!("dynamic programming: optimal benefit {}", table.best_value());
        Ok((solution, table))
    }
}

impl Solver for DynamicProgramming {
    type Outcome = Solution;

    fn solve(&mut self, pool: &mut ItemPool) -> Result<Self::Outcome, Error> {
        self.table = None;
        let (solution, table) = self.solve_with_table(pool)?;
        self.table = Some(table);
        Ok(solution)
    }
}

#[cfg(test)]
mod test_dynamic {
    use crate::{DynamicProgramming, Solver, ItemPool, ItemId, PoolState, Error, fill_table, backtrack};

    #[test]
    fn fill_table_textbook_instance() {
        // capacity 5, items (w,b): (2,3) (3,4) (4,5) (5,6)
        let pool  = ItemPool::build(5, &[2, 3, 4, 5], &[3, 4, 5, 6]).unwrap();
        let table = fill_table(pool.items(), 5).unwrap();
        assert_eq!(&[0, 0, 0, 0, 0, 0], table.row(0));
        assert_eq!(&[0, 0, 3, 3, 3, 3], table.row(1));
        assert_eq!(&[0, 0, 3, 4, 4, 7], table.row(2));
        assert_eq!(&[0, 0, 3, 4, 5, 7], table.row(3));
        assert_eq!(&[0, 0, 3, 4, 5, 7], table.row(4));
        assert_eq!(7, table.best_value());
    }
    #[test]
    fn backtrack_textbook_instance() {
        let pool  = ItemPool::build(5, &[2, 3, 4, 5], &[3, 4, 5, 6]).unwrap();
        let table = fill_table(pool.items(), 5).unwrap();
        let sel   = backtrack(&table, pool.items(), 5);
        assert_eq!(vec![true, true, false, false], sel.iter().collect::<Vec<_>>());
    }

    #[test]
    fn solve_finds_the_optimum() {
        let mut pool = ItemPool::build(10, &[2, 3, 4, 5], &[3, 4, 5, 6]).unwrap();
        let mut solver = DynamicProgramming::new();
        let sol = solver.solve(&mut pool).unwrap();
        assert_eq!(13, sol.benefit());
        assert!(sol.weight() <= 10);
        assert_eq!(Some(13), solver.table().map(|t| t.best_value()));
    }
    #[test]
    fn solve_reports_the_members() {
        let mut pool = ItemPool::build(50, &[10, 20, 30], &[60, 100, 120]).unwrap();
        let sol = DynamicProgramming::new().solve(&mut pool).unwrap();
        assert_eq!(&[ItemId(2), ItemId(3)], sol.items());
        assert_eq!(50,  sol.weight());
        assert_eq!(220, sol.benefit());
    }
    #[test]
    fn the_table_has_one_row_per_item_and_one_column_per_capacity() {
        let mut pool = ItemPool::build(7, &[2, 3, 4], &[3, 4, 5]).unwrap();
        let mut solver = DynamicProgramming::new();
        solver.solve(&mut pool).unwrap();
        let table = solver.into_table().unwrap();
        assert_eq!(4, table.nb_rows());
        assert_eq!(8, table.nb_cols());
    }
    #[test]
    fn empty_instance() {
        let mut pool = ItemPool::build(10, &[], &[]).unwrap();
        let sol = DynamicProgramming::new().solve(&mut pool).unwrap();
        assert!(sol.is_empty());
        assert_eq!(0, sol.benefit());
        assert_eq!(0, sol.weight());
    }
    #[test]
    fn item_heavier_than_the_sack() {
        let mut pool = ItemPool::build(3, &[4], &[7]).unwrap();
        let sol = DynamicProgramming::new().solve(&mut pool).unwrap();
        assert!(sol.is_empty());
    }
    #[test]
    fn zero_capacity() {
        let mut pool = ItemPool::build(0, &[1, 2], &[3, 4]).unwrap();
        let mut solver = DynamicProgramming::new();
        let sol = solver.solve(&mut pool).unwrap();
        assert!(sol.is_empty());
        assert_eq!(1, solver.table().unwrap().nb_cols());
    }
    #[test]
    fn the_table_stops_at_the_total_weight() {
        let mut pool = ItemPool::build(1 << 40, &[2, 3], &[3, 4]).unwrap();
        let (sol, table) = DynamicProgramming::new().solve_with_table(&mut pool).unwrap();
        assert_eq!(6, table.nb_cols());
        assert_eq!(&[ItemId(1), ItemId(2)], sol.items());
        assert_eq!(7, sol.benefit());
    }
    #[test]
    fn largest_possible_capacity() {
        let mut pool = ItemPool::build(usize::MAX, &[1], &[1]).unwrap();
        let sol = DynamicProgramming::new().solve(&mut pool).unwrap();
        assert_eq!(&[ItemId(1)], sol.items());
        assert_eq!(1, sol.benefit());
    }
    #[test]
    fn largest_possible_benefits() {
        let benefits = [isize::MAX, isize::MAX];
        let mut pool = ItemPool::build(3, &[1, 2], &benefits).unwrap();
        let sol = DynamicProgramming::new().solve(&mut pool).unwrap();
        assert_eq!(2 * isize::MAX as usize, sol.benefit());
        assert_eq!(3, sol.weight());
    }
    #[test]
    fn solve_with_table_matches_solve() {
        let mut pool = ItemPool::build(5, &[2, 3, 4, 5], &[3, 4, 5, 6]).unwrap();
        let mut solver = DynamicProgramming::new();
        let (with_table, table) = solver.solve_with_table(&mut pool).unwrap();
        assert_eq!(with_table, solver.solve(&mut pool).unwrap());
        assert_eq!(Some(&table), solver.table());
    }
    #[test]
    fn leaves_the_pool_unpartitioned() {
        let mut pool = ItemPool::build(10, &[2, 3], &[3, 4]).unwrap();
        DynamicProgramming::new().solve(&mut pool).unwrap();
        assert_eq!(PoolState::Unpartitioned, pool.state());
    }
    #[test]
    fn refuses_a_partitioned_pool() {
        let mut pool = ItemPool::build(10, &[2, 3], &[3, 4]).unwrap();
        pool.partition_by_greedy(10).unwrap();
        let mut solver = DynamicProgramming::new();
        let err = solver.solve(&mut pool).unwrap_err();
        assert!(matches!(err, Error::InvalidState { .. }));
        assert!(solver.table().is_none());
    }
}
