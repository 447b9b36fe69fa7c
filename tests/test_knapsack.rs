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

//! This module is meant to test the correctness of the three solvers on the
//! instances stored in the resources folder.

use std::path::PathBuf;

use knapsack::*;

fn locate(id: &str) -> PathBuf {
    PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("tests/resources/knapsack/")
        .join(id)
}

fn instance(id: &str) -> Knapsack {
    read_instance(locate(id)).expect("cannot read instance")
}

fn ids(v: &[usize]) -> Vec<ItemId> {
    v.iter().copied().map(ItemId).collect()
}

#[test]
fn textbook() {
    let mut sack = instance("textbook.txt");
    let optimal = sack.dynamic_programming_solve().unwrap();
    assert_eq!(ids(&[1, 2]), optimal.items());
    assert_eq!(5, optimal.weight());
    assert_eq!(7, optimal.benefit());

    let all = sack.brute_force_solve().unwrap();
    assert_eq!(vec![optimal], all);
}

#[test]
fn ties() {
    let mut sack = instance("ties.txt");
    let all = sack.brute_force_solve().unwrap();
    assert_eq!(2, all.len());
    assert_eq!(ids(&[1, 2]), all[0].items());
    assert_eq!(ids(&[3]),    all[1].items());

    let optimal = sack.dynamic_programming_solve().unwrap();
    assert_eq!(10, optimal.benefit());
    assert!(all.contains(&optimal));
}

#[test]
fn greedy_trap() {
    let mut sack = instance("greedy_trap.txt");
    assert_eq!(19, sack.optimal_benefit().unwrap());
    assert_eq!(2,  sack.approximate_benefit().unwrap());
}

#[test]
fn empty() {
    let mut sack = instance("empty.txt");
    assert!(sack.dynamic_programming_solve().unwrap().is_empty());
    assert!(sack.greedy_solve().unwrap().is_empty());
    let all = sack.brute_force_solve().unwrap();
    assert_eq!(vec![Solution::default()], all);
}

#[test]
fn heavy() {
    let mut sack = instance("heavy.txt");
    assert!(sack.dynamic_programming_solve().unwrap().is_empty());
    assert!(sack.greedy_solve().unwrap().is_empty());
    let all = sack.brute_force_solve().unwrap();
    assert_eq!(1, all.len());
    assert!(all[0].is_empty());
}

#[test]
fn zero_capacity() {
    let mut sack = instance("zero_capacity.txt");
    assert_eq!(0, sack.capacity());
    assert!(sack.dynamic_programming_solve().unwrap().is_empty());
    assert!(sack.greedy_solve().unwrap().is_empty());
    let all = sack.brute_force_solve().unwrap();
    assert_eq!(vec![Solution::default()], all);
}

#[test]
fn p08() {
    let mut sack = instance("p08.txt");
    let optimal = sack.dynamic_programming_solve().unwrap();
    assert_eq!(ids(&[1, 3, 5, 7, 8, 9, 14, 15]), optimal.items());
    assert_eq!(749,  optimal.weight());
    assert_eq!(1458, optimal.benefit());

    let approx = sack.greedy_solve().unwrap();
    assert_eq!(ids(&[1, 2, 3, 7, 8, 9, 14, 15]), approx.items());
    assert_eq!(740,  approx.weight());
    assert_eq!(1441, approx.benefit());

    let all = sack.brute_force_solve().unwrap();
    assert_eq!(vec![optimal], all);
}

#[test]
fn malformed() {
    assert!(matches!(read_instance(locate("malformed.txt")), Err(io_utils::Error::Format)));
}

#[test]
fn a_solver_cannot_run_on_a_partitioned_pool() {
    let mut pool = ItemPool::build(5, &[2, 3], &[3, 4]).unwrap();
    pool.partition_by_greedy(5).unwrap();

    assert!(matches!(BruteForce.solve(&mut pool), Err(Error::InvalidState { .. })));
    assert!(matches!(DynamicProgramming::new().solve(&mut pool), Err(Error::InvalidState { .. })));
    assert!(matches!(Greedy.solve(&mut pool), Err(Error::InvalidState { .. })));

    pool.reset();
    assert_eq!(7, Greedy.solve(&mut pool).unwrap().benefit());
}

#[test]
fn rendering_the_table() {
    let mut sack = instance("textbook.txt");
    let (_, table) = sack.dynamic_programming_solve_with_table().unwrap();
    let config = TableConfigBuilder::default().spacing(3).with_labels(false).build().unwrap();
    let expected = concat!(
        "  0  0  0  0  0  0\n",
        "  0  0  3  3  3  3\n",
        "  0  0  3  4  4  7\n",
        "  0  0  3  4  5  7\n",
        "  0  0  3  4  5  7\n");
    assert_eq!(expected, table.render(&config));
}
