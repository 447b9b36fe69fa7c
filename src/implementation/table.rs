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

//! This module provides the benefit table `B` which is filled by the dynamic
//! programming solver, along with the configuration used to print it.

use std::fmt::Write;

use derive_builder::Builder;

use crate::Error;

/// The classic 0/1 knapsack benefit table. `B[k][w]` is the best benefit
/// that can be achieved using only the first `k` items (by ascending
/// identity) in a sack of capacity `w`. Row 0 and column 0 are zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable {
    /// number of rows: n+1
    rows: usize,
    /// number of columns: capacity+1
    cols: usize,
    /// row major storage
    data: Vec<usize>,
}

impl DpTable {
    /// Creates a table for `nb_items` items and the given capacity where all
    /// cells are zero.
    ///
    /// # Errors
    /// * `TableTooLarge` when the number of cells does not fit in a `usize`
    pub fn new(nb_items: usize, capacity: usize) -> Result<Self, Error> {
        let too_large = || Error::TableTooLarge { nb_items, capacity };
        let rows  = nb_items.checked_add(1).ok_or_else(too_large)?;
        let cols  = capacity.checked_add(1).ok_or_else(too_large)?;
        let cells = rows.checked_mul(cols).ok_or_else(too_large)?;
        Ok(DpTable { rows, cols, data: vec![0; cells] })
    }
    /// n+1
    pub fn nb_rows(&self) -> usize {
        self.rows
    }
    /// capacity+1
    pub fn nb_cols(&self) -> usize {
        self.cols
    }
    /// Returns B[k][w]
    ///
    /// # Panics
    /// when k or w is out of bounds
    #[inline]
    pub fn get(&self, k: usize, w: usize) -> usize {
        assert!(k < self.rows && w < self.cols, "B[{k}][{w}] is out of bounds");
        self.data[k * self.cols + w]
    }
    #[inline]
    pub(crate) fn set(&mut self, k: usize, w: usize, value: usize) {
        self.data[k * self.cols + w] = value;
    }
    /// The k-th row of the table
    pub fn row(&self, k: usize) -> &[usize] {
        &self.data[k * self.cols..(k + 1) * self.cols]
    }
    /// The value of the bottom right cell (the optimal benefit)
    pub fn best_value(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// Renders the table as text: every cell is right aligned in a column of
    /// `config.spacing` characters. When `config.with_labels` is set, the
    /// first row holds the capacities and the first column the item counts.
    pub fn render(&self, config: &TableConfig) -> String {
        if self.data.len() > config.max_cells {
            return String::from("Matrix is too big to print.\n");
        }

        let width = config.spacing;
        let mut out = String::new();
        if config.with_labels {
            let _ = write!(out, "{:>width$}", "B[k,w]");
            for w in 0..self.cols {
                let _ = write!(out, "{:>width$}", w);
            }
            out.push('\n');
        }
        for k in 0..self.rows {
            if config.with_labels {
                let _ = write!(out, "{:>width$}", k);
            }
            for value in self.row(k) {
                let _ = write!(out, "{:>width$}", value);
            }
            out.push('\n');
        }
        out
    }
}

/// This is how you configure the textual rendering of a table.
#[derive(Debug, Clone, Builder)]
pub struct TableConfig {
    /// The width of each column
    #[builder(default="8")]
    pub spacing: usize,
    /// This flag must be true (default) if you want to see the capacities
    /// and item counts on the borders of the table
    #[builder(default="true")]
    pub with_labels: bool,
    /// Tables having more cells than this are not printed
    #[builder(default="10_000")]
    pub max_cells: usize,
}
impl Default for TableConfig {
    fn default() -> Self {
        TableConfig { spacing: 8, with_labels: true, max_cells: 10_000 }
    }
}
