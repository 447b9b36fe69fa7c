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

//! This module provides the functions needed to read a knapsack instance from
//! a text file. The expected format is the following:
//! ```text
//! c lines starting with a 'c' are comments
//! <capacity> <nb_items>
//! <weight of item 1> <benefit of item 1>
//! ...
//! <weight of item n> <benefit of item n>
//! ```

use std::{fs::File, io::{BufRead, BufReader}, num::ParseIntError, path::Path};

use regex::Regex;

use crate::Knapsack;

/// This enumeration simply groups the kind of errors that might occur when parsing a
/// knapsack instance from file. There can be io errors (file unavailable ?), format error
/// (e.g. the file is not an instance but contains the text of your next paper),
/// parse int errors (which are actually a variant of the format error since it tells
/// you that the parser expected an integer number but got ... something else), or
/// the numbers might describe an invalid instance.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The parser expected to read something that was an integer but got some garbage
    #[error("parse int {0}")]
    ParseInt(#[from] ParseIntError),
    /// The line parser could not be compiled
    #[error("regex {0}")]
    Regex(#[from] regex::Error),
    /// The file was not properly formatted.
    #[error("ill formed instance")]
    Format,
    /// The file was well formed but the instance it describes is not valid
    #[error("{0}")]
    Instance(#[from] crate::Error),
}

/// This function is used to read a knapsack instance from file. It returns either a
/// knapsack instance if everything went on well or an error describing the problem.
pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<Knapsack, Error> {
    let f = File::open(fname)?;
    parse_instance(BufReader::new(f))
}

/// Parses a knapsack instance from any buffered source.
///
/// # Example
/// ```
/// # use knapsack::parse_instance;
/// let text = "c tiny\n10 2\n4 5\n6 7\n";
/// let sack = parse_instance(text.as_bytes()).unwrap();
/// assert_eq!(10, sack.capacity());
/// assert_eq!(2, sack.len());
/// ```
pub fn parse_instance<R: BufRead>(input: R) -> Result<Knapsack, Error> {
    let comment = Regex::new(r"^c(\s.*)?$")?;
    let numbers = Regex::new(r"^(?P<first>-?\d+)\s+(?P<second>-?\d+)$")?;

    let mut header   = None;
    let mut weights  = vec![];
    let mut benefits = vec![];

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || comment.is_match(line) {
            continue;
        }

        let caps = numbers.captures(line).ok_or(Error::Format)?;
        match header {
            None => {
                let capacity = caps["first"].parse::<usize>()?;
                let nb_items = caps["second"].parse::<usize>()?;
                weights.reserve_exact(nb_items);
                benefits.reserve_exact(nb_items);
                header = Some((capacity, nb_items));
            },
            Some(_) => {
                weights.push(caps["first"].parse::<isize>()?);
                benefits.push(caps["second"].parse::<isize>()?);
            }
        }
    }

    let (capacity, nb_items) = header.ok_or(Error::Format)?;
    if weights.len() != nb_items {
        return Err(Error::Format);
    }
    Ok(Knapsack::new(capacity, &weights, &benefits)?)
}

#[cfg(test)]
mod test_io_utils {
    use crate::io_utils::{parse_instance, read_instance, Error};

    #[test]
    fn parses_a_well_formed_instance() {
        let text = "c a comment\n\n10 4\n2 3\n3 4\nc another one\n4 5\n5 6\n";
        let sack = parse_instance(text.as_bytes()).unwrap();
        assert_eq!(10, sack.capacity());
        assert_eq!(4, sack.len());
        let weights = sack.pool().items().iter().map(|i| i.weight()).collect::<Vec<_>>();
        assert_eq!(vec![2, 3, 4, 5], weights);
    }
    #[test]
    fn parses_an_empty_instance() {
        let sack = parse_instance("7 0\n".as_bytes()).unwrap();
        assert!(sack.is_empty());
    }
    #[test]
    fn missing_header_is_a_format_error() {
        assert!(matches!(parse_instance("c nothing\n".as_bytes()), Err(Error::Format)));
    }
    #[test]
    fn wrong_item_count_is_a_format_error() {
        assert!(matches!(parse_instance("10 3\n1 1\n".as_bytes()), Err(Error::Format)));
    }
    #[test]
    fn garbage_is_a_format_error() {
        assert!(matches!(parse_instance("10 1\nfoo bar\n".as_bytes()), Err(Error::Format)));
    }
    #[test]
    fn negative_capacity_is_a_parse_error() {
        assert!(matches!(parse_instance("-10 1\n1 1\n".as_bytes()), Err(Error::ParseInt(_))));
    }
    #[test]
    fn zero_weight_is_an_instance_error() {
        assert!(matches!(parse_instance("10 1\n0 1\n".as_bytes()), Err(Error::Instance(_))));
    }
    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(read_instance("/this/file/does/not/exist"), Err(Error::Io(_))));
    }
}
