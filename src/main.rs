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

use std::time::Instant;

use clap::{Parser, ValueEnum};
use knapsack::*;
use log::info;

/// Which of the solvers should be run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
    All,
    BruteForce,
    Dynamic,
    Greedy,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Solves an instance of the 0/1 knapsack problem exactly (brute force or
/// dynamic programming) or approximately (greedy on the benefit/weight ratio)
struct Args {
    /// The path to the instance file
    fname: String,
    /// The solver(s) to run
    #[clap(short, long, value_enum, default_value = "all")]
    solver: Strategy,
    /// Print the benefit table built by the dynamic programming solver
    #[clap(short, long)]
    print_table: bool,
    /// The width of the columns when printing the table
    #[clap(long, default_value = "8")]
    spacing: usize,
}

#[derive(Debug, thiserror::Error)]
enum Errors {
    #[error("cannot read instance: {0}")]
    Read(#[from] io_utils::Error),
    #[error("cannot solve instance: {0}")]
    Solve(#[from] Error),
    #[error("bad table configuration: {0}")]
    Config(#[from] TableConfigBuilderError),
}

fn main() -> Result<(), Errors> {
    env_logger::init();

    let args = Args::parse();
    let mut sack = read_instance(&args.fname)?;
    println!("{sack}");

    let run = |s: Strategy| args.solver == Strategy::All || args.solver == s;

    if run(Strategy::BruteForce) {
        let start = Instant::now();
        let all = sack.brute_force_solve()?;
        info!("brute force took {:.3} seconds", start.elapsed().as_secs_f32());
        println!("Brute force ({} optimal set(s))", all.len());
        for solution in all.iter() {
            println!("Optimal set = {solution}");
        }
    }

    let mut optimal = None;
    if run(Strategy::Dynamic) {
        let start = Instant::now();
        let (solution, table) = sack.dynamic_programming_solve_with_table()?;
        info!("dynamic programming took {:.3} seconds", start.elapsed().as_secs_f32());
        println!("Dynamic programming");
        println!("Optimal set = {solution}");
        if args.print_table {
            let config = TableConfigBuilder::default()
                .spacing(args.spacing)
                .build()?;
            print!("{}", table.render(&config));
        }
        optimal = Some(solution.benefit());
    }

    if run(Strategy::Greedy) {
        let start = Instant::now();
        let solution = sack.greedy_solve()?;
        info!("greedy took {:.3} seconds", start.elapsed().as_secs_f32());
        println!("Greedy approximation");
        println!("Approximate set = {solution}");
        if let Some(best) = optimal.filter(|b| *b > 0) {
            println!("Approximation ratio = {:.3}", solution.benefit() as f64 / best as f64);
        }
    }

    Ok(())
}
