//! Command-line entry point: reads a point set, solves it, prints the
//! tour and its length, and writes the tour next to the input as
//! `<stem>.tour.csv`.

use std::env;
use std::path::Path;
use std::process::ExitCode;

use u_tsp::io::{read_points, write_tour, LoadError};
use u_tsp::solver::solve;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let Some(input) = args.next() else {
        eprintln!("usage: u-tsp <input.csv> [seed]");
        return ExitCode::FAILURE;
    };
    let seed = match args.next() {
        Some(s) => match s.parse::<u64>() {
            Ok(seed) => seed,
            Err(_) => {
                eprintln!("u-tsp: seed must be an unsigned integer, got `{s}`");
                return ExitCode::FAILURE;
            }
        },
        None => 0,
    };

    match run(&input, seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("u-tsp: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(input: &str, seed: u64) -> Result<(), LoadError> {
    let points = read_points(input)?;
    let solution = solve(&points, seed);

    println!("{:?}", solution.tour());
    println!("{}", solution.length());

    let stem = Path::new(input)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    write_tour(format!("{stem}.tour.csv"), solution.tour())?;
    Ok(())
}
