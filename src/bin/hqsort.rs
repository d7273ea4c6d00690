//! Driver for the distributed hypercube quicksort.
//!
//! Usage: `mpirun -n <ranks> hqsort [input] [output] [pivot-strategy]`
//!
//! The input is a text file holding an element count followed by that many
//! integers; the output is a binary record of a 4-byte count followed by the
//! sorted 4-byte elements, written by rank 0 after a sortedness check.
//! Strategies: `first` (default), `middle`, `median3`.
//!
//! Exit status: 0 on success, 1 on a configuration error (odd group size),
//! 2 on an I/O or input format error, 3 if the final array fails the
//! sortedness check.

use std::process::ExitCode;

use mpi::traits::{Communicator, Root};
use mpi::Count;

use hqsort::io::{check_and_write, read_input};
use hqsort::parallel::{distribute_from_root, gather_to_root, global_sort};
use hqsort::pivot::PivotStrategy;
use hqsort::sort::insertion_sort;
use hqsort::types::SortError;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let input = args.get(1).map_or("test.txt", String::as_str);
    let output = args.get(2).map_or("result.bin", String::as_str);
    let strategy = match args.get(3).map(String::as_str) {
        None | Some("first") => PivotStrategy::First,
        Some("middle") => PivotStrategy::Middle,
        Some("median3") => PivotStrategy::MedianOfThree,
        Some(other) => {
            eprintln!("hqsort: unknown pivot strategy '{other}'");
            return ExitCode::from(2);
        }
    };

    let universe = mpi::initialize().unwrap();
    let world = universe.world();
    let rank = world.rank();
    let root_process = world.process_at_rank(0);

    // Rank 0 reads the input; everyone else learns the count from the
    // broadcast below. A read failure has to abort because the other ranks
    // are already blocked in that broadcast.
    let mut global_elements = Vec::new();
    let mut n: Count = 0;
    if rank == 0 {
        match read_input(input) {
            Ok(elements) => {
                n = elements.len() as Count;
                global_elements = elements;
            }
            Err(err) => {
                eprintln!("hqsort: {err}");
                world.abort(2);
            }
        }
    }
    root_process.broadcast_into(&mut n);

    let mut local = distribute_from_root(&global_elements, n as usize, &world);
    drop(global_elements);

    insertion_sort(&mut local);
    let local = global_sort(local, &world, strategy);

    // Reassemble at rank 0, verify, persist.
    if let Some(global) = gather_to_root(&local, &world) {
        if let Err(err) = check_and_write(output, &global) {
            eprintln!("hqsort: {err}");
            return match err {
                SortError::NotSorted => ExitCode::from(3),
                _ => ExitCode::from(2),
            };
        }
    }

    ExitCode::SUCCESS
}
