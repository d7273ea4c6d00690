//? mpirun -n {{NPROCESSES}}
//! The full file-to-file pipeline on a small fixed input: rank 0 writes and
//! reads the input file, the count is broadcast, shards are scattered,
//! sorted locally, sorted globally, reassembled, verified and persisted.
//! With two ranks this exercises exactly one recursion level.

use mpi::traits::{Communicator, Root};
use mpi::Count;

use hqsort::io::{check_and_write, read_input};
use hqsort::parallel::{distribute_from_root, gather_to_root, global_sort};
use hqsort::pivot::PivotStrategy;
use hqsort::sort::insertion_sort;

fn main() {
    // Setup MPI
    let universe = mpi::initialize().unwrap();
    let world = universe.world();
    let rank = world.rank();
    let root_process = world.process_at_rank(0);

    let input_path = "_demo_pipeline.txt";
    let output_path = "_demo_pipeline.bin";

    let mut global_elements = Vec::new();
    let mut n: Count = 0;
    if rank == 0 {
        std::fs::write(input_path, "8\n5 3 8 1 9 2 7 4\n").unwrap();
        global_elements = read_input(input_path).unwrap();
        n = global_elements.len() as Count;
    }
    root_process.broadcast_into(&mut n);

    let mut local = distribute_from_root(&global_elements, n as usize, &world);
    insertion_sort(&mut local);
    let local = global_sort(local, &world, PivotStrategy::First);

    if let Some(global) = gather_to_root(&local, &world) {
        assert_eq!(global, vec![1, 2, 3, 4, 5, 7, 8, 9]);
        check_and_write(output_path, &global).unwrap();

        // The record starts with the little-endian element count
        let bytes = std::fs::read(output_path).unwrap();
        assert_eq!(&bytes[..4], &8u32.to_le_bytes());
        assert_eq!(bytes.len(), 4 + 8 * 4);

        println!("...pipeline passed");
    }
}
