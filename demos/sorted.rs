//? mpirun -n {{NPROCESSES}}
//! Sort random integers with duplicates across the whole world communicator
//! and verify sortedness and multiset preservation against a single-process
//! reference sort.

use itertools::Itertools;
use mpi::collective::SystemOperation;
use mpi::traits::{Communicator, CommunicatorCollectives};
use rand::Rng;

use hqsort::parallel::{gather_to_root, global_sort};
use hqsort::pivot::PivotStrategy;
use hqsort::sort::insertion_sort;

fn main() {
    // Setup MPI
    let universe = mpi::initialize().unwrap();
    let world = universe.world();
    let size = world.size();
    let rank = world.rank();

    // Select random integers, with duplicates
    let mut rng = rand::thread_rng();
    let nsamples = 1000;
    let arr: Vec<i32> = (0..nsamples).map(|_| rng.gen_range(0..=20)).collect();

    // Keep the unsorted input at root for the reference comparison
    let reference = gather_to_root(&arr, &world);

    // Sort
    let mut arr = arr;
    insertion_sort(&mut arr);
    let arr = global_sort(arr, &world, PivotStrategy::Middle);

    // Test that no element was lost or duplicated anywhere
    let mut problem_size = 0;
    world.all_reduce_into(&arr.len(), &mut problem_size, SystemOperation::sum());
    assert_eq!(problem_size, (size as usize) * nsamples);

    // Test that each rank's portion is locally sorted
    for (a, b) in arr.iter().tuple_windows() {
        assert!(a <= b);
    }

    // Test the recombined global array against a reference sort
    let result = gather_to_root(&arr, &world);
    if rank == 0 {
        let mut expected = reference.unwrap();
        expected.sort();
        assert_eq!(result.unwrap(), expected);
        println!("...sorted passed");
    }
}
