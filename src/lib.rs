//! # Hypercube quicksort in Rust
//!
//! A recursive hypercube quicksort \[1\] for distributed memory machines,
//! parallelized with MPI. The communicator is halved at every recursion
//! level: rank 0 of the current group broadcasts a pivot, each rank splits
//! its sorted local slice around it, paired ranks in opposite halves swap
//! their wrong-side partitions and merge, and each half recurses
//! independently until a single rank remains.
//!
//! ## References
//! \[1\] Wagar, B. "Hyperquicksort: A fast sorting algorithm for hypercubes."
//! Hypercube Multiprocessors 1987 (1987): 292-299.
//!
//! \[2\] Sundar, Hari, Dhairya Malhotra, and George Biros. "Hyksort: a new
//! variant of hypercube quicksort on distributed memory architectures."
//! Proceedings of the 27th international ACM conference on international
//! conference on supercomputing. (2013).
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(missing_docs)]

pub mod io;
pub mod parallel;
pub mod pivot;
pub mod sort;
pub mod types;
