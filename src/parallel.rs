//! The distributed partitioner and its MPI plumbing.
//!
//! Every rank of the current communicator executes [`global_sort`] in
//! lock-step. Each level of the recursion broadcasts a pivot from rank 0,
//! splits every local slice around it, pairs each rank in the low half of
//! the communicator with its mirror in the high half, swaps the wrong-side
//! partitions within each pair, merges, and recurses into a communicator of
//! half the size. A single-rank communicator terminates the recursion: its
//! slice is already sorted.

use itertools::Itertools;
use log::error;
use mpi::{
    datatype::{Partition, PartitionMut},
    point_to_point,
    topology::Color,
    traits::{Communicator, Root},
    Count,
};

use crate::pivot::PivotStrategy;
use crate::sort::{merge_ascending, partition_point};
use crate::types::{Element, SortError};

/// Recursively sort a distributed array over the given communicator.
///
/// On entry each rank's `elements` must be sorted ascending; on return the
/// concatenation of every rank's result in rank order is the sorted global
/// array. Communicator sizes above one must be even at every recursion
/// level (a power of two satisfies this); an odd size is a configuration
/// error that aborts the whole job, since the pairing protocol cannot
/// proceed without every rank and no rank can continue alone.
pub fn global_sort<C: Communicator>(
    elements: Vec<Element>,
    comm: &C,
    strategy: PivotStrategy,
) -> Vec<Element> {
    let rank = comm.rank();
    let size = comm.size();

    // Base case: a single rank holds a sorted slice.
    if size == 1 {
        return elements;
    }

    if size % 2 != 0 {
        if rank == 0 {
            error!("{}", SortError::OddGroupSize(size as usize));
        }
        comm.abort(1);
    }

    // Rank 0 selects this level's pivot from its own slice and broadcasts
    // it; every rank must partition against the exact same value. An empty
    // slice on rank 0 falls back to a pivot of 0 — agreement is what keeps
    // the exchange correct, the particular value only affects balance.
    let mut pivot: Element = 0;
    if rank == 0 && !elements.is_empty() {
        pivot = elements[strategy.select(&elements)];
    }
    comm.process_at_rank(0).broadcast_into(&mut pivot);

    // The slice is sorted, so the partition is a single index.
    let left = partition_point(&elements, pivot);

    // Low-half ranks keep elements below the pivot and trade the rest away;
    // high-half ranks do the opposite. Partners sit at mirrored offsets, so
    // the pairing between halves is one-to-one.
    let half = size / 2;
    let low_half = rank < half;
    let partner_rank = if low_half { rank + half } else { rank - half };
    let partner = comm.process_at_rank(partner_rank);

    let (retained, outgoing) = if low_half {
        (&elements[..left], &elements[left..])
    } else {
        (&elements[left..], &elements[..left])
    };

    // Sizes first, so the receive buffer can be allocated exactly, then the
    // data. Both directions of each pair run as one combined send/receive;
    // the exchange is symmetric, so no ordering rule between the two sides
    // is needed to avoid deadlock.
    let send_count = outgoing.len() as Count;
    let mut recv_count: Count = 0;
    point_to_point::send_receive_into(&send_count, &partner, &mut recv_count, &partner);

    let mut received = vec![Element::default(); recv_count as usize];
    point_to_point::send_receive_into(outgoing, &partner, &mut received[..], &partner);

    // Both runs are sorted, so a two-way merge keeps the level's output
    // sorted. The retained run supplies values below the merged boundary on
    // the low half and above it on the high half.
    let merged = if low_half {
        merge_ascending(retained, &received)
    } else {
        merge_ascending(&received, retained)
    };

    // Ownership handoff: only the merged slice survives into the next
    // level. Dropping the inputs here keeps at most one generation of
    // buffers alive across the recursion.
    drop(elements);
    drop(received);

    // Halve the communicator and recurse; key 0 preserves relative rank
    // order within each half. The sub-communicator is freed when it drops
    // on return.
    let color = Color::with_value(if low_half { 0 } else { 1 });
    let sub_comm = comm
        .split_by_color(color)
        .expect("split with a valid color yields a communicator");

    global_sort(merged, &sub_comm, strategy)
}

/// Scatter the root's array into contiguous, rank-ordered shards.
///
/// `global_elements` is read on rank 0 only, where its length must equal
/// `n`; other ranks pass an empty slice. Shards are `n / size` elements
/// each, with the first `n % size` ranks taking one extra, so the union of
/// all shards in rank order reconstitutes the input.
pub fn distribute_from_root<C: Communicator>(
    global_elements: &[Element],
    n: usize,
    comm: &C,
) -> Vec<Element> {
    let rank = comm.rank();
    let root_process = comm.process_at_rank(0);

    let counts = shard_counts(n, comm.size() as usize);
    let mut local = vec![Element::default(); counts[rank as usize] as usize];

    if rank == 0 {
        let displs = displacements(&counts);
        let partition = Partition::new(global_elements, counts, &displs[..]);
        root_process.scatter_varcount_into_root(&partition, &mut local[..]);
    } else {
        root_process.scatter_varcount_into(&mut local[..]);
    }

    local
}

/// Gather every rank's slice to rank 0 in rank order.
///
/// Returns the reassembled array on rank 0 and `None` elsewhere.
pub fn gather_to_root<C: Communicator>(local: &[Element], comm: &C) -> Option<Vec<Element>> {
    let rank = comm.rank();
    let size = comm.size() as usize;
    let root_process = comm.process_at_rank(0);

    let local_count = local.len() as Count;

    if rank == 0 {
        let mut counts = vec![0 as Count; size];
        root_process.gather_into_root(&local_count, &mut counts[..]);

        let displs = displacements(&counts);
        let total: Count = counts.iter().sum();
        let mut global = vec![Element::default(); total as usize];
        {
            let mut partition = PartitionMut::new(&mut global[..], counts, &displs[..]);
            root_process.gather_varcount_into_root(local, &mut partition);
        }
        Some(global)
    } else {
        root_process.gather_into(&local_count);
        root_process.gather_varcount_into(local);
        None
    }
}

/// Shard sizes for distributing `n` elements over `size` ranks: `n / size`
/// everywhere, plus one on the first `n % size` ranks.
fn shard_counts(n: usize, size: usize) -> Vec<Count> {
    let base = n / size;
    let remainder = n % size;
    (0..size)
        .map(|r| (base + usize::from(r < remainder)) as Count)
        .collect_vec()
}

/// Exclusive prefix sum of `counts`, i.e. the displacement of each rank's
/// shard within the global buffer.
fn displacements(counts: &[Count]) -> Vec<Count> {
    counts
        .iter()
        .scan(0, |acc, &x| {
            let tmp = *acc;
            *acc += x;
            Some(tmp)
        })
        .collect_vec()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_shard_counts_even_split() {
        assert_eq!(shard_counts(8, 4), vec![2, 2, 2, 2]);
        assert_eq!(shard_counts(4, 1), vec![4]);
    }

    #[test]
    fn test_shard_counts_remainder_first() {
        assert_eq!(shard_counts(10, 4), vec![3, 3, 2, 2]);
        assert_eq!(shard_counts(3, 4), vec![1, 1, 1, 0]);
        assert_eq!(shard_counts(10, 4).iter().sum::<Count>(), 10);
    }

    #[test]
    fn test_displacements() {
        assert_eq!(displacements(&[3, 3, 2, 2]), vec![0, 3, 6, 8]);
        assert_eq!(displacements(&[]), Vec::<Count>::new());
    }
}
