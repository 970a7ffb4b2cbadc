//! Parallel generation of independent chunks.
//!
//! Chunk generation is a pure function of `(seed, xi, yi)`, so a batch can be
//! spread across worker threads and still produce exactly what sequential
//! generation would. Results come back in request order.

use std::thread;

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::chunk::{Chunk, ChunkCoord, generate_chunk};

/// Worker count leaving one core for the caller.
pub fn default_worker_count() -> usize {
    num_cpus::get().saturating_sub(1).max(1)
}

/// Generate chunks one after another on the calling thread.
pub fn generate_chunks(seed: f64, coords: &[ChunkCoord]) -> Vec<Chunk> {
    coords
        .iter()
        .map(|c| generate_chunk(c.xi, c.yi, seed))
        .collect()
}

/// Generate chunks on up to `workers` threads.
///
/// Falls back to [`generate_chunks`] when there is nothing to parallelize.
pub fn generate_chunks_parallel(seed: f64, coords: &[ChunkCoord], workers: usize) -> Vec<Chunk> {
    let workers = workers.min(coords.len());
    if workers <= 1 {
        return generate_chunks(seed, coords);
    }

    let (task_tx, task_rx): (Sender<(usize, ChunkCoord)>, Receiver<(usize, ChunkCoord)>) =
        unbounded();
    let (result_tx, result_rx) = unbounded::<(usize, Chunk)>();

    for task in coords.iter().copied().enumerate() {
        // The receiver is alive until the scope below ends.
        let _ = task_tx.send(task);
    }
    drop(task_tx);

    thread::scope(|scope| {
        for _ in 0..workers {
            let rx = task_rx.clone();
            let tx = result_tx.clone();
            scope.spawn(move || {
                while let Ok((slot, coord)) = rx.recv() {
                    let chunk = generate_chunk(coord.xi, coord.yi, seed);
                    if tx.send((slot, chunk)).is_err() {
                        break;
                    }
                }
            });
        }
    });
    drop(result_tx);

    let mut slots: Vec<Option<Chunk>> = vec![None; coords.len()];
    for (slot, chunk) in result_rx.try_iter() {
        slots[slot] = Some(chunk);
    }

    tracing::debug!(chunks = coords.len(), workers, "generated chunk batch");

    // Every slot is filled: each task was sent exactly once and every worker
    // drains the queue before the scope joins.
    slots.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_matches_sequential() {
        let coords: Vec<_> = ChunkCoord::new(0, 0).neighborhood(1).collect();
        let sequential = generate_chunks(42.0, &coords);
        let parallel = generate_chunks_parallel(42.0, &coords, 4);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_results_in_request_order() {
        let coords = vec![
            ChunkCoord::new(3, 1),
            ChunkCoord::new(-2, 0),
            ChunkCoord::new(0, 5),
        ];
        let chunks = generate_chunks_parallel(7.0, &coords, 3);
        let got: Vec<_> = chunks.iter().map(|c| c.coord).collect();
        assert_eq!(got, coords);
    }

    #[test]
    fn test_empty_and_single_worker() {
        assert!(generate_chunks_parallel(1.0, &[], 8).is_empty());
        let one = generate_chunks_parallel(1.0, &[ChunkCoord::new(0, 0)], 8);
        assert_eq!(one.len(), 1);
        assert_eq!(one[0], generate_chunk(0, 0, 1.0));
    }

    #[test]
    fn test_default_worker_count_positive() {
        assert!(default_worker_count() >= 1);
    }
}
