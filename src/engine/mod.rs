mod generations;

pub use self::generations::Generations;
use crate::{RuleTable, World};
use rayon::prelude::*;
use tracing::trace;

/// Advances `world` by one generation under `rule`
///
/// Every new status comes from the local sums of the previous generation, so
/// the update is simultaneous for the whole ring. The local sums are refreshed
/// once all statuses are written.
///
/// Returns the sum of the new statuses.
pub fn step(world: &mut World, rule: &RuleTable) -> u32 {
    let mut status_sum = 0;
    for cell in world.cells_mut() {
        let next = rule.lookup(cell.local_sum);
        cell.status = next;
        cell.count += u32::from(next.value());
        status_sum += u32::from(next.value());
    }
    world.recompute_local_sums();

    debug_assert_eq!(status_sum, world.status_sum());
    trace!(status_sum, "stepped world");
    status_sum
}

/// Same as [`step`], but spread over the rayon thread pool
pub fn step_parallel(world: &mut World, rule: &RuleTable) -> u32 {
    // each cell only reads its own local sum, which still belongs to the
    // previous generation, so cells can be updated in any order
    let status_sum: u32 = world
        .cells_mut()
        .par_iter_mut()
        .map(|cell| {
            let next = rule.lookup(cell.local_sum);
            cell.status = next;
            cell.count += u32::from(next.value());
            u32::from(next.value())
        })
        .sum();

    // neighbors are read from a snapshot, never from cells being written
    let statuses: Vec<u8> = world.cells().par_iter().map(|c| c.status.value()).collect();
    let n = statuses.len();
    world
        .cells_mut()
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, cell)| {
            cell.local_sum = statuses[(i + n - 1) % n] + statuses[i] + statuses[(i + 1) % n];
        });

    trace!(status_sum, "stepped world in parallel");
    status_sum
}

/// Lazily runs `generations` steps, yielding each step's status sum
#[inline]
pub fn run<'a>(world: &'a mut World, rule: &'a RuleTable, generations: usize) -> Generations<'a> {
    Generations::new(world, rule, generations)
}
