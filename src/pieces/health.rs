//! Swarm health estimation
//!
//! Estimates how much of a torrent can still be completed from the pieces the
//! local client and its peers hold together. The estimate is a stepwise
//! heuristic: availability counts are drained one piece exchange per round,
//! and the simulation stops after the first round in which some piece had no
//! source left. That round's completions are still counted.

use super::bitfield::decode_bitfield;
use crate::types::{Peer, Task};

/// Per-piece number of sources (local client plus peers) holding the piece
///
/// Every bitfield is decoded to `piece_count` entries; pieces beyond the end
/// of a short bitfield count as missing.
#[must_use]
pub fn availability_counts<'a>(
    own_bitfield: &'a str,
    peer_bitfields: impl IntoIterator<Item = &'a str>,
    piece_count: usize,
) -> Vec<u32> {
    let mut availability = vec![0u32; piece_count];

    for bitfield in std::iter::once(own_bitfield).chain(peer_bitfields) {
        for (slot, completed) in availability
            .iter_mut()
            .zip(decode_bitfield(bitfield, piece_count))
        {
            *slot += u32::from(completed);
        }
    }

    availability
}

/// Drain availability counts round by round, returning the pieces virtually completed
///
/// Each round takes one source from every piece that still has one. The
/// simulation ends after a round in which at least one piece had none.
pub fn simulate_rounds(availability: &mut [u32]) -> u64 {
    if availability.is_empty() {
        return 0;
    }

    let mut completed: u64 = 0;

    loop {
        let mut exhausted = false;

        for slot in availability.iter_mut() {
            if *slot > 0 {
                completed += 1;
                *slot -= 1;
            } else {
                exhausted = true;
            }
        }

        if exhausted {
            return completed;
        }
    }
}

/// Pieces the swarm completes for a task with at least one piece
///
/// Only the pieces some bitfield can describe are counted. Past that every
/// piece has no source, so the simulation stops after its first round and the
/// count is the number of covered pieces with any source.
fn swarm_completed_pieces(task: &Task, peers: &[Peer]) -> u64 {
    let own_bitfield = task.bitfield.as_deref().unwrap_or_default();
    let longest = peers
        .iter()
        .map(|peer| peer.bitfield.len())
        .chain(std::iter::once(own_bitfield.len()))
        .max()
        .unwrap_or(0);
    let covered = task.num_pieces.min(longest.saturating_mul(4));

    let mut availability = availability_counts(
        own_bitfield,
        peers.iter().map(|peer| peer.bitfield.as_str()),
        covered,
    );

    if covered < task.num_pieces {
        availability.iter().filter(|count| **count > 0).count() as u64
    } else {
        simulate_rounds(&mut availability)
    }
}

/// Estimate the reachable completion percent of a task from its peers
///
/// With no peers this is the task's own `complete_percent`. Otherwise the
/// simulated count over `num_pieces` is returned, floored at the task's own
/// completion. The value can exceed 100 when pieces have several sources.
/// A task without pieces estimates 0 before the floor is applied.
#[must_use]
pub fn estimate_health_percent(task: &Task, peers: &[Peer]) -> f64 {
    if peers.is_empty() {
        return task.complete_percent;
    }

    let piece_count = task.num_pieces;
    let health = if piece_count == 0 {
        0.0
    } else {
        swarm_completed_pieces(task, peers) as f64 / piece_count as f64 * 100.0
    };

    if health < task.complete_percent {
        task.complete_percent
    } else {
        health
    }
}
