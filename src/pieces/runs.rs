//! Run-length compression of piece maps for rendering

use crate::types::PieceRun;

/// Compress a piece sequence into maximal runs
///
/// Adjacent runs never share the same completion state, and the run lengths
/// add up to the input length.
///
/// # Examples
///
/// ```
/// use aria2_tasks::pieces::compress_runs;
/// use aria2_tasks::PieceRun;
///
/// let runs = compress_runs(&[true, true, false]);
/// assert_eq!(
///     runs,
///     vec![
///         PieceRun { completed: true, length: 2 },
///         PieceRun { completed: false, length: 1 },
///     ]
/// );
/// ```
#[must_use]
pub fn compress_runs(pieces: &[bool]) -> Vec<PieceRun> {
    let mut runs: Vec<PieceRun> = Vec::new();

    for &completed in pieces {
        match runs.last_mut() {
            Some(run) if run.completed == completed => run.length += 1,
            _ => runs.push(PieceRun {
                completed,
                length: 1,
            }),
        }
    }

    runs
}
