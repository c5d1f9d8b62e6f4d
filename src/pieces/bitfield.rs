//! Hex bitfield decoding

/// Value of one hex digit; anything that is not a hex digit counts as 0
fn nibble_value(c: char) -> u32 {
    c.to_digit(16).unwrap_or(0)
}

/// Decode a hex-encoded piece bitfield
///
/// Each hex digit carries four pieces, most-significant bit first. Decoding
/// stops once `piece_count` pieces have been produced, so the result holds
/// `min(4 * digits, piece_count)` entries.
///
/// # Examples
///
/// ```
/// use aria2_tasks::pieces::decode_bitfield;
///
/// assert_eq!(
///     decode_bitfield("f0", 8),
///     vec![true, true, true, true, false, false, false, false]
/// );
/// assert_eq!(decode_bitfield("c", 3), vec![true, true, false]);
/// ```
#[must_use]
pub fn decode_bitfield(bitfield: &str, piece_count: usize) -> Vec<bool> {
    let mut pieces = Vec::with_capacity(piece_count.min(bitfield.len().saturating_mul(4)));

    for c in bitfield.chars() {
        let bits = nibble_value(c);

        for shift in (0..4).rev() {
            if pieces.len() >= piece_count {
                return pieces;
            }
            pieces.push(bits & (1 << shift) != 0);
        }
    }

    pieces
}

/// Rough completion ratio of a peer from its bitfield, in `0.0..=1.0`
///
/// This is the sum of the hex digit values over the largest possible sum
/// (`15` per digit), not a count of set bits. It needs no piece count, which
/// peers do not report. An empty bitfield yields 0.
#[must_use]
pub fn estimate_completed_ratio(bitfield: &str) -> f64 {
    let digits = bitfield.chars().count();
    if digits == 0 {
        return 0.0;
    }

    let completed: u64 = bitfield.chars().map(|c| u64::from(nibble_value(c))).sum();
    completed as f64 / (digits as u64 * 0xf) as f64
}
