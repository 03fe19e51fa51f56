//! Benchmark fixtures for Goban board geometry.
//!
//! - [`STANDARD_SPANS`]: the board sizes most games are played on
//! - [`scattered_board`]: deterministic stone placement for walk benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use goban_core::Color;

/// 9x9, 13x13, and 19x19.
pub const STANDARD_SPANS: [usize; 3] = [9, 13, 19];

/// A `span x span` board with roughly a third of the points occupied.
///
/// Placement is a fixed function of `seed`, so runs are comparable.
pub fn scattered_board(span: usize, seed: u64) -> Vec<Color> {
    let mut state = seed | 1;
    (0..span * span)
        .map(|_| {
            // xorshift64
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            match state % 6 {
                0 => Color::Black,
                1 => Color::White,
                _ => Color::Empty,
            }
        })
        .collect()
}
