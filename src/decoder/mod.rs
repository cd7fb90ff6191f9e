//! Heuristic decoding of unframed joint-stream chunks
//!
//! The sender (a simulation publishing robot arm state) writes an
//! arbitrary byte stream with no length prefixes or message boundaries.
//! Each received chunk is decoded independently on two axes:
//!
//! - a sliding-window scan for plausible little-endian doubles ([`scan`])
//! - a permissive printable-text extraction ([`text`])
//!
//! The combined [`DecodedFrame`] then runs through [`classify`] to decide
//! whether it is worth reporting.
//!
//! A value split across two reads is not reconstructed; every chunk
//! stands alone.

pub mod classify;
pub mod scan;
pub mod text;

pub use classify::{classify, format_angles, Classification};
pub use scan::scan_angles;
pub use text::extract_text;

/// Decoded view of one raw chunk: recovered text plus candidate angles in
/// byte-offset order.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedFrame {
    pub text: String,
    pub angles: Vec<f64>,
}

/// Decode one chunk.
///
/// Text and numeric extraction run independently over the same bytes; no
/// cross-validation between the two results is attempted.
pub fn decode_chunk(chunk: &[u8]) -> DecodedFrame {
    DecodedFrame {
        text: text::extract_text(chunk),
        angles: scan::scan_angles(chunk),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_bare_angle_chunk() {
        // Exactly the 8 little-endian bytes of pi/2: one window, decoded
        // bit-exact. The text part is the printable residue of the float's
        // own bytes, too short to matter downstream.
        let frame = decode_chunk(&FRAC_PI_2.to_le_bytes());
        assert_eq!(frame.angles, vec![FRAC_PI_2]);
        assert_eq!(frame.text, "-DT!?");
    }

    #[test]
    fn test_mixed_chunk() {
        let mut chunk = b"/robot/joint_state ".to_vec();
        chunk.extend_from_slice(&0.5f64.to_le_bytes());

        let frame = decode_chunk(&chunk);
        assert!(frame.text.contains("joint_state"));
        assert!(frame.angles.contains(&0.5));
    }

    #[test]
    fn test_empty_chunk() {
        let frame = decode_chunk(b"");
        assert!(frame.text.is_empty());
        assert!(frame.angles.is_empty());
    }
}
