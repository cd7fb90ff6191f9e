//! Sliding-window scan for embedded joint angles
//!
//! The sender frames nothing, so the true alignment of any embedded double
//! is unknown. Every byte offset is therefore a candidate start of a
//! little-endian f64, and the plausibility range is the sole discriminator
//! against the windows that are not real value boundaries.

/// Lower bound of the plausible joint angle range, radians.
///
/// Joint angles stay within roughly ±2π; ±10.0 covers that with margin.
pub const PLAUSIBLE_MIN: f64 = -10.0;

/// Upper bound of the plausible joint angle range, radians.
pub const PLAUSIBLE_MAX: f64 = 10.0;

/// Candidate window width: one IEEE-754 double.
const WINDOW_SIZE: usize = std::mem::size_of::<f64>();

/// Scan a chunk for plausible little-endian doubles at every byte offset.
///
/// Accepted values are returned in window-offset order. Overlapping windows
/// are never deduplicated: in-range values at offsets `i` and `i + 1` both
/// appear. Exact ±10.0 and 0.0 pass the filter; NaN never does, since it
/// fails the range comparison. Buffers shorter than 8 bytes yield an empty
/// vec. A window that fails the array conversion is skipped and the scan
/// continues at the next offset.
pub fn scan_angles(buf: &[u8]) -> Vec<f64> {
    let mut angles = Vec::new();
    for window in buf.windows(WINDOW_SIZE) {
        let Ok(bytes) = <[u8; WINDOW_SIZE]>::try_from(window) else {
            continue;
        };
        let value = f64::from_le_bytes(bytes);
        if (PLAUSIBLE_MIN..=PLAUSIBLE_MAX).contains(&value) {
            angles.push(value);
        }
    }
    angles
}
