//! Frame classification
//!
//! A decoded frame is either a joint update, an informational text
//! message, or noise. The checks form a strict precedence chain: a frame
//! carrying both a significant angle and long text reports only as a
//! joint update.

use super::DecodedFrame;

/// Magnitude an angle must exceed to count as a real update rather than
/// numeric noise near zero.
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.0001;

/// Exact, case-sensitive substring marking a joint-state topic in the
/// text part of a frame.
pub const TOPIC_MARKER: &str = "joint_state";

/// Text shorter than this (in characters) is not worth surfacing alone.
const MIN_INFO_LEN: usize = 5;

/// Outcome of classifying one decoded frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// At least one angle above the significance threshold.
    JointUpdate {
        angles: Vec<f64>,
        topic_detected: bool,
    },
    /// No significant angles, but enough text to be worth reporting.
    Info { text: String },
    /// Nothing usable in the frame.
    Discard,
}

/// Classify a decoded frame.
pub fn classify(frame: &DecodedFrame) -> Classification {
    if frame
        .angles
        .iter()
        .any(|a| a.abs() > SIGNIFICANCE_THRESHOLD)
    {
        return Classification::JointUpdate {
            angles: frame.angles.clone(),
            topic_detected: frame.text.contains(TOPIC_MARKER),
        };
    }

    if frame.text.chars().count() > MIN_INFO_LEN {
        return Classification::Info {
            text: frame.text.clone(),
        };
    }

    Classification::Discard
}

/// Format angles for display: fixed-point, 4 decimal places, input order.
pub fn format_angles(angles: &[f64]) -> Vec<String> {
    angles.iter().map(|a| format!("{a:.4}")).collect()
}
