//! End-to-end decode and classify checks over the public API.

use sandhi_io::decoder::{classify, decode_chunk, format_angles, Classification};
use std::f64::consts::FRAC_PI_2;

#[test]
fn test_bare_angle_end_to_end() {
    // A chunk that is exactly the little-endian encoding of pi/2 decodes
    // to that one value, bit-exact.
    let frame = decode_chunk(&FRAC_PI_2.to_le_bytes());
    assert_eq!(frame.angles, vec![FRAC_PI_2]);

    match classify(&frame) {
        Classification::JointUpdate {
            angles,
            topic_detected,
        } => {
            assert_eq!(format_angles(&angles), vec!["1.5708"]);
            assert!(!topic_detected);
        }
        other => panic!("expected joint update, got {:?}", other),
    }
}

#[test]
fn test_topic_chunk_end_to_end() {
    let mut chunk = b"topic joint_state update ".to_vec();
    chunk.extend_from_slice(&0.5f64.to_le_bytes());

    let frame = decode_chunk(&chunk);
    match classify(&frame) {
        Classification::JointUpdate {
            angles,
            topic_detected,
        } => {
            assert!(topic_detected);
            assert!(format_angles(&angles).contains(&"0.5000".to_string()));
        }
        other => panic!("expected joint update, got {:?}", other),
    }
}

#[test]
fn test_handshake_text_end_to_end() {
    let frame = decode_chunk(b"unity sender ready\n");
    assert_eq!(
        classify(&frame),
        Classification::Info {
            text: "unity sender ready".to_string()
        }
    );
}

#[test]
fn test_noise_chunk_discarded() {
    // Too short for any window, and no text worth keeping.
    let frame = decode_chunk(&[0x01, 0x02, 0x03]);
    assert_eq!(classify(&frame), Classification::Discard);
}
