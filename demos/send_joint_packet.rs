//! Send a synthetic joint packet to a running SandhiIO daemon
//!
//! Emits a topic label followed by six little-endian doubles, the way the
//! simulation publishes arm state, then a short text-only status line.
//!
//! ```sh
//! cargo run --example send_joint_packet -- 127.0.0.1:10000
//! ```

use std::io::Write;
use std::net::TcpStream;
use std::thread;
use std::time::Duration;

fn main() -> std::io::Result<()> {
    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "127.0.0.1:10000".to_string());

    let mut stream = TcpStream::connect(&addr)?;
    println!("Connected to {}", addr);

    // Topic label + six joint angles, unframed
    let mut packet = Vec::new();
    packet.extend_from_slice(b"/robot/joint_state ");
    for angle in [0.0f64, 0.7854, -1.5708, 3.1416, -0.0001, 1.0472] {
        packet.extend_from_slice(&angle.to_le_bytes());
    }
    stream.write_all(&packet)?;
    println!("Sent joint packet ({} bytes)", packet.len());

    // Give the daemon a moment so the status line arrives as its own chunk
    thread::sleep(Duration::from_millis(100));

    stream.write_all(b"simulation sender shutting down")?;
    println!("Sent status line");

    Ok(())
}
