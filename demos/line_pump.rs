//! Line pump - feed a byte source through a small RingBuffer and split lines.
//!
//! The source is read in fixed chunks, as from a serial port. Whatever the
//! buffer cannot take is kept and retried after the consumer drains complete
//! lines, so nothing is lost even though the ring is smaller than the input.
//!
//! Run: RUST_LOG=bytering=debug cargo run --example line_pump

use std::io::{ Cursor, Read };

use anyhow::{ bail, Context, Result };
use bytering::insights::init_logging;
use bytering::{ ReadAmount, RingBuffer, RingBufferConfig, StreamHandle };
use tracing::info;

const CHUNK: usize = 48;

const CAPTURE: &[u8] = b"\
16:07:41 TEST BEGIN: arc4random_stress\r\n\
16:07:41 PASS #1: pthread_create(&thr[i], NULL, stress, NULL) == 0\r\n\
16:07:44 TEST END: arc4random_stress\r\n\
*** arc4random_stress ***\r\n\
Result:       Pass\r\n\
Time:         00:00:03\r\n\
Pass count:   7\r\n";

/// Offset just past the first `\n`, scanning buffered bytes in place
fn line_end(ring: &RingBuffer) -> Option<usize> {
    (0..ring.used_count()).find(|&i| matches!(ring.peek(i), Ok(b'\n'))).map(|i| i + 1)
}

fn drain_lines(ring: &mut RingBuffer, lines: &mut Vec<String>) {
    while let Some(end) = line_end(ring) {
        let raw = ring.read(ReadAmount::AtMost(end));
        lines.push(String::from_utf8_lossy(&raw).trim_end().to_string());
    }
}

fn pump<R: Read>(mut source: R, ring: &mut RingBuffer) -> Result<Vec<String>> {
    if !ring.writable() || !ring.readable() {
        bail!("ring buffer is not a read/write stream");
    }

    let mut lines = Vec::new();
    let mut pending: Vec<u8> = Vec::new();
    let mut chunk = [0u8; CHUNK];

    loop {
        let n = source.read(&mut chunk).context("reading source")?;
        if n == 0 && pending.is_empty() {
            break;
        }
        pending.extend_from_slice(&chunk[..n]);

        let written = ring.write(&pending);
        pending.drain(..written);

        drain_lines(ring, &mut lines);

        if !pending.is_empty() && ring.is_full() {
            bail!("line longer than ring capacity {}", ring.capacity());
        }
    }

    if !ring.is_empty() {
        let tail = ring.read(ReadAmount::All);
        lines.push(String::from_utf8_lossy(&tail).into_owned());
    }
    Ok(lines)
}

fn main() -> Result<()> {
    init_logging();

    let config = RingBufferConfig::new(128)?.with_zero_on_read(true);
    let mut ring = RingBuffer::from_config(&config)?;

    let lines = pump(Cursor::new(CAPTURE), &mut ring)?;
    for line in &lines {
        println!("{line}");
    }

    info!(lines = lines.len(), stats = %ring.stats(), "capture drained");
    Ok(())
}
