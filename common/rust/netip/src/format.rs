//! Binary to text conversion of IPv6 addresses.

use core::{fmt, ops::Range};

use crate::{
    addr::{GROUPS, Ipv6Addr},
    writer::{BoundedWriter, Formatted},
};

/// Finds the longest run of at least two consecutive zero groups.
///
/// When several runs share the maximal length, the leftmost one is returned.
pub fn longest_zero_run(segments: &[u16; GROUPS]) -> Option<Range<usize>> {
    let mut longest = 0..0;
    let mut current = 0..0;

    for (idx, &segment) in segments.iter().enumerate() {
        if segment != 0 {
            continue;
        }

        if current.end != idx {
            current = idx..idx;
        }
        current.end = idx + 1;

        if current.len() > longest.len() {
            longest = current.clone();
        }
    }

    (longest.len() > 1).then_some(longest)
}

/// Writes colon-separated groups in lowercase hex without leading zeros.
fn write_groups<W: fmt::Write>(wr: &mut W, groups: &[u16]) -> fmt::Result {
    if let Some((first, tail)) = groups.split_first() {
        write!(wr, "{first:x}")?;
        for group in tail {
            write!(wr, ":{group:x}")?;
        }
    }

    Ok(())
}

/// Writes the canonical text of the given groups into any [`fmt::Write`]
/// sink.
///
/// Stops at the first error reported by the sink.
pub fn write_canonical<W: fmt::Write>(wr: &mut W, segments: &[u16; GROUPS]) -> fmt::Result {
    match longest_zero_run(segments) {
        Some(run) => {
            write_groups(wr, &segments[..run.start])?;
            wr.write_str("::")?;
            write_groups(wr, &segments[run.end..])
        }
        None => write_groups(wr, segments),
    }
}

/// Formats the address into the given buffer.
///
/// The whole buffer is the capacity. The text is always NUL-terminated
/// inside the buffer (unless the buffer is empty), and nothing at or past the
/// end of the buffer is written. When the text does not fit, the longest
/// prefix that fits together with the terminator is written and
/// [`Formatted::Truncated`] is returned.
pub fn format_into(addr: &Ipv6Addr, buf: &mut [u8]) -> Formatted {
    let mut wr = BoundedWriter::new(buf);
    // The only possible error is truncation, which the writer records.
    let _ = write_canonical(&mut wr, &addr.segments());
    wr.finish()
}

/// Formats the address into the first `capacity` bytes of the given buffer.
///
/// Returns the number of characters written, terminator excluded. On
/// truncation the returned value is strictly less than `capacity`.
///
/// A `capacity` larger than the buffer is clamped to the buffer length.
#[inline]
pub fn ntop(addr: &Ipv6Addr, buf: &mut [u8], capacity: usize) -> usize {
    let capacity = capacity.min(buf.len());
    format_into(addr, &mut buf[..capacity]).len()
}
