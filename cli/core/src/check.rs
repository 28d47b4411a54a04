//! Codec self-check.
//!
//! Runs a fixed set of addresses through the formatter and the parser and
//! verifies round trip and buffer capacity safety.

use netip::{ADDR_LEN, Ipv6Addr, TEXT_BUF_LEN};
use serde::Serialize;

/// Capacity used for the truncation check.
const SMALL_CAPACITY: usize = 5;

/// Sentinel bytes placed right after the small capacity.
const SENTINEL: [u8; 2] = [0xde, 0xad];

pub const CASES: [(&str, [u8; ADDR_LEN]); 5] = [
    ("link-local", [0xfe, 0x80, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]),
    ("no-zero-run", [0xfe, 0x80, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14]),
    ("loopback", [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]),
    ("unspecified", [0; ADDR_LEN]),
    ("tie", [0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1]),
];

/// Result of checking a single address.
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub name: &'static str,
    pub text: String,
    pub written: usize,
    /// Parsing the formatted text yields the original octets.
    pub round_trip: bool,
    /// Parsing the same buffer again, now through the NUL-terminated entry
    /// point, yields the original octets.
    pub reparse: bool,
    /// Formatting into a small buffer stays below its capacity and keeps the
    /// sentinel bytes past it.
    pub capacity_safe: bool,
}

impl CaseReport {
    #[inline]
    pub fn failures(&self) -> usize {
        [self.round_trip, self.reparse, self.capacity_safe]
            .iter()
            .filter(|&&ok| !ok)
            .count()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub cases: Vec<CaseReport>,
    pub tests: usize,
    pub failures: usize,
}

impl Summary {
    #[inline]
    pub fn succeeded(&self) -> usize {
        self.tests - self.failures
    }
}

pub fn check_case(name: &'static str, octets: [u8; ADDR_LEN]) -> CaseReport {
    let addr = Ipv6Addr::from_octets(octets);

    let mut buf = [0; TEXT_BUF_LEN + SENTINEL.len()];
    let written = netip::ntop(&addr, &mut buf, TEXT_BUF_LEN);
    let text = String::from_utf8_lossy(&buf[..written]).into_owned();
    log::debug!("{name}: {written} {text}");

    let round_trip = match netip::parse(&buf[..written]) {
        Ok(parsed) => parsed == addr,
        Err(err) => {
            log::warn!("{name}: failed to parse '{text}': {err}");
            false
        }
    };

    let mut backwards = [0; ADDR_LEN];
    let reparse = netip::pton(&buf, &mut backwards).is_ok() && backwards == octets;
    if !reparse {
        log::warn!("{name}: backwards parse failed");
    }

    buf[SMALL_CAPACITY..SMALL_CAPACITY + SENTINEL.len()].copy_from_slice(&SENTINEL);
    let small = netip::ntop(&addr, &mut buf, SMALL_CAPACITY);
    let capacity_safe =
        small < SMALL_CAPACITY && buf[SMALL_CAPACITY..SMALL_CAPACITY + SENTINEL.len()] == SENTINEL;
    if !capacity_safe {
        log::warn!(
            "{name}: write len {small} with capacity {SMALL_CAPACITY}, buffer: {:02x?}",
            &buf[..10]
        );
    }

    CaseReport {
        name,
        text,
        written,
        round_trip,
        reparse,
        capacity_safe,
    }
}

/// Runs every built-in case.
pub fn run() -> Summary {
    let cases = CASES
        .iter()
        .map(|&(name, octets)| check_case(name, octets))
        .collect::<Vec<_>>();
    let tests = cases.len() * 3;
    let failures = cases.iter().map(CaseReport::failures).sum();

    Summary {
        cases,
        tests,
        failures,
    }
}
