//! Text to binary conversion of IPv6 addresses.
//!
//! Accepted grammar is up to 8 groups of 1 to 4 case-insensitive hex digits
//! separated by `:`, where at most one `::` stands for one or more zero
//! groups. Embedded IPv4 dotted quads and zone indices are not accepted.

use crate::addr::{ADDR_LEN, GROUPS, Ipv6Addr};

const MAX_GROUP_DIGITS: usize = 4;

/// Why a text was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Reason {
    #[error("empty input")]
    Empty,
    #[error("fewer than 8 groups and no '::'")]
    TooFewGroups,
    #[error("more than 8 groups")]
    TooManyGroups,
    #[error("malformed group at offset {offset}")]
    MalformedGroup { offset: usize },
    #[error("more than one '::'")]
    MultipleElisions,
    #[error("dangling ':' at offset {offset}")]
    DanglingColon { offset: usize },
}

/// Error returned when a text is not a valid IPv6 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid IPv6 address format: {0}")]
    InvalidFormat(Reason),
}

impl ParseError {
    /// Returns the reason the text was rejected.
    #[inline]
    pub const fn reason(&self) -> Reason {
        match self {
            Self::InvalidFormat(reason) => *reason,
        }
    }
}

impl From<Reason> for ParseError {
    #[inline]
    fn from(reason: Reason) -> Self {
        Self::InvalidFormat(reason)
    }
}

/// Returns the position of the first `::` in the text.
fn find_elision(text: &[u8]) -> Option<usize> {
    text.windows(2).position(|w| w == b"::")
}

/// Parses a single group of 1 to 4 hex digits.
fn parse_group(digits: &[u8]) -> Option<u16> {
    if digits.is_empty() || digits.len() > MAX_GROUP_DIGITS {
        return None;
    }

    digits.iter().try_fold(0u16, |acc, &b| {
        let digit = (b as char).to_digit(16)?;
        Some((acc << 4) | digit as u16)
    })
}

/// Parses colon-separated groups into `groups`, returning how many were
/// read.
///
/// The given part must not contain `::`. An empty part has no groups.
/// `offset` is the position of the part in the whole text, used for error
/// reporting.
fn read_groups(part: &[u8], offset: usize, groups: &mut [u16]) -> Result<usize, Reason> {
    if part.is_empty() {
        return Ok(0);
    }

    let mut count = 0;
    let mut start = 0;
    for digits in part.split(|&b| b == b':') {
        let pos = offset + start;
        if digits.is_empty() {
            // With no "::" inside the part, an empty group is a lone colon at
            // either end of it.
            let colon = if start == 0 { pos } else { pos - 1 };
            return Err(Reason::DanglingColon { offset: colon });
        }

        let Some(slot) = groups.get_mut(count) else {
            return Err(Reason::TooManyGroups);
        };
        *slot = parse_group(digits).ok_or(Reason::MalformedGroup { offset: pos })?;

        count += 1;
        start += digits.len() + 1;
    }

    Ok(count)
}

fn parse_groups(text: &[u8]) -> Result<[u16; GROUPS], Reason> {
    if text.is_empty() {
        return Err(Reason::Empty);
    }

    let mut segments = [0; GROUPS];

    let Some(idx) = find_elision(text) else {
        let count = read_groups(text, 0, &mut segments)?;
        if count < GROUPS {
            return Err(Reason::TooFewGroups);
        }
        return Ok(segments);
    };

    let (head, tail) = (&text[..idx], &text[idx + 2..]);
    if find_elision(tail).is_some() {
        return Err(Reason::MultipleElisions);
    }

    // "::" stands for at least one zero group.
    let mut head_groups = [0; GROUPS - 1];
    let head_len = read_groups(head, 0, &mut head_groups)?;

    let mut tail_groups = [0; GROUPS - 1];
    let tail_len = read_groups(tail, idx + 2, &mut tail_groups[..GROUPS - 1 - head_len])?;

    segments[..head_len].copy_from_slice(&head_groups[..head_len]);
    segments[GROUPS - tail_len..].copy_from_slice(&tail_groups[..tail_len]);

    Ok(segments)
}

/// Parses the textual form of an IPv6 address.
///
/// Hex digits are case-insensitive. The whole text must be consumed.
pub fn parse(text: &[u8]) -> Result<Ipv6Addr, ParseError> {
    match parse_groups(text) {
        Ok(segments) => Ok(Ipv6Addr::from_segments(segments)),
        Err(reason) => {
            log::debug!("rejected IPv6 text \"{}\": {reason}", text.escape_ascii());
            Err(reason.into())
        }
    }
}

/// Parses the textual form of an IPv6 address into `out`.
///
/// The text ends at the first NUL byte, if any. On failure `out` is left
/// untouched.
pub fn pton(text: &[u8], out: &mut [u8; ADDR_LEN]) -> Result<(), ParseError> {
    let text = match text.iter().position(|&b| b == 0) {
        Some(nul) => &text[..nul],
        None => text,
    };

    *out = parse(text)?.octets();
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn reason(text: &str) -> Reason {
        parse(text.as_bytes()).unwrap_err().reason()
    }

    #[test]
    fn parse_compressed() {
        assert_eq!(
            Ipv6Addr::from_octets([0xfe, 0x80, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]),
            parse(b"fe80::1").unwrap()
        );
        assert_eq!(Ipv6Addr::UNSPECIFIED, parse(b"::").unwrap());
        assert_eq!(Ipv6Addr::LOCALHOST, parse(b"::1").unwrap());
        assert_eq!(Ipv6Addr::new(1, 0, 0, 0, 0, 0, 0, 0), parse(b"1::").unwrap());
        assert_eq!(Ipv6Addr::new(1, 2, 3, 4, 5, 6, 7, 0), parse(b"1:2:3:4:5:6:7::").unwrap());
        assert_eq!(Ipv6Addr::new(0, 2, 3, 4, 5, 6, 7, 8), parse(b"::2:3:4:5:6:7:8").unwrap());
        assert_eq!(Ipv6Addr::new(1, 2, 3, 0, 5, 6, 7, 8), parse(b"1:2:3::5:6:7:8").unwrap());
    }

    #[test]
    fn parse_expanded() {
        assert_eq!(
            Ipv6Addr::from_octets([0xfe, 0x80, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14]),
            parse(b"fe80:102:304:506:708:90a:b0c:d0e").unwrap()
        );
        assert_eq!(
            Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 1),
            parse(b"fe80:0000:0000:0000:0000:0000:0000:0001").unwrap()
        );
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(parse(b"fe80::1").unwrap(), parse(b"FE80::1").unwrap());
        assert_eq!(parse(b"abcd:ef01::").unwrap(), parse(b"AbCd:eF01::").unwrap());
    }

    #[test]
    fn reject_multiple_elisions() {
        assert_eq!(Reason::MultipleElisions, reason("fe80::1::2"));
        assert_eq!(Reason::MultipleElisions, reason("::::"));
        assert_eq!(Reason::MultipleElisions, reason("1::2:3::"));
    }

    #[test]
    fn reject_malformed_groups() {
        assert_eq!(Reason::MalformedGroup { offset: 5 }, reason("fe80:zzzz::1"));
        assert_eq!(Reason::MalformedGroup { offset: 0 }, reason("12345::"));
        assert_eq!(Reason::MalformedGroup { offset: 2 }, reason("::1g"));
        assert_eq!(Reason::MalformedGroup { offset: 2 }, reason("::1.2.3.4"));
        assert_eq!(Reason::MalformedGroup { offset: 6 }, reason("fe80::1%eth0"));
        assert_eq!(Reason::MalformedGroup { offset: 2 }, reason(":: 1"));
    }

    #[test]
    fn reject_wrong_group_count() {
        assert_eq!(Reason::TooFewGroups, reason("1:2:3:4:5:6:7"));
        assert_eq!(Reason::TooFewGroups, reason("fe80"));
        assert_eq!(Reason::TooManyGroups, reason("1:2:3:4:5:6:7:8:9"));
        // "::" must stand for at least one group.
        assert_eq!(Reason::TooManyGroups, reason("1:2:3:4:5:6:7:8::"));
        assert_eq!(Reason::TooManyGroups, reason("::1:2:3:4:5:6:7:8"));
        assert_eq!(Reason::TooManyGroups, reason("1:2:3:4::5:6:7:8"));
    }

    #[test]
    fn reject_dangling_colons() {
        assert_eq!(Reason::DanglingColon { offset: 0 }, reason(":1::"));
        assert_eq!(Reason::DanglingColon { offset: 4 }, reason("1::2:"));
        assert_eq!(Reason::DanglingColon { offset: 2 }, reason(":::"));
        assert_eq!(Reason::DanglingColon { offset: 3 }, reason("1:::2"));
        assert_eq!(Reason::DanglingColon { offset: 15 }, reason("1:2:3:4:5:6:7:8:"));
    }

    #[test]
    fn reject_empty() {
        assert_eq!(Reason::Empty, reason(""));
        assert_eq!(Reason::MalformedGroup { offset: 0 }, reason(" "));
    }

    #[test]
    fn pton_stops_at_nul() {
        let mut out = [0xaa; ADDR_LEN];
        pton(b"fe80::1\0garbage", &mut out).unwrap();
        assert_eq!(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 1).octets(), out);
    }

    #[test]
    fn pton_leaves_output_untouched_on_failure() {
        let mut out = [0xaa; ADDR_LEN];
        assert_eq!(
            Err(ParseError::InvalidFormat(Reason::MultipleElisions)),
            pton(b"fe80::1::2", &mut out)
        );
        assert_eq!([0xaa; ADDR_LEN], out);
    }

    #[test]
    fn error_message_names_reason() {
        let err = parse(b"fe80::1::2").unwrap_err();
        assert_eq!("invalid IPv6 address format: more than one '::'", err.to_string());
    }
}
