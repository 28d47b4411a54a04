use core::{
    array::TryFromSliceError,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::{format, parse::ParseError};

/// Number of octets in an IPv6 address.
pub const ADDR_LEN: usize = 16;

/// Number of 16-bit groups in the textual form of an IPv6 address.
pub const GROUPS: usize = 8;

/// Length of the longest canonical text, `ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff`.
pub const MAX_TEXT_LEN: usize = 39;

/// Buffer size large enough for any canonical text plus its terminator.
///
/// Same value as `INET6_ADDRSTRLEN`.
pub const TEXT_BUF_LEN: usize = 46;

/// An IPv6 address.
///
/// Stored as 16 octets in network byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Default, Hash)]
pub struct Ipv6Addr([u8; ADDR_LEN]);

impl Ipv6Addr {
    /// The unspecified address `::`.
    pub const UNSPECIFIED: Self = Self([0; ADDR_LEN]);

    /// The loopback address `::1`.
    pub const LOCALHOST: Self = Self::new(0, 0, 0, 0, 0, 0, 0, 1);

    /// Creates a new IPv6 address from its eight 16-bit groups.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(a: u16, b: u16, c: u16, d: u16, e: u16, f: u16, g: u16, h: u16) -> Self {
        Self::from_segments([a, b, c, d, e, f, g, h])
    }

    /// Creates a new IPv6 address from its eight 16-bit groups.
    #[inline]
    pub const fn from_segments(segments: [u16; GROUPS]) -> Self {
        let mut octets = [0; ADDR_LEN];
        let mut idx = 0;
        while idx < GROUPS {
            let [hi, lo] = segments[idx].to_be_bytes();
            octets[2 * idx] = hi;
            octets[2 * idx + 1] = lo;
            idx += 1;
        }

        Self(octets)
    }

    /// Creates a new IPv6 address from 16 octets in network byte order.
    #[inline]
    pub const fn from_octets(octets: [u8; ADDR_LEN]) -> Self {
        Self(octets)
    }

    /// Returns the 16 octets of this address in network byte order.
    #[inline]
    pub const fn octets(&self) -> [u8; ADDR_LEN] {
        match self {
            Self(octets) => *octets,
        }
    }

    #[inline]
    pub const fn as_octets(&self) -> &[u8; ADDR_LEN] {
        match self {
            Self(octets) => octets,
        }
    }

    /// Returns the eight 16-bit groups of this address.
    #[inline]
    pub const fn segments(&self) -> [u16; GROUPS] {
        let mut segments = [0; GROUPS];
        let mut idx = 0;
        while idx < GROUPS {
            segments[idx] = u16::from_be_bytes([self.0[2 * idx], self.0[2 * idx + 1]]);
            idx += 1;
        }

        segments
    }
}

impl From<[u8; ADDR_LEN]> for Ipv6Addr {
    #[inline]
    fn from(octets: [u8; ADDR_LEN]) -> Self {
        Self::from_octets(octets)
    }
}

impl From<[u16; GROUPS]> for Ipv6Addr {
    #[inline]
    fn from(segments: [u16; GROUPS]) -> Self {
        Self::from_segments(segments)
    }
}

impl From<Ipv6Addr> for [u8; ADDR_LEN] {
    #[inline]
    fn from(addr: Ipv6Addr) -> Self {
        addr.octets()
    }
}

impl From<core::net::Ipv6Addr> for Ipv6Addr {
    #[inline]
    fn from(addr: core::net::Ipv6Addr) -> Self {
        Self(addr.octets())
    }
}

impl From<Ipv6Addr> for core::net::Ipv6Addr {
    #[inline]
    fn from(addr: Ipv6Addr) -> Self {
        core::net::Ipv6Addr::from(addr.octets())
    }
}

/// Accepts exactly 16 octets, anything else is rejected.
impl TryFrom<&[u8]> for Ipv6Addr {
    type Error = TryFromSliceError;

    #[inline]
    fn try_from(octets: &[u8]) -> Result<Self, Self::Error> {
        <[u8; ADDR_LEN]>::try_from(octets).map(Self)
    }
}

impl Display for Ipv6Addr {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        if fmt.width().is_none() && fmt.precision().is_none() {
            return format::write_canonical(fmt, &self.segments());
        }

        let mut buf = [0; TEXT_BUF_LEN];
        let len = format::format_into(self, &mut buf).len();
        // Only hex digits and colons are ever written.
        let text = core::str::from_utf8(&buf[..len]).map_err(|_| fmt::Error)?;

        fmt.pad(text)
    }
}

impl FromStr for Ipv6Addr {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s.as_bytes())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn segments_are_big_endian() {
        let addr = Ipv6Addr::from_octets([0xfe, 0x80, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14]);

        assert_eq!(
            [0xfe80, 0x0102, 0x0304, 0x0506, 0x0708, 0x090a, 0x0b0c, 0x0d0e],
            addr.segments()
        );
        assert_eq!(addr, Ipv6Addr::from_segments(addr.segments()));
    }

    #[test]
    fn well_known_addresses() {
        assert_eq!([0; ADDR_LEN], Ipv6Addr::UNSPECIFIED.octets());

        let mut loopback = [0; ADDR_LEN];
        loopback[15] = 1;
        assert_eq!(loopback, Ipv6Addr::LOCALHOST.octets());
    }

    #[test]
    fn try_from_slice_rejects_wrong_length() {
        assert!(Ipv6Addr::try_from(&[0u8; 15][..]).is_err());
        assert!(Ipv6Addr::try_from(&[0u8; 17][..]).is_err());
        assert_eq!(Ipv6Addr::UNSPECIFIED, Ipv6Addr::try_from(&[0u8; 16][..]).unwrap());
    }

    #[test]
    fn converts_to_and_from_core_net() {
        let addr = Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 0x42);
        let core_addr = core::net::Ipv6Addr::from(addr);

        assert_eq!([0x2001, 0xdb8, 0, 0, 0, 0, 0, 0x42], core_addr.segments());
        assert_eq!(addr, Ipv6Addr::from(core_addr));
    }

    #[test]
    fn display_honors_padding() {
        let addr = Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 1);

        assert_eq!("fe80::1", addr.to_string());
        assert_eq!("fe80::1   ", format!("{addr:<10}"));
        assert_eq!("   fe80::1", format!("{addr:>10}"));
    }

    #[test]
    fn from_str_parses_canonical_text() {
        let addr: Ipv6Addr = "fe80::1".parse().unwrap();
        assert_eq!(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 1), addr);
    }
}
