use netip::ADDR_LEN;

/// Error returned when a command-line octet string is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OctetsError {
    #[error("expected 16 octets, got {0}")]
    InvalidLength(usize),
    #[error("invalid octet: '{0}'")]
    InvalidOctet(String),
}

fn is_separator(c: char) -> bool {
    c == ':' || c == '-' || c.is_whitespace()
}

fn parse_octet(s: &str) -> Result<u8, OctetsError> {
    if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(OctetsError::InvalidOctet(s.to_owned()));
    }
    u8::from_str_radix(s, 16).map_err(|_| OctetsError::InvalidOctet(s.to_owned()))
}

/// Parses 16 octets written either as 32 contiguous hex digits or as 16
/// two-digit bytes separated by `:`, `-` or whitespace.
pub fn parse_octets(s: &str) -> Result<[u8; ADDR_LEN], OctetsError> {
    let parts = s
        .trim()
        .split(is_separator)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>();

    let mut octets = [0; ADDR_LEN];
    match parts.as_slice() {
        [digits] => {
            if !digits.is_ascii() {
                return Err(OctetsError::InvalidOctet((*digits).to_owned()));
            }
            if digits.len() != 2 * ADDR_LEN {
                return Err(OctetsError::InvalidLength(digits.len() / 2));
            }
            for (octet, idx) in octets.iter_mut().zip((0..digits.len()).step_by(2)) {
                *octet = parse_octet(&digits[idx..idx + 2])?;
            }
        }
        parts => {
            if parts.len() != ADDR_LEN {
                return Err(OctetsError::InvalidLength(parts.len()));
            }
            for (octet, part) in octets.iter_mut().zip(parts) {
                *octet = parse_octet(part)?;
            }
        }
    }

    Ok(octets)
}

/// Formats octets as space-separated two-digit hex bytes.
pub fn format_octets(octets: &[u8]) -> String {
    octets
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod test {
    use super::*;

    const LINK_LOCAL: [u8; ADDR_LEN] = [0xfe, 0x80, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1];

    #[test]
    fn parse_contiguous_digits() {
        assert_eq!(Ok(LINK_LOCAL), parse_octets("fe800000000000000000000000000001"));
        assert_eq!(Ok(LINK_LOCAL), parse_octets("  FE800000000000000000000000000001\n"));
    }

    #[test]
    fn parse_separated_bytes() {
        assert_eq!(Ok(LINK_LOCAL), parse_octets("fe:80:00:00:00:00:00:00:00:00:00:00:00:00:00:01"));
        assert_eq!(Ok(LINK_LOCAL), parse_octets("fe 80 00 00 00 00 00 00 00 00 00 00 00 00 00 01"));
        assert_eq!(Ok(LINK_LOCAL), parse_octets("fe-80-00-00-00-00-00-00-00-00-00-00-00-00-00-01"));
    }

    #[test]
    fn reject_wrong_length() {
        assert_eq!(Err(OctetsError::InvalidLength(15)), parse_octets("fe8000000000000000000000000000"));
        assert_eq!(Err(OctetsError::InvalidLength(3)), parse_octets("fe:80:01"));
        assert_eq!(Err(OctetsError::InvalidLength(0)), parse_octets(""));
    }

    #[test]
    fn reject_invalid_octet() {
        assert_eq!(
            Err(OctetsError::InvalidOctet("zz".to_owned())),
            parse_octets("zz800000000000000000000000000001")
        );
        assert_eq!(
            Err(OctetsError::InvalidOctet("f".to_owned())),
            parse_octets("f:80:00:00:00:00:00:00:00:00:00:00:00:00:00:01")
        );
        assert_eq!(
            Err(OctetsError::InvalidOctet("+1".to_owned())),
            parse_octets("+1800000000000000000000000000001")
        );
    }

    #[test]
    fn format_hex_dump() {
        assert_eq!(
            "fe 80 00 00 00 00 00 00 00 00 00 00 00 00 00 01",
            format_octets(&LINK_LOCAL)
        );
    }
}
