//! IPv6 address text codec.
//!
//! Converts 16-byte IPv6 addresses to their canonical text and back. The
//! formatter writes into caller-owned buffers and never writes past their
//! end, truncating the text instead when the buffer is too small.
//!
//! ```
//! use netip::{Formatted, Ipv6Addr};
//!
//! let addr: Ipv6Addr = "FE80:0:0:0:0:0:0:1".parse().unwrap();
//!
//! let mut buf = [0u8; 46];
//! assert_eq!(Formatted::Complete(7), netip::format_into(&addr, &mut buf));
//! assert_eq!(b"fe80::1\0", &buf[..8]);
//!
//! let mut small = [0u8; 5];
//! assert_eq!(Formatted::Truncated(4), netip::format_into(&addr, &mut small));
//! assert_eq!(b"fe80\0", &small);
//! ```

pub mod addr;
pub mod format;
pub mod parse;
pub mod writer;

pub use addr::{ADDR_LEN, GROUPS, Ipv6Addr, MAX_TEXT_LEN, TEXT_BUF_LEN};
pub use format::{format_into, longest_zero_run, ntop, write_canonical};
pub use parse::{ParseError, Reason, parse, pton};
pub use writer::{BoundedWriter, Formatted};
