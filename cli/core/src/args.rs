use clap::{Parser, ValueEnum};

use crate::octets;

#[derive(Debug, Clone, Parser)]
pub enum ModeCmd {
    /// Format 16 address octets as canonical IPv6 text.
    Ntop(NtopCmd),
    /// Parse IPv6 text into 16 address octets.
    Pton(PtonCmd),
    /// Run the codec self-check: round trip and buffer capacity safety.
    Check(CheckCmd),
}

#[derive(Debug, Clone, Parser)]
pub struct NtopCmd {
    /// Address octets, either 32 hex digits or 16 bytes separated by ':', '-'
    /// or spaces.
    #[arg(value_parser = octets::parse_octets)]
    pub octets: [u8; netip::ADDR_LEN],
    /// Output buffer capacity in bytes, terminator included.
    #[arg(long, short, default_value_t = netip::TEXT_BUF_LEN as u16, value_parser = clap::value_parser!(u16).range(0..=1024))]
    pub capacity: u16,
    /// Output format.
    #[clap(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Parser)]
pub struct PtonCmd {
    /// IPv6 address text, e.g. "fe80::1".
    pub text: String,
    /// Output format.
    #[clap(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Parser)]
pub struct CheckCmd {
    /// Output format.
    #[clap(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default).
    Text,
    /// JSON format.
    Json,
}
