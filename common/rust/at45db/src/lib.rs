//! AT45DB NOR-flash geometry.
//!
//! This crate contains the page layout constants and the erase modes used by
//! the flash storage driver.

/// Number of pages on the chip.
pub const MAX_PAGES: u16 = 2048;

/// Size of a page in bytes.
pub const PAGE_SIZE: u16 = 264;

/// Log2 of the power-of-two part of a page.
///
/// Callers that address pages with shifts ignore the last 8 bytes of each
/// page.
pub const PAGE_SIZE_LOG2: u8 = 8;

/// Page number, `0..MAX_PAGES`.
pub type Page = u16;

/// Byte offset inside a page, `0..PAGE_SIZE`.
pub type PageOffset = u16;

/// How a page write treats the previous page contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EraseMode {
    /// Erase the page before writing.
    Erase = 0,
    /// Write without erasing.
    DontErase = 1,
    /// The page is known to be erased already.
    PreviouslyErased = 2,
}

/// Error returned when a raw value is not a known [`EraseMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown erase mode: {0}")]
pub struct UnknownEraseMode(pub u8);

impl TryFrom<u8> for EraseMode {
    type Error = UnknownEraseMode;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Self::Erase),
            1 => Ok(Self::DontErase),
            2 => Ok(Self::PreviouslyErased),
            v => Err(UnknownEraseMode(v)),
        }
    }
}

impl From<EraseMode> for u8 {
    #[inline]
    fn from(mode: EraseMode) -> Self {
        mode as u8
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn page_geometry() {
        assert_eq!(1 << PAGE_SIZE_LOG2, 256);
        assert_eq!(PAGE_SIZE - (1 << PAGE_SIZE_LOG2), 8);
        assert_eq!(MAX_PAGES as u32 * PAGE_SIZE as u32, 540_672);
    }

    #[test]
    fn erase_mode_from_raw() {
        for mode in [EraseMode::Erase, EraseMode::DontErase, EraseMode::PreviouslyErased] {
            assert_eq!(Ok(mode), EraseMode::try_from(u8::from(mode)));
        }
        assert_eq!(Err(UnknownEraseMode(3)), EraseMode::try_from(3));
    }
}
