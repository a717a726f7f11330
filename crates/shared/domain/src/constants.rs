//! Domain-level constants.
//!
//! These constants define the catalog shape shared by every user record.

// =============================================================================
// Catalog
// =============================================================================

/// Number of species in the catalog (the original Kanto Pokedex)
pub const POKEDEX_SIZE: usize = 151;

/// Lowest valid species number (catalog numbering is 1-based)
pub const FIRST_CATALOG_NUMBER: usize = 1;

/// Bits stored per word of the capture bitset
pub const CAPTURE_WORD_BITS: usize = u64::BITS as usize;

/// Words needed to hold one bit per catalog entry
pub const CAPTURE_WORDS: usize = POKEDEX_SIZE.div_ceil(CAPTURE_WORD_BITS);

// =============================================================================
// Serialization
// =============================================================================

/// Character written for a caught species
pub const CAUGHT_CHAR: char = '1';

/// Character written for an uncaught species
pub const UNCAUGHT_CHAR: char = '0';
