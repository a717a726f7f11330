//! Capture state: the per-species bit, the fixed-size bitset holding one bit
//! per catalog entry, and the four-way comparison between two users.

use serde::{Deserialize, Serialize};

use crate::constants::{CAPTURE_WORDS, CAPTURE_WORD_BITS, CAUGHT_CHAR, POKEDEX_SIZE, UNCAUGHT_CHAR};
use crate::error::{DomainError, DomainResult};

/// Whether a user has caught a given species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapturedState {
    #[default]
    Uncaught,
    Caught,
}

impl CapturedState {
    /// Check if this state is `Caught`
    pub fn is_caught(self) -> bool {
        matches!(self, CapturedState::Caught)
    }
}

impl From<bool> for CapturedState {
    fn from(caught: bool) -> Self {
        if caught {
            CapturedState::Caught
        } else {
            CapturedState::Uncaught
        }
    }
}

impl std::fmt::Display for CapturedState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CapturedState::Uncaught => write!(f, "uncaught"),
            CapturedState::Caught => write!(f, "caught"),
        }
    }
}

/// Outcome of comparing two users at the same Pokedex position.
///
/// "First" and "second" refer to argument order, so the result is not
/// symmetric: see [`ComparisonResult::swapped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonResult {
    NeitherCaught,
    FirstCaught,
    SecondCaught,
    BothCaught,
}

impl ComparisonResult {
    /// Derive the result from the two users' states.
    pub fn from_states(first: CapturedState, second: CapturedState) -> Self {
        match (first, second) {
            (CapturedState::Uncaught, CapturedState::Uncaught) => ComparisonResult::NeitherCaught,
            (CapturedState::Caught, CapturedState::Uncaught) => ComparisonResult::FirstCaught,
            (CapturedState::Uncaught, CapturedState::Caught) => ComparisonResult::SecondCaught,
            (CapturedState::Caught, CapturedState::Caught) => ComparisonResult::BothCaught,
        }
    }

    /// The result with the two users' roles exchanged.
    pub fn swapped(self) -> Self {
        match self {
            ComparisonResult::FirstCaught => ComparisonResult::SecondCaught,
            ComparisonResult::SecondCaught => ComparisonResult::FirstCaught,
            other => other,
        }
    }
}

/// One capture bit per catalog entry, indexed from 0.
///
/// Position `i` holds the state of species number `i + 1`. The length is
/// always exactly [`POKEDEX_SIZE`]; bits past the end of the last word stay
/// zero.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pokedex {
    words: [u64; CAPTURE_WORDS],
}

impl Pokedex {
    /// Create a Pokedex with every species uncaught
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of positions (always [`POKEDEX_SIZE`])
    pub const fn len(&self) -> usize {
        POKEDEX_SIZE
    }

    /// Always false; kept for the `len` convention
    pub const fn is_empty(&self) -> bool {
        POKEDEX_SIZE == 0
    }

    /// Read the state at a 0-based position.
    pub fn get(&self, index: usize) -> DomainResult<CapturedState> {
        Self::locate(index)?;
        Ok(CapturedState::from(self.bit(index)))
    }

    /// Write the state at a 0-based position.
    pub fn set(&mut self, index: usize, state: CapturedState) -> DomainResult<()> {
        let (word, mask) = Self::locate(index)?;
        match state {
            CapturedState::Caught => self.words[word] |= mask,
            CapturedState::Uncaught => self.words[word] &= !mask,
        }
        Ok(())
    }

    /// How many species are caught
    pub fn caught_count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// 0-based positions of every caught species, ascending
    pub fn caught_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..POKEDEX_SIZE).filter(move |&i| self.bit(i))
    }

    // Caller guarantees `index < POKEDEX_SIZE`
    fn bit(&self, index: usize) -> bool {
        self.words[index / CAPTURE_WORD_BITS] & (1u64 << (index % CAPTURE_WORD_BITS)) != 0
    }

    fn locate(index: usize) -> DomainResult<(usize, u64)> {
        if index >= POKEDEX_SIZE {
            return Err(DomainError::PokedexIndexOutOfRange {
                index,
                size: POKEDEX_SIZE,
            });
        }
        Ok((index / CAPTURE_WORD_BITS, 1u64 << (index % CAPTURE_WORD_BITS)))
    }
}

// Debug shows the caught positions rather than raw words
impl std::fmt::Debug for Pokedex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pokedex")
            .field("caught", &self.caught_indices().collect::<Vec<_>>())
            .finish()
    }
}

impl std::fmt::Display for Pokedex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bits: String = (0..POKEDEX_SIZE)
            .map(|i| {
                if self.bit(i) {
                    CAUGHT_CHAR
                } else {
                    UNCAUGHT_CHAR
                }
            })
            .collect();
        f.write_str(&bits)
    }
}

impl std::str::FromStr for Pokedex {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.chars().count();
        if count != POKEDEX_SIZE {
            return Err(DomainError::invalid_pokedex(format!(
                "expected {} entries, found {}",
                POKEDEX_SIZE, count
            )));
        }

        let mut pokedex = Pokedex::new();
        for (index, c) in s.chars().enumerate() {
            match c {
                CAUGHT_CHAR => pokedex.set(index, CapturedState::Caught)?,
                UNCAUGHT_CHAR => {}
                other => {
                    return Err(DomainError::invalid_pokedex(format!(
                        "unexpected character {:?} at position {}",
                        other, index
                    )))
                }
            }
        }
        Ok(pokedex)
    }
}

impl TryFrom<String> for Pokedex {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Pokedex> for String {
    fn from(pokedex: Pokedex) -> Self {
        pokedex.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATES: [CapturedState; 2] = [CapturedState::Uncaught, CapturedState::Caught];

    #[test]
    fn test_new_pokedex_is_all_uncaught() {
        let pokedex = Pokedex::new();

        assert_eq!(pokedex.len(), POKEDEX_SIZE);
        for index in 0..POKEDEX_SIZE {
            assert_eq!(pokedex.get(index).unwrap(), CapturedState::Uncaught);
        }
        assert_eq!(pokedex.caught_count(), 0);
    }

    #[test]
    fn test_set_and_clear_single_bit() {
        let mut pokedex = Pokedex::new();

        pokedex.set(24, CapturedState::Caught).unwrap();
        assert_eq!(pokedex.get(24).unwrap(), CapturedState::Caught);
        assert_eq!(pokedex.get(23).unwrap(), CapturedState::Uncaught);
        assert_eq!(pokedex.get(25).unwrap(), CapturedState::Uncaught);

        pokedex.set(24, CapturedState::Uncaught).unwrap();
        assert_eq!(pokedex, Pokedex::new());
    }

    #[test]
    fn test_word_boundaries_and_last_position() {
        let mut pokedex = Pokedex::new();
        for index in [0, 63, 64, 127, 128, POKEDEX_SIZE - 1] {
            pokedex.set(index, CapturedState::Caught).unwrap();
        }

        assert_eq!(
            pokedex.caught_indices().collect::<Vec<_>>(),
            vec![0, 63, 64, 127, 128, POKEDEX_SIZE - 1]
        );
        assert_eq!(pokedex.caught_count(), 6);
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let mut pokedex = Pokedex::new();

        let err = pokedex.get(POKEDEX_SIZE).unwrap_err();
        assert_eq!(
            err,
            DomainError::PokedexIndexOutOfRange {
                index: POKEDEX_SIZE,
                size: POKEDEX_SIZE
            }
        );
        assert!(pokedex.set(POKEDEX_SIZE, CapturedState::Caught).is_err());
        assert_eq!(pokedex.caught_count(), 0);
    }

    #[test]
    fn test_every_view_agrees_on_each_bit() {
        let mut pokedex = Pokedex::new();
        for index in [5, 63, 64, 100, POKEDEX_SIZE - 1] {
            pokedex.set(index, CapturedState::Caught).unwrap();
        }

        let text = pokedex.to_string();
        let caught: Vec<usize> = pokedex.caught_indices().collect();
        for (index, c) in text.chars().enumerate() {
            let state = pokedex.get(index).unwrap();
            assert_eq!(c == CAUGHT_CHAR, state.is_caught());
            assert_eq!(caught.contains(&index), state.is_caught());
        }
    }

    #[test]
    fn test_string_form() {
        let mut pokedex = Pokedex::new();
        pokedex.set(0, CapturedState::Caught).unwrap();
        pokedex.set(2, CapturedState::Caught).unwrap();

        let text = pokedex.to_string();
        assert_eq!(text.len(), POKEDEX_SIZE);
        assert!(text.starts_with("1010"));
        assert_eq!(text.parse::<Pokedex>().unwrap(), pokedex);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("101".parse::<Pokedex>().is_err());

        let mut text = "0".repeat(POKEDEX_SIZE);
        text.replace_range(5..6, "x");
        let err = text.parse::<Pokedex>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidPokedex(_)));
    }

    #[test]
    fn test_serde_uses_bit_string() {
        let mut pokedex = Pokedex::new();
        pokedex.set(150, CapturedState::Caught).unwrap();

        let json = serde_json::to_string(&pokedex).unwrap();
        assert_eq!(json.len(), POKEDEX_SIZE + 2);
        assert!(json.ends_with("1\""));

        let restored: Pokedex = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, pokedex);
        assert!(serde_json::from_str::<Pokedex>("\"11\"").is_err());
    }

    #[test]
    fn test_comparison_table() {
        use CapturedState::{Caught, Uncaught};

        assert_eq!(
            ComparisonResult::from_states(Uncaught, Uncaught),
            ComparisonResult::NeitherCaught
        );
        assert_eq!(
            ComparisonResult::from_states(Caught, Uncaught),
            ComparisonResult::FirstCaught
        );
        assert_eq!(
            ComparisonResult::from_states(Uncaught, Caught),
            ComparisonResult::SecondCaught
        );
        assert_eq!(
            ComparisonResult::from_states(Caught, Caught),
            ComparisonResult::BothCaught
        );
    }

    #[test]
    fn test_swapping_arguments_swaps_result() {
        for a in ALL_STATES {
            for b in ALL_STATES {
                assert_eq!(
                    ComparisonResult::from_states(b, a),
                    ComparisonResult::from_states(a, b).swapped()
                );
            }
        }
        assert_eq!(
            ComparisonResult::BothCaught.swapped(),
            ComparisonResult::BothCaught
        );
    }

    #[test]
    fn test_captured_state_from_bool() {
        assert!(CapturedState::from(true).is_caught());
        assert!(!CapturedState::from(false).is_caught());
        assert_eq!(CapturedState::default(), CapturedState::Uncaught);
        assert_eq!(CapturedState::Caught.to_string(), "caught");
    }
}
