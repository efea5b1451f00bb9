use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;

use crate::core::{board::Color, piece::Pair};

/// Set of colors pairs are drawn from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Palette {
    /// Red, green, blue and yellow.
    #[default]
    Four,
    /// The four basic colors plus purple.
    Five,
}

impl Palette {
    /// Picks the palette for a requested number of colors.
    ///
    /// Only 5 selects [`Palette::Five`]; every other count falls back to
    /// [`Palette::Four`].
    #[must_use]
    pub const fn from_color_count(count: usize) -> Self {
        match count {
            5 => Self::Five,
            _ => Self::Four,
        }
    }

    #[must_use]
    pub const fn color_count(self) -> usize {
        match self {
            Self::Four => 4,
            Self::Five => 5,
        }
    }

    #[must_use]
    pub fn colors(self) -> &'static [Color] {
        const PLAYABLE: &[Color] = &Color::PLAYABLE;
        &PLAYABLE[..self.color_count()]
    }
}

/// Seed for deterministic pair generation.
///
/// A 128-bit value shown and parsed as 32 hexadecimal digits. Two generators
/// built from the same seed and palette produce the same pairs.
///
/// # Example
///
/// ```
/// use chainris_engine::{PairGenerator, PairSeed, Palette};
/// use rand::Rng as _;
///
/// let seed: PairSeed = rand::rng().random();
/// let mut a = PairGenerator::with_seed(Palette::Five, seed);
/// let mut b = PairGenerator::with_seed(Palette::Five, seed);
/// assert_eq!(a.next_pair(), b.next_pair());
///
/// let parsed: PairSeed = seed.to_string().parse().unwrap();
/// assert_eq!(parsed, seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairSeed([u8; 16]);

impl PairSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for PairSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePairSeedError {
    #[display("invalid seed: expected 32 hex digits, got {len}")]
    InvalidLength { len: usize },
    #[display("invalid seed: {digit:?} is not a hex digit")]
    InvalidDigit { digit: char },
}

impl FromStr for PairSeed {
    type Err = ParsePairSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParsePairSeedError::InvalidLength { len: s.len() });
        }
        let num = s.chars().try_fold(0_u128, |num, digit| {
            digit
                .to_digit(16)
                .map(|value| (num << 4) | u128::from(value))
                .ok_or(ParsePairSeedError::InvalidDigit { digit })
        })?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Distribution<PairSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PairSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PairSeed(seed)
    }
}

/// Source of falling pairs.
///
/// Main and sub colors are drawn independently and uniformly from the
/// palette.
#[derive(Debug, Clone)]
pub struct PairGenerator {
    rng: Pcg32,
    palette: Palette,
}

impl PairGenerator {
    /// Creates a generator seeded from the thread-local RNG.
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self::with_seed(palette, rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(palette: Palette, seed: PairSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
            palette,
        }
    }

    #[must_use]
    pub const fn palette(&self) -> Palette {
        self.palette
    }

    pub fn next_pair(&mut self) -> Pair {
        let main = self.next_color();
        let sub = self.next_color();
        Pair::new(main, sub)
    }

    /// Draws a seed for a follow-up generator.
    pub fn next_seed(&mut self) -> PairSeed {
        self.rng.random()
    }

    fn next_color(&mut self) -> Color {
        let colors = self.palette.colors();
        colors[self.rng.random_range(0..colors.len())]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const SEED: PairSeed = PairSeed::from_bytes([
        0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54, 0x32,
        0x10,
    ]);

    fn drawn_colors(palette: Palette, draws: usize) -> HashSet<Color> {
        let mut generator = PairGenerator::with_seed(palette, SEED);
        (0..draws)
            .flat_map(|_| {
                let pair = generator.next_pair();
                [pair.main(), pair.sub()]
            })
            .collect()
    }

    #[test]
    fn test_unsupported_counts_fall_back_to_four() {
        assert_eq!(Palette::from_color_count(3), Palette::Four);
        assert_eq!(Palette::from_color_count(4), Palette::Four);
        assert_eq!(Palette::from_color_count(5), Palette::Five);
        assert_eq!(Palette::from_color_count(6), Palette::Four);
        assert_eq!(Palette::from_color_count(0), Palette::Four);
    }

    #[test]
    fn test_four_colors_never_draw_purple() {
        let colors = drawn_colors(Palette::Four, 500);
        assert_eq!(colors.len(), 4);
        assert!(!colors.contains(&Color::Purple));
        assert!(!colors.contains(&Color::Empty));
    }

    #[test]
    fn test_five_colors_are_all_reachable() {
        let colors = drawn_colors(Palette::Five, 500);
        assert_eq!(colors.len(), 5);
        assert!(colors.contains(&Color::Purple));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PairGenerator::with_seed(Palette::Five, SEED);
        let mut b = PairGenerator::with_seed(Palette::Five, SEED);
        for _ in 0..100 {
            assert_eq!(a.next_pair(), b.next_pair());
        }
        assert_eq!(a.next_seed(), b.next_seed());
    }

    #[test]
    fn test_seed_display() {
        assert_eq!(SEED.to_string(), "0123456789abcdeffedcba9876543210");
        assert_eq!(
            "0123456789ABCDEFFEDCBA9876543210".parse::<PairSeed>(),
            Ok(SEED)
        );
    }

    #[test]
    fn test_seed_parse_errors() {
        assert_eq!(
            "abc".parse::<PairSeed>(),
            Err(ParsePairSeedError::InvalidLength { len: 3 })
        );
        assert_eq!(
            "0123456789abcdeffedcba987654321g".parse::<PairSeed>(),
            Err(ParsePairSeedError::InvalidDigit { digit: 'g' })
        );
    }

    #[test]
    fn test_seed_rejects_sign() {
        assert_eq!(
            "+1111111111111111111111111111111".parse::<PairSeed>(),
            Err(ParsePairSeedError::InvalidDigit { digit: '+' })
        );
        assert_eq!(
            "-1111111111111111111111111111111".parse::<PairSeed>(),
            Err(ParsePairSeedError::InvalidDigit { digit: '-' })
        );
    }
}
