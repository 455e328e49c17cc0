//! # Gene Fields
//!
//! Every gene exposes its attributes as one of a small, closed set of field
//! kinds. Each kind owns its perturbation and clamping rule, so a gene only has
//! to say *which* of its fields is which.

use crate::{
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

/// Upper bound on redraws when a discrete mutation lands on the value it started from.
pub const MAX_MUTATION_ATTEMPTS: usize = 16;

/// Mutable view of a single gene field, tagged with its kind.
#[derive(Debug)]
pub enum FieldMut<'a> {
    /// A continuous attribute in `[0, 1]`.
    Continuous(&'a mut f64),
    /// A colour-like channel in `[0, 255]`.
    Discrete(&'a mut u8),
    /// A character constrained by the given bounds.
    Character(&'a mut char, CharacterBounds),
}

impl FieldMut<'_> {
    /// Perturbs the referenced field in place.
    pub fn perturb(self, power: f64, rng: &mut RandomNumberGenerator) {
        match self {
            FieldMut::Continuous(value) => *value = perturb_continuous(*value, power, rng),
            FieldMut::Discrete(value) => *value = perturb_discrete(*value, power, rng),
            FieldMut::Character(value, bounds) => *value = bounds.perturb(*value, rng),
        }
    }
}

/// Perturbs a value in `[0, 1]`.
///
/// A value of exactly zero is replaced by a fresh draw scaled by `power`;
/// anything else moves by a uniform delta in `[-power, power]` and is clamped.
pub fn perturb_continuous(value: f64, power: f64, rng: &mut RandomNumberGenerator) -> f64 {
    if value == 0.0 {
        return (rng.uniform() * power).clamp(0.0, 1.0);
    }

    let delta = rng.uniform() * power * 2.0 - power;
    (value + delta).clamp(0.0, 1.0)
}

/// Perturbs a channel in `[0, 255]`, returning a different value whenever `power` allows it.
pub fn perturb_discrete(value: u8, power: f64, rng: &mut RandomNumberGenerator) -> u8 {
    let span = (f64::from(u8::MAX) * power).round().clamp(0.0, f64::from(u8::MAX)) as i32;
    if span == 0 {
        return value;
    }

    let current = i32::from(value);
    for _ in 0..MAX_MUTATION_ATTEMPTS {
        let candidate = if value == 0 {
            rng.gen_range(0..=span)
        } else {
            (current + rng.gen_range(-span..=span)).clamp(0, i32::from(u8::MAX))
        };

        if candidate != current {
            return candidate as u8;
        }
    }

    if value < u8::MAX {
        value + 1
    } else {
        value - 1
    }
}

/// Range and step size for character genes.
///
/// Deserialization goes through [`CharacterBounds::new`], so an inverted
/// range is rejected instead of reaching the mutation operators.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCharacterBounds"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterBounds {
    lo: char,
    hi: char,
    max_step: u32,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCharacterBounds {
    lo: char,
    hi: char,
    max_step: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCharacterBounds> for CharacterBounds {
    type Error = GeneticError;

    fn try_from(raw: RawCharacterBounds) -> Result<Self> {
        Self::new(raw.lo, raw.hi, raw.max_step)
    }
}

impl CharacterBounds {
    /// Creates bounds covering `lo..=hi`, moving at most `max_step` code points per mutation.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::Configuration` error if `lo > hi`.
    pub fn new(lo: char, hi: char, max_step: u32) -> Result<Self> {
        if lo > hi {
            return Err(GeneticError::Configuration(format!(
                "Character range is empty: {:?} > {:?}",
                lo, hi
            )));
        }

        Ok(Self { lo, hi, max_step })
    }

    pub fn lo(&self) -> char {
        self.lo
    }

    pub fn hi(&self) -> char {
        self.hi
    }

    pub fn max_step(&self) -> u32 {
        self.max_step
    }

    pub fn contains(&self, c: char) -> bool {
        (self.lo..=self.hi).contains(&c)
    }

    /// Draws a character uniformly from the range.
    pub fn random(&self, rng: &mut RandomNumberGenerator) -> char {
        let code = rng.gen_range(u32::from(self.lo)..=u32::from(self.hi));
        char::from_u32(code).unwrap_or(self.lo)
    }

    /// Shifts `c` by a signed step in `[-max_step, max_step]` and clamps it into range.
    pub fn perturb(&self, c: char, rng: &mut RandomNumberGenerator) -> char {
        let step = i64::from(self.max_step);
        let delta = rng.gen_range(-step..=step);
        let code = (i64::from(u32::from(c)) + delta)
            .clamp(i64::from(u32::from(self.lo)), i64::from(u32::from(self.hi)));

        // Landing inside the surrogate gap leaves the character as it was.
        char::from_u32(code as u32).unwrap_or(c)
    }
}

impl Default for CharacterBounds {
    /// Printable ASCII, one code point per mutation.
    fn default() -> Self {
        Self {
            lo: ' ',
            hi: '~',
            max_step: 1,
        }
    }
}
