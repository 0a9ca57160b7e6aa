// ============================================================================
// Comparator strategies: interchangeable exchange predicates over scalars
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::StrategyError;

/// Decides whether two neighbours must trade places.
///
/// `should_swap(a, b)` is true when `a`, sitting left of `b`, belongs after
/// it. A sequence is ordered once no adjacent pair answers true.
pub trait SwapOrder<T: ?Sized> {
    fn should_swap(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> SwapOrder<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn should_swap(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ascending;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Descending;

impl<T: PartialOrd + ?Sized> SwapOrder<T> for Ascending {
    fn should_swap(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: PartialOrd + ?Sized> SwapOrder<T> for Descending {
    fn should_swap(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Odd numbers first, ascending within each parity group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OddFirst;

/// Even numbers first, ascending within each parity group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvenFirst;

/// Multiples of three first, ascending within each group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DivisibleBy3First;

/// Ascending by the base-10 digit sum of the magnitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SumOfDigits;

/// Values closest to the target first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProximityTo(pub i128);

/// Ascending by the sum of 1-based alphabet positions (`a` = 1 .. `z` = 26).
///
/// Only lowercase ASCII letters are meaningful; anything else still yields a
/// number but the resulting order is unspecified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlphabeticalPosition;

/// Places `a` after `b` when `a`'s group comes later, or when both share a
/// group and `a` is larger.
fn grouped_swap<T: PartialOrd>(a: &T, b: &T, a_first: bool, b_first: bool) -> bool {
    match (a_first, b_first) {
        (true, false) => false,
        (false, true) => true,
        _ => a > b,
    }
}

pub fn digit_sum(mut magnitude: u128) -> u32 {
    let mut sum = 0;
    while magnitude > 0 {
        sum += (magnitude % 10) as u32;
        magnitude /= 10;
    }
    sum
}

/// Signed values widen to `i128` without loss.
fn signed_farther(a: i128, b: i128, target: i128) -> bool {
    a.abs_diff(target) > b.abs_diff(target)
}

/// Unsigned values stay in `u128`. A negative target lies below every
/// unsigned value, so the smaller value is the nearer one.
fn unsigned_farther(a: u128, b: u128, target: i128) -> bool {
    match u128::try_from(target) {
        Ok(target) => a.abs_diff(target) > b.abs_diff(target),
        Err(_) => a > b,
    }
}

pub fn alphabet_score(word: &str) -> i64 {
    word.chars().map(|c| c as i64 - 'a' as i64 + 1).sum()
}

macro_rules! impl_integer_orders {
    ($($ty:ty => $magnitude:expr, $farther:ident as $wide:ty);* $(;)?) => {
        $(
            impl SwapOrder<$ty> for OddFirst {
                fn should_swap(&self, a: &$ty, b: &$ty) -> bool {
                    grouped_swap(a, b, a % 2 != 0, b % 2 != 0)
                }
            }

            impl SwapOrder<$ty> for EvenFirst {
                fn should_swap(&self, a: &$ty, b: &$ty) -> bool {
                    grouped_swap(a, b, a % 2 == 0, b % 2 == 0)
                }
            }

            impl SwapOrder<$ty> for DivisibleBy3First {
                fn should_swap(&self, a: &$ty, b: &$ty) -> bool {
                    grouped_swap(a, b, a % 3 == 0, b % 3 == 0)
                }
            }

            impl SwapOrder<$ty> for SumOfDigits {
                fn should_swap(&self, a: &$ty, b: &$ty) -> bool {
                    let magnitude: fn($ty) -> u128 = $magnitude;
                    digit_sum(magnitude(*a)) > digit_sum(magnitude(*b))
                }
            }

            impl SwapOrder<$ty> for ProximityTo {
                fn should_swap(&self, a: &$ty, b: &$ty) -> bool {
                    $farther(*a as $wide, *b as $wide, self.0)
                }
            }

            impl SwapOrder<$ty> for Strategy {
                fn should_swap(&self, a: &$ty, b: &$ty) -> bool {
                    match *self {
                        Strategy::Ascending => Ascending.should_swap(a, b),
                        Strategy::Descending => Descending.should_swap(a, b),
                        Strategy::OddFirst => OddFirst.should_swap(a, b),
                        Strategy::EvenFirst => EvenFirst.should_swap(a, b),
                        Strategy::DivisibleBy3First => DivisibleBy3First.should_swap(a, b),
                        Strategy::SumOfDigits => SumOfDigits.should_swap(a, b),
                        Strategy::ProximityTo(target) => ProximityTo(target).should_swap(a, b),
                    }
                }
            }
        )*
    };
}

impl_integer_orders!(
    i8 => |v| v.unsigned_abs() as u128, signed_farther as i128;
    i16 => |v| v.unsigned_abs() as u128, signed_farther as i128;
    i32 => |v| v.unsigned_abs() as u128, signed_farther as i128;
    i64 => |v| v.unsigned_abs() as u128, signed_farther as i128;
    i128 => |v| v.unsigned_abs(), signed_farther as i128;
    isize => |v| v.unsigned_abs() as u128, signed_farther as i128;
    u8 => |v| v as u128, unsigned_farther as u128;
    u16 => |v| v as u128, unsigned_farther as u128;
    u32 => |v| v as u128, unsigned_farther as u128;
    u64 => |v| v as u128, unsigned_farther as u128;
    u128 => |v| v, unsigned_farther as u128;
    usize => |v| v as u128, unsigned_farther as u128;
);

impl SwapOrder<str> for AlphabeticalPosition {
    fn should_swap(&self, a: &str, b: &str) -> bool {
        alphabet_score(a) > alphabet_score(b)
    }
}

impl SwapOrder<String> for AlphabeticalPosition {
    fn should_swap(&self, a: &String, b: &String) -> bool {
        alphabet_score(a) > alphabet_score(b)
    }
}

impl<'s> SwapOrder<&'s str> for AlphabeticalPosition {
    fn should_swap(&self, a: &&'s str, b: &&'s str) -> bool {
        alphabet_score(a) > alphabet_score(b)
    }
}

// ============================================================================
// Strategy: the integer orderings as one configurable value
// ============================================================================

/// Integer ordering picked by name, e.g. from a config file or the command
/// line. Defaults to ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Strategy {
    #[default]
    Ascending,
    Descending,
    OddFirst,
    EvenFirst,
    DivisibleBy3First,
    SumOfDigits,
    ProximityTo(i128),
}

impl FromStr for Strategy {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if let Some(target) = name.strip_prefix("proximity:") {
            return target
                .trim()
                .parse()
                .map(Strategy::ProximityTo)
                .map_err(|_| StrategyError::BadTarget(target.trim().to_string()));
        }

        match name.as_str() {
            "ascending" | "asc" => Ok(Strategy::Ascending),
            "descending" | "desc" => Ok(Strategy::Descending),
            "odd-first" => Ok(Strategy::OddFirst),
            "even-first" => Ok(Strategy::EvenFirst),
            "div3-first" | "divisible-by-3-first" => Ok(Strategy::DivisibleBy3First),
            "sum-of-digits" => Ok(Strategy::SumOfDigits),
            _ => Err(StrategyError::Unknown(s.to_string())),
        }
    }
}

impl TryFrom<String> for Strategy {
    type Error = StrategyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Ascending => write!(f, "ascending"),
            Strategy::Descending => write!(f, "descending"),
            Strategy::OddFirst => write!(f, "odd-first"),
            Strategy::EvenFirst => write!(f, "even-first"),
            Strategy::DivisibleBy3First => write!(f, "div3-first"),
            Strategy::SumOfDigits => write!(f, "sum-of-digits"),
            Strategy::ProximityTo(target) => write!(f, "proximity:{target}"),
        }
    }
}
