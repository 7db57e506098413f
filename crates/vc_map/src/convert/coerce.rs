//! Generic scalar coercion.

use alloc::boxed::Box;
use alloc::string::{String, ToString};

use vc_reflect::Reflect;
use vc_reflect::info::ScalarKind;

// -----------------------------------------------------------------------------
// Scalar

/// An integer read from any integer type without loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Integer {
    Signed(i128),
    Unsigned(u128),
}

impl Integer {
    /// Checked conversion, `None` if the value does not fit.
    fn narrow<T>(self) -> Option<T>
    where
        T: TryFrom<i128> + TryFrom<u128>,
    {
        match self {
            Self::Signed(v) => T::try_from(v).ok(),
            Self::Unsigned(v) => T::try_from(v).ok(),
        }
    }

    fn is_zero(self) -> bool {
        matches!(self, Self::Signed(0) | Self::Unsigned(0))
    }

    fn to_f64(self) -> f64 {
        match self {
            Self::Signed(v) => v as f64,
            Self::Unsigned(v) => v as f64,
        }
    }
}

impl core::fmt::Display for Integer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Signed(v) => v.fmt(f),
            Self::Unsigned(v) => v.fmt(f),
        }
    }
}

/// A scalar value read out of a reflected value.
#[derive(Debug, Clone, Copy)]
enum Scalar<'a> {
    Bool(bool),
    Char(char),
    Int(Integer),
    F32(f32),
    F64(f64),
    Text(&'a str),
}

impl<'a> Scalar<'a> {
    fn read(value: &'a dyn Reflect, kind: ScalarKind) -> Option<Self> {
        macro_rules! read {
            ($ty:ty => $wrap:expr) => {
                value.downcast_ref::<$ty>().map(|v| $wrap(*v))
            };
        }

        match kind {
            ScalarKind::Bool => read!(bool => Scalar::Bool),
            ScalarKind::Char => read!(char => Scalar::Char),
            ScalarKind::I8 => read!(i8 => |v| Scalar::Int(Integer::Signed(i128::from(v)))),
            ScalarKind::I16 => read!(i16 => |v| Scalar::Int(Integer::Signed(i128::from(v)))),
            ScalarKind::I32 => read!(i32 => |v| Scalar::Int(Integer::Signed(i128::from(v)))),
            ScalarKind::I64 => read!(i64 => |v| Scalar::Int(Integer::Signed(i128::from(v)))),
            ScalarKind::I128 => read!(i128 => |v| Scalar::Int(Integer::Signed(v))),
            ScalarKind::Isize => read!(isize => |v| Scalar::Int(Integer::Signed(v as i128))),
            ScalarKind::U8 => read!(u8 => |v| Scalar::Int(Integer::Unsigned(u128::from(v)))),
            ScalarKind::U16 => read!(u16 => |v| Scalar::Int(Integer::Unsigned(u128::from(v)))),
            ScalarKind::U32 => read!(u32 => |v| Scalar::Int(Integer::Unsigned(u128::from(v)))),
            ScalarKind::U64 => read!(u64 => |v| Scalar::Int(Integer::Unsigned(u128::from(v)))),
            ScalarKind::U128 => read!(u128 => |v| Scalar::Int(Integer::Unsigned(v))),
            ScalarKind::Usize => read!(usize => |v| Scalar::Int(Integer::Unsigned(v as u128))),
            ScalarKind::F32 => read!(f32 => Scalar::F32),
            ScalarKind::F64 => read!(f64 => Scalar::F64),
            ScalarKind::String => value.downcast_ref::<String>().map(|v| Scalar::Text(v.as_str())),
        }
    }

    /// The value as an integer, following the numeric coercion rules.
    fn to_integer(self) -> Option<Integer> {
        match self {
            Self::Int(v) => Some(v),
            Self::Bool(v) => Some(Integer::Unsigned(u128::from(v))),
            Self::Char(v) => Some(Integer::Unsigned(u128::from(u32::from(v)))),
            Self::F32(v) => float_to_integer(f64::from(v)),
            Self::F64(v) => float_to_integer(v),
            Self::Text(_) => None,
        }
    }

    fn to_f64(self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(v.to_f64()),
            Self::Bool(v) => Some(if v { 1.0 } else { 0.0 }),
            Self::F32(v) => Some(f64::from(v)),
            Self::F64(v) => Some(v),
            Self::Char(_) | Self::Text(_) => None,
        }
    }

    fn to_bool(self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(v),
            Self::Int(v) => Some(!v.is_zero()),
            Self::F32(v) => Some(v != 0.0),
            Self::F64(v) => Some(v != 0.0),
            Self::Text(v) => parse_bool(v),
            Self::Char(_) => None,
        }
    }

    fn to_char(self) -> Option<char> {
        match self {
            Self::Char(v) => Some(v),
            Self::Int(v) => char::from_u32(v.narrow::<u32>()?),
            Self::Text(v) => single_char(v),
            Self::Bool(_) | Self::F32(_) | Self::F64(_) => None,
        }
    }

    fn to_text(self) -> String {
        match self {
            Self::Bool(v) => v.to_string(),
            Self::Char(v) => v.to_string(),
            Self::Int(v) => v.to_string(),
            Self::F32(v) => v.to_string(),
            Self::F64(v) => v.to_string(),
            Self::Text(v) => v.into(),
        }
    }
}

/// Rounds half to even, `None` for non-finite or out of range values.
fn float_to_integer(value: f64) -> Option<Integer> {
    const LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0; // 2^127

    let rounded = value.round_ties_even();
    if !rounded.is_finite() || rounded < -LIMIT || rounded >= LIMIT {
        return None;
    }
    Some(Integer::Signed(rounded as i128))
}

fn parse_bool(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn single_char(text: &str) -> Option<char> {
    let single = |text: &str| {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    };
    single(text).or_else(|| single(text.trim()))
}

// -----------------------------------------------------------------------------
// coerce

/// Coerces a scalar value into the scalar type `kind`.
///
/// `None` if `value` is not a scalar, or if the coercion is lossy in a way
/// the rules reject:
///
/// - integers convert with a range check;
/// - floats round half to even into integers, with a range check;
/// - `bool` becomes `1`/`0`, and numbers become `bool` by `!= 0`;
/// - `char` converts to and from its integer code point;
/// - every scalar formats into text, and text parses into every scalar
///   after trimming surrounding whitespace. `bool` parsing ignores case.
///
/// # Examples
///
/// ```
/// use vc_map::convert::coerce;
/// use vc_reflect::info::ScalarKind;
///
/// let text = coerce(&35_i32, ScalarKind::String).unwrap();
/// assert_eq!(text.downcast_ref::<String>().unwrap(), "35");
///
/// let age = coerce(&String::from(" 35 "), ScalarKind::U8).unwrap();
/// assert_eq!(age.downcast_ref::<u8>(), Some(&35));
///
/// assert!(coerce(&300_i32, ScalarKind::U8).is_none());
/// assert!(coerce(&2.5_f64, ScalarKind::I32).unwrap().downcast_ref::<i32>() == Some(&2));
/// ```
pub fn coerce(value: &dyn Reflect, kind: ScalarKind) -> Option<Box<dyn Reflect>> {
    let source_kind = value.represented_type_info()?.scalar()?;
    let scalar = Scalar::read(value, source_kind)?;

    macro_rules! integer {
        ($ty:ty) => {
            match scalar {
                Scalar::Text(text) => boxed(text.trim().parse::<$ty>().ok()?),
                _ => boxed(scalar.to_integer()?.narrow::<$ty>()?),
            }
        };
    }

    let value = match kind {
        ScalarKind::Bool => boxed(scalar.to_bool()?),
        ScalarKind::Char => boxed(scalar.to_char()?),
        ScalarKind::I8 => integer!(i8),
        ScalarKind::I16 => integer!(i16),
        ScalarKind::I32 => integer!(i32),
        ScalarKind::I64 => integer!(i64),
        ScalarKind::I128 => integer!(i128),
        ScalarKind::Isize => integer!(isize),
        ScalarKind::U8 => integer!(u8),
        ScalarKind::U16 => integer!(u16),
        ScalarKind::U32 => integer!(u32),
        ScalarKind::U64 => integer!(u64),
        ScalarKind::U128 => integer!(u128),
        ScalarKind::Usize => integer!(usize),
        ScalarKind::F32 => match scalar {
            Scalar::Text(text) => boxed(text.trim().parse::<f32>().ok()?),
            _ => {
                let wide = scalar.to_f64()?;
                let narrow = wide as f32;
                // Finite values out of the `f32` range must not turn into infinity.
                if wide.is_finite() && !narrow.is_finite() {
                    return None;
                }
                boxed(narrow)
            }
        },
        ScalarKind::F64 => match scalar {
            Scalar::Text(text) => boxed(text.trim().parse::<f64>().ok()?),
            _ => boxed(scalar.to_f64()?),
        },
        ScalarKind::String => boxed(scalar.to_text()),
    };

    Some(value)
}

#[inline(always)]
fn boxed<T: Reflect>(value: T) -> Box<dyn Reflect> {
    Box::new(value)
}

#[cfg(test)]
mod tests {
    use super::coerce;
    use alloc::string::String;
    use vc_reflect::info::ScalarKind;

    fn coerced<T: Clone + 'static>(value: &dyn vc_reflect::Reflect, kind: ScalarKind) -> Option<T> {
        coerce(value, kind).and_then(|value| value.downcast_ref::<T>().cloned())
    }

    #[test]
    fn integer_widening_and_narrowing() {
        assert_eq!(coerced::<i64>(&42_i32, ScalarKind::I64), Some(42));
        assert_eq!(coerced::<u8>(&255_i64, ScalarKind::U8), Some(255));
        assert_eq!(coerced::<u8>(&256_i64, ScalarKind::U8), None);
        assert_eq!(coerced::<u32>(&-1_i32, ScalarKind::U32), None);
        assert_eq!(coerced::<i8>(&u128::MAX, ScalarKind::I8), None);
        assert_eq!(coerced::<i128>(&u64::MAX, ScalarKind::I128), Some(i128::from(u64::MAX)));
    }

    #[test]
    fn float_to_integer_rounds_half_to_even() {
        assert_eq!(coerced::<i32>(&2.5_f64, ScalarKind::I32), Some(2));
        assert_eq!(coerced::<i32>(&3.5_f64, ScalarKind::I32), Some(4));
        assert_eq!(coerced::<i32>(&-2.5_f32, ScalarKind::I32), Some(-2));
        assert_eq!(coerced::<u8>(&300.0_f64, ScalarKind::U8), None);
        assert_eq!(coerced::<i64>(&f64::NAN, ScalarKind::I64), None);
        assert_eq!(coerced::<i64>(&f64::INFINITY, ScalarKind::I64), None);
    }

    #[test]
    fn floats() {
        assert_eq!(coerced::<f64>(&3_i32, ScalarKind::F64), Some(3.0));
        assert_eq!(coerced::<f64>(&1.5_f32, ScalarKind::F64), Some(1.5));
        assert_eq!(coerced::<f32>(&1.0e300_f64, ScalarKind::F32), None);
        assert_eq!(coerced::<f32>(&0.25_f64, ScalarKind::F32), Some(0.25));
    }

    #[test]
    fn booleans() {
        assert_eq!(coerced::<i32>(&true, ScalarKind::I32), Some(1));
        assert_eq!(coerced::<u8>(&false, ScalarKind::U8), Some(0));
        assert_eq!(coerced::<bool>(&7_i16, ScalarKind::Bool), Some(true));
        assert_eq!(coerced::<bool>(&0.0_f64, ScalarKind::Bool), Some(false));
        assert_eq!(coerced::<bool>(&'a', ScalarKind::Bool), None);
    }

    #[test]
    fn chars() {
        assert_eq!(coerced::<u32>(&'A', ScalarKind::U32), Some(65));
        assert_eq!(coerced::<char>(&97_u8, ScalarKind::Char), Some('a'));
        assert_eq!(coerced::<char>(&0xD800_u32, ScalarKind::Char), None);
        assert_eq!(coerced::<char>(&1.0_f64, ScalarKind::Char), None);
        assert_eq!(coerced::<char>(&String::from("x"), ScalarKind::Char), Some('x'));
        assert_eq!(coerced::<char>(&String::from(" x "), ScalarKind::Char), Some('x'));
        assert_eq!(coerced::<char>(&String::from("xy"), ScalarKind::Char), None);
    }

    #[test]
    fn text_round_trip() {
        assert_eq!(coerced::<String>(&35_i32, ScalarKind::String).as_deref(), Some("35"));
        assert_eq!(coerced::<String>(&2.75_f64, ScalarKind::String).as_deref(), Some("2.75"));
        assert_eq!(coerced::<String>(&true, ScalarKind::String).as_deref(), Some("true"));
        assert_eq!(coerced::<String>(&'z', ScalarKind::String).as_deref(), Some("z"));

        assert_eq!(coerced::<i32>(&String::from("35"), ScalarKind::I32), Some(35));
        assert_eq!(coerced::<i32>(&String::from("\t-7\n"), ScalarKind::I32), Some(-7));
        assert_eq!(coerced::<f64>(&String::from("2.75"), ScalarKind::F64), Some(2.75));
        assert_eq!(coerced::<bool>(&String::from("TRUE"), ScalarKind::Bool), Some(true));
        assert_eq!(coerced::<bool>(&String::from("yes"), ScalarKind::Bool), None);
        assert_eq!(coerced::<i32>(&String::from("abc"), ScalarKind::I32), None);
    }

    #[test]
    fn non_scalars_are_rejected() {
        assert!(coerce(&vec![1_i32], ScalarKind::String).is_none());
        assert!(coerce(&Some(1_i32), ScalarKind::I64).is_none());
    }
}
