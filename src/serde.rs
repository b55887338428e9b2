//! Serde support for [`Decimal`] and [`Int128`].
//!
//! Both types are written as strings, since few formats carry 96 or 128 bit numbers
//! without loss. Reading is lenient: a string, an integer or (for `Decimal`) a float is
//! accepted unless the `serde-str` feature restricts `Decimal` to strings.
//!
//! The `serde-with-float` and `serde-with-str` features add modules for serde's `with`
//! attribute that pin the representation of a single field.

use crate::{Decimal, Error, Int128};
use core::{fmt, marker::PhantomData};
use num_traits::FromPrimitive;
use serde::de::{self, Unexpected};

/// The shapes a value may arrive in, and how each becomes `Self`.
trait Wire: Sized {
    const EXPECTING: &'static str;

    fn from_text(text: &str) -> Result<Self, Error>;
    fn from_signed(value: i128) -> Option<Self>;
    fn from_unsigned(value: u128) -> Option<Self>;
    fn from_float(value: f64) -> Option<Self>;
}

impl Wire for Decimal {
    const EXPECTING: &'static str = "a decimal number or its string form";

    fn from_text(text: &str) -> Result<Self, Error> {
        crate::str::parse_decimal(text)
    }

    fn from_signed(value: i128) -> Option<Self> {
        Decimal::try_from(Int128::from(value)).ok()
    }

    fn from_unsigned(value: u128) -> Option<Self> {
        Int128::from_u128(value).and_then(|value| Decimal::try_from(value).ok())
    }

    fn from_float(value: f64) -> Option<Self> {
        Decimal::from_f64(value)
    }
}

impl Wire for Int128 {
    const EXPECTING: &'static str = "a 128 bit integer or its string form";

    fn from_text(text: &str) -> Result<Self, Error> {
        crate::str::parse_int128(text)
    }

    fn from_signed(value: i128) -> Option<Self> {
        Some(Int128::from(value))
    }

    fn from_unsigned(value: u128) -> Option<Self> {
        Int128::from_u128(value)
    }

    // Floats are never exact enough to stand in for an integer.
    fn from_float(_: f64) -> Option<Self> {
        None
    }
}

// An empty string reads as an absent value.
impl<T: Wire> Wire for Option<T> {
    const EXPECTING: &'static str = T::EXPECTING;

    fn from_text(text: &str) -> Result<Self, Error> {
        if text.is_empty() {
            Ok(None)
        } else {
            T::from_text(text).map(Some)
        }
    }

    fn from_signed(value: i128) -> Option<Self> {
        T::from_signed(value).map(Some)
    }

    fn from_unsigned(value: u128) -> Option<Self> {
        T::from_unsigned(value).map(Some)
    }

    fn from_float(value: f64) -> Option<Self> {
        T::from_float(value).map(Some)
    }
}

struct WireVisitor<T>(PhantomData<T>);

impl<T> WireVisitor<T> {
    const fn new() -> Self {
        WireVisitor(PhantomData)
    }
}

impl<'de, T: Wire> de::Visitor<'de> for WireVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(T::EXPECTING)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<T, E> {
        T::from_signed(value.into()).ok_or_else(|| E::invalid_value(Unexpected::Signed(value), &self))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<T, E> {
        T::from_unsigned(value.into()).ok_or_else(|| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_i128<E: de::Error>(self, value: i128) -> Result<T, E> {
        T::from_signed(value).ok_or_else(|| E::invalid_value(Unexpected::Other("128 bit integer"), &self))
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<T, E> {
        T::from_unsigned(value).ok_or_else(|| E::invalid_value(Unexpected::Other("128 bit integer"), &self))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<T, E> {
        T::from_float(value).ok_or_else(|| E::invalid_value(Unexpected::Float(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<T, E> {
        T::from_text(value).map_err(E::custom)
    }
}

/// Reads `Option<T>`, with the inner value either in any supported shape or only as a
/// string.
#[cfg(any(feature = "serde-with-float", feature = "serde-with-str"))]
struct OptionVisitor<T> {
    strings_only: bool,
    marker: PhantomData<T>,
}

#[cfg(any(feature = "serde-with-float", feature = "serde-with-str"))]
impl<'de, T: Wire> de::Visitor<'de> for OptionVisitor<T> {
    type Value = Option<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "null or {}", T::EXPECTING)
    }

    fn visit_none<E: de::Error>(self) -> Result<Option<T>, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Option<T>, E> {
        Ok(None)
    }

    fn visit_some<D: de::Deserializer<'de>>(self, deserializer: D) -> Result<Option<T>, D::Error> {
        if self.strings_only {
            deserializer.deserialize_str(WireVisitor::<Option<T>>::new())
        } else {
            deserializer.deserialize_any(WireVisitor::<Option<T>>::new())
        }
    }
}

#[cfg(any(feature = "serde-with-float", feature = "serde-with-str"))]
fn deserialize_option<'de, D, T>(deserializer: D, strings_only: bool) -> Result<Option<T>, D::Error>
where
    D: de::Deserializer<'de>,
    T: Wire,
{
    deserializer.deserialize_option(OptionVisitor {
        strings_only,
        marker: PhantomData,
    })
}

#[cfg(any(feature = "serde-with-float", feature = "serde-float"))]
fn serialize_f64<S: serde::Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    use num_traits::ToPrimitive;
    match value.to_f64() {
        Some(float) => serializer.serialize_f64(float),
        None => Err(serde::ser::Error::custom("Decimal cannot be represented as a float")),
    }
}

/// Writes a `Decimal` field as a JSON style float and reads it back from a float, an
/// integer or a string. Precision beyond what an `f64` holds is lost on the way out.
///
/// ```
/// # use serde::{Serialize, Deserialize};
/// # use wide_decimal::Decimal;
/// #[derive(Serialize, Deserialize)]
/// struct Reading {
///     #[serde(with = "wide_decimal::serde::float")]
///     celsius: Decimal,
/// }
///
/// let reading = Reading { celsius: Decimal::new(-1875, 2) };
/// assert_eq!(serde_json::to_string(&reading).unwrap(), r#"{"celsius":-18.75}"#);
/// let reading: Reading = serde_json::from_str(r#"{"celsius":"36.6"}"#).unwrap();
/// assert_eq!(reading.celsius, Decimal::new(366, 1));
/// ```
#[cfg(feature = "serde-with-float")]
pub mod float {
    use super::*;

    pub fn deserialize<'de, D: de::Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        deserializer.deserialize_any(WireVisitor::new())
    }

    pub fn serialize<S: serde::Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_f64(value, serializer)
    }
}

/// The [`float`] representation for an `Option<Decimal>` field, with `None` as null.
///
/// ```
/// # use serde::{Serialize, Deserialize};
/// # use wide_decimal::Decimal;
/// #[derive(Serialize, Deserialize)]
/// struct Reading {
///     #[serde(with = "wide_decimal::serde::float_option")]
///     humidity: Option<Decimal>,
/// }
///
/// let reading = Reading { humidity: Some(Decimal::new(425, 1)) };
/// assert_eq!(serde_json::to_string(&reading).unwrap(), r#"{"humidity":42.5}"#);
/// let reading: Reading = serde_json::from_str(r#"{"humidity":null}"#).unwrap();
/// assert_eq!(reading.humidity, None);
/// ```
#[cfg(feature = "serde-with-float")]
pub mod float_option {
    use super::*;

    pub fn deserialize<'de, D: de::Deserializer<'de>>(deserializer: D) -> Result<Option<Decimal>, D::Error> {
        deserialize_option(deserializer, false)
    }

    pub fn serialize<S: serde::Serializer>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(decimal) => serialize_f64(decimal, serializer),
            None => serializer.serialize_none(),
        }
    }
}

/// Writes and reads a `Decimal` field strictly as a string, for formats such as bincode
/// that cannot describe their own contents.
///
/// ```
/// # use serde::{Serialize, Deserialize};
/// # use wide_decimal::Decimal;
/// #[derive(Serialize, Deserialize)]
/// struct Ledger {
///     #[serde(with = "wide_decimal::serde::str")]
///     balance: Decimal,
/// }
///
/// let ledger = Ledger { balance: Decimal::new(1_000_050, 4) };
/// assert_eq!(serde_json::to_string(&ledger).unwrap(), r#"{"balance":"100.005"}"#);
/// assert!(serde_json::from_str::<Ledger>(r#"{"balance":100}"#).is_err());
/// ```
#[cfg(feature = "serde-with-str")]
pub mod str {
    use super::*;

    pub fn deserialize<'de, D: de::Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        deserializer.deserialize_str(WireVisitor::new())
    }

    pub fn serialize<S: serde::Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }
}

/// The [`str`] representation for an `Option<Decimal>` field. `None` is written as null;
/// null and the empty string both read back as `None`.
///
/// ```
/// # use serde::{Serialize, Deserialize};
/// # use wide_decimal::Decimal;
/// #[derive(Serialize, Deserialize)]
/// struct Ledger {
///     #[serde(with = "wide_decimal::serde::str_option")]
///     overdraft: Option<Decimal>,
/// }
///
/// let ledger = Ledger { overdraft: Some(Decimal::new(-25, 0)) };
/// assert_eq!(serde_json::to_string(&ledger).unwrap(), r#"{"overdraft":"-25"}"#);
/// let ledger: Ledger = serde_json::from_str(r#"{"overdraft":""}"#).unwrap();
/// assert_eq!(ledger.overdraft, None);
/// ```
#[cfg(feature = "serde-with-str")]
pub mod str_option {
    use super::*;

    pub fn deserialize<'de, D: de::Deserializer<'de>>(deserializer: D) -> Result<Option<Decimal>, D::Error> {
        deserialize_option(deserializer, true)
    }

    pub fn serialize<S: serde::Serializer>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(decimal) => {
                let (text, _) = crate::str::to_str_internal(decimal, true, None);
                serializer.serialize_some(text.as_str())
            }
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(not(feature = "serde-float"))]
impl serde::Serialize for Decimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde-float")]
impl serde::Serialize for Decimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_f64(self, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Decimal {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        if cfg!(feature = "serde-str") {
            deserializer.deserialize_str(WireVisitor::new())
        } else {
            deserializer.deserialize_any(WireVisitor::new())
        }
    }
}

impl serde::Serialize for Int128 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Int128 {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Int128, D::Error> {
        deserializer.deserialize_any(WireVisitor::new())
    }
}
