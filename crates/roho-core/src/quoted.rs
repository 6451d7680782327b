//! Serde helpers for numbers the API encodes as JSON strings.
//!
//! Prices and quantities arrive as `"12.34"`. Use `#[serde(with = "quoted")]`
//! on numeric fields and `#[serde(default, with = "quoted::option")]` on
//! nullable ones. Bare JSON numbers are accepted too, and `null` on a
//! non-optional field decodes as zero. Serialization always writes the string
//! form.

use std::fmt::{self, Display};
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::Serializer;

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FromStr,
    T::Err: Display,
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(QuotedVisitor(PhantomData))
}

fn parse<T, E>(raw: &str) -> Result<T, E>
where
    T: FromStr,
    T::Err: Display,
    E: de::Error,
{
    raw.trim()
        .parse()
        .map_err(|e| E::custom(format!("invalid quoted number {raw:?}: {e}")))
}

struct QuotedVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for QuotedVisitor<T>
where
    T: FromStr,
    T::Err: Display,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a string containing a number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        parse(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
        parse(&v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
        parse(&v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<T, E> {
        parse(&v.to_string())
    }

    // `null` leaves the zero value.
    fn visit_unit<E: de::Error>(self) -> Result<T, E> {
        parse("0")
    }

    fn visit_none<E: de::Error>(self) -> Result<T, E> {
        parse("0")
    }
}

/// Nullable variant: `null`, a missing field or `""` decode as `None`.
pub mod option {
    use super::*;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        match value {
            Some(v) => serializer.collect_str(v),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(OptionVisitor(PhantomData))
    }

    struct OptionVisitor<T>(PhantomData<T>);

    impl<'de, T> Visitor<'de> for OptionVisitor<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        type Value = Option<T>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("null or a number encoded as a string")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(MaybeEmptyVisitor(PhantomData))
        }
    }

    struct MaybeEmptyVisitor<T>(PhantomData<T>);

    impl<'de, T> Visitor<'de> for MaybeEmptyVisitor<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        type Value = Option<T>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number or a string containing a number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            if v.trim().is_empty() {
                Ok(None)
            } else {
                parse(v).map(Some)
            }
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            parse(&v.to_string()).map(Some)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            parse(&v.to_string()).map(Some)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            parse(&v.to_string()).map(Some)
        }
    }
}

/// Relative float equality for round-trip tests.
#[cfg(test)]
pub(crate) fn close_to(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * b.abs().max(1.0)
}
