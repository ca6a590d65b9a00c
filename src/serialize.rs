//! Contains custom deserialization functions for Steam's loosely typed responses.

use crate::time::{ServerTime, timestamp_to_server_time};
use std::fmt::{self, Display};
use std::marker::PhantomData;
use std::str::FromStr;
use serde::Deserialize;
use serde::de::{self, Visitor, Deserializer};

/// Deserializes `null` as the default value of the type.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;

    Ok(value.unwrap_or_default())
}

/// Deserializes a string or an integer into a string.
pub fn string_or_number_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringVisitor;

    impl<'de> Visitor<'de> for StringVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or an integer")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_owned())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(StringVisitor)
}

/// Deserializes an optional number which may be sent as a string.
pub fn option_string_or_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<u64> + TryFrom<i64>,
    T::Err: Display,
{
    struct OptionVisitor<T> {
        marker: PhantomData<T>,
    }

    impl<T> OptionVisitor<T> {
        pub fn new() -> Self {
            Self {
                marker: PhantomData,
            }
        }
    }

    impl<'de, T> Visitor<'de> for OptionVisitor<T>
    where
        T: FromStr + TryFrom<u64> + TryFrom<i64>,
        T::Err: Display,
    {
        type Value = Option<T>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or a number string")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            match T::try_from(v) {
                Ok(c) => Ok(Some(c)),
                Err(_e) => Err(de::Error::custom("Number too large to fit in target type")),
            }
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            match T::try_from(v) {
                Ok(c) => Ok(Some(c)),
                Err(_e) => Err(de::Error::custom("Number out of range for target type")),
            }
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v.is_empty() {
                return Ok(None);
            }

            Ok(Some(v.parse::<T>().map_err(de::Error::custom)?))
        }
    }

    deserializer.deserialize_any(OptionVisitor::new())
}

/// Deserializes a unix timestamp in seconds. Zero, negative, out of range or `null` is `None`.
pub fn ts_seconds_option_none_when_zero<'de, D>(deserializer: D) -> Result<Option<ServerTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let timestamp: Option<i64> = option_string_or_number(deserializer)?;

    Ok(timestamp
        .filter(|timestamp| *timestamp > 0)
        .and_then(timestamp_to_server_time))
}
