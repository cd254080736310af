use std::fmt;

use serde::{
    de::{Error, Unexpected, Visitor},
    Deserializer,
};

// The osu!api v1 encodes all numbers as strings
pub(super) mod f64_string {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        d.deserialize_any(F64String)
    }

    pub(super) struct F64String;

    impl<'de> Visitor<'de> for F64String {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string containing an f64")
        }

        #[inline]
        fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
            v.parse()
                .map_err(|_| Error::invalid_value(Unexpected::Str(v), &self))
        }

        #[inline]
        fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(v)
        }

        #[inline]
        fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(v as f64)
        }

        #[inline]
        fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(v as f64)
        }
    }
}

pub(super) mod option_u32_string {
    use super::{u32_string::U32String, *};

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
        d.deserialize_option(MaybeU32String)
    }

    pub(super) struct MaybeU32String;

    impl<'de> Visitor<'de> for MaybeU32String {
        type Value = Option<u32>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an optional string containing a u32")
        }

        #[inline]
        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
            d.deserialize_any(U32String).map(Some)
        }

        #[inline]
        fn visit_none<E: Error>(self) -> Result<Self::Value, E> {
            self.visit_unit()
        }

        #[inline]
        fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }
}

pub(super) mod u32_string {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
        d.deserialize_any(U32String)
    }

    pub(super) struct U32String;

    impl<'de> Visitor<'de> for U32String {
        type Value = u32;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string containing a u32")
        }

        #[inline]
        fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
            v.parse()
                .map_err(|_| Error::invalid_value(Unexpected::Str(v), &self))
        }

        #[inline]
        fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
            u32::try_from(v).map_err(|_| Error::invalid_value(Unexpected::Unsigned(v), &self))
        }
    }
}
