//! Common types used across MovieVerse

use serde::{Deserialize, Serialize};

use crate::error::{MovieverseError, Result};

/// A 1-5 star rating attached to a review.
///
/// Serialized as a bare integer. Values outside `1..=5` fail to deserialize,
/// so a rating that made it into a request body is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StarRating(u8);

impl StarRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(MovieverseError::InvalidRating {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Interprets a stored rating column. Zero, negative, or out-of-range
    /// values mean the review was left unrated.
    pub fn from_stored(value: i64) -> Option<Self> {
        u8::try_from(value).ok().and_then(|v| Self::new(v).ok())
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for StarRating {
    type Error = MovieverseError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<StarRating> for u8 {
    fn from(rating: StarRating) -> Self {
        rating.0
    }
}

/// Serde adapter for an optional rating where `0` (the untouched star
/// picker) and `null` both mean "unrated".
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Body {
///     #[serde(default, with = "movieverse_common::types::optional_rating")]
///     rating: Option<StarRating>,
/// }
/// ```
pub mod optional_rating {
    use super::StarRating;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(rating: &Option<StarRating>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        rating.map(u8::from).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<StarRating>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<u8>::deserialize(deserializer)? {
            None | Some(0) => Ok(None),
            Some(value) => StarRating::new(value)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
