//! Error types for MovieVerse

use thiserror::Error;

/// Result type alias for MovieVerse operations
pub type Result<T> = std::result::Result<T, MovieverseError>;

/// Main error type shared across MovieVerse crates
#[derive(Error, Debug)]
pub enum MovieverseError {
    #[error("Star rating must be between {min} and {max}, got {value}")]
    InvalidRating { value: u8, min: u8, max: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rating_message() {
        let err = MovieverseError::InvalidRating {
            value: 9,
            min: 1,
            max: 5,
        };
        assert_eq!(err.to_string(), "Star rating must be between 1 and 5, got 9");
    }
}
