use core::fmt;

/// Errors returned by the generator and its helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// PRNG seeded with four zero words
    InvalidState,

    /// `int(min, max)` called with `max < min`
    InvalidRange { min: i64, max: i64 },

    /// Random choice from an empty collection
    EmptyCollection,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidState => write!(f, "Invalid PRNG state: all four state words are zero"),
            Error::InvalidRange { min, max } => {
                write!(f, "Invalid range: max ({}) is less than min ({})", max, min)
            }
            Error::EmptyCollection => write!(f, "Cannot choose from an empty collection"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
