use std::ops::Range;

use bio_types::genome::{AbstractInterval, Interval, Position};
use derive_getters::Getters;

use crate::core::error::ConfigurationError;

/// One reference sequence scheduled for counting, spanning its full length.
#[derive(Clone, Debug, Eq, PartialEq, Getters)]
pub struct RefWorkload {
    interval: Interval,
}

impl AbstractInterval for RefWorkload {
    fn contig(&self) -> &str {
        self.interval.contig()
    }

    fn range(&self) -> Range<Position> {
        self.interval.range()
    }
}

#[allow(clippy::len_without_is_empty)]
impl RefWorkload {
    pub fn new(name: String, length: u64) -> Result<Self, ConfigurationError> {
        if length == 0 {
            return Err(ConfigurationError::EmptyReference { name });
        }
        Ok(RefWorkload { interval: Interval::new(name, 0..length) })
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.interval.contig()
    }

    #[inline]
    pub fn len(&self) -> u64 {
        self.interval.range().end - self.interval.range().start
    }
}
