use std::fmt::{self, Display, Formatter};

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

/// Uppercase "REF->ALT" pair describing a single mismatched base.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct MismatchPattern {
    refnuc: u8,
    readnuc: u8,
}

impl MismatchPattern {
    pub fn new(refnuc: u8, readnuc: u8) -> Self {
        Self {
            refnuc: refnuc.to_ascii_uppercase(),
            readnuc: readnuc.to_ascii_uppercase(),
        }
    }
}

impl Display for MismatchPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.refnuc as char, self.readnuc as char)
    }
}

#[derive(Constructor, Getters, Dissolve, Clone, Eq, PartialEq, Debug)]
pub struct MismatchEvent {
    pos: u64,
    pattern: MismatchPattern,
}

/// Deletion anchored at the reference position derived from the position
/// under the reference-position cursor minus one.
#[derive(Constructor, Getters, Dissolve, Clone, Eq, PartialEq, Debug)]
pub struct DeletionEvent {
    pos: u64,
    bases: Vec<u8>,
}

/// Insertion anchored at the last reference position upstream of the
/// inserted bases.
#[derive(Constructor, Getters, Dissolve, Clone, Eq, PartialEq, Debug)]
pub struct InsertionEvent {
    pos: u64,
    bases: Vec<u8>,
}
