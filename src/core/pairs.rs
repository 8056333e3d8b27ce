use crate::core::error::AlignmentDataError;
use crate::core::read::AlignedRead;

/// Single alignment column of the query-to-reference coordinate map.
/// At least one of the two coordinates is always present.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct AlignedPair {
    qpos: Option<usize>,
    rpos: Option<u64>,
}

impl AlignedPair {
    pub fn new(qpos: Option<usize>, rpos: Option<u64>) -> Self {
        Self { qpos, rpos }
    }

    #[inline]
    pub fn qpos(&self) -> Option<usize> {
        self.qpos
    }

    #[inline]
    pub fn rpos(&self) -> Option<u64> {
        self.rpos
    }

    // Inside an insertion or a soft clip: the column consumes query bases only.
    #[inline]
    pub fn is_query_only(&self) -> bool {
        self.qpos.is_some() && self.rpos.is_none()
    }

    #[inline]
    pub fn is_aligned(&self) -> bool {
        self.qpos.is_some() && self.rpos.is_some()
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PairMap {
    pairs: Vec<AlignedPair>,
}

impl PairMap {
    pub fn from_read(read: &impl AlignedRead) -> Result<Self, AlignmentDataError> {
        let columns = read.columns();

        let mut pairs = Vec::with_capacity(columns.len());
        for [qpos, rpos] in columns {
            let qpos = match qpos {
                Some(x) if x < 0 => return Err(AlignmentDataError::NegativeCoordinate { value: x }),
                Some(x) => Some(x as usize),
                None => None,
            };
            let rpos = match rpos {
                Some(x) if x < 0 => return Err(AlignmentDataError::NegativeCoordinate { value: x }),
                Some(x) => Some(x as u64),
                None => None,
            };
            if qpos.is_none() && rpos.is_none() {
                return Err(AlignmentDataError::EmptyColumn);
            }
            pairs.push(AlignedPair::new(qpos, rpos));
        }
        Ok(Self { pairs })
    }

    #[inline]
    pub fn pairs(&self) -> &[AlignedPair] {
        &self.pairs
    }
}
