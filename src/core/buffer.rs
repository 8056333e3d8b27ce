use bio_types::strand::ReqStrand;

use crate::core::error::AlignmentDataError;
use crate::core::events::{InsertionEvent, MismatchPattern};
use crate::core::strandutil::StrandedData;
use crate::core::walk::WalkedEvents;

#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct PositionStats {
    pub coverage: u32,
    pub mismatches: Vec<MismatchPattern>,
    pub deletions: Vec<Vec<u8>>,
    pub insertions: Vec<Vec<u8>>,
}

impl PositionStats {
    #[inline]
    pub fn is_covered(&self) -> bool {
        self.coverage > 0
    }

    fn clear(&mut self) {
        self.coverage = 0;
        self.mismatches.clear();
        self.deletions.clear();
        self.insertions.clear();
    }
}

/// Forward/reverse per-position tallies for a single reference sequence.
/// Slot 0 is an unused sentinel so that the slot index equals the 1-based
/// output position; a 0-based event at p lands in slot p + 1.
#[derive(Clone)]
pub struct EventsBuffer {
    stats: StrandedData<Vec<PositionStats>>,
    len: u64,
}

impl EventsBuffer {
    pub fn new(maxsize: u64) -> Self {
        let slots = maxsize as usize + 1;
        EventsBuffer {
            stats: StrandedData {
                forward: Vec::with_capacity(slots),
                reverse: Vec::with_capacity(slots),
            },
            len: 0,
        }
    }

    pub fn reset(&mut self, newlen: u64) {
        let slots = newlen as usize + 1;
        if self.stats.forward.len() != slots {
            self.stats.forward.resize(slots, PositionStats::default());
            self.stats.reverse.resize(slots, PositionStats::default());
        }
        self.stats.apply_mut(|buffer, _| buffer.iter_mut().for_each(PositionStats::clear));
        self.len = newlen;
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn stats(&self, strand: ReqStrand) -> &[PositionStats] {
        &self.stats[strand]
    }

    /// Folds one read's events into the given bucket, in whole or not at
    /// all: every position is validated before the first tally is touched.
    pub fn fold(
        &mut self,
        strand: ReqStrand,
        walked: &WalkedEvents,
        insertions: &[InsertionEvent],
    ) -> Result<(), AlignmentDataError> {
        for &pos in &walked.coverage {
            self.checked(pos)?;
        }
        let anchors = walked
            .mismatches
            .iter()
            .map(|x| *x.pos())
            .chain(walked.deletions.iter().map(|x| *x.pos()))
            .chain(insertions.iter().map(|x| *x.pos()));
        for pos in anchors {
            self.checked(pos)?;
        }

        for &pos in &walked.coverage {
            self.slot(strand, pos).coverage += 1;
        }
        for event in &walked.mismatches {
            self.slot(strand, *event.pos()).mismatches.push(*event.pattern());
        }
        for event in &walked.deletions {
            self.slot(strand, *event.pos()).deletions.push(event.bases().clone());
        }
        for event in insertions {
            self.slot(strand, *event.pos()).insertions.push(event.bases().clone());
        }
        Ok(())
    }

    #[inline]
    fn slot(&mut self, strand: ReqStrand, pos: u64) -> &mut PositionStats {
        &mut self.stats[strand][pos as usize + 1]
    }

    #[inline]
    fn checked(&self, pos: u64) -> Result<(), AlignmentDataError> {
        if pos >= self.len {
            return Err(AlignmentDataError::PositionOutOfBounds { pos, len: self.len });
        }
        Ok(())
    }
}
