use derive_more::Constructor;

use crate::core::error::{AlignmentDataError, CountingError, TagParseError};
use crate::core::events::{DeletionEvent, MismatchEvent, MismatchPattern};
use crate::core::mdtag::{self, MdToken, MdTokenizer};
use crate::core::trim::TrimmedRead;

/// Everything a single read contributes, in tag order: covered reference
/// positions (with repeats), mismatches and anchored deletions.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct WalkedEvents {
    pub coverage: Vec<u64>,
    pub mismatches: Vec<MismatchEvent>,
    pub deletions: Vec<DeletionEvent>,
}

#[derive(Constructor, Copy, Clone, Eq, PartialEq, Debug)]
pub struct EditTagWalker {
    del_threshold: u32,
}

impl EditTagWalker {
    pub fn walk(&self, trimmed: &TrimmedRead, tag: &[u8]) -> Result<WalkedEvents, CountingError> {
        let query = trimmed.query();
        let refpos = trimmed.refpos();
        let refslice = mdtag::reference_slice(tag, query)?;

        let mut events = WalkedEvents::default();
        // Cursors over the three parallel streams. The query and the
        // reference slice are covered by the reference_slice construction,
        // only the position list can run dry mid-walk.
        let (mut rp, mut qp, mut rs) = (0usize, 0usize, 0usize);
        for token in MdTokenizer::new(tag) {
            match token? {
                MdToken::Matched(run) => {
                    let run = run as usize;
                    if rp + run > refpos.len() {
                        return Err(TagParseError::CursorExhausted { cursor: "reference position list" }.into());
                    }
                    events.coverage.extend_from_slice(&refpos[rp..rp + run]);
                    rp += run;
                    qp += run;
                    rs += run;
                }
                MdToken::Deleted(bases) => {
                    let next = *refpos
                        .get(rp)
                        .ok_or(TagParseError::CursorExhausted { cursor: "reference position list" })?;
                    let anchor = next.checked_sub(1).ok_or(AlignmentDataError::UnanchoredDeletion)?;
                    events.coverage.push(anchor);
                    if bases.len() as u32 <= self.del_threshold {
                        events.deletions.push(DeletionEvent::new(anchor, bases.to_vec()));
                    }
                    rs += bases.len();
                }
                MdToken::Mismatched(_) => {
                    if rp >= refpos.len() {
                        return Err(TagParseError::CursorExhausted { cursor: "reference position list" }.into());
                    }
                    debug_assert!(qp < query.len() && rs < refslice.len());
                    let pattern = MismatchPattern::new(refslice[rs], query[qp]);
                    events.coverage.push(refpos[rp]);
                    events.mismatches.push(MismatchEvent::new(refpos[rp], pattern));
                    rp += 1;
                    qp += 1;
                    rs += 1;
                }
            }
        }

        for (cursor, consumed, total) in [
            ("reference position list", rp, refpos.len()),
            ("query", qp, query.len()),
            ("reference slice", rs, refslice.len()),
        ] {
            if consumed != total {
                return Err(AlignmentDataError::UnconsumedAlignment { cursor, leftover: total - consumed }.into());
            }
        }
        Ok(events)
    }
}
