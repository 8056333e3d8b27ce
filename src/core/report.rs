use std::fmt::Display;

use itertools::Itertools;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use bio_types::strand::ReqStrand;

use crate::core::buffer::{EventsBuffer, PositionStats};

/// One half of an output row. Event lists are pre-rendered as
/// `<count>:<event1>;<event2>;...` or the literal `0` when empty.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct StrandSummary {
    pub coverage: u32,
    pub mismatches: String,
    pub deletions: String,
    pub insertions: String,
}

impl From<&PositionStats> for StrandSummary {
    fn from(stats: &PositionStats) -> Self {
        StrandSummary {
            coverage: stats.coverage,
            mismatches: summarize(stats.mismatches.len(), stats.mismatches.iter()),
            deletions: summarize(stats.deletions.len(), stats.deletions.iter().map(|x| String::from_utf8_lossy(x))),
            insertions: summarize(stats.insertions.len(), stats.insertions.iter().map(|x| String::from_utf8_lossy(x))),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PositionRow {
    pub reference: String,
    pub pos: u64,
    pub forward: StrandSummary,
    pub reverse: StrandSummary,
}

pub const HEADER: [&str; 10] =
    ["ref", "pos", "coverageF", "mutF", "delF", "insF", "coverageR", "mutR", "delR", "insR"];

impl Serialize for PositionRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PositionRow", 10)?;
        state.serialize_field("ref", &self.reference)?;
        state.serialize_field("pos", &self.pos)?;
        state.serialize_field("coverageF", &self.forward.coverage)?;
        state.serialize_field("mutF", &self.forward.mismatches)?;
        state.serialize_field("delF", &self.forward.deletions)?;
        state.serialize_field("insF", &self.forward.insertions)?;
        state.serialize_field("coverageR", &self.reverse.coverage)?;
        state.serialize_field("mutR", &self.reverse.mismatches)?;
        state.serialize_field("delR", &self.reverse.deletions)?;
        state.serialize_field("insR", &self.reverse.insertions)?;
        state.end()
    }
}

/// Drains a finalized buffer into 1-based ascending rows. Positions covered
/// on neither strand are skipped unless include_all is set.
pub fn rows(reference: &str, buffer: &EventsBuffer, include_all: bool) -> Vec<PositionRow> {
    let forward = buffer.stats(ReqStrand::Forward);
    let reverse = buffer.stats(ReqStrand::Reverse);
    debug_assert_eq!(forward.len(), reverse.len());

    let mut result = Vec::new();
    // Slot 0 is the sentinel, so the slot index equals the 1-based position.
    for pos in 1..forward.len() {
        let (fwd, rev) = (&forward[pos], &reverse[pos]);
        if !include_all && !fwd.is_covered() && !rev.is_covered() {
            continue;
        }
        result.push(PositionRow {
            reference: reference.to_owned(),
            pos: pos as u64,
            forward: fwd.into(),
            reverse: rev.into(),
        });
    }
    result
}

fn summarize<T: Display>(count: usize, mut events: impl Iterator<Item = T>) -> String {
    if count == 0 {
        "0".to_owned()
    } else {
        format!("{}:{}", count, events.join(";"))
    }
}

#[cfg(test)]
mod tests {
    use serde_test::{assert_ser_tokens, Token};

    use crate::core::events::{DeletionEvent, InsertionEvent, MismatchEvent, MismatchPattern};
    use crate::core::walk::WalkedEvents;

    use super::*;

    #[test]
    fn serialization() {
        let row = PositionRow {
            reference: "MySuperReference".into(),
            pos: 13,
            forward: StrandSummary {
                coverage: 3,
                mismatches: "2:A->G;A->T".into(),
                deletions: "0".into(),
                insertions: "1:GG".into(),
            },
            reverse: StrandSummary {
                coverage: 0,
                mismatches: "0".into(),
                deletions: "0".into(),
                insertions: "0".into(),
            },
        };
        assert_ser_tokens(
            &row,
            &[
                Token::Struct { name: "PositionRow", len: 10 },
                Token::Str("ref"),
                Token::Str("MySuperReference"),
                Token::Str("pos"),
                Token::U64(13),
                Token::Str("coverageF"),
                Token::U32(3),
                Token::Str("mutF"),
                Token::Str("2:A->G;A->T"),
                Token::Str("delF"),
                Token::Str("0"),
                Token::Str("insF"),
                Token::Str("1:GG"),
                Token::Str("coverageR"),
                Token::U32(0),
                Token::Str("mutR"),
                Token::Str("0"),
                Token::Str("delR"),
                Token::Str("0"),
                Token::Str("insR"),
                Token::Str("0"),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn summaries() {
        let mut stats = PositionStats::default();
        assert_eq!(
            StrandSummary::from(&stats),
            StrandSummary {
                coverage: 0,
                mismatches: "0".into(),
                deletions: "0".into(),
                insertions: "0".into()
            }
        );

        stats.coverage = 4;
        stats.mismatches = vec![MismatchPattern::new(b'A', b'G'), MismatchPattern::new(b'A', b'T')];
        stats.deletions = vec![b"TT".to_vec()];
        stats.insertions = vec![b"G".to_vec(), b"ACG".to_vec()];
        assert_eq!(
            StrandSummary::from(&stats),
            StrandSummary {
                coverage: 4,
                mismatches: "2:A->G;A->T".into(),
                deletions: "1:TT".into(),
                insertions: "2:G;ACG".into()
            }
        );
    }

    #[test]
    fn covered_rows() {
        let mut buffer = EventsBuffer::new(4);
        buffer.reset(4);

        let walked = WalkedEvents {
            coverage: vec![0, 2, 2],
            mismatches: vec![MismatchEvent::new(2, MismatchPattern::new(b'C', b'T'))],
            deletions: vec![DeletionEvent::new(0, b"A".to_vec())],
        };
        buffer.fold(ReqStrand::Forward, &walked, &[InsertionEvent::new(0, b"GG".to_vec())]).unwrap();

        let result = rows("ref1", &buffer, false);
        assert_eq!(
            result,
            vec![
                PositionRow {
                    reference: "ref1".into(),
                    pos: 1,
                    forward: StrandSummary {
                        coverage: 1,
                        mismatches: "0".into(),
                        deletions: "1:A".into(),
                        insertions: "1:GG".into(),
                    },
                    reverse: StrandSummary {
                        coverage: 0,
                        mismatches: "0".into(),
                        deletions: "0".into(),
                        insertions: "0".into(),
                    },
                },
                PositionRow {
                    reference: "ref1".into(),
                    pos: 3,
                    forward: StrandSummary {
                        coverage: 2,
                        mismatches: "1:C->T".into(),
                        deletions: "0".into(),
                        insertions: "0".into(),
                    },
                    reverse: StrandSummary {
                        coverage: 0,
                        mismatches: "0".into(),
                        deletions: "0".into(),
                        insertions: "0".into(),
                    },
                },
            ]
        );

        // include_all emits every position, covered or not.
        let all = rows("ref1", &buffer, true);
        assert_eq!(all.len(), 4);
        assert_eq!(all.iter().map(|x| x.pos).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(all[1].forward.coverage, 0);

        // An untouched reference yields nothing without include_all.
        buffer.reset(4);
        assert!(rows("ref1", &buffer, false).is_empty());
    }
}
