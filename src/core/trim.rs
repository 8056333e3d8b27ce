use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use crate::core::error::AlignmentDataError;
use crate::core::events::InsertionEvent;
use crate::core::pairs::PairMap;
use crate::core::read::AlignedRead;

/// Query bases with soft clips and insertions removed, plus the reference
/// position of every remaining base. The two vectors are index-aligned.
#[derive(Constructor, Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct TrimmedRead {
    query: Vec<u8>,
    refpos: Vec<u64>,
    insertions: Vec<InsertionEvent>,
}

#[derive(Constructor, Copy, Clone, Eq, PartialEq, Debug)]
pub struct ReadTrimmer {
    ins_threshold: u32,
}

impl ReadTrimmer {
    pub fn trim<R: AlignedRead>(&self, read: &R) -> Result<TrimmedRead, AlignmentDataError> {
        let seq = read.seq();
        let map = PairMap::from_read(read)?;
        let pairs = map.pairs();

        // Soft clips are only ever the first/last CIGAR entries.
        let cigar = read.cigar();
        let front = cigar.leading_softclips() as usize;
        let back = cigar.trailing_softclips() as usize;
        for available in [pairs.len(), seq.len()] {
            if front + back > available {
                return Err(AlignmentDataError::ExcessiveSoftClip { clipped: front + back, available });
            }
        }
        let columns = &pairs[front..pairs.len() - back];

        let mut keep = vec![true; seq.len()];
        keep[..front].fill(false);
        keep[seq.len() - back..].fill(false);

        let mut insertions = Vec::new();
        let mut start = 0usize;
        while start < columns.len() {
            if !columns[start].is_query_only() {
                start += 1;
                continue;
            }
            let mut end = start + 1;
            while end < columns.len() && columns[end].is_query_only() {
                end += 1;
            }

            let offsets: Vec<usize> = columns[start..end].iter().filter_map(|x| x.qpos()).collect();
            for &offset in &offsets {
                if offset >= keep.len() {
                    return Err(AlignmentDataError::InconsistentQuery { offset, len: seq.len() });
                }
                keep[offset] = false;
            }

            let span = (end - 1 - start) as u32;
            if span <= self.ins_threshold {
                let anchor = start
                    .checked_sub(1)
                    .and_then(|upstream| columns[upstream].rpos())
                    .ok_or(AlignmentDataError::UnanchoredInsertion)?;
                let bases = offsets.iter().map(|&offset| seq[offset]).collect();
                insertions.push(InsertionEvent::new(anchor, bases));
            }
            start = end;
        }

        let refpos: Vec<u64> = columns
            .iter()
            .filter_map(|x| if x.is_aligned() { x.rpos() } else { None })
            .collect();
        let query: Vec<u8> = seq
            .iter()
            .zip(&keep)
            .filter_map(|(&base, &keep)| keep.then(|| base))
            .collect();
        debug_assert_eq!(query.len(), refpos.len());

        Ok(TrimmedRead::new(query, refpos, insertions))
    }
}

#[cfg(test)]
mod tests {
    use rust_htslib::bam::record::{Cigar, CigarString};

    use crate::core::read::MockRead;

    use super::*;

    fn mock(seq: &[u8], cigar: Vec<Cigar>, columns: Vec<[Option<i64>; 2]>) -> MockRead {
        let mut read = MockRead::new();
        read.expect_seq().return_const(seq.to_vec());
        read.expect_cigar().return_const(CigarString(cigar).into_view(0));
        read.expect_columns().return_const(columns);
        read
    }

    #[test]
    fn plain() {
        let read = mock(
            b"ACG",
            vec![Cigar::Match(3)],
            vec![[Some(0), Some(100)], [Some(1), Some(101)], [Some(2), Some(102)]],
        );
        let trimmed = ReadTrimmer::new(5).trim(&read).unwrap();
        assert_eq!(trimmed, TrimmedRead::new(b"ACG".to_vec(), vec![100, 101, 102], vec![]));
    }

    #[test]
    fn soft_clips() {
        let read = mock(
            b"NNACGT",
            vec![Cigar::SoftClip(2), Cigar::Match(3), Cigar::SoftClip(1)],
            vec![
                [Some(0), None],
                [Some(1), None],
                [Some(2), Some(100)],
                [Some(3), Some(101)],
                [Some(4), Some(102)],
                [Some(5), None],
            ],
        );
        let trimmed = ReadTrimmer::new(5).trim(&read).unwrap();
        assert_eq!(trimmed, TrimmedRead::new(b"ACG".to_vec(), vec![100, 101, 102], vec![]));
    }

    #[test]
    fn insertion() {
        let columns = vec![
            [Some(0), Some(50)],
            [Some(1), Some(51)],
            [Some(2), None],
            [Some(3), None],
            [Some(4), None],
            [Some(5), Some(52)],
            [Some(6), Some(53)],
        ];
        let cigar = vec![Cigar::Match(2), Cigar::Ins(3), Cigar::Match(2)];

        // Span 2 fits the default threshold and is recorded.
        let read = mock(b"AATTTCC", cigar.clone(), columns.clone());
        let trimmed = ReadTrimmer::new(5).trim(&read).unwrap();
        assert_eq!(
            trimmed,
            TrimmedRead::new(
                b"AACC".to_vec(),
                vec![50, 51, 52, 53],
                vec![InsertionEvent::new(51, b"TTT".to_vec())]
            )
        );

        // Over the threshold: excised all the same, but not recorded.
        let read = mock(b"AATTTCC", cigar, columns);
        let trimmed = ReadTrimmer::new(1).trim(&read).unwrap();
        assert_eq!(trimmed, TrimmedRead::new(b"AACC".to_vec(), vec![50, 51, 52, 53], vec![]));
    }

    #[test]
    fn insertion_after_clip() {
        let read = mock(
            b"NAAGGC",
            vec![Cigar::SoftClip(1), Cigar::Match(2), Cigar::Ins(2), Cigar::Match(1)],
            vec![
                [Some(0), None],
                [Some(1), Some(100)],
                [Some(2), Some(101)],
                [Some(3), None],
                [Some(4), None],
                [Some(5), Some(102)],
            ],
        );
        let trimmed = ReadTrimmer::new(5).trim(&read).unwrap();
        assert_eq!(
            trimmed,
            TrimmedRead::new(
                b"AAC".to_vec(),
                vec![100, 101, 102],
                vec![InsertionEvent::new(101, b"GG".to_vec())]
            )
        );
    }

    #[test]
    fn unanchored_insertion() {
        let read = mock(
            b"TTTAC",
            vec![Cigar::Ins(3), Cigar::Match(2)],
            vec![
                [Some(0), None],
                [Some(1), None],
                [Some(2), None],
                [Some(3), Some(100)],
                [Some(4), Some(101)],
            ],
        );
        assert_eq!(
            ReadTrimmer::new(5).trim(&read).unwrap_err(),
            AlignmentDataError::UnanchoredInsertion
        );
    }

    #[test]
    fn excessive_clips() {
        let read = mock(
            b"ACGTA",
            vec![Cigar::SoftClip(5)],
            vec![
                [Some(0), None],
                [Some(1), None],
                [Some(2), None],
                [Some(3), None],
                [Some(4), None],
            ],
        );
        assert_eq!(
            ReadTrimmer::new(5).trim(&read).unwrap_err(),
            AlignmentDataError::ExcessiveSoftClip { clipped: 10, available: 5 }
        );
    }
}
