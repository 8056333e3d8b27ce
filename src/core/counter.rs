use std::marker::PhantomData;

#[cfg(test)]
use mockall::automock;

use crate::core::buffer::EventsBuffer;
use crate::core::config::CountingConfig;
use crate::core::error::{AlignmentDataError, CountingError};
use crate::core::read::AlignedRead;
use crate::core::report::{self, PositionRow};
use crate::core::stranding::StrandDeducer;
use crate::core::trim::ReadTrimmer;
use crate::core::walk::EditTagWalker;
use crate::core::workload::RefWorkload;

#[cfg_attr(test, automock)]
pub trait EventCounter<R: AlignedRead> {
    // Reset buffers for the given reference
    fn reset(&mut self, workload: RefWorkload);
    // Extract and fold events for a single read
    fn count(&mut self, read: &R) -> Result<(), CountingError>;
    // The total number of reads folded since the last reset
    fn counted(&self) -> u32;
    // Emit rows for the current reference. May be called more than once
    fn rows(&self, include_all: bool) -> Vec<PositionRow>;
}

/// Runs the whole per-read pipeline against one reference at a time:
/// strand deduction, trimming, tag walking and folding into the buffer.
#[derive(Clone)]
pub struct BaseEventCounter<R: AlignedRead, Deducer: StrandDeducer<R>> {
    deducer: Deducer,
    trimmer: ReadTrimmer,
    walker: EditTagWalker,
    buffer: EventsBuffer,
    reference: String,
    counted: u32,
    phantom: PhantomData<fn() -> R>,
}

impl<R: AlignedRead, Deducer: StrandDeducer<R>> BaseEventCounter<R, Deducer> {
    pub fn new(maxsize: u64, config: CountingConfig, deducer: Deducer) -> Self {
        BaseEventCounter {
            deducer,
            trimmer: ReadTrimmer::new(*config.ins_threshold()),
            walker: EditTagWalker::new(*config.del_threshold()),
            buffer: EventsBuffer::new(maxsize),
            reference: String::new(),
            counted: 0,
            phantom: Default::default(),
        }
    }
}

impl<R: AlignedRead, Deducer: StrandDeducer<R>> EventCounter<R> for BaseEventCounter<R, Deducer> {
    fn reset(&mut self, workload: RefWorkload) {
        self.buffer.reset(workload.len());
        self.reference.clear();
        self.reference.push_str(workload.name());
        self.counted = 0;
    }

    fn count(&mut self, read: &R) -> Result<(), CountingError> {
        if !read.is_mapped() {
            return Ok(());
        }
        let strand = self.deducer.deduce(read);
        let trimmed = self.trimmer.trim(read)?;
        let tag = read.mdtag().ok_or(AlignmentDataError::MissingMdTag)?;
        let events = self.walker.walk(&trimmed, &tag)?;
        self.buffer.fold(strand, &events, trimmed.insertions())?;
        self.counted += 1;
        Ok(())
    }

    #[inline]
    fn counted(&self) -> u32 {
        self.counted
    }

    fn rows(&self, include_all: bool) -> Vec<PositionRow> {
        report::rows(&self.reference, &self.buffer, include_all)
    }
}

#[cfg(test)]
mod tests {
    use bio_types::strand::ReqStrand;
    use rust_htslib::bam::record::{Cigar, CigarString};

    use crate::core::read::MockRead;
    use crate::core::stranding::MockStrandDeducer;

    use super::*;

    fn counter(maxsize: u64, strand: Option<ReqStrand>) -> BaseEventCounter<MockRead, MockStrandDeducer<MockRead>> {
        let mut deducer = MockStrandDeducer::new();
        if let Some(strand) = strand {
            deducer.expect_deduce().return_const(strand);
        }
        BaseEventCounter::new(maxsize, CountingConfig::new(5, 5).unwrap(), deducer)
    }

    fn perfect_read(pos: i64, seq: &str, mdtag: Option<&str>) -> MockRead {
        let mut read = MockRead::new();
        read.expect_is_mapped().return_const(true);
        let len = seq.len();
        read.expect_cigar().returning(move || CigarString(vec![Cigar::Match(len as u32)]).into_view(pos));
        let seq = seq.as_bytes().to_vec();
        read.expect_seq().returning(move || seq.clone());
        read.expect_columns()
            .returning(move || (0..len as i64).map(|x| [Some(x), Some(pos + x)]).collect());
        let mdtag = mdtag.map(|x| x.as_bytes().to_vec());
        read.expect_mdtag().returning(move || mdtag.clone());
        read
    }

    #[test]
    fn count() {
        let mut dummy = counter(200, Some(ReqStrand::Forward));
        dummy.reset(RefWorkload::new("18S".into(), 200).unwrap());
        assert_eq!(dummy.counted(), 0);

        dummy.count(&perfect_read(100, "ACGT", Some("4"))).unwrap();
        assert_eq!(dummy.counted(), 1);

        let rows = dummy.rows(false);
        assert_eq!(rows.len(), 4);
        for (row, pos) in rows.iter().zip([101u64, 102, 103, 104]) {
            assert_eq!(row.reference, "18S");
            assert_eq!(row.pos, pos);
            assert_eq!(row.forward.coverage, 1);
            assert_eq!(row.reverse.coverage, 0);
        }
    }

    #[test]
    fn unmapped_reads_are_ignored() {
        let mut dummy = counter(10, None);
        dummy.reset(RefWorkload::new("18S".into(), 10).unwrap());

        let mut read = MockRead::new();
        read.expect_is_mapped().return_const(false);
        dummy.count(&read).unwrap();
        assert_eq!(dummy.counted(), 0);
        assert!(dummy.rows(false).is_empty());
    }

    #[test]
    fn missing_mdtag() {
        let mut dummy = counter(200, Some(ReqStrand::Reverse));
        dummy.reset(RefWorkload::new("18S".into(), 200).unwrap());

        let err = dummy.count(&perfect_read(100, "ACGT", None)).unwrap_err();
        assert_eq!(err, CountingError::AlignmentData(AlignmentDataError::MissingMdTag));
        assert_eq!(dummy.counted(), 0);
        assert!(dummy.rows(false).is_empty());
    }

    #[test]
    fn reset_switches_reference() {
        let mut dummy = counter(200, Some(ReqStrand::Reverse));
        dummy.reset(RefWorkload::new("18S".into(), 200).unwrap());
        dummy.count(&perfect_read(0, "AC", Some("2"))).unwrap();
        assert_eq!(dummy.rows(false).len(), 2);

        dummy.reset(RefWorkload::new("28S".into(), 50).unwrap());
        assert_eq!(dummy.counted(), 0);
        assert!(dummy.rows(false).is_empty());
        assert_eq!(dummy.rows(true).len(), 50);
        assert!(dummy.rows(true).iter().all(|x| x.reference == "28S"));
    }
}
