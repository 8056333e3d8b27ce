use std::fmt::{self, Display, Formatter};

use bio_types::strand::ReqStrand;
#[cfg(test)]
use mockall::{automock, predicate::*};

use crate::core::read::{AlignedRead, SequencedRead};
use crate::core::strandutil::StrandedData;

#[cfg_attr(test, automock)]
pub trait StrandDeducer<R: SequencedRead> {
    fn deduce(&self, record: &R) -> ReqStrand;
}

/// Second-strand (dUTP-style) library contract: a read lands in the Reverse
/// bucket exactly when its first-in-pair and reverse-complemented flags agree.
#[derive(Default, Copy, Clone, Eq, PartialEq, Debug)]
pub struct DeduceStrandByOrientation;

impl<R: SequencedRead> StrandDeducer<R> for DeduceStrandByOrientation {
    fn deduce(&self, record: &R) -> ReqStrand {
        if record.is_first() == (*record.strand() == ReqStrand::Reverse) {
            ReqStrand::Reverse
        } else {
            ReqStrand::Forward
        }
    }
}

/// Mapping/pairing/orientation tallies over a sample of reads. Strand buckets
/// follow [`DeduceStrandByOrientation`]; the paired-end table below uses raw
/// alignment orientation, not the deduced bucket.
#[derive(Default, Clone, Eq, PartialEq, Debug)]
pub struct OrientationStats {
    total: u32,
    mapped: u32,
    single_end: u32,
    paired_end: u32,
    buckets: StrandedData<u32>,
    read1: StrandedData<u32>,
    read2: StrandedData<u32>,
}

impl OrientationStats {
    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn update<R: AlignedRead>(&mut self, read: &R) {
        self.total += 1;
        self.buckets[DeduceStrandByOrientation.deduce(read)] += 1;

        if !read.is_mapped() {
            return;
        }
        self.mapped += 1;

        if !read.is_paired() {
            self.single_end += 1;
            return;
        }
        self.paired_end += 1;
        let oriented = if read.is_first() { &mut self.read1 } else { &mut self.read2 };
        oriented[*read.strand()] += 1;
    }
}

fn pct(part: u32, total: u32) -> f64 {
    if total == 0 {
        0f64
    } else {
        part as f64 / total as f64 * 100f64
    }
}

impl Display for OrientationStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(60);
        let thinrule = "-".repeat(60);

        writeln!(f, "{}", rule)?;
        writeln!(f, "Read statistics:")?;
        writeln!(f, "{}", thinrule)?;
        writeln!(f, "{:<22}{:>10}", "Total reads sampled:", self.total)?;
        for (label, count) in [
            ("Mapped reads:", self.mapped),
            ("Single-end reads:", self.single_end),
            ("Paired-end reads:", self.paired_end),
            ("Forward bucket:", self.buckets.forward),
            ("Reverse bucket:", self.buckets.reverse),
        ] {
            writeln!(f, "{:<22}{:>10}  ({:>5.1}%)", label, count, pct(count, self.total))?;
        }
        writeln!(f, "{}", thinrule)?;
        if self.paired_end > 0 {
            writeln!(f, "Paired-end orientation:")?;
            for (label, count) in [
                ("Read 1 forward:", self.read1.forward),
                ("Read 1 reverse:", self.read1.reverse),
                ("Read 2 forward:", self.read2.forward),
                ("Read 2 reverse:", self.read2.reverse),
            ] {
                writeln!(f, "{:<22}{:>10}  ({:>5.1}%)", label, count, pct(count, self.paired_end))?;
            }
        }
        write!(f, "{}", rule)
    }
}
