use std::path::PathBuf;

use rust_htslib::bam::{Read, Record};

use crate::core::counter::EventCounter;
use crate::core::error::CountingError;
use crate::core::io::hts;
use crate::core::report::PositionRow;
use crate::core::workload::RefWorkload;

/// What to do with reads that fail trimming or tag parsing.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ErrorPolicy {
    /// Abort the whole run (default).
    Abort,
    /// Skip the read and tally it.
    Skip,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CountReport {
    pub rows: Vec<PositionRow>,
    pub processed: u32,
    pub skipped: u32,
}

pub trait Runner {
    fn run(&mut self, workload: RefWorkload) -> CountReport;
}

pub struct HtsRunner<Counter: EventCounter<Record>> {
    htsfile: PathBuf,
    htsreader: hts::IndexedReader,
    counter: Counter,
    policy: ErrorPolicy,
    include_all: bool,
}

impl<Counter: EventCounter<Record>> HtsRunner<Counter> {
    pub fn new(htsfile: PathBuf, counter: Counter, policy: ErrorPolicy, include_all: bool) -> Self {
        let htsreader = hts::open(&htsfile);
        Self { htsfile, htsreader, counter, policy, include_all }
    }
}

impl<Counter: EventCounter<Record>> Runner for HtsRunner<Counter> {
    fn run(&mut self, workload: RefWorkload) -> CountReport {
        let (name, len) = (workload.name().to_owned(), workload.len());
        self.htsreader
            .fetch((name.as_str(), 0i64, len as i64))
            .unwrap_or_else(|_| panic!("Failed to fetch reads for {}:0-{} (HTS file corrupted?)", name, len));
        self.counter.reset(workload);

        let mut skipped = 0;
        let mut record = Record::new();
        while let Some(r) = self.htsreader.read(&mut record) {
            r.expect("Failed to parse record information (HTS file corrupted?)");
            if let Err(e) = self.counter.count(&record) {
                skipped += apply_policy(self.policy, record.qname(), &e);
            }
        }

        CountReport { rows: self.counter.rows(self.include_all), processed: self.counter.counted(), skipped }
    }
}

fn apply_policy(policy: ErrorPolicy, name: &[u8], error: &CountingError) -> u32 {
    match policy {
        ErrorPolicy::Abort => {
            panic!("Failed to process read {}: {}", String::from_utf8_lossy(name), error)
        }
        ErrorPolicy::Skip => 1,
    }
}

impl<Counter: EventCounter<Record> + Clone> Clone for HtsRunner<Counter> {
    fn clone(&self) -> Self {
        Self::new(self.htsfile.clone(), self.counter.clone(), self.policy, self.include_all)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::error::AlignmentDataError;

    use super::*;

    #[test]
    fn skip_policy() {
        let error = CountingError::AlignmentData(AlignmentDataError::MissingMdTag);
        assert_eq!(apply_policy(ErrorPolicy::Skip, b"read-1", &error), 1);
    }

    #[test]
    #[should_panic(expected = "Failed to process read read-1")]
    fn abort_policy() {
        let error = CountingError::AlignmentData(AlignmentDataError::MissingMdTag);
        apply_policy(ErrorPolicy::Abort, b"read-1", &error);
    }
}
