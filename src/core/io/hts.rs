use std::path::Path;

pub use rust_htslib::bam::IndexedReader;
use rust_htslib::bam::Read;

use crate::core::error::ConfigurationError;
use crate::core::workload::RefWorkload;

pub fn open(hts: impl AsRef<Path>) -> IndexedReader {
    IndexedReader::from_path(&hts).unwrap_or_else(|_| {
        panic!(
            "Failed to open file {}\n\
                Possible reasons: BAM file was not indexed (samtools index); you don't have read permissions",
            hts.as_ref().display()
        )
    })
}

/// Turns header reference sequences into workloads, in declaration order.
pub fn references(hts: impl AsRef<Path>) -> Result<Vec<RefWorkload>, ConfigurationError> {
    let reader = open(hts);
    let header = reader.header();

    let mut references = Vec::with_capacity(header.target_count() as usize);
    for tid in 0..header.target_count() {
        let tname = String::from_utf8_lossy(header.tid2name(tid)).to_string();
        let tlen = header.target_len(tid).unwrap();
        references.push(RefWorkload::new(tname, tlen)?);
    }
    Ok(references)
}
