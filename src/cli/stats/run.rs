use clap::ArgMatches;
use rust_htslib::bam::{Read, Reader, Record};

use crate::core::stranding::OrientationStats;

use super::args;

/// Tallies mapping/pairing/orientation statistics over the first --limit
/// records and prints them as a table. Strand buckets here are deduced by
/// the same rule the counting pipeline uses, so the table doubles as a
/// sanity check of the library layout.
pub fn run(matches: &ArgMatches) {
    let input = matches.value_of(args::INPUT).unwrap();
    let limit: u32 = matches.value_of(args::LIMIT).unwrap().parse().unwrap();

    let mut reader = Reader::from_path(input)
        .unwrap_or_else(|_| panic!("Failed to open file {}\nPossible reasons: no read permission; not a BAM", input));

    let mut stats = OrientationStats::default();
    let mut record = Record::new();
    while stats.total() < limit {
        match reader.read(&mut record) {
            Some(Ok(())) => stats.update(&record),
            Some(Err(_)) => panic!("Failed to parse record information (BAM file corrupted?)"),
            None => break,
        }
    }

    println!("{}", stats);
}
