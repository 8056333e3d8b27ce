use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::ArgMatches;
use flate2::write::GzEncoder;
use flate2::Compression;
use indicatif::ProgressBar;

use crate::core::config::CountingConfig;
use crate::core::runner::ErrorPolicy;

use super::args;

pub fn input(pbar: ProgressBar, matches: &ArgMatches) -> PathBuf {
    pbar.set_message("Parsing the input BAM...");
    let input = PathBuf::from(matches.value_of(args::core::INPUT).unwrap());
    pbar.finish_with_message(format!("Input: {}", input.display()));
    input
}

pub fn threads(pbar: ProgressBar, matches: &ArgMatches) -> usize {
    pbar.set_message("Parsing the number of threads...");
    let threads = matches.value_of(args::core::THREADS).unwrap().parse().unwrap();
    pbar.finish_with_message(format!("Using at most {} threads", threads));
    threads
}

pub fn config(pbar: ProgressBar, matches: &ArgMatches) -> CountingConfig {
    pbar.set_message("Parsing counting thresholds...");
    let del_threshold = matches.value_of(args::counting::DEL_THRESHOLD).unwrap().parse().unwrap();
    let ins_threshold = matches.value_of(args::counting::INS_THRESHOLD).unwrap().parse().unwrap();
    let config = CountingConfig::new(del_threshold, ins_threshold).unwrap_or_else(|e| panic!("{}", e));
    pbar.finish_with_message(format!(
        "Recording deletions ≤ {}bp and insertions ≤ {}bp",
        config.del_threshold(),
        config.ins_threshold()
    ));
    config
}

pub fn policy(pbar: ProgressBar, matches: &ArgMatches) -> ErrorPolicy {
    pbar.set_message("Parsing the error policy...");
    if matches.is_present(args::counting::LENIENT) {
        pbar.finish_with_message("Lenient mode: malformed reads will be skipped and tallied");
        ErrorPolicy::Skip
    } else {
        pbar.finish_with_message("Strict mode: a malformed read aborts the whole run");
        ErrorPolicy::Abort
    }
}

pub fn saveto(pbar: ProgressBar, matches: &ArgMatches) -> csv::Writer<Box<dyn Write>> {
    pbar.set_message("Parsing the output path...");
    let path = PathBuf::from(matches.value_of(args::core::SAVETO).unwrap());
    let gzip = matches.is_present(args::output::GZIP);
    let (path, saveto) = writer(path, gzip);
    pbar.finish_with_message(format!("Results will be saved to {}", path.display()));
    saveto
}

/// Plain buffered writer, or a gzip encoder with a .gz suffix appended to
/// the path.
pub fn writer(mut path: PathBuf, gzip: bool) -> (PathBuf, csv::Writer<Box<dyn Write>>) {
    let raw: Box<dyn Write> = if gzip {
        let mut filename = path.file_name().unwrap_or_default().to_os_string();
        filename.push(".gz");
        path.set_file_name(filename);
        let file = File::create(&path).unwrap_or_else(|_| panic!("Failed to create {}", path.display()));
        Box::new(GzEncoder::new(BufWriter::new(file), Compression::default()))
    } else {
        let file = File::create(&path).unwrap_or_else(|_| panic!("Failed to create {}", path.display()));
        Box::new(BufWriter::new(file))
    };
    // The header row is written up front by the caller, even when no
    // position ends up covered.
    (path, csv::WriterBuilder::new().has_headers(false).from_writer(raw))
}
