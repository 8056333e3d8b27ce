use std::cell::RefCell;

use clap::ArgMatches;
use indicatif::ProgressBar;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::cli::style;
use crate::cli::thread_cache::ThreadCache;
use crate::core::counter::BaseEventCounter;
use crate::core::io::hts;
use crate::core::report;
use crate::core::runner::{CountReport, HtsRunner, Runner};
use crate::core::stranding::DeduceStrandByOrientation;
use crate::core::workload::RefWorkload;

use super::{args, parse};

const OUTPUT_IO_ERROR: &str = "Failed to write results to the output file.";

pub fn run(matches: &ArgMatches) {
    let factory = || ProgressBar::new_spinner().with_style(style::parse::with_progress());

    let input = parse::input(factory(), matches);
    let threads = parse::threads(factory(), matches);
    ThreadPoolBuilder::new().num_threads(threads).build_global().expect("Failed to initialize the thread pool");

    let config = parse::config(factory(), matches);
    let policy = parse::policy(factory(), matches);
    let include_all = matches.is_present(args::counting::ALL);
    let mut saveto = parse::saveto(factory(), matches);

    let workloads = hts::references(&input).unwrap_or_else(|e| panic!("{}", e));
    let maxsize = workloads.iter().map(|x| x.len()).max().unwrap_or(1);

    let counter = BaseEventCounter::new(maxsize, config, DeduceStrandByOrientation);
    let runner = HtsRunner::new(input, counter, policy, include_all);

    let pbar = ProgressBar::new(workloads.len() as u64).with_style(style::run::running());
    let reports = scan(workloads, runner, &pbar);

    saveto.write_record(report::HEADER).expect(OUTPUT_IO_ERROR);
    let (mut processed, mut skipped, mut rows) = (0u64, 0u64, 0u64);
    for report in reports {
        processed += report.processed as u64;
        skipped += report.skipped as u64;
        rows += report.rows.len() as u64;
        for row in &report.rows {
            saveto.serialize(row).expect(OUTPUT_IO_ERROR);
        }
    }
    saveto.flush().expect(OUTPUT_IO_ERROR);

    pbar.set_style(style::run::finished());
    pbar.finish_with_message(format!("Finished: {} rows, {} reads processed, {} skipped", rows, processed, skipped));
}

/// Runs the workloads on the rayon pool, one runner per worker thread.
/// Reports come back in header declaration order regardless of which
/// reference finishes first.
fn scan<R>(workloads: Vec<RefWorkload>, runner: R, pbar: &ProgressBar) -> Vec<CountReport>
where
    R: Runner + Clone + Send,
{
    pbar.set_length(workloads.len() as u64);
    let cache = ThreadCache::new(move || RefCell::new(runner.clone()));
    workloads
        .into_par_iter()
        .map(|workload| {
            let report = cache.get().borrow_mut().run(workload);
            pbar.inc(1);
            report
        })
        .collect()
}
