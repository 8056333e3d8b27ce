use clap::{crate_authors, crate_name, crate_version, App, AppSettings};

use mapcount::cli;

fn main() {
    let matches = App::new(crate_name!())
        .author(crate_authors!("\n"))
        .version(crate_version!())
        .max_term_width(120)
        .global_setting(AppSettings::DeriveDisplayOrder)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            App::new("count")
                .about("Count mutations, insertions and deletions per reference position, stratified by strand")
                .args(cli::count::args::all()),
        )
        .subcommand(
            App::new("stats")
                .about("Print mapping and orientation statistics for a sample of reads")
                .args(cli::stats::args::all()),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("count", matches)) => cli::count::run(matches),
        Some(("stats", matches)) => cli::stats::run(matches),
        _ => unreachable!(),
    }
}
