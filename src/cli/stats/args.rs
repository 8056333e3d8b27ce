use clap::Arg;

use crate::cli::validate;

pub const INPUT: &str = "input";
pub const LIMIT: &str = "limit";

pub const SECTION_NAME: &str = "Stats";

pub fn all<'a>() -> Vec<Arg<'a>> {
    let args = vec![
        Arg::new(INPUT)
            .short('i')
            .long(INPUT)
            .required(true)
            .takes_value(true)
            .validator(validate::path)
            .long_help("Path to the input BAM file. An index is not required, records are sampled from the start of the file."),
        Arg::new(LIMIT)
            .long(LIMIT)
            .takes_value(true)
            .validator(validate::numeric(1u32, u32::MAX))
            .default_value("10000")
            .long_help("Number of records to sample when tallying mapping and orientation statistics."),
    ];
    args.into_iter().map(|x| x.help_heading(Some(SECTION_NAME))).collect()
}
