use clap::Arg;

use crate::cli::validate;

pub mod core {
    use super::*;

    pub const INPUT: &str = "input";
    pub const SAVETO: &str = "saveto";
    pub const THREADS: &str = "threads";

    pub const SECTION_NAME: &str = "Core";

    pub fn args<'a>() -> Vec<Arg<'a>> {
        let args = vec![
            Arg::new(INPUT)
                .short('i')
                .long(INPUT)
                .required(true)
                .takes_value(true)
                .validator(validate::indexed_bam)
                .long_help("Path to the input BAM file. The file must be sorted and indexed (samtools index); reads are counted one reference sequence at a time."),
            Arg::new(SAVETO)
                .short('o')
                .long(SAVETO)
                .takes_value(true)
                .validator(validate::writable)
                .default_value("/dev/stdout")
                .long_help("Path to the output csv file. By default, the results are printed to stdout."),
            Arg::new(THREADS)
                .short('t')
                .long(THREADS)
                .takes_value(true)
                .validator(validate::numeric(1, usize::MAX))
                .default_value("1")
                .long_help("Maximum number of threads to spawn at once. Reference sequences are processed in parallel, one accumulator pair per worker."),
        ];
        args.into_iter().map(|x| x.help_heading(Some(SECTION_NAME))).collect()
    }
}

pub mod counting {
    use super::*;

    pub const DEL_THRESHOLD: &str = "del-threshold";
    pub const INS_THRESHOLD: &str = "ins-threshold";
    pub const ALL: &str = "all";
    pub const LENIENT: &str = "lenient";

    pub const SECTION_NAME: &str = "Counting";

    pub fn args<'a>() -> Vec<Arg<'a>> {
        let args = vec![
            Arg::new(DEL_THRESHOLD)
                .long(DEL_THRESHOLD)
                .takes_value(true)
                .validator(validate::numeric(1u32, u32::MAX))
                .default_value("5")
                .long_help("Record deletions of at most the given length (bp). Longer deletions still advance the reference coordinate, they are just not reported."),
            Arg::new(INS_THRESHOLD)
                .long(INS_THRESHOLD)
                .takes_value(true)
                .validator(validate::numeric(1u32, u32::MAX))
                .default_value("5")
                .long_help("Record insertions of at most the given length (bp). Longer insertions are still excised from the read, they are just not reported."),
            Arg::new(ALL)
                .long(ALL)
                .takes_value(false)
                .long_help("Emit a row for every reference position, including positions covered on neither strand."),
            Arg::new(LENIENT)
                .long(LENIENT)
                .takes_value(false)
                .long_help("Skip reads with malformed CIGAR/MD information instead of aborting the whole run. Skipped reads are tallied and reported at the end."),
        ];
        args.into_iter().map(|x| x.help_heading(Some(SECTION_NAME))).collect()
    }
}

pub mod output {
    use super::*;

    pub const GZIP: &str = "gzip";

    pub const SECTION_NAME: &str = "Output";

    pub fn args<'a>() -> Vec<Arg<'a>> {
        let args = vec![Arg::new(GZIP)
            .long(GZIP)
            .takes_value(false)
            .long_help("Compress the output with gzip; a .gz suffix is appended to the output path.")];
        args.into_iter().map(|x| x.help_heading(Some(SECTION_NAME))).collect()
    }
}

pub fn all<'a>() -> Vec<Arg<'a>> {
    core::args().into_iter().chain(counting::args().into_iter()).chain(output::args().into_iter()).collect()
}
