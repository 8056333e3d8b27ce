pub mod buffer;
pub mod config;
pub mod counter;
pub mod error;
pub mod events;
pub mod io;
pub mod mdtag;
pub mod pairs;
pub mod read;
pub mod report;
pub mod runner;
pub mod stranding;
pub mod strandutil;
pub mod trim;
pub mod walk;
pub mod workload;
