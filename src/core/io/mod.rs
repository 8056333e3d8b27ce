pub mod hts;
