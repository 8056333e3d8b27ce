pub use run::run;

pub mod args;
mod run;
