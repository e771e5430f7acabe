pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
