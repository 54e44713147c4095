mod commands;
mod setup;

pub use commands::run;
