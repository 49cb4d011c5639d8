//! Command-line interface module.

mod args;
pub mod generate;
pub mod routes;

pub use args::{Cli, Commands, GenerateArgs, InputArgs, RoutesArgs};
