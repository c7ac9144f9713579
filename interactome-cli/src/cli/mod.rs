//! Command-line interface over the interactome core and the text provider.
//!
//! Every command loads a count-header interaction file, builds the network
//! and either reports statistics on stdout or writes a derived file.

mod commands;
mod report;

pub use commands::{
    CleanArgs, Cli, CliError, Command, ComponentsArgs, HistogramArgs, InputArgs, RandomArgs,
    RandomModel, VertexArgs, run_cli,
};
pub use report::{NetworkSummary, Report, render_report};

#[cfg(test)]
mod test_helpers;
