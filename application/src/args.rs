//! [`Args`] definitions.

use clap::Parser;

use crate::form::Override;

/// Estimator of the fair monthly rent of a residential unit in Turkey.
#[derive(Debug, Parser)]
#[command(name = "adilev", version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Path to the file describing the property (TOML, JSON or YAML).
    ///
    /// Attributes missing in the file take their default values.
    #[arg(short, long)]
    pub property: Option<String>,

    /// Property attribute to set, overriding the file and environment.
    #[arg(short = 's', long = "set", value_name = "FIELD=VALUE")]
    pub overrides: Vec<Override>,

    /// Print the calculation details along with the estimate.
    #[arg(short, long)]
    pub details: bool,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}
