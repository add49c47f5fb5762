pub(crate) mod csv;
pub(crate) mod json;

use crate::lattice::Basis;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// `[["1","0"],["0","1"]]`
    #[default]
    Json,
    /// one comma separated row per line
    Csv,
}

impl OutputFormat {
    pub(crate) fn render(self, basis: &Basis) -> String {
        match self {
            OutputFormat::Json => json::format_basis(basis),
            OutputFormat::Csv => csv::format_basis(basis),
        }
    }
}
