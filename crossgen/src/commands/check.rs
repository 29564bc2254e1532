use std::path::PathBuf;

use clap::Args;
use crossgen_codegen::validate::Validator;
use crossgen_ir::DeclarationTable;
use eyre::{Context, Result};

use crate::{
    ops,
    reports::{LintsReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Declaration file (JSON) produced by the front end
    #[arg(required_unless_present = "list_lints")]
    pub input: Option<PathBuf>,

    /// List the lints that are run and exit
    #[arg(long)]
    pub list_lints: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let mut out = TerminalOutput::new();

        if self.list_lints {
            LintsReport {
                lints: Validator::new().lint_info(),
            }
            .render(&mut out);
            return Ok(());
        }

        let Some(input) = &self.input else {
            eyre::bail!("no declaration file given");
        };
        let table = DeclarationTable::open(input)
            .wrap_err_with(|| format!("Failed to load declarations from {}", input.display()))?;

        let report = ops::check(&table, input);
        report.render(&mut out);

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
