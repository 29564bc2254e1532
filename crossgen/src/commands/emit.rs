use std::path::PathBuf;

use clap::Args;
use crossgen_codegen::Emitter;
use crossgen_ir::DeclarationTable;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    config::Config,
    language::{Language, LanguageSupport},
    ops::{self, emit::EmitOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct EmitCommand {
    /// Declaration file (JSON) produced by the front end
    pub input: PathBuf,

    /// Path to crossgen.toml (defaults to ./crossgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory (overrides crossgen.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target language (overrides crossgen.toml)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Regenerate every file, ignoring the staleness rule
    #[arg(short, long)]
    pub force: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl EmitCommand {
    /// Run the emit command
    pub fn run(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref()).unwrap_or_exit();
        let language = self.language.unwrap_or(config.target.language);
        let output_dir = self.output.as_ref().unwrap_or(&config.output.dir);
        let mut out = TerminalOutput::new();

        let table = DeclarationTable::open(&self.input).wrap_err_with(|| {
            format!("Failed to load declarations from {}", self.input.display())
        })?;

        // Lint errors abort before any file is written
        let check = ops::check(&table, &self.input);
        if !check.is_valid() {
            check.render(&mut out);
            std::process::exit(1);
        }

        let target = LanguageSupport::get(language).target(&config.target);
        let oracle = ops::oracle(&self.input, config.output.staleness, self.force)?;
        tracing::debug!(
            %language,
            output = %output_dir.display(),
            declarations = table.len(),
            "emitting"
        );

        let files = Emitter::new(&table, target.as_ref())
            .emit_all(oracle.as_ref(), output_dir)
            .unwrap_or_exit();

        let report = ops::write(
            files,
            EmitOptions {
                output_dir,
                declarations: table.len(),
                warnings: check.warnings,
                dry_run: self.dry_run,
            },
        )
        .wrap_err("Failed to write generated files")?;
        report.render(&mut out);

        Ok(())
    }
}
