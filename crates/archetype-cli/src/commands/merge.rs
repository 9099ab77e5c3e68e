//! Implementation of the `archetype merge` command.

use tracing::instrument;

use archetype_adapters::LocalFilesystem;
use archetype_core::application::MergeService;

use crate::{
    cli::MergeArgs,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: MergeArgs, output: OutputManager) -> CliResult<()> {
    if !args.source.is_file() {
        return Err(CliError::PathNotFound { path: args.source });
    }
    if args.source == args.dest {
        return Err(CliError::InvalidInput {
            message: "SOURCE and DEST must be different files".into(),
            source: None,
        });
    }

    let service = MergeService::new(Box::new(LocalFilesystem::new()));

    if args.append {
        service
            .append_file(&args.source, &args.dest)
            .with_cli_context(|| "appending file")?;
        output.success(&format!(
            "Appended '{}' to '{}'",
            args.source.display(),
            args.dest.display()
        ))?;
        return Ok(());
    }

    let summary = service
        .merge_requirements(&args.source, &args.dest)
        .with_cli_context(|| "merging requirements")?;

    if summary.is_noop() {
        output.info(&format!("'{}' is already up to date", args.dest.display()))?;
    } else {
        output.success(&format!(
            "Merged into '{}': {} added, {} upgraded",
            args.dest.display(),
            summary.added,
            summary.upgraded
        ))?;
    }

    Ok(())
}
