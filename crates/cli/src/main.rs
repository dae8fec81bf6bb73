// crates/cli/src/main.rs
use clap::Parser;
use std::process::ExitCode;

use comment_ripper_cli::args::Args;
use comment_ripper_cli::error::{AppError, Result};
use comment_ripper_engine::config::LanguageCatalog;
use comment_ripper_engine::options::RunConfigBuilder;

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let catalog = LanguageCatalog::load(&args.config)?;

    if args.list {
        for name in catalog.language_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let path = args.path.ok_or(AppError::MissingArgument("Path"))?;
    let language = args.language.ok_or(AppError::MissingArgument("Language"))?;
    let spec = catalog.resolve(&language)?;

    let config = RunConfigBuilder::default()
        .root(path)
        .spec(spec)
        .include_subdirs(args.subdir)
        .strict(args.strict)
        .build()
        .expect("all required RunConfig fields are set");

    let result = comment_ripper_engine::run(&config)?;

    for (path, err) in &result.errors {
        eprintln!("Error processing {}: {err}", path.display());
    }
    for (src, out) in &result.processed {
        println!("{} -> {}", src.display(), out.display());
    }
    println!(
        "{} file(s) stripped, {} failed",
        result.processed.len(),
        result.errors.len()
    );

    if result.errors.is_empty() {
        Ok(())
    } else {
        // Skipped files were already reported; still exit non-zero so
        // scripts notice.
        Err(AppError::Failures(result.errors.len()))
    }
}
