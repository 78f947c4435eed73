use std::path::Path;
use std::time::Duration;

use clap::Parser;

use lab_verify::cli::{Cli, LabSelection};
use lab_verify::config::{Config, ConfigLoader, FileConfigLoader, RealFileSystem};
use lab_verify::labs;
use lab_verify::output::{ColorMode, ErrorOutput, TextFormatter};
use lab_verify::report::{Summary, Verifier};
use lab_verify::runner::ProcessRunner;
use lab_verify::{EXIT_FAILURE, EXIT_SUCCESS, LabVerifyError, exit_code};

const PROGRAM: &str = "lab-verify";

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are reported as "errors" that go to stdout.
            let code = if e.use_stderr() {
                EXIT_FAILURE
            } else {
                EXIT_SUCCESS
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let color_mode = ColorMode::from(cli.color);
    let formatter = TextFormatter::new(color_mode);
    let diagnostics = ErrorOutput::new(color_mode);

    let Some(arg) = cli.lab.as_deref() else {
        print!("{}", formatter.format_usage(PROGRAM));
        return EXIT_FAILURE;
    };

    let selection = match LabSelection::parse(arg) {
        Ok(selection) => selection,
        Err(LabVerifyError::UnknownLab(unknown)) => {
            print!(
                "{}",
                formatter.format_unknown_lab(&unknown, &labs::valid_options())
            );
            return EXIT_FAILURE;
        }
        Err(e) => {
            diagnostics.print_error_with_detail(
                e.error_type(),
                &e.to_string(),
                None,
                e.suggestion(),
            );
            return EXIT_FAILURE;
        }
    };

    if !cli.root.is_dir() {
        diagnostics.print_warning(&format!(
            "Lab root {} is not a directory",
            cli.root.display()
        ));
    }

    let config = match load_config(cli, diagnostics) {
        Ok(config) => config,
        Err(e) => {
            let detail = std::error::Error::source(&e).map(ToString::to_string);
            diagnostics.print_error_with_detail(
                e.error_type(),
                &e.to_string(),
                detail.as_deref(),
                e.suggestion(),
            );
            return EXIT_FAILURE;
        }
    };

    let mut runner = ProcessRunner::new(
        &cli.root,
        Duration::from_secs(config.runner.timeout_secs),
    );
    if cli.verbose {
        runner = runner.with_diagnostics(diagnostics);
    }
    let verifier = Verifier::new(&cli.root, &RealFileSystem, &runner, &config.runner);

    match selection {
        LabSelection::One(lab) => {
            let report = verifier.verify(lab);
            print!("{}", formatter.format_lab(&report));
            exit_code(report.passed())
        }
        LabSelection::All => {
            print!("{}", formatter.format_all_header());
            let reports = verifier.verify_each(|report| print!("{}", formatter.format_lab(report)));
            let summary = Summary::from_reports(&reports);
            print!("{}", formatter.format_summary(&summary));
            exit_code(summary.all_passed())
        }
    }
}

fn load_config(cli: &Cli, diagnostics: ErrorOutput) -> lab_verify::Result<Config> {
    if cli.no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new(&cli.root);
    let loaded = match cli.config.as_deref() {
        Some(path) => loader.load_from_path(path)?,
        None => loader.load()?,
    };

    if cli.verbose {
        diagnostics.print_note(&format!(
            "configuration: {}",
            config_source_label(loaded.source.as_deref())
        ));
    }
    Ok(loaded.config)
}

fn config_source_label(source: Option<&Path>) -> String {
    source.map_or_else(
        || "built-in defaults".to_string(),
        |path| path.display().to_string(),
    )
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
