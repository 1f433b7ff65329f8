//! csvclean - Clean up data from CSV files

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use csvclean::config::Config;
use csvclean::error::CleanError;
use csvclean::model::Table;
use csvclean::reader::read_table;
use csvclean::transform::{apply_all, pipeline};
use csvclean::writer::write_table;

/// Clean up data from a CSV file
#[derive(Parser, Debug)]
#[command(name = "csvclean")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File path to the input CSV
    input_file: PathBuf,

    /// File path to the output CSV
    output_file: PathBuf,

    /// Convert data to lowercase
    #[arg(short, long)]
    lowercase: bool,

    /// Organize data from A-Z
    #[arg(short, long)]
    organize: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), CleanError> {
    let config = Config::new(cli.input_file, cli.output_file)
        .with_lowercase(cli.lowercase)
        .with_organize(cli.organize);

    config.validate()?;

    let table = read_table(&config.input_file)?;
    let stages = pipeline(&config);
    let rows = apply_all(&stages, table.rows);
    let cleaned = Table::from_parts(table.header, rows);

    write_table(&config.output_file, &cleaned)?;

    if stages.is_empty() {
        println!(
            "Wrote {} data row(s) to '{}'.",
            cleaned.row_count(),
            config.output_file.display()
        );
    } else {
        let names: Vec<&str> = stages.iter().map(|s| s.name()).collect();
        println!(
            "Wrote {} data row(s) to '{}' (applied: {}).",
            cleaned.row_count(),
            config.output_file.display(),
            names.join(", ")
        );
    }

    Ok(())
}

/// Print the error to stderr, red when stderr is a terminal
fn report_error(err: &CleanError) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
    let _ = write!(stderr, "Error:");
    let _ = stderr.reset();
    let _ = writeln!(stderr, " {}", err);
}
