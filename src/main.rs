use std::{
    fs::File,
    io::{stdout, BufWriter},
    process,
};

use clap::Parser;
use colored::Colorize;

use trunit::{
    cli::{Cli, Command},
    error::TrunitError,
    reformat, run,
};

fn main() {
    let cli = Cli::parse();

    #[cfg(feature = "tracing")]
    init_tracing();

    if let Err(e) = execute(cli) {
        eprintln!(
            "{}\n {}",
            "Application error:".blue().bold(),
            e.to_string().blue()
        );
        drop(e);
        process::exit(1);
    }
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn execute(cli: Cli) -> Result<(), TrunitError> {
    match cli.command {
        Command::Annotate {
            input_dir,
            output_dir,
            processes,
        } => {
            if !cli.quiet {
                println!(
                    "{}: {}",
                    "repeat lists".bold(),
                    input_dir.display().to_string().underline().bold().blue()
                );
                println!(
                    "{}: {}",
                    "annotated output".bold(),
                    output_dir.display().to_string().underline().bold().blue()
                );
                println!("{}: {}", "processes".bold(), processes.to_string().blue().bold());
                println!();
            }

            let summary = run::annotate_dir(&input_dir, &output_dir, processes)?;

            if !cli.quiet {
                println!(
                    "{}: {} annotated, {} skipped, {} failed",
                    "done".bold(),
                    summary.annotated.to_string().blue().bold(),
                    summary.skipped,
                    summary.failed
                );
            }
            Ok(())
        }
        Command::Export {
            repeat_dir,
            output,
            format,
            model,
        } => {
            // The table itself goes to stdout when no output file is given,
            // so informational lines are only printed for file output.
            let chatty = !cli.quiet && output.is_some();
            if chatty {
                println!(
                    "{}: {}",
                    "repeat lists".bold(),
                    repeat_dir.display().to_string().underline().bold().blue()
                );
                println!("{}: {}", "format".bold(), format.to_string().blue().bold());
                println!("{}: {}", "model".bold(), model.blue().bold());
                println!();
            }

            let rows = match output {
                Some(path) => {
                    let file =
                        File::create(&path).map_err(|source| TrunitError::WriteError { source })?;
                    run::export_table(&repeat_dir, BufWriter::new(file), format, &model)?
                }
                None => run::export_table(&repeat_dir, BufWriter::new(stdout()), format, &model)?,
            };

            if chatty {
                println!("{}: {} rows", "done".bold(), rows.to_string().blue().bold());
            }
            Ok(())
        }
        Command::Reformat { input, output } => {
            let written = reformat::reformat_fasta(&input, &output)?;
            if !cli.quiet {
                println!(
                    "{}: {} records written to {}",
                    "done".bold(),
                    written.to_string().blue().bold(),
                    output.display().to_string().underline().bold().blue()
                );
            }
            Ok(())
        }
    }
}
