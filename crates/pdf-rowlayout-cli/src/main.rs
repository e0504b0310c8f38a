use anyhow::Result;
use clap::Parser;
use pdf_rowlayout::{LayoutError, LayoutOptions, RunOutcome};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "rowlayout",
    about = "Pack a folder of images into a PDF, one row of images per page",
    version
)]
struct Cli {
    /// Folder containing .png/.jpg/.jpeg images (defaults to the current directory)
    folder: Option<PathBuf>,
}

async fn run(cli: Cli) -> Result<()> {
    let folder = match cli.folder {
        Some(folder) => folder,
        None => std::env::current_dir()?,
    };

    let options = LayoutOptions::default();
    match pdf_rowlayout::run(&folder, &options).await? {
        RunOutcome::NoImages => {
            println!("No image files found.");
        }
        RunOutcome::Saved { path, statistics } => {
            println!(
                "Laid out {} images on {} pages",
                statistics.images, statistics.pages
            );
            println!("PDF saved to: {}", path.display());
        }
    }

    Ok(())
}

/// Exit status for a failed run
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<LayoutError>() {
        Some(e) if e.is_io() => 2,
        Some(e) if e.is_bad_image() => 3,
        _ if err.downcast_ref::<std::io::Error>().is_some() => 2,
        _ => 1,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}
