use std::path::PathBuf;

use anyhow::ensure;
use clap::Parser;

use stack2jxl::batch::{BatchDriver, BatchOptions};
use stack2jxl::logger;

#[derive(Parser)]
#[command(name = "stack2jxl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Batch-convert microscopy image stacks (TIFF, JPEG 2000, DAX) to JPEG XL")]
struct Cli {
    /// Directory to scan recursively for convertible files
    path: PathBuf,

    /// Delete originals after successful conversion
    #[arg(short, long)]
    remove: bool,

    /// JPEG XL quality level (100 = lossless)
    #[arg(short, long, default_value_t = 98, value_parser = clap::value_parser!(u8).range(0..=100))]
    quality: u8,

    /// Worker threads (0 = all available cores)
    #[arg(short, long, default_value_t = 0)]
    jobs: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init();

    ensure!(
        cli.path.is_dir(),
        "{} does not exist or is not a directory",
        cli.path.display()
    );

    let driver = BatchDriver::new(BatchOptions {
        quality: cli.quality,
        remove: cli.remove,
        jobs: cli.jobs,
    });
    driver.run(&cli.path)?;

    Ok(())
}
