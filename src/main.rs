use std::path::PathBuf;

use clap::Parser;
use device_query::query::filter::{Query, RecordFilter};
use device_query::report::loader::load_records;

#[derive(Parser)]
#[command(name = "device-query")]
#[command(about = "Filter device inventory CSV reports by app and device criteria")]
struct Cli {
    /// Path to the CSV device report
    #[arg(short, long)]
    filename: PathBuf,

    /// Full model name or part of it, like V1s, P1, etc
    #[arg(short, long)]
    model: Option<String>,

    /// Firmware version of the device
    #[arg(short, long)]
    rom: Option<String>,

    /// Application package name
    #[arg(short, long)]
    package: Option<String>,

    /// Name of the application
    #[arg(short, long)]
    name: Option<String>,

    /// Version of the application, may carry a prefix like <, >, =>, <=
    #[arg(short, long)]
    version: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let records = load_records(&cli.filename)?;

    let query = Query {
        package: cli.package.clone(),
        name: cli.name.clone(),
        version: cli.version.clone(),
        model: cli.model.clone(),
        rom: cli.rom.clone(),
    };
    let serials = RecordFilter::new(&records).search(&query)?;

    println!("********** OUTPUT **********");
    for serial in &serials {
        println!("{serial}");
    }
    println!("********** END **********");
    println!("TOTAL: {}", serials.len());
    println!("Search parameters:");
    println!("- filename: {}", cli.filename.display());
    for (label, value) in [
        ("model", &cli.model),
        ("rom", &cli.rom),
        ("package", &cli.package),
        ("name", &cli.name),
        ("version", &cli.version),
    ] {
        println!("- {label}: {}", value.as_deref().unwrap_or("Any"));
    }
    Ok(())
}
