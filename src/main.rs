// src/main.rs
mod extractors;
mod maps;
mod report;
mod utils;

use clap::Parser;
use extractors::coords::CoordinateExtractor;
use maps::models::ExtractionRecord;
use report::ReportWriter;
use utils::AppError;

/// Command Line Interface for the Google Maps coordinate extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Google Maps share URL to extract coordinates from
    url: Option<String>,

    /// File with one share URL per line (overrides the positional URL)
    #[arg(short, long)]
    input: Option<String>,

    /// Output directory for the extraction report (optional)
    #[arg(short, long)]
    output: Option<String>,

    /// Print one JSON record per URL instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Resolve the list of URLs to process
    let urls = collect_urls(&args)?;
    tracing::info!("Processing {} URL(s)", urls.len());

    // 4. Initialize the extractor
    let extractor = CoordinateExtractor::new();

    // 5. Process each URL
    let mut records = Vec::with_capacity(urls.len());
    let mut success_count = 0;
    let mut failure_count = 0;

    for url in &urls {
        let record = match extractor.extract(url) {
            Ok(pair) => {
                tracing::info!("Extracted {}, {} from {}", pair.latitude, pair.longitude, url);
                success_count += 1;
                ExtractionRecord::success(url, pair)
            }
            Err(e) => {
                tracing::warn!("No coordinates in {}: {}", url, e);
                failure_count += 1;
                ExtractionRecord::failure(url, &e)
            }
        };

        print_record(&record, args.json)?;
        records.push(record);
    }

    // 6. Optionally write the report
    if let Some(output_dir) = &args.output {
        let writer = ReportWriter::new(output_dir)?;

        match writer.save_records(&records) {
            Ok(path) => tracing::info!("Saved extraction records to: {}", path.display()),
            Err(e) => tracing::error!("Failed to save extraction records: {}", e),
        }

        match writer.save_run_metadata(&records) {
            Ok(path) => tracing::info!("Saved run metadata to: {}", path.display()),
            Err(e) => tracing::error!("Failed to save run metadata: {}", e),
        }
    }

    tracing::info!("Processing finished. Success: {}, Failures: {}", success_count, failure_count);

    if success_count == 0 && failure_count > 0 {
        return Err(AppError::Processing(format!(
            "No coordinates extracted from {} URL(s)",
            failure_count
        )));
    }

    Ok(())
}

/// Resolves the URL list from the positional argument or the input file.
fn collect_urls(args: &Args) -> Result<Vec<String>, AppError> {
    if let Some(path) = &args.input {
        tracing::info!("Reading URLs from file: {}", path);
        let body = std::fs::read_to_string(path)?;

        let urls: Vec<String> = body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect();

        if urls.is_empty() {
            return Err(AppError::Config(format!("No URLs found in input file {}", path)));
        }
        return Ok(urls);
    }

    match &args.url {
        Some(url) => Ok(vec![url.clone()]),
        None => Err(AppError::Config(
            "Provide a share URL or --input <FILE>".to_string(),
        )),
    }
}

fn print_record(record: &ExtractionRecord, as_json: bool) -> Result<(), AppError> {
    if as_json {
        let line = serde_json::to_string(record)
            .map_err(|e| AppError::Processing(e.to_string()))?;
        println!("{}", line);
        return Ok(());
    }

    match (&record.latitude, &record.longitude) {
        (Some(lat), Some(lng)) => println!("{},{}", lat, lng),
        _ => println!("no coordinates found"),
    }

    Ok(())
}
