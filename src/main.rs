use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::Path;

use receipt_points::{breakdown, config, validate, Receipt};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match (args.get(1).map(String::as_str), args.get(2)) {
        (Some("score"), Some(path)) => run_score(Path::new(path)),
        (Some("check"), Some(path)) => run_check(Path::new(path)),
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn load_receipt(path: &Path) -> Result<Receipt> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read receipt file: {:?}", path))?;
    Receipt::from_json(&content)
}

fn run_check(path: &Path) -> Result<()> {
    let receipt = load_receipt(path)?;
    if let Err(err) = validate(&receipt) {
        bail!("The receipt is invalid: {}", err);
    }

    println!("✓ {} is a valid receipt", path.display());
    Ok(())
}

fn run_score(path: &Path) -> Result<()> {
    let receipt = load_receipt(path)?;
    if let Err(err) = validate(&receipt) {
        bail!("The receipt is invalid: {}", err);
    }

    let points = breakdown(&receipt);

    println!("🧾 {} ({} {})", receipt.retailer, receipt.purchase_date, receipt.purchase_time);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Retailer name          {:>5}", points.retailer);
    println!("  Round dollar total     {:>5}", points.round_dollar);
    println!("  Total multiple of 0.25 {:>5}", points.quarter_multiple);
    println!("  Item pairs             {:>5}", points.item_pairs);
    println!("  Item descriptions      {:>5}", points.descriptions);
    println!("  Odd purchase day       {:>5}", points.odd_day);
    println!("  2pm-4pm purchase       {:>5}", points.afternoon);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Total                  {:>5}", points.total());

    Ok(())
}

fn print_usage() {
    println!("receipt-points {}", receipt_points::VERSION);
    println!();
    println!("Usage:");
    println!("  receipt-points score <receipt.json>   Validate and print the points breakdown");
    println!("  receipt-points check <receipt.json>   Validate only");
    println!();
    println!(
        "HTTP API: receipt-server (listens on ${}, default {})",
        config::ADDR_ENV,
        config::DEFAULT_ADDR
    );
}
