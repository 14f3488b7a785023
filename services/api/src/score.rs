use clap::Args;
use receipt_points::error::AppError;
use receipt_points::receipts::{validate_receipt, PointsBreakdown, PointsEngine, Receipt};
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON document
    pub(crate) path: PathBuf,
    /// Score the receipt even when it fails validation
    #[arg(long)]
    pub(crate) skip_validation: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = fs::read_to_string(&args.path)?;
    let (receipt, breakdown) = score_document(&raw, args.skip_validation)?;
    render_breakdown(&receipt, &breakdown);
    Ok(())
}

pub(crate) fn score_document(
    raw: &str,
    skip_validation: bool,
) -> Result<(Receipt, PointsBreakdown), AppError> {
    let receipt: Receipt = serde_json::from_str(raw)?;
    if !skip_validation {
        validate_receipt(&receipt)?;
    }

    let breakdown = PointsEngine::new().score(&receipt);
    Ok((receipt, breakdown))
}

fn render_breakdown(receipt: &Receipt, breakdown: &PointsBreakdown) {
    println!(
        "Receipt from {} on {} at {} ({} item(s), total {})",
        receipt.retailer,
        receipt.purchase_date,
        receipt.purchase_time,
        receipt.items.len(),
        receipt.total
    );

    if breakdown.components.is_empty() {
        println!("  no rules applied");
    }
    for component in &breakdown.components {
        println!(
            "  {:>4}  {:<24} {}",
            component.points,
            component.rule.label(),
            component.notes
        );
    }
    println!("Total points: {}", breakdown.total);
}
