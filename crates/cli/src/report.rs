//! Text and JSON rendering of a load plan.

use palletizer::{CalculationResult, PalletConfig};
use std::fs;
use std::path::Path;

/// Prints a human-readable report of the plan.
pub fn print_report(result: &CalculationResult, pallet: &PalletConfig) {
    let material = &result.material;

    println!("\n{:=<72}", "");
    println!("LOAD PLAN: {}", material.name);
    println!("{:=<72}", "");
    println!(
        "  Box:            {} x {} x {} mm",
        material.length, material.width, material.height
    );
    println!(
        "  Pallet:         {} ({} x {} mm, deck {} mm, ceiling {} mm)",
        pallet.name, pallet.length, pallet.width, pallet.height, pallet.max_load_height
    );
    println!("  Total boxes:    {}", result.total_items);
    println!("  Layers:         {}", result.total_layers);
    println!(
        "  Stack height:   {} mm ({} mm with pallet)",
        result.stack_height,
        result.total_height(pallet)
    );
    println!("  Volume util.:   {:.1}%", result.volume_utilization);
    println!("  Area util.:     {:.1}%", result.area_utilization);

    println!(
        "\n{:<10} {:<12} {:>8} {:>8} {:>8} {:>12}",
        "Pattern", "Orientation", "Cols", "Rows", "Boxes", "Extent"
    );
    println!("{:-<72}", "");
    for pattern in &result.unique_patterns {
        println!(
            "{:<10} {:<12} {:>8} {:>8} {:>8} {:>12}",
            pattern.id.to_string(),
            format!("{:?}", pattern.orientation),
            pattern.cols,
            pattern.rows,
            pattern.items,
            format!("{}x{}", pattern.layer_length, pattern.layer_width)
        );
    }

    if !result.layer_assignments.is_empty() {
        println!("\n{:<8} {:<10} {:>12} {:>8}", "Layer", "Pattern", "Height", "Boxes");
        println!("{:-<72}", "");
        for layer in result.layer_assignments.iter().rev() {
            println!(
                "{:<8} {:<10} {:>12} {:>8}",
                layer.layer_index,
                layer.pattern_id.to_string(),
                layer.height,
                layer.item_count
            );
        }
    }

    println!("{:=<72}\n", "");
}

/// Serializes `value` as pretty JSON to `path`.
pub fn save_json<T: serde::Serialize>(value: &T, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
