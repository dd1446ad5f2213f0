use socmed_types::*;
use std::fs;
use std::path::PathBuf;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut types = Vec::new();

    // Enums shared by documents and reports
    types.push(clean_type(Platform::export_to_string()?));
    types.push(clean_type(Sentiment::export_to_string()?));
    types.push(clean_type(Language::export_to_string()?));
    types.push(clean_type(Emotion::export_to_string()?));

    // Metrics
    types.push(clean_type(TwitterMetrics::export_to_string()?));
    types.push(clean_type(InstagramMetrics::export_to_string()?));
    types.push(clean_type(TiktokMetrics::export_to_string()?));
    types.push(clean_type(FacebookMetrics::export_to_string()?));
    types.push(clean_type(YoutubeMetrics::export_to_string()?));

    // Summary report
    types.push(clean_type(SentimentBreakdown::export_to_string()?));
    types.push(clean_type(PlatformStats::export_to_string()?));
    types.push(clean_type(SummaryReport::export_to_string()?));

    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("bindings"));
    fs::create_dir_all(&output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

/// Strip generator banners and per-type imports; everything lands in one file.
fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let filtered: Vec<&str> = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
