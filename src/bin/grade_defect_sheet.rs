// Small dev utility: grade a fabric defect sheet (CSV/XLSX) with the 4-point system.
//
// Usage:
//   cargo run --bin grade_defect_sheet -- <sheet_path> [meters_inspected] [pass_threshold]
//
// meters_inspected defaults to 100.0; pass_threshold defaults to the configured
// quality profile. Prints the grading result as JSON; the DQ report summary goes
// to the log (RUST_LOG=info).

use garment_mes_core::config::ConfigManager;
use garment_mes_core::engine::GradingEngine;
use garment_mes_core::importer::DefectSheetImporter;
use garment_mes_core::logging;

fn main() -> anyhow::Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let sheet_path = args.next().ok_or_else(|| {
        anyhow::anyhow!("usage: grade_defect_sheet <sheet_path> [meters_inspected] [pass_threshold]")
    })?;
    let meters_inspected: f64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(100.0);

    let profile = ConfigManager::load_default()?;
    ConfigManager::apply(&profile);
    let pass_threshold: f64 = args
        .next()
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(profile.pass_threshold);

    let importer = DefectSheetImporter::new();
    let import = importer.import_file(&sheet_path)?;

    let grading =
        GradingEngine::calculate_four_point_score(meters_inspected, &import.entries, pass_threshold);

    println!("{}", serde_json::to_string_pretty(&grading)?);
    Ok(())
}
