//! Command-line menu audit.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use bento::audit::{AuditOptions, audit_file};
use bento::export::export_highlighted_copy;
use bento::rules::{Severity, Vendor, Violation};
use bento::{SheetGrid, reader, report};

#[derive(Parser)]
#[command(
    name = "bento",
    version,
    about = "Audits weekly cafeteria menu spreadsheets against contract rules"
)]
struct Cli {
    /// Menu workbook to audit (.xlsx, .xls)
    file: PathBuf,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Write a highlighted copy of the workbook to this path
    #[arg(long, value_name = "OUT_XLSX")]
    export: Option<PathBuf>,

    /// Force a vendor profile instead of keyword detection
    #[arg(long, value_enum)]
    vendor: Option<VendorArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum VendorArg {
    General,
    Elementary,
    FoodCourt,
    LightMeal,
}

impl From<VendorArg> for Vendor {
    fn from(arg: VendorArg) -> Self {
        match arg {
            VendorArg::General => Vendor::General,
            VendorArg::Elementary => Vendor::Elementary,
            VendorArg::FoodCourt => Vendor::FoodCourt,
            VendorArg::LightMeal => Vendor::LightMeal,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            // A read failure aborts this file only; show the cause rather
            // than crash, matching the on-screen wording reviewers know.
            eprintln!("❌ 讀取失敗。原因:{err}");
            eprintln!("請確認檔案是否被加密,或嘗試另存新檔後再審核。");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> bento::Result<ExitCode> {
    let options = AuditOptions {
        vendor_override: cli.vendor.map(Into::into),
    };
    let file_report = audit_file(&cli.file, &options)?;

    if cli.json {
        println!("{}", report::to_json(&file_report)?);
    } else {
        print!("{}", report::render_file_report(&file_report));
    }

    if let Some(out) = &cli.export {
        let grids = reader::read_workbook(&cli.file)?;
        let pairs: Vec<(&SheetGrid, &[Violation])> = grids
            .iter()
            .zip(&file_report.sheets)
            .map(|(grid, sheet)| (grid, sheet.violations.as_slice()))
            .collect();
        export_highlighted_copy(&pairs, out)?;
        eprintln!("已輸出標記檔案:{}", out.display());
    }

    let has_errors = file_report
        .all_violations()
        .any(|v| v.severity == Severity::Error);
    Ok(if has_errors {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
