use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use agreement_pdf::{AgreementRecord, Error};

/// Generate an arbitration or mediation agreement from a case record.
#[derive(Parser)]
#[command(name = "agreement-pdf", version, about)]
struct Args {
    /// Case record JSON file.
    input: PathBuf,

    /// Output PDF path; derived from the case reference when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write an HTML preview next to the PDF.
    #[arg(long)]
    preview: bool,
}

fn run(args: &Args) -> Result<(), Error> {
    let data = std::fs::read_to_string(&args.input)?;
    let record: AgreementRecord = serde_json::from_str(&data)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&record));
    agreement_pdf::write_pdf(&record, &output)?;
    println!("wrote {}", output.display());

    if args.preview {
        let preview = output.with_extension("html");
        agreement_pdf::write_html(&record, &preview)?;
        println!("wrote {}", preview.display());
    }

    Ok(())
}

/// Deterministic name from the case reference, else the current timestamp.
fn default_output(record: &AgreementRecord) -> PathBuf {
    let stem = record
        .case_reference
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(|c| {
            c.chars()
                .map(|ch| {
                    if ch.is_ascii_alphanumeric() {
                        ch.to_ascii_lowercase()
                    } else {
                        '-'
                    }
                })
                .collect::<String>()
        })
        .unwrap_or_else(|| {
            let secs = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            format!("agreement-{secs}")
        });
    PathBuf::from(format!("{stem}.pdf"))
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
