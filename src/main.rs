use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

use payroll::{read_all, Error, PayoutReport, ReportKind};

#[derive(Parser, Debug)]
#[command(about = "Employee payroll report generator", version)]
struct Args {
    /// CSV files containing employee timesheets
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Type of report to produce
    #[arg(long, value_enum)]
    report: ReportKind,

    /// Show more detail (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let records = read_all(&args.files);
    match args.report {
        ReportKind::Payout => match PayoutReport::from_records(records) {
            Ok(report) => {
                info!("generating payout report");
                println!("{report}");
                info!("report ready");
            }
            Err(Error::NoData) => println!("{}", Error::NoData),
            Err(e) => return Err(e.into()),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_accept_payout_report_with_files() {
        let args = Args::try_parse_from(["payroll", "--report", "payout", "a.csv", "b.csv"]).unwrap();
        assert_eq!(args.report, ReportKind::Payout);
        assert_eq!(args.files, vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")]);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn args_reject_unsupported_report_kind() {
        let err = Args::try_parse_from(["payroll", "--report", "summary", "a.csv"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn args_require_report_and_files() {
        assert!(Args::try_parse_from(["payroll", "a.csv"]).is_err());
        assert!(Args::try_parse_from(["payroll", "--report", "payout"]).is_err());
    }
}
