//! Precommit-rs - pre-commit secret guard for Gigmarket web
//!
//! Invoked by the pre-commit hook with the list of staged files; exits
//! non-zero when any of them contains something that looks like a
//! credential.

use anyhow::Result;
use clap::Parser;
use gigmarket_cli::output::{format_count, Status};
use gigmarket_core::error::exit_codes;
use gigmarket_hooks::secrets;
use std::path::PathBuf;

/// Files that legitimately contain the detection patterns themselves,
/// compared against the argument exactly as given (no basename matching).
const SKIP_FILES: [&str; 2] = ["crates/hooks/src/secrets.rs", ".pre-commit-config.yaml"];

#[derive(Parser)]
#[command(name = "precommit-rs")]
#[command(about = "Pre-commit secret guard for Gigmarket web")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Files to check
    #[arg(trailing_var_arg = true)]
    files: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = run(&cli);

    std::process::exit(result);
}

fn run(cli: &Cli) -> i32 {
    let paths = candidates(&cli.files);

    if cli.verbose {
        Status::info(&format!(
            "Scanning {} ({} skipped)",
            format_count(paths.len(), "file", "files"),
            cli.files.len() - paths.len()
        ));
    }

    if secrets::scan_files(&paths) {
        println!(">>> COMMITTEE REJECTED: Secrets detected in code.");
        exit_codes::FAILURE
    } else {
        if cli.verbose {
            Status::success("No secrets detected");
        }
        exit_codes::SUCCESS
    }
}

/// Drop skip-listed paths, preserving the supplied order
fn candidates(files: &[String]) -> Vec<PathBuf> {
    files
        .iter()
        .filter(|f| !SKIP_FILES.contains(&f.as_str()))
        .map(PathBuf::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_skips_own_infrastructure() {
        let files = vec![
            "src/index.ts".to_string(),
            ".pre-commit-config.yaml".to_string(),
            "crates/hooks/src/secrets.rs".to_string(),
            "README.md".to_string(),
        ];

        let kept = candidates(&files);
        assert_eq!(kept, vec![PathBuf::from("src/index.ts"), PathBuf::from("README.md")]);
    }

    #[test]
    fn test_candidates_matches_exact_path_only() {
        // skip list is exact string equality, not basename comparison
        let files = vec!["config/.pre-commit-config.yaml".to_string()];
        assert_eq!(candidates(&files).len(), 1);
    }

    #[test]
    fn test_candidates_empty() {
        assert!(candidates(&[]).is_empty());
    }
}
