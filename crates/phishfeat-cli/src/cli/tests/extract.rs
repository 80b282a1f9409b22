//! Tests for the extract subcommand.

use super::parse;
use crate::cli::{with_overrides, Cli, CliCommand};
use clap::Parser;
use phishfeat_core::config::PhishfeatConfig;
use std::path::Path;

#[test]
fn cli_parse_extract_defaults() {
    match parse(&["phishfeat", "extract"]) {
        CliCommand::Extract {
            input,
            output,
            workers,
            timeout_secs,
        } => {
            assert!(input.is_none());
            assert!(output.is_none());
            assert!(workers.is_none());
            assert!(timeout_secs.is_none());
        }
        _ => panic!("expected Extract"),
    }
}

#[test]
fn cli_parse_extract_paths_and_flags() {
    match parse(&[
        "phishfeat",
        "extract",
        "in.csv",
        "out/features.csv",
        "--workers",
        "4",
        "--timeout-secs",
        "12",
    ]) {
        CliCommand::Extract {
            input,
            output,
            workers,
            timeout_secs,
        } => {
            assert_eq!(input.as_deref(), Some(Path::new("in.csv")));
            assert_eq!(output.as_deref(), Some(Path::new("out/features.csv")));
            assert_eq!(workers, Some(4));
            assert_eq!(timeout_secs, Some(12));
        }
        _ => panic!("expected Extract with flags"),
    }
}

#[test]
fn cli_parse_extract_rejects_bad_workers() {
    assert!(Cli::try_parse_from(["phishfeat", "extract", "--workers", "many"]).is_err());
}

#[test]
fn overrides_apply_on_top_of_config() {
    let cfg = PhishfeatConfig::default();
    let merged = with_overrides(&cfg, Some(3), None);
    assert_eq!(merged.workers, 3);
    assert_eq!(merged.timeout_secs, cfg.timeout_secs);
    let merged = with_overrides(&cfg, None, Some(30));
    assert_eq!(merged.workers, cfg.workers);
    assert_eq!(merged.timeout_secs, 30);
}
