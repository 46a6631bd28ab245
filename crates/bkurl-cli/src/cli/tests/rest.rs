//! Tests for resolve, show, check, export and the global --config flag.

use super::parse;
use crate::cli::{Cli, CliCommand};
use bkurl_core::export::Format;
use bkurl_core::Environment;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_parse_resolve_host() {
    match parse(&["bkurl", "resolve", "--host", "localhost"]) {
        CliCommand::Resolve { host } => {
            assert_eq!(host.host.as_deref(), Some("localhost"));
            assert!(host.page_url.is_none());
            assert!(host.env.is_none());
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_env() {
    match parse(&["bkurl", "resolve", "--env", "production"]) {
        CliCommand::Resolve { host } => {
            assert_eq!(host.env, Some(Environment::Production));
            assert!(host.host.is_none());
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_rejects_unknown_env() {
    assert!(Cli::try_parse_from(["bkurl", "resolve", "--env", "staging"]).is_err());
}

#[test]
fn cli_parse_resolve_host_sources_conflict() {
    assert!(Cli::try_parse_from([
        "bkurl",
        "resolve",
        "--host",
        "localhost",
        "--page-url",
        "http://localhost/"
    ])
    .is_err());
    assert!(Cli::try_parse_from([
        "bkurl",
        "resolve",
        "--page-url",
        "http://localhost/",
        "--authority",
        "localhost:3000"
    ])
    .is_err());
}

#[test]
fn cli_parse_show_and_check() {
    assert!(matches!(parse(&["bkurl", "show"]), CliCommand::Show));
    assert!(matches!(parse(&["bkurl", "check"]), CliCommand::Check));
}

#[test]
fn cli_parse_export_default_format() {
    match parse(&["bkurl", "export", "--authority", "localhost:3000"]) {
        CliCommand::Export { format, host } => {
            assert_eq!(format, Format::Js);
            assert_eq!(host.authority.as_deref(), Some("localhost:3000"));
        }
        _ => panic!("expected Export"),
    }
}

#[test]
fn cli_parse_export_json() {
    match parse(&["bkurl", "export", "--format", "json", "--host", "example.com"]) {
        CliCommand::Export { format, .. } => assert_eq!(format, Format::Json),
        _ => panic!("expected Export"),
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["bkurl", "show", "--config", "/tmp/bkurl.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/bkurl.toml")));
    let cli = Cli::try_parse_from(["bkurl", "check"]).unwrap();
    assert!(cli.config.is_none());
}
