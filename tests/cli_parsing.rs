//! Tests for command-line parsing of `Config`.

use clap::Parser;
use redirect_resolver::{Command, Config, LogFormat, RedirectPolicy};
use std::path::PathBuf;

#[test]
fn test_no_subcommand_defaults_to_serve() {
    let config = Config::try_parse_from(["redirect_resolver"]).expect("should parse");
    assert!(config.command.is_none());
    assert_eq!(config.redirect_policy, RedirectPolicy::Terminal);
}

#[test]
fn test_serve_with_options() {
    let config = Config::try_parse_from([
        "redirect_resolver",
        "--bind",
        "0.0.0.0",
        "--port",
        "8080",
        "--log-format",
        "json",
        "--render-timeout-seconds",
        "45",
        "serve",
    ])
    .expect("should parse");

    assert!(matches!(config.command, Some(Command::Serve)));
    assert_eq!(config.bind, "0.0.0.0");
    assert_eq!(config.port, 8080);
    assert!(matches!(config.log_format, LogFormat::Json));
    assert_eq!(config.render_timeout_seconds, 45);
}

#[test]
fn test_resolve_multiple_urls() {
    let config = Config::try_parse_from([
        "redirect_resolver",
        "resolve",
        "http://short.example/a",
        "http://short.example/b",
    ])
    .expect("should parse");

    match config.command {
        Some(Command::Resolve { urls }) => {
            assert_eq!(urls, vec!["http://short.example/a", "http://short.example/b"]);
        }
        other => panic!("expected resolve command, got {:?}", other),
    }
}

#[test]
fn test_reprobe_policy_and_browser_options() {
    let config = Config::try_parse_from([
        "redirect_resolver",
        "--redirect-307",
        "reprobe",
        "--max-reprobe-hops",
        "4",
        "--chrome-executable",
        "/usr/bin/chromium",
        "--no-sandbox",
        "resolve",
        "http://short.example/a",
    ])
    .expect("should parse");

    assert_eq!(config.redirect_policy, RedirectPolicy::Reprobe);
    assert_eq!(config.max_reprobe_hops, 4);
    assert_eq!(
        config.chrome_executable,
        Some(PathBuf::from("/usr/bin/chromium"))
    );
    assert!(config.no_sandbox);
}

#[test]
fn test_invalid_log_level_rejected() {
    assert!(Config::try_parse_from(["redirect_resolver", "--log-level", "loud"]).is_err());
}

#[test]
fn test_resolve_without_urls_rejected() {
    assert!(Config::try_parse_from(["redirect_resolver", "resolve"]).is_err());
}
