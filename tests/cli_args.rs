//! Integration tests for CLI argument handling
//!
//! Runs the built binary with arguments that never reach the network.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_forvo-dl"))
        .args(args)
        .env_remove("FORVO_API_KEY")
        .output()
        .expect("Failed to execute forvo-dl")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("forvo-dl"), "Help should mention forvo-dl");
    assert!(stdout.contains("--param"), "Help should mention --param flag");
    assert!(stdout.contains("FORVO_API_KEY"), "Help should mention the key variable");
}

#[test]
fn test_missing_key_prints_error_and_exits() {
    let output = run_cli(&["hello"]);
    assert!(!output.status.success(), "Expected missing key to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--key"), "Should mention --key: {}", stderr);
}

#[test]
fn test_invalid_param_prints_error_and_exits() {
    let output = run_cli(&["--key", "KEY", "--param", "noequals", "hello"]);
    assert!(!output.status.success(), "Expected invalid param to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid parameter"),
        "Should print error message about invalid param: {}",
        stderr
    );
}

#[test]
fn test_cached_word_is_printed_without_network() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let cached = temp_dir.path().join("hello.mp3");
    std::fs::write(&cached, b"audio").unwrap();

    let output = run_cli(&[
        "--key",
        "KEY",
        "--dir",
        temp_dir.path().to_str().unwrap(),
        "hello",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), cached.display().to_string());
}

#[test]
fn test_unsafe_word_fails_with_nonzero_exit() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp directory");

    let output = run_cli(&[
        "--key",
        "KEY",
        "--dir",
        temp_dir.path().to_str().unwrap(),
        "..",
    ]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use forvo_dl::cli::{parse_param_arg, Cli, DownloadConfig};
    use forvo_dl::CacheLayout;

    #[test]
    fn test_cli_language_short_flag() {
        let cli = Cli::parse_from(["forvo-dl", "--key", "K", "-l", "de", "hallo"]);
        assert_eq!(cli.language, "de");
    }

    #[test]
    fn test_cli_repeated_params_keep_order() {
        let cli = Cli::parse_from([
            "forvo-dl", "--key", "K", "--param", "b=2", "--param", "a=1", "word",
        ]);
        assert_eq!(cli.extra_params(), vec![("b", "2"), ("a", "1")]);
    }

    #[test]
    fn test_parse_param_arg_invalid_returns_error() {
        assert!(parse_param_arg("invalid").is_err());
    }

    #[test]
    fn test_download_config_from_cli_with_dir() {
        let cli = Cli::parse_from(["forvo-dl", "--key", "K", "--dir", "/tmp/a", "--per-language", "w"]);
        let config = DownloadConfig::from_cli(&cli).unwrap();
        assert_eq!(config.layout, CacheLayout::PerLanguage);
        assert_eq!(config.download_dir, std::path::PathBuf::from("/tmp/a"));
    }
}
