use super::*;
use std::io::Write;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_in_and_out() {
    let cli = parse(&["commentize", "--inFile", "in.yaml", "--outFile", "out.yaml"]);
    assert_eq!(cli.in_file, PathBuf::from("in.yaml"));
    assert_eq!(cli.out_file, "out.yaml");
    assert!(cli.jobs.is_none());
    assert!(cli.brew.is_none());
    assert!(cli.log_file.is_none());
}

#[test]
fn cli_parse_kebab_aliases() {
    let cli = parse(&["commentize", "--in-file", "a", "--out-file", "-"]);
    assert_eq!(cli.in_file, PathBuf::from("a"));
    assert_eq!(cli.out_file, "-");
}

#[test]
fn cli_missing_out_file_is_error() {
    assert!(Cli::try_parse_from(["commentize", "--inFile", "in.yaml"]).is_err());
}

#[test]
fn cli_missing_in_file_is_error() {
    assert!(Cli::try_parse_from(["commentize", "--outFile", "out.yaml"]).is_err());
}

#[test]
fn cli_parse_tuning_flags() {
    let cli = parse(&[
        "commentize",
        "--inFile",
        "in.yaml",
        "--outFile",
        "out.yaml",
        "--jobs",
        "4",
        "--max-jitter-ms",
        "0",
        "--brew",
        "/opt/homebrew/bin/brew",
    ]);
    assert_eq!(cli.jobs, Some(4));
    assert_eq!(cli.max_jitter_ms, Some(0));
    assert_eq!(cli.brew.as_deref(), Some("/opt/homebrew/bin/brew"));
}

#[test]
fn cli_log_file_with_and_without_value() {
    let cli = parse(&[
        "commentize",
        "--inFile",
        "i",
        "--outFile",
        "o",
        "--log-file",
        "/tmp/commentize.log",
    ]);
    assert_eq!(
        cli.log_file,
        Some(Some(PathBuf::from("/tmp/commentize.log")))
    );
    let path = cli.log_file_path().unwrap().unwrap();
    assert_eq!(path, Path::new("/tmp/commentize.log"));

    let bare = parse(&["commentize", "--inFile", "i", "--outFile", "o", "--log-file"]);
    assert_eq!(bare.log_file, Some(None));
}

#[test]
fn overrides_replace_config_values() {
    let cli = parse(&[
        "commentize",
        "--inFile",
        "i",
        "--outFile",
        "o",
        "--jobs",
        "2",
        "--max-jitter-ms",
        "100",
        "--brew",
        "mybrew",
    ]);
    let mut cfg = CommentizeConfig::default();
    cli.apply_overrides(&mut cfg);
    assert_eq!(cfg.max_concurrent_lookups, 2);
    assert_eq!(cfg.brew_path, "mybrew");
    assert_eq!(cfg.fallback.map(|f| f.max_jitter_ms), Some(100));
}

#[test]
fn explicit_config_file_is_used() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(b"max_concurrent_lookups = 3\nbrew_path = \"/usr/local/bin/brew\"\n")
        .unwrap();
    f.flush().unwrap();
    let config_arg = f.path().display().to_string();
    let cli = parse(&[
        "commentize",
        "--inFile",
        "i",
        "--outFile",
        "o",
        "--config",
        &config_arg,
        "--jobs",
        "5",
    ]);
    let cfg = cli.effective_config().unwrap();
    assert_eq!(cfg.max_concurrent_lookups, 5);
    assert_eq!(cfg.brew_path, "/usr/local/bin/brew");
}
