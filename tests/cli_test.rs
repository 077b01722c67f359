use clap::Parser;
use pystamp::cli::Args;
use pystamp::layout::Layout;
use pystamp::metadata::MetaFormat;
use std::ffi::OsString;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("pystamp")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["widgets"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.title, "widgets");
    assert!(!parsed.force);
    assert!(!parsed.verbose);
    assert!(!parsed.no_git);
    assert_eq!(parsed.meta, MetaFormat::Pyproject);
    assert_eq!(parsed.layout, Layout::SrcUtil);
}

#[test]
fn test_value_options() {
    let args = make_args(&[
        "widgets",
        "--abbrev",
        "wdg",
        "--name",
        "Jane Doe",
        "--github",
        "jane",
        "--requires",
        "pandas numpy",
        "--python-version",
        "3.11",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.abbrev.as_deref(), Some("wdg"));
    assert_eq!(parsed.name.as_deref(), Some("Jane Doe"));
    assert_eq!(parsed.github.as_deref(), Some("jane"));
    assert_eq!(parsed.requires.as_deref(), Some("pandas numpy"));
    assert_eq!(parsed.python_version.as_deref(), Some("3.11"));
}

#[test]
fn test_choice_options() {
    let args = make_args(&["widgets", "--meta", "setup", "--layout", "single"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.meta, MetaFormat::Setup);
    assert_eq!(parsed.layout, Layout::Single);
}

#[test]
fn test_invalid_choice_is_rejected() {
    let args = make_args(&["widgets", "--meta", "cargo"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_switches() {
    let args = make_args(&["widgets", "--no-git", "--no-license", "--no-readme", "-f", "-v"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.no_git);
    assert!(parsed.no_license);
    assert!(parsed.no_readme);
    assert!(parsed.force);
    assert!(parsed.verbose);
}

#[test]
fn test_missing_title() {
    let args = make_args(&[]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["widgets", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
