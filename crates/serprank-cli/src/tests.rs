use super::*;
use crate::analyze::OutputFormat;

#[test]
fn parses_analyze_with_defaults() {
    let cli = Cli::try_parse_from([
        "serprank",
        "analyze",
        "--keyword",
        "running shoes",
        "--site",
        "example.com",
    ])
    .expect("expected valid cli args");

    let Commands::Analyze(args) = cli.command;
    assert_eq!(args.keyword, "running shoes");
    assert_eq!(args.site, "example.com");
    assert_eq!(args.depth, 10);
    assert_eq!(args.country, "in");
    assert_eq!(args.language, "en");
    assert_eq!(args.format, OutputFormat::Text);
    assert!(!args.all_results);
}

#[test]
fn parses_analyze_with_all_options() {
    let cli = Cli::try_parse_from([
        "serprank",
        "analyze",
        "--keyword",
        "best crm",
        "--site",
        "https://www.example.com/crm",
        "--depth",
        "50",
        "--country",
        "us",
        "--language",
        "fr",
        "--format",
        "json",
        "--all-results",
    ])
    .expect("expected valid cli args");

    let Commands::Analyze(args) = cli.command;
    assert_eq!(args.site, "https://www.example.com/crm");
    assert_eq!(args.depth, 50);
    assert_eq!(args.country, "us");
    assert_eq!(args.language, "fr");
    assert_eq!(args.format, OutputFormat::Json);
    assert!(args.all_results);
}

#[test]
fn rejects_unsupported_depth() {
    for depth in ["15", "0", "200", "ten"] {
        let result = Cli::try_parse_from([
            "serprank",
            "analyze",
            "--keyword",
            "k",
            "--site",
            "s",
            "--depth",
            depth,
        ]);
        assert!(result.is_err(), "depth {depth} should be rejected");
    }
}

#[test]
fn analyze_requires_keyword_and_site() {
    assert!(Cli::try_parse_from(["serprank", "analyze", "--site", "example.com"]).is_err());
    assert!(Cli::try_parse_from(["serprank", "analyze", "--keyword", "shoes"]).is_err());
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["serprank"]).is_err());
}
