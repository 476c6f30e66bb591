//! Argument parsing for the command line front end.

use clap::Parser;
use everytip::cli::{Cli, Command};
use everytip::domain::SortOption;

#[test]
fn feed_defaults_to_latest() {
    let cli = Cli::try_parse_from(["everytip", "feed"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Feed {
            sort: SortOption::Latest,
            open: None
        }
    ));
    assert!(cli.config.is_none());
    assert!(cli.api_url.is_none());
}

#[test]
fn sort_is_parsed_case_insensitively() {
    let cli = Cli::try_parse_from(["everytip", "search", "coffee", "--sort", "LIKES"]).unwrap();
    match cli.command {
        Command::Search { keyword, sort } => {
            assert_eq!(keyword, "coffee");
            assert_eq!(sort, SortOption::Likes);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn unknown_sort_is_rejected() {
    let err = Cli::try_parse_from(["everytip", "feed", "--sort", "random"]).unwrap_err();
    assert!(err.to_string().contains("unknown sort 'random'"));
}

#[test]
fn global_options_follow_subcommand() {
    let cli = Cli::try_parse_from([
        "everytip",
        "profile",
        "42",
        "--subscribe",
        "--api-url",
        "http://localhost:8080",
        "-c",
        "/tmp/everytip.toml",
    ])
    .unwrap();
    assert_eq!(cli.api_url.as_deref(), Some("http://localhost:8080"));
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/everytip.toml"))
    );
    assert!(matches!(
        cli.command,
        Command::Profile {
            user_id: 42,
            subscribe: true,
            report: false
        }
    ));
}

#[test]
fn subscribe_and_report_conflict() {
    assert!(Cli::try_parse_from(["everytip", "profile", "1", "--subscribe", "--report"]).is_err());
}

#[test]
fn recent_clear_and_remove_conflict() {
    assert!(Cli::try_parse_from(["everytip", "recent", "--clear", "--remove", "x"]).is_err());
    assert!(Cli::try_parse_from(["everytip", "recent", "--clear"]).is_ok());
}

#[test]
fn login_requires_email() {
    assert!(Cli::try_parse_from(["everytip", "login"]).is_err());
    let cli = Cli::try_parse_from(["everytip", "login", "--email", "a@b.c"]).unwrap();
    assert!(matches!(cli.command, Command::Login { ref email } if email == "a@b.c"));
}

#[test]
fn block_takes_numeric_id() {
    assert!(Cli::try_parse_from(["everytip", "block", "abc"]).is_err());
    let cli = Cli::try_parse_from(["everytip", "block", "7"]).unwrap();
    assert!(matches!(cli.command, Command::Block { user_id: 7 }));
}
