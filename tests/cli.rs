use clap::Parser;
use crawlctl::cli::{Cli, Command, ConfigCommand};

#[test]
fn parses_list_with_html_output() {
    let cli = Cli::try_parse_from(["crawlctl", "--html", "list"]).expect("cli parse should work");
    assert!(cli.html);
    assert!(!cli.json);
    assert!(matches!(cli.command, Command::List));
}

#[test]
fn rejects_json_and_html_together() {
    let result = Cli::try_parse_from(["crawlctl", "--json", "--html", "list"]);
    assert!(result.is_err());
}

#[test]
fn parses_create() {
    let cli = Cli::try_parse_from([
        "crawlctl",
        "create",
        "--name",
        "acme",
        "--base-url",
        "https://a.com",
        "--language",
        "en",
        "--crawling-strategy",
        "bfs",
    ])
    .expect("cli parse should work");
    match cli.command {
        Command::Create(create) => {
            assert_eq!(create.name, "acme");
            assert_eq!(create.fields.base_url, "https://a.com");
            assert_eq!(create.fields.language, "en");
            assert_eq!(create.fields.crawling_strategy, "bfs");
        }
        _ => panic!("expected create command"),
    }
}

#[test]
fn create_requires_every_field() {
    let result = Cli::try_parse_from(["crawlctl", "create", "--name", "acme"]);
    assert!(result.is_err());
}

#[test]
fn parses_toggle_current_state() {
    let cli = Cli::try_parse_from(["crawlctl", "toggle", "acme", "--current", "true"])
        .expect("cli parse should work");
    match cli.command {
        Command::Toggle(toggle) => {
            assert_eq!(toggle.name, "acme");
            assert!(toggle.current);
        }
        _ => panic!("expected toggle command"),
    }
}

#[test]
fn parses_row_actions() {
    for (verb, expected) in [("crawl", "crawl"), ("analyze", "analyze"), ("delete", "delete")] {
        let cli = Cli::try_parse_from(["crawlctl", verb, "acme"]).expect("cli parse should work");
        let (parsed, name) = match cli.command {
            Command::Crawl(args) => ("crawl", args.name),
            Command::Analyze(args) => ("analyze", args.name),
            Command::Delete(args) => ("delete", args.name),
            other => panic!("unexpected command {other:?}"),
        };
        assert_eq!(parsed, expected);
        assert_eq!(name, "acme");
    }
}

#[test]
fn parses_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "crawlctl",
        "list",
        "--api-url",
        "http://10.0.0.5:8000",
        "--show-active",
        "-vv",
    ])
    .expect("cli parse should work");
    assert_eq!(cli.api_url.as_deref(), Some("http://10.0.0.5:8000"));
    assert!(cli.show_active);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn parses_config_set_url() {
    let cli = Cli::try_parse_from(["crawlctl", "config", "set-url", "http://crawler:8000"])
        .expect("cli parse should work");
    match cli.command {
        Command::Config(config) => match config.command {
            ConfigCommand::SetUrl(args) => assert_eq!(args.url, "http://crawler:8000"),
            ConfigCommand::Show => panic!("expected set-url"),
        },
        _ => panic!("expected config command"),
    }
}
