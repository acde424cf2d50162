use crate::{Cli, Commands};

use clap::Parser;
use googletest::prelude::*;

#[test]
fn given_register_args_when_parsed_then_name_and_email_captured() {
    let cli = Cli::try_parse_from([
        "memory-trail",
        "register",
        "--name",
        "Ada Lovelace",
        "--email",
        "ada@example.com",
    ])
    .unwrap();

    assert_that!(
        cli.command,
        eq(&Commands::Register {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        })
    );
    assert!(!cli.pretty);
}

#[test]
fn given_pretty_after_subcommand_when_parsed_then_flag_is_global() {
    let cli = Cli::try_parse_from(["memory-trail", "dashboard", "--pretty"]).unwrap();

    assert_that!(cli.command, eq(&Commands::Dashboard));
    assert!(cli.pretty);
}

#[test]
fn given_login_with_positional_id_when_parsed_then_trail_id_captured() {
    let cli = Cli::try_parse_from(["memory-trail", "login", "mt-abc234"]).unwrap();

    assert_that!(
        cli.command,
        eq(&Commands::Login {
            trail_id: "mt-abc234".to_string()
        })
    );
}

#[test]
fn given_register_without_email_when_parsed_then_error() {
    let result = Cli::try_parse_from(["memory-trail", "register", "--name", "Ada"]);

    assert!(result.is_err());
}

#[test]
fn test_cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
