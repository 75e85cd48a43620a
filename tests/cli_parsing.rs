use std::path::PathBuf;

use clap::Parser;
use pmaconf::cli::{Cli, Commands};
use pmaconf::RenderFormat;

#[test]
fn test_parse_show_with_global_flags() {
    let cli = Cli::try_parse_from(["pmaconf", "show", "--json", "--config", "/etc/pmaconf.yaml"])
        .unwrap();

    assert!(cli.json);
    assert_eq!(cli.config, Some(PathBuf::from("/etc/pmaconf.yaml")));
    assert!(matches!(cli.command, Commands::Show));
}

#[test]
fn test_parse_render_defaults_to_php() {
    let cli = Cli::try_parse_from(["pmaconf", "render"]).unwrap();

    match cli.command {
        Commands::Render(args) => {
            assert_eq!(args.format, RenderFormat::Php);
            assert!(args.output.is_none());
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_render_env_to_file() {
    let cli = Cli::try_parse_from([
        "pmaconf",
        "render",
        "--format",
        "env",
        "--output",
        "phpmyadmin.env",
    ])
    .unwrap();

    match cli.command {
        Commands::Render(args) => {
            assert_eq!(args.format, RenderFormat::Env);
            assert_eq!(args.output, Some(PathBuf::from("phpmyadmin.env")));
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_init() {
    let cli = Cli::try_parse_from(["pmaconf", "init", "--force", "docker/phpmyadmin"]).unwrap();

    match cli.command {
        Commands::Init(args) => {
            assert!(args.force);
            assert_eq!(args.path, PathBuf::from("docker/phpmyadmin"));
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_unknown_format_is_rejected() {
    assert!(Cli::try_parse_from(["pmaconf", "render", "--format", "toml"]).is_err());
}

#[test]
fn test_subcommand_is_required() {
    assert!(Cli::try_parse_from(["pmaconf"]).is_err());
}
