//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// plugin-updater - Check a release API for new plugin versions.
#[derive(Debug, Parser)]
#[command(name = "plugin-updater")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides the default config location)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for the release cache
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Path to the settings file holding the access token
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Access token for the release API (overrides the saved token)
    #[arg(long, global = true, env = "PLUGIN_UPDATER_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check for an available update
    Check(CheckArgs),

    /// Show package information for the latest release
    Info(InfoArgs),

    /// Show update system debug information
    Status(StatusArgs),

    /// Clear the cached release
    ClearCache,

    /// Manage the saved access token
    Token(TokenArgs),

    /// Notify that an installation finished
    PostInstall(PostInstallArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Ignore the cached release and query the API
    #[arg(long)]
    pub fresh: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InfoArgs {
    /// Plugin slug to query (defaults to the configured slug)
    #[arg(long)]
    pub slug: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `token` command.
#[derive(Debug, Clone, clap::Args)]
pub struct TokenArgs {
    #[command(subcommand)]
    pub command: TokenSubcommand,
}

/// Token subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum TokenSubcommand {
    /// Save an access token
    Set {
        /// The token value
        token: String,
    },
    /// Remove the saved access token
    Clear,
    /// Show whether a token is saved (masked)
    Show,
}

/// Arguments for the `post-install` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PostInstallArgs {
    /// Identifier of the installed plugin (`slug/entry-file`)
    pub plugin: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_check_with_flags() {
        let cli = Cli::try_parse_from(["plugin-updater", "check", "--fresh", "--json"]).unwrap();

        match cli.command {
            Commands::Check(args) => {
                assert!(args.fresh);
                assert!(args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "plugin-updater",
            "status",
            "--config",
            "/tmp/updater.yml",
            "--debug",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/updater.yml")));
        assert!(cli.debug);
    }

    #[test]
    fn parses_token_set() {
        let cli = Cli::try_parse_from(["plugin-updater", "token", "set", "ghp_abc"]).unwrap();

        match cli.command {
            Commands::Token(TokenArgs {
                command: TokenSubcommand::Set { token },
            }) => assert_eq!(token, "ghp_abc"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_clear_cache() {
        let cli = Cli::try_parse_from(["plugin-updater", "clear-cache"]).unwrap();
        assert!(matches!(cli.command, Commands::ClearCache));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["plugin-updater"]).is_err());
    }
}
