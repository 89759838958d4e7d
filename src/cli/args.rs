//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Animal guessing game that learns: you answer, it guesses
#[derive(Parser, Debug)]
#[command(name = "aardvark")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short = 'c', long = "config", env = "AARDVARK_CONFIG", global = true, value_hint = ValueHint::FilePath)]
    pub config_file: Option<PathBuf>,

    /// Print the knowledge tree after each learned animal
    #[arg(long, global = true)]
    pub show_tree: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play the guessing game (default)
    Play,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config path
    Path,

    /// Create config template at the global path
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        testing::init_test_setup();
        Cli::command().debug_assert();
    }

    #[test]
    fn given_no_arguments_when_parsing_then_plays_by_default() {
        let cli = Cli::try_parse_from(["aardvark"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.debug, 0);
        assert!(!cli.show_tree);
    }

    #[test]
    fn given_repeated_debug_flag_when_parsing_then_counts() {
        let cli = Cli::try_parse_from(["aardvark", "-ddd", "play", "--show-tree"]).unwrap();
        assert_eq!(cli.debug, 3);
        assert!(cli.show_tree);
        assert!(matches!(cli.command, Some(Commands::Play)));
    }

    #[test]
    fn given_config_init_when_parsing_then_reads_force() {
        let cli = Cli::try_parse_from(["aardvark", "config", "init", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommands::Init { force: true }
            })
        ));
    }
}
