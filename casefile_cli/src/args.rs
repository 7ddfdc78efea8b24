use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "casefile")]
#[command(about = "Browse and extend the Case File from a terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the store (overrides settings.json and CASEFILE_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a panel (summary when omitted)
    Show { panel: Option<String> },

    Timeline {
        #[command(subcommand)]
        command: TimelineCommand,
    },

    Quotes {
        #[command(subcommand)]
        command: QuotesCommand,
    },

    Tip {
        #[command(subcommand)]
        command: TipCommand,
    },

    /// Print the effective settings
    Settings {
        /// Write them (including --data-dir) to settings.json
        #[arg(long)]
        save: bool,
    },

    /// Interactive session (the default)
    Shell,
}

#[derive(Subcommand, Debug)]
pub enum TimelineCommand {
    /// Add an event; prompts when TEXT is omitted
    Add { text: Option<String> },
    List,
    /// Write timeline.json
    Export {
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum QuotesCommand {
    /// Add a quote; prompts when TEXT is omitted
    Add { text: Option<String> },
    List,
}

#[derive(Subcommand, Debug)]
pub enum TipCommand {
    Submit {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        contact: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    List,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tip_submit() {
        let cli = Cli::try_parse_from([
            "casefile", "--data-dir", "/tmp/cf", "tip", "submit", "--message", "Hello",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/cf")));
        match cli.command {
            Some(Command::Tip {
                command: TipCommand::Submit { name, message, .. },
            }) => {
                assert_eq!(name, "");
                assert_eq!(message, "Hello");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_settings_save() {
        let cli = Cli::try_parse_from(["casefile", "settings", "--save", "--data-dir", "/srv/cf"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Settings { save: true })));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/srv/cf")));
    }

    #[test]
    fn test_no_subcommand_means_shell() {
        let cli = Cli::try_parse_from(["casefile"]).unwrap();
        assert!(cli.command.is_none());
    }
}
