use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

/// Command line arguments for deploy-help
#[derive(Parser, Debug)]
#[command(
    name = "deploy-help",
    version = env!("CARGO_PKG_VERSION"),
    about = "Help text renderer for the deployment CLI",
    long_about = "Renders the deployment CLI's help page and command listing with fixed column alignment.",
    disable_help_subcommand = true
)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Disable ANSI styling
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Program name shown in the usage line and examples
    #[arg(long, global = true)]
    pub package_name: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "text")]
    pub output: OutputFormat,

    /// Command to execute (defaults to the help page)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the full help page
    Help,
    /// Print the column-aligned command listing
    Commands,
    /// Configuration management commands
    Config(ConfigArgs),
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
    /// Table output
    Table,
}

/// Configuration management arguments
#[derive(ClapArgs, Debug)]
pub struct ConfigArgs {
    /// Configuration subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show effective configuration
    Show,
    /// Validate configuration
    Validate {
        /// Configuration file path
        file: Option<String>,
    },
    /// Create default configuration
    Init {
        /// Project directory to create `.deploy-help/config.toml` in
        #[arg(short = 'd', long)]
        dir: Option<String>,
        /// Global configuration
        #[arg(short, long)]
        global: bool,
    },
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_page() {
        let args = Args::try_parse_from(["deploy-help"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.output, OutputFormat::Text);
        assert!(!args.no_color);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "deploy-help",
            "commands",
            "--output",
            "json",
            "--no-color",
            "--package-name",
            "now",
        ])
        .unwrap();
        assert!(matches!(args.command, Some(Command::Commands)));
        assert_eq!(args.output, OutputFormat::Json);
        assert!(args.no_color);
        assert_eq!(args.package_name.as_deref(), Some("now"));
    }

    #[test]
    fn test_help_subcommand_is_ours() {
        let args = Args::try_parse_from(["deploy-help", "help"]).unwrap();
        assert!(matches!(args.command, Some(Command::Help)));
    }

    #[test]
    fn test_config_init_flags() {
        let args = Args::try_parse_from(["deploy-help", "config", "init", "--global"]).unwrap();
        match args.command {
            Some(Command::Config(ConfigArgs {
                command: ConfigCommand::Init { dir, global },
            })) => {
                assert!(global);
                assert!(dir.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
