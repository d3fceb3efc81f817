use crate::cli::args::OutputFormat;
use crate::core::registry::Command;
use crate::domain::config::HelpConfig;
use std::io::{self, Write};
use tabled::{Table, Tabled};

/// Output writer trait for different formats
pub trait OutputWriter {
    fn write_page(&self, page: &str) -> Result<(), OutputError>;
    fn write_commands(&self, commands: &[Command], listing: &str) -> Result<(), OutputError>;
    fn write_config(&self, config: &HelpConfig) -> Result<(), OutputError>;
    fn write_message(&self, message: &str) -> Result<(), OutputError>;
    fn write_error(&self, error: &str) -> Result<(), OutputError>;
}

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl From<OutputError> for crate::domain::error::HelpError {
    fn from(err: OutputError) -> Self {
        Self::Output(err.to_string())
    }
}

/// Console output writer
pub struct ConsoleWriter {
    format: OutputFormat,
}

impl ConsoleWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Command listing in the configured format
    pub fn format_commands(&self, commands: &[Command], listing: &str) -> Result<String, OutputError> {
        let content = match self.format {
            OutputFormat::Text => listing.to_string(),
            OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(commands)?),
            OutputFormat::Table => {
                let rows: Vec<CommandTableRow> = commands.iter().map(CommandTableRow::from).collect();
                format!("{}\n", Table::new(rows))
            }
        };
        Ok(content)
    }

    /// Configuration in the configured format
    pub fn format_config(&self, config: &HelpConfig) -> Result<String, OutputError> {
        let content = match self.format {
            OutputFormat::Text => {
                let commands = &config.layout.commands;
                let options = &config.layout.options;
                let mut text = String::from("Help Configuration:\n");
                text.push_str(&format!("  Log level: {}\n", config.global.log_level));
                text.push_str(&format!("  Color: {}\n", config.global.color));
                text.push_str(&format!(
                    "  Package name: {}\n",
                    config.global.package_name.as_deref().unwrap_or("(default)")
                ));
                text.push_str("  Command columns:\n");
                text.push_str(&format!("    Indent: {}\n", commands.indent));
                text.push_str(&format!("    Option: {}\n", commands.option_column));
                text.push_str(&format!("    Description: {}\n", commands.description_column));
                text.push_str("  Option columns:\n");
                text.push_str(&format!("    Indent: {}\n", options.indent));
                text.push_str(&format!("    Description: {}\n", options.description_column));
                text
            }
            OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(config)?),
            OutputFormat::Table => format!("{}\n", Table::new(SettingTableRow::rows(config))),
        };
        Ok(content)
    }

    fn write_stdout(&self, content: &str) -> Result<(), OutputError> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

impl OutputWriter for ConsoleWriter {
    fn write_page(&self, page: &str) -> Result<(), OutputError> {
        self.write_stdout(page)
    }

    fn write_commands(&self, commands: &[Command], listing: &str) -> Result<(), OutputError> {
        let content = self.format_commands(commands, listing)?;
        self.write_stdout(&content)
    }

    fn write_config(&self, config: &HelpConfig) -> Result<(), OutputError> {
        let content = self.format_config(config)?;
        self.write_stdout(&content)
    }

    fn write_message(&self, message: &str) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "message": message,
                    "level": "info"
                });
                self.write_stdout(&format!("{}\n", serde_json::to_string_pretty(&output)?))
            }
            _ => self.write_stdout(&format!("{}\n", message)),
        }
    }

    fn write_error(&self, error: &str) -> Result<(), OutputError> {
        let content = match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "error": error,
                    "level": "error"
                });
                serde_json::to_string_pretty(&output)?
            }
            _ => format!("Error: {}", error),
        };
        writeln!(io::stderr().lock(), "{}", content)?;
        Ok(())
    }
}

/// Table row for a registered command
#[derive(Tabled)]
struct CommandTableRow {
    name: String,
    aliases: String,
    option: String,
    description: String,
}

impl From<&Command> for CommandTableRow {
    fn from(command: &Command) -> Self {
        Self {
            name: command.name.to_string(),
            aliases: command.aliases.join(", "),
            option: command.option.unwrap_or("-").to_string(),
            description: command.description.to_string(),
        }
    }
}

/// Table row for a single configuration value
#[derive(Tabled)]
struct SettingTableRow {
    key: &'static str,
    value: String,
}

impl SettingTableRow {
    fn rows(config: &HelpConfig) -> Vec<Self> {
        let commands = &config.layout.commands;
        let options = &config.layout.options;
        vec![
            Self::new("global.log_level", &config.global.log_level),
            Self::new("global.color", config.global.color),
            Self::new(
                "global.package_name",
                config.global.package_name.as_deref().unwrap_or("-"),
            ),
            Self::new("layout.commands.indent", commands.indent),
            Self::new("layout.commands.option_column", commands.option_column),
            Self::new("layout.commands.description_column", commands.description_column),
            Self::new("layout.options.indent", options.indent),
            Self::new("layout.options.description_column", options.description_column),
        ]
    }

    fn new(key: &'static str, value: impl ToString) -> Self {
        Self {
            key,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::COMMANDS;

    #[test]
    fn test_text_commands_pass_listing_through() {
        let writer = ConsoleWriter::new(OutputFormat::Text);
        let listing = "      alias\n";
        assert_eq!(writer.format_commands(COMMANDS, listing).unwrap(), listing);
    }

    #[test]
    fn test_json_commands() {
        let writer = ConsoleWriter::new(OutputFormat::Json);
        let content = writer.format_commands(COMMANDS, "").unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), COMMANDS.len());
        assert_eq!(entries[3]["name"], "certs");
        assert_eq!(entries[3]["aliases"][0], "cert");
    }

    #[test]
    fn test_table_commands() {
        let writer = ConsoleWriter::new(OutputFormat::Table);
        let content = writer.format_commands(COMMANDS, "").unwrap();
        assert!(content.contains("aliases"));
        assert!(content.contains("aliases, ln"));
        assert!(content.contains("whoami"));
    }

    #[test]
    fn test_config_formats() {
        let config = HelpConfig::default();

        let text = ConsoleWriter::new(OutputFormat::Text).format_config(&config).unwrap();
        assert!(text.contains("Log level: warn"));
        assert!(text.contains("Description: 40"));

        let json = ConsoleWriter::new(OutputFormat::Json).format_config(&config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["layout"]["commands"]["option_column"], 28);

        let table = ConsoleWriter::new(OutputFormat::Table).format_config(&config).unwrap();
        assert!(table.contains("layout.options.description_column"));
        assert!(table.contains("36"));
    }
}
