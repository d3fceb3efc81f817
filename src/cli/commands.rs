use crate::cli::args::{Args, Command, ConfigArgs, ConfigCommand};
use crate::cli::output::{ConsoleWriter, OutputWriter};
use crate::core::branding::{logo, resolve_package_name};
use crate::core::formatter::{render_records, MissingOption};
use crate::core::page::HelpPage;
use crate::core::paint::painter;
use crate::core::registry::{command_records, COMMANDS};
use crate::domain::config::HelpConfig;
use crate::domain::error::HelpResult;
use crate::infrastructure::config::ConfigManager;
use crate::infrastructure::logging::{init_logging, LogHandle};
use std::path::{Path, PathBuf};

/// Execute CLI command
pub fn execute_command(args: Args) -> HelpResult<()> {
    let writer = ConsoleWriter::new(args.output);

    let log = if args.quiet {
        None
    } else {
        Some(init_logging(args.verbose, color_requested(args.no_color))?)
    };

    let config_manager = ConfigManager::new();
    let settings = Settings {
        explicit_path: args.config.as_deref().map(Path::new),
        config_manager: &config_manager,
        log: log.as_ref(),
    };
    let color = |config: &HelpConfig| color_requested(args.no_color) && config.global.color;

    match args.command.unwrap_or(Command::Help) {
        Command::Help => {
            let config = settings.load()?;
            let page = render_page(&config, args.package_name.as_deref(), color(&config));
            writer.write_page(&page)?;
            Ok(())
        }
        Command::Commands => {
            let config = settings.load()?;
            let listing = render_records(
                command_records(),
                &config.layout.commands,
                MissingOption::Literal,
            );
            writer.write_commands(COMMANDS, &listing)?;
            Ok(())
        }
        Command::Config(config_args) => execute_config_command(config_args, &writer, &settings),
    }
}

/// Where the effective configuration comes from
struct Settings<'a> {
    explicit_path: Option<&'a Path>,
    config_manager: &'a ConfigManager,
    log: Option<&'a LogHandle>,
}

impl Settings<'_> {
    /// Load the effective configuration and apply its log level
    fn load(&self) -> HelpResult<HelpConfig> {
        let config = match self.explicit_path {
            Some(path) => self.config_manager.load_config_from_path(path)?,
            None => self.config_manager.load_config()?,
        };

        if let Some(log) = self.log {
            log.apply_level(&config.global.log_level)?;
        }

        Ok(config)
    }
}

/// Render the help page for the effective configuration
pub fn render_page(config: &HelpConfig, package_name: Option<&str>, color: bool) -> String {
    let package_name = resolve_package_name(package_name, &config.global);
    let paint = painter(color);
    HelpPage::new(package_name, logo(), &config.layout, paint.as_ref()).render()
}

/// Colour wanted by the command line and environment, before any config file
fn color_requested(no_color: bool) -> bool {
    !no_color && std::env::var_os("NO_COLOR").is_none()
}

fn execute_config_command(
    args: ConfigArgs,
    writer: &ConsoleWriter,
    settings: &Settings<'_>,
) -> HelpResult<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = settings.load()?;
            writer.write_config(&config)?;
            Ok(())
        }
        ConfigCommand::Validate { file } => {
            let file = file.as_deref().map(Path::new).or(settings.explicit_path);
            let result = match file {
                Some(config_path) => settings.config_manager.load_config_from_path(config_path),
                None => settings.config_manager.load_config(),
            };
            match (result, file) {
                (Ok(_), Some(config_path)) => writer.write_message(&format!(
                    "Configuration file '{}' is valid",
                    config_path.display()
                ))?,
                (Ok(_), None) => writer.write_message("Current configuration is valid")?,
                (Err(e), _) => {
                    writer.write_error(&format!("Configuration validation failed: {}", e))?;
                    return Err(e);
                }
            }
            Ok(())
        }
        ConfigCommand::Init { dir, global } => {
            let config_manager = settings.config_manager;
            let path = if global {
                config_manager.init_global_config()?
            } else {
                let dir: PathBuf = match dir {
                    Some(dir) => dir.into(),
                    None => std::env::current_dir()?,
                };
                config_manager.init_project_config(&dir)?
            };
            writer.write_message(&format!("Configuration initialized at '{}'", path.display()))?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::OutputFormat;

    #[test]
    fn test_render_page_plain() {
        let config = HelpConfig::default();
        let page = render_page(&config, Some("now"), false);
        assert!(page.contains(" now [options] <command | path>"));
        assert!(!page.contains('\u{1b}'));
    }

    #[test]
    fn test_render_page_uses_config_package_name() {
        let mut config = HelpConfig::default();
        config.global.package_name = Some("vc".to_string());
        let page = render_page(&config, None, false);
        assert!(page.contains("    $ vc help list\n"));
    }

    #[test]
    fn test_validate_reads_broken_project_file_directly() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let project = temp_dir.path().join("config.toml");
        std::fs::write(&project, "[global\ncolor = ").unwrap();

        let config_manager = ConfigManager::with_paths(None, Some(project));
        let settings = Settings {
            explicit_path: None,
            config_manager: &config_manager,
            log: None,
        };
        let args = ConfigArgs {
            command: ConfigCommand::Validate { file: None },
        };

        let err = execute_config_command(args, &ConsoleWriter::new(OutputFormat::Text), &settings)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_init_ignores_broken_project_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let project = temp_dir.path().join("config.toml");
        std::fs::write(&project, "[global\ncolor = ").unwrap();

        let config_manager = ConfigManager::with_paths(None, Some(project));
        let settings = Settings {
            explicit_path: None,
            config_manager: &config_manager,
            log: None,
        };
        let target = temp_dir.path().join("fresh");
        let args = ConfigArgs {
            command: ConfigCommand::Init {
                dir: Some(target.to_string_lossy().into_owned()),
                global: false,
            },
        };

        execute_config_command(args, &ConsoleWriter::new(OutputFormat::Text), &settings).unwrap();
        assert!(target.join(".deploy-help").join("config.toml").exists());
    }

    #[test]
    fn test_render_page_styled() {
        let config = HelpConfig::default();
        assert!(render_page(&config, None, true).contains('\u{1b}'));
    }
}
