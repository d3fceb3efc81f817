//! Static command registry
//!
//! The command list, the sections shown on the help page, the global
//! options table and the usage examples. Nothing here is discovered at
//! runtime.

use serde::Serialize;

use crate::core::formatter::Record;
use crate::core::paint::Fragment::{self, Plain, Styled};
use crate::core::paint::Tone;

/// A top-level command of the deployment tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Command {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub subcommands: &'static [Command],
    pub option: Option<&'static str>,
    pub description: &'static str,
}

impl Command {
    const fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            aliases: &[],
            subcommands: &[],
            option: None,
            description,
        }
    }

    const fn aliased(
        name: &'static str,
        aliases: &'static [&'static str],
        description: &'static str,
    ) -> Self {
        Self {
            name,
            aliases,
            subcommands: &[],
            option: None,
            description,
        }
    }

    pub fn record(&self) -> Record<'static> {
        Record::new(self.name, self.option, self.description)
    }

    /// Whether `name` is this command or one of its aliases
    pub fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|alias| *alias == name)
    }
}

pub const COMMANDS: &[Command] = &[
    Command::aliased("alias", &["aliases", "ln"], ""),
    Command::new("bisect", ""),
    Command::new("build", ""),
    Command::aliased("certs", &["cert"], ""),
    Command::new("deploy", "Performs a deployment"),
    Command::aliased("dev", &["develop"], "Starts a local development server"),
    Command::new("dns", ""),
    Command::aliased("domains", &["domain"], ""),
    Command::new("env", "Manage the Environment Variables for your current Project"),
    Command::new("git", "Manage the Git provider repository for your current Project"),
    Command::new("help", "Display help output for [cmd]"),
    Command::new("init", "Initialize an example project"),
    Command::new("inspect", ""),
    Command::new("link", ""),
    Command::aliased("list", &["ls"], ""),
    Command::new("login", ""),
    Command::new("logout", ""),
    Command::aliased("logs", &["log"], ""),
    Command::aliased("project", &["projects"], ""),
    Command::new("pull", ""),
    Command::aliased("remove", &["rm"], ""),
    Command::aliased("secrets", &["secret"], ""),
    Command::new("switch", ""),
    Command::aliased("teams", &["team"], ""),
    Command::new("whoami", ""),
];

/// Records for every registered command, in registry order
pub fn command_records() -> impl Iterator<Item = Record<'static>> {
    COMMANDS.iter().map(Command::record)
}

/// Look a command up by name or alias
pub fn find_command(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|command| command.answers_to(name))
}

/// A row of the Basic/Advanced sections of the help page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpEntry {
    pub label: &'static str,
    pub option: Option<&'static str>,
    pub description: &'static str,
    /// Marks the command run when none is given
    pub default: bool,
}

impl HelpEntry {
    const fn new(label: &'static str, option: Option<&'static str>, description: &'static str) -> Self {
        Self {
            label,
            option,
            description,
            default: false,
        }
    }

    pub fn record(&self) -> Record<'static> {
        Record::new(self.label, self.option, self.description)
    }
}

pub const BASIC_COMMANDS: &[HelpEntry] = &[
    HelpEntry {
        default: true,
        ..HelpEntry::new("deploy", Some("path"), "Performs a deployment")
    },
    HelpEntry::new("dev", None, "Start a local development server"),
    HelpEntry::new("env", None, "Manages the Environment Variables for your current Project"),
    HelpEntry::new("git", None, "Manage Git provider repository for your current Project"),
    HelpEntry::new("help", Some("cmd"), "Displays complete help for [cmd]"),
    HelpEntry::new("init", Some("example"), "Initialize an example project"),
    HelpEntry::new("inspect", Some("id"), "Displays information related to a deployment"),
    HelpEntry::new("link", Some("path"), "Link local directory to a Vercel Project"),
    HelpEntry::new("ls | list", Some("app"), "Lists deployments"),
    HelpEntry::new("login", Some("email"), "Logs into your account or creates a new one"),
    HelpEntry::new("logout", None, "Logs out of your account"),
    HelpEntry::new("pull", Some("path"), "Pull your Project Settings from the cloud"),
    HelpEntry::new("switch", Some("scope"), "Switches between teams and your personal account"),
];

pub const ADVANCED_COMMANDS: &[HelpEntry] = &[
    HelpEntry::new("alias", Some("cmd"), "Manages your domain aliases"),
    HelpEntry::new("bisect", None, "Use binary search to find the deployment that introduced a bug"),
    HelpEntry::new("certs", Some("cmd"), "Manages your SSL certificates"),
    HelpEntry::new("dns", Some("name"), "Manages your DNS records"),
    HelpEntry::new("domains", Some("name"), "Manages your domain names"),
    HelpEntry::new("logs", Some("url"), "Displays the logs for a deployment"),
    HelpEntry::new("projects", None, "Manages your Projects"),
    HelpEntry::new("rm | remove", Some("id"), "Removes a deployment"),
    HelpEntry::new("secrets", Some("name"), "Manages your global Secrets, for use in Environment Variables"),
    HelpEntry::new("teams", None, "Manages your teams"),
    HelpEntry::new("whoami", None, "Shows the username of the currently logged in user"),
];

/// A row of the global options table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalOption {
    pub flags: &'static [Fragment],
    pub description: &'static [Fragment],
}

impl GlobalOption {
    /// Flags as they read without styling
    pub fn flags_text(&self) -> String {
        self.flags.iter().map(Fragment::text).collect()
    }
}

pub const GLOBAL_OPTIONS: &[GlobalOption] = &[
    GlobalOption {
        flags: &[Plain("-h, --help")],
        description: &[Plain("Output usage information")],
    },
    GlobalOption {
        flags: &[Plain("-v, --version")],
        description: &[Plain("Output the version number")],
    },
    GlobalOption {
        flags: &[Plain("--cwd")],
        description: &[Plain("Current working directory")],
    },
    GlobalOption {
        flags: &[Plain("-V, --platform-version")],
        description: &[Plain("Set the platform version to deploy to")],
    },
    GlobalOption {
        flags: &[
            Plain("-A "),
            Styled("FILE", Tone::BoldUnderline),
            Plain(", --local-config="),
            Styled("FILE", Tone::BoldUnderline),
        ],
        description: &[Plain("Path to the local `vercel.json` file")],
    },
    GlobalOption {
        flags: &[
            Plain("-Q "),
            Styled("DIR", Tone::BoldUnderline),
            Plain(", --global-config="),
            Styled("DIR", Tone::BoldUnderline),
        ],
        description: &[Plain("Path to the global `.vercel` directory")],
    },
    GlobalOption {
        flags: &[Plain("-d, --debug")],
        description: &[Plain("Debug mode [off]")],
    },
    GlobalOption {
        flags: &[Plain("-f, --force")],
        description: &[Plain("Force a new deployment even if nothing has changed")],
    },
    GlobalOption {
        flags: &[Plain("--with-cache")],
        description: &[Plain("Retain build cache when using \"--force\"")],
    },
    GlobalOption {
        flags: &[
            Plain("-t "),
            Styled("TOKEN", Tone::Underline),
            Plain(", --token="),
            Styled("TOKEN", Tone::Underline),
        ],
        description: &[Plain("Login token")],
    },
    GlobalOption {
        flags: &[Plain("-p, --public")],
        description: &[
            Plain("Deployment is public ("),
            Styled("`/_src`", Tone::Dim),
            Plain(" is exposed)"),
        ],
    },
    GlobalOption {
        flags: &[Plain("-e, --env")],
        description: &[
            Plain("Include an env var during run time (e.g.: "),
            Styled("`-e KEY=value`", Tone::Dim),
            Plain("). Can appear many times."),
        ],
    },
    GlobalOption {
        flags: &[Plain("-b, --build-env")],
        description: &[
            Plain("Similar to "),
            Styled("`--env`", Tone::Dim),
            Plain(" but for build time only."),
        ],
    },
    GlobalOption {
        flags: &[Plain("-m, --meta")],
        description: &[
            Plain("Add metadata for the deployment (e.g.: "),
            Styled("`-m KEY=value`", Tone::Dim),
            Plain("). Can appear many times."),
        ],
    },
    GlobalOption {
        flags: &[Plain("-S, --scope")],
        description: &[Plain("Set a custom scope")],
    },
    GlobalOption {
        flags: &[Plain("--regions")],
        description: &[Plain("Set default regions to enable the deployment on")],
    },
    GlobalOption {
        flags: &[Plain("--prod")],
        description: &[Plain("Create a production deployment")],
    },
    GlobalOption {
        flags: &[Plain("-y, --yes")],
        description: &[Plain(
            "Skip questions when setting up new project using default scope and settings",
        )],
    },
];

/// A titled usage example
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageExample {
    pub title: &'static [Fragment],
    /// Arguments after the program name, if any
    pub args: Option<&'static str>,
}

impl UsageExample {
    /// The shell line shown under the title
    pub fn command_line(&self, package_name: &str) -> String {
        match self.args {
            Some(args) => format!("$ {} {}", package_name, args),
            None => format!("$ {}", package_name),
        }
    }
}

pub const EXAMPLES: &[UsageExample] = &[
    UsageExample {
        title: &[Plain("Deploy the current directory")],
        args: None,
    },
    UsageExample {
        title: &[Plain("Deploy a custom path")],
        args: Some("/usr/src/project"),
    },
    UsageExample {
        title: &[Plain("Deploy with Environment Variables")],
        args: Some("-e NODE_ENV=production -e SECRET=@mysql-secret"),
    },
    UsageExample {
        title: &[
            Plain("Show the usage information for the sub command "),
            Styled("`list`", Tone::Dim),
        ],
        args: Some("help list"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_and_size() {
        let names: Vec<&str> = COMMANDS.iter().map(|command| command.name).collect();
        assert_eq!(names.len(), 25);
        assert_eq!(names.first(), Some(&"alias"));
        assert_eq!(names.last(), Some(&"whoami"));
    }

    #[test]
    fn test_no_registered_command_declares_an_option() {
        assert!(COMMANDS.iter().all(|command| command.option.is_none()));
        assert!(command_records().all(|record| record.option.is_none()));
    }

    #[test]
    fn test_find_command_by_alias() {
        assert_eq!(find_command("ln").map(|c| c.name), Some("alias"));
        assert_eq!(find_command("rm").map(|c| c.name), Some("remove"));
        assert_eq!(find_command("deploy").map(|c| c.name), Some("deploy"));
        assert!(find_command("publish").is_none());
    }

    #[test]
    fn test_help_sections() {
        assert_eq!(BASIC_COMMANDS.len(), 13);
        assert_eq!(ADVANCED_COMMANDS.len(), 11);
        let defaults: Vec<&str> = BASIC_COMMANDS
            .iter()
            .chain(ADVANCED_COMMANDS)
            .filter(|entry| entry.default)
            .map(|entry| entry.label)
            .collect();
        assert_eq!(defaults, vec!["deploy"]);
    }

    #[test]
    fn test_global_options() {
        assert_eq!(GLOBAL_OPTIONS.len(), 18);
        assert_eq!(GLOBAL_OPTIONS[4].flags_text(), "-A FILE, --local-config=FILE");
        assert_eq!(GLOBAL_OPTIONS[9].flags_text(), "-t TOKEN, --token=TOKEN");
    }

    #[test]
    fn test_example_command_lines() {
        assert_eq!(EXAMPLES[0].command_line("vercel"), "$ vercel");
        assert_eq!(EXAMPLES[3].command_line("now"), "$ now help list");
    }

    #[test]
    fn test_command_serializes() {
        let json = serde_json::to_value(find_command("alias").unwrap()).unwrap();
        assert_eq!(json["name"], "alias");
        assert_eq!(json["aliases"], serde_json::json!(["aliases", "ln"]));
        assert!(json["option"].is_null());
    }
}
