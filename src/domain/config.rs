use serde::{Deserialize, Serialize};

/// Help renderer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HelpConfig {
    /// Global configuration
    #[serde(default)]
    pub global: GlobalConfig,
    /// Column layout of the rendered tables
    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Global configuration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit ANSI styling
    #[serde(default = "default_color")]
    pub color: bool,
    /// Program name shown in the usage line and examples
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
}

/// Tab-stops for every table on the help page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    pub commands: TabStops,
    #[serde(default)]
    pub options: OptionStops,
}

/// Fixed 1-based columns for command records.
///
/// `indent` is the number of leading spaces; the other two are the columns
/// at which the option and description fields begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabStops {
    #[serde(default = "default_indent")]
    pub indent: usize,
    #[serde(default = "default_option_column")]
    pub option_column: usize,
    #[serde(default = "default_description_column")]
    pub description_column: usize,
}

/// Fixed columns for the global options table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionStops {
    #[serde(default = "default_option_indent")]
    pub indent: usize,
    #[serde(default = "default_option_description_column")]
    pub description_column: usize,
}

// Default value functions
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_color() -> bool {
    true
}

fn default_indent() -> usize {
    6
}

fn default_option_column() -> usize {
    28
}

fn default_description_column() -> usize {
    40
}

fn default_option_indent() -> usize {
    4
}

fn default_option_description_column() -> usize {
    36
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            color: default_color(),
            package_name: None,
        }
    }
}

impl Default for TabStops {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            option_column: default_option_column(),
            description_column: default_description_column(),
        }
    }
}

impl Default for OptionStops {
    fn default() -> Self {
        Self {
            indent: default_option_indent(),
            description_column: default_option_description_column(),
        }
    }
}

/// One configuration file as written: only the keys it names are set
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigLayer {
    #[serde(default)]
    pub global: GlobalLayer,
    #[serde(default)]
    pub layout: LayoutLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GlobalLayer {
    pub log_level: Option<String>,
    pub color: Option<bool>,
    pub package_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LayoutLayer {
    #[serde(default)]
    pub commands: TabStopsLayer,
    #[serde(default)]
    pub options: OptionStopsLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TabStopsLayer {
    pub indent: Option<usize>,
    pub option_column: Option<usize>,
    pub description_column: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OptionStopsLayer {
    pub indent: Option<usize>,
    pub description_column: Option<usize>,
}

fn overlay<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

impl HelpConfig {
    /// Apply every key present in `layer`, leaving the others untouched
    pub fn overlay(mut self, layer: ConfigLayer) -> Self {
        let global = layer.global;
        overlay(&mut self.global.log_level, global.log_level);
        overlay(&mut self.global.color, global.color);
        if global.package_name.is_some() {
            self.global.package_name = global.package_name;
        }

        let commands = layer.layout.commands;
        overlay(&mut self.layout.commands.indent, commands.indent);
        overlay(&mut self.layout.commands.option_column, commands.option_column);
        overlay(&mut self.layout.commands.description_column, commands.description_column);

        let options = layer.layout.options;
        overlay(&mut self.layout.options.indent, options.indent);
        overlay(&mut self.layout.options.description_column, options.description_column);

        self
    }
}
