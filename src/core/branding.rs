use crate::domain::config::GlobalConfig;

pub const DEFAULT_PACKAGE_NAME: &str = "vercel";

/// Logo glyph printed before the program name
pub fn logo() -> &'static str {
    if cfg!(windows) {
        "Δ"
    } else {
        "▲"
    }
}

/// Program name: explicit override, then config, then the default
pub fn resolve_package_name<'a>(flag: Option<&'a str>, config: &'a GlobalConfig) -> &'a str {
    flag.filter(|name| is_named(name))
        .or_else(|| config.package_name.as_deref().filter(|name| is_named(name)))
        .unwrap_or(DEFAULT_PACKAGE_NAME)
}

fn is_named(name: &str) -> bool {
    !name.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_precedence() {
        let mut config = GlobalConfig::default();
        assert_eq!(resolve_package_name(None, &config), "vercel");

        config.package_name = Some("now".to_string());
        assert_eq!(resolve_package_name(None, &config), "now");
        assert_eq!(resolve_package_name(Some("vc"), &config), "vc");
    }

    #[test]
    fn test_blank_package_name_falls_back() {
        let config = GlobalConfig {
            package_name: Some("  ".to_string()),
            ..GlobalConfig::default()
        };
        assert_eq!(resolve_package_name(None, &config), DEFAULT_PACKAGE_NAME);
    }

    #[test]
    fn test_blank_flag_falls_through_to_config() {
        let config = GlobalConfig {
            package_name: Some("now".to_string()),
            ..GlobalConfig::default()
        };
        assert_eq!(resolve_package_name(Some(""), &config), "now");
        assert_eq!(resolve_package_name(Some("   "), &config), "now");
        assert_eq!(resolve_package_name(Some(""), &GlobalConfig::default()), DEFAULT_PACKAGE_NAME);
    }

    #[test]
    fn test_logo_is_single_glyph() {
        assert_eq!(logo().chars().count(), 1);
    }
}
