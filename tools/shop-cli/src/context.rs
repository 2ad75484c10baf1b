//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use turbo_money::{MoneyFormat, MoneyMaker};
use turbo_shop::cart::{CartModels, ModelRegistry};
use turbo_shop::ShopSettings;

use crate::models;
use crate::output::Output;

const SETTINGS_NAMES: [&str; 3] = ["shop.toml", ".shop.toml", "shop.json"];

/// Execution context for CLI commands.
///
/// Built once at startup: settings are loaded, the money factory and
/// format are validated and the cart models are resolved.
pub struct Context {
    pub settings: ShopSettings,
    /// Where the settings came from, `None` for built-in defaults.
    pub settings_path: Option<PathBuf>,
    pub registry: ModelRegistry,
    pub models: CartModels,
    pub money: MoneyMaker,
    pub money_format: MoneyFormat,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load settings and resolve everything commands need.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let settings_path = match config_path {
            Some(path) => Some(resolve_path(&cwd, path)),
            // Try to find settings in current directory or parent directories
            None => find_settings(&cwd),
        };
        let settings = match &settings_path {
            Some(path) => load_settings(path)?,
            None => {
                tracing::debug!("no settings file found, using defaults");
                ShopSettings::default()
            }
        };

        let money = settings
            .money_maker()
            .context("Invalid setting shop.currency")?;
        let money_format = settings
            .money_format()
            .context("Invalid [money] settings")?;

        let registry = models::registry().context("Failed to register cart models")?;
        let models = registry
            .resolve(&settings)
            .context("Failed to resolve cart models")?;

        Ok(Self {
            settings,
            settings_path,
            registry,
            models,
            money,
            money_format,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve_path(&self.cwd, path)
    }
}

/// Load settings from a TOML file, or JSON when the extension says so.
fn load_settings(path: &Path) -> Result<ShopSettings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

    let settings = if path.extension().is_some_and(|e| e == "json") {
        ShopSettings::from_json_str(&content)
    } else {
        ShopSettings::from_toml_str(&content)
    };
    let settings =
        settings.with_context(|| format!("Failed to parse settings file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Find a settings file in the directory tree.
fn find_settings(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .flat_map(|dir| SETTINGS_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_settings_in_parent() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join(".shop.toml"), "[shop]\ncurrency = \"USD\"\n").unwrap();

        let found = find_settings(&nested).unwrap();
        assert_eq!(found, root.path().join(".shop.toml"));
        assert_eq!(load_settings(&found).unwrap().shop.currency, "USD");
    }

    #[test]
    fn test_nearest_settings_win() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("store");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join("shop.toml"), "[shop]\ncurrency = \"USD\"\n").unwrap();
        std::fs::write(nested.join("shop.toml"), "[shop]\ncurrency = \"GBP\"\n").unwrap();

        let found = find_settings(&nested).unwrap();
        assert_eq!(load_settings(&found).unwrap().shop.currency, "GBP");
    }

    #[test]
    fn test_load_json_settings() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("settings.json");
        std::fs::write(&path, r#"{"shop": {"cart_model": "shop::Missing"}}"#).unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.shop.cart_model.as_deref(), Some("shop::Missing"));
    }

    #[test]
    fn test_invalid_settings_report_path() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("shop.toml");
        std::fs::write(&path, "[shop\n").unwrap();

        let err = load_settings(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("shop.toml"));
    }
}
