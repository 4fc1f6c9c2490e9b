//! CLI execution context.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context as _, Result};
use lapki_commerce::notify::NotificationLog;
use lapki_commerce::{StoreFeatures, Storefront};

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the config was loaded from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => match find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Open a fresh storefront configured from this context.
    pub fn open_store(&self) -> Session {
        self.open_store_with(self.config.store_features())
    }

    /// Open a fresh storefront with explicit features.
    pub fn open_store_with(&self, features: StoreFeatures) -> Session {
        let notifications = Rc::new(NotificationLog::new());
        let store = Storefront::new(features, Rc::clone(&notifications));
        Session {
            store,
            notifications,
        }
    }
}

/// A storefront plus the notifications it has raised but not yet shown.
pub struct Session {
    pub store: Storefront,
    notifications: Rc<NotificationLog>,
}

impl Session {
    /// Print and clear pending notifications.
    pub fn flush(&self, output: &Output) {
        for notification in self.notifications.drain() {
            output.notification(&notification);
        }
    }
}

/// Find a config file in the directory tree.
fn find_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .flat_map(|dir| CONFIG_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

/// Resolve a path relative to the working directory.
fn resolve(cwd: &Path, path: &str) -> PathBuf {
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

    #[test]
    fn test_resolve_relative() {
        let cwd = Path::new("/srv/shop");
        assert_eq!(resolve(cwd, "lapki.toml"), PathBuf::from("/srv/shop/lapki.toml"));
        assert_eq!(resolve(cwd, "/etc/lapki.toml"), PathBuf::from("/etc/lapki.toml"));
    }

    #[test]
    fn test_find_config_missing() {
        assert!(find_config(Path::new("/nonexistent/lapki/dir")).is_none());
    }
}
