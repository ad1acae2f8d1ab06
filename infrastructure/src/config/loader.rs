//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["afdstats.toml", ".afdstats.toml"];

/// Environment variable prefix; `AFDSTATS_WIKI__API_URL` sets `wiki.api_url`
const ENV_PREFIX: &str = "AFDSTATS_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `AFDSTATS_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./afdstats.toml` or `./.afdstats.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/afdstats/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path, Path::new("."))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// File sources only, with project files looked up under `project_dir`
    fn figment(config_path: Option<&PathBuf>, project_dir: &Path) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        // Add project-level config file (first name found wins)
        if let Some(path) = Self::find_project_file(project_dir) {
            figment = figment.merge(Toml::file(&path));
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/afdstats/config.toml if set,
    /// otherwise falls back to ~/.config/afdstats/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("afdstats").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::find_project_file(Path::new("."))
    }

    fn find_project_file(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        println!("  [     ] Env:     {}* variables", ENV_PREFIX);

        // Project config
        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./afdstats.toml or ./.afdstats.toml");
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn extract(figment: Figment) -> FileConfig {
        figment.extract().unwrap()
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.analysis.max_results, 200);
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("afdstats"));
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".afdstats.toml"),
            "[analysis]\nmax_results = 75\n",
        )
        .unwrap();

        let config = extract(ConfigLoader::figment(None, dir.path()));
        assert_eq!(config.analysis.max_results, 75);
        assert_eq!(config.wiki.batch_size, 50);
    }

    #[test]
    fn test_explicit_path_overrides_project_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("afdstats.toml"),
            "[analysis]\nmax_results = 75\ninclude_undetermined = true\n",
        )
        .unwrap();
        let explicit = dir.path().join("custom.toml");
        fs::write(&explicit, "[analysis]\nmax_results = 10\n").unwrap();

        let config = extract(ConfigLoader::figment(Some(&explicit), dir.path()));
        assert_eq!(config.analysis.max_results, 10);
        // Keys the explicit file doesn't set still come from the project file
        assert!(config.analysis.include_undetermined);
    }

    #[test]
    fn test_find_project_file_prefers_plain_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("afdstats.toml"), "").unwrap();
        fs::write(dir.path().join(".afdstats.toml"), "").unwrap();

        let found = ConfigLoader::find_project_file(dir.path()).unwrap();
        assert!(found.ends_with("afdstats.toml"));
        assert!(!found.to_string_lossy().ends_with(".afdstats.toml"));
    }
}
