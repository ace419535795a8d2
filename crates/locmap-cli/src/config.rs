use anyhow::{Context, Result};
use locmap_core::player::{DEFAULT_BASE_URL, DEFAULT_DELAY, DEFAULT_STEPS};
use locmap_core::PlotStyle;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "locmap.toml";

/// Project configuration; every table and key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extract: ExtractConfig,
    pub visualize: VisualizeConfig,
    pub player: PlayerConfig,
}

/// `extract` command settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Line-oriented locations file
    pub input: PathBuf,
    /// JSON file written on every run
    pub output: PathBuf,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("locations.txt"),
            output: PathBuf::from("locations.json"),
        }
    }
}

/// `visualize` command settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VisualizeConfig {
    /// JSON file produced by `extract`
    pub input: PathBuf,
    /// SVG file to render
    pub output: PathBuf,
    pub style: PlotStyle,
}

impl Default for VisualizeConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("locations.json"),
            output: PathBuf::from("locations.svg"),
            style: PlotStyle::default(),
        }
    }
}

/// `play` command settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub base_url: String,
    /// Directory holding `<step>.json` request bodies
    pub requests_dir: PathBuf,
    /// Pause between two requests, in milliseconds
    pub delay_ms: u64,
    /// Request names in send order
    pub steps: Vec<String>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            requests_dir: PathBuf::from("requests"),
            delay_ms: DEFAULT_DELAY.as_millis() as u64,
            steps: DEFAULT_STEPS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Loads configuration from a file
    ///
    /// Relative paths inside the file are resolved against `base_path`, or against
    /// the directory of the config file when `base_path` is `None`.
    pub fn load(path: &str, base_path: Option<&Path>) -> Result<Self> {
        let config_path = Path::new(path);
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        let base =
            base_path.unwrap_or_else(|| config_path.parent().unwrap_or_else(|| Path::new(".")));
        config.resolve_relative_paths(base);

        config.validate()?;
        Ok(config)
    }

    /// Loads the explicit config file, else `locmap.toml` if present, else built-in defaults
    pub fn discover(explicit: Option<&str>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path, None),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                tracing::debug!(path = DEFAULT_CONFIG_FILE, "Using config from working directory");
                Self::load(DEFAULT_CONFIG_FILE, None)
            }
            None => Ok(Self::default()),
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.extract.input.as_os_str().is_empty() {
            anyhow::bail!("extract.input cannot be empty");
        }
        if self.extract.output.as_os_str().is_empty() {
            anyhow::bail!("extract.output cannot be empty");
        }
        if self.visualize.input.as_os_str().is_empty() {
            anyhow::bail!("visualize.input cannot be empty");
        }
        if self.visualize.output.as_os_str().is_empty() {
            anyhow::bail!("visualize.output cannot be empty");
        }
        self.visualize
            .style
            .validate()
            .map_err(|msg| anyhow::anyhow!("visualize.style: {}", msg))?;

        let base_url = &self.player.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            anyhow::bail!(
                "player.base_url must start with http:// or https://, got {:?}",
                base_url
            );
        }
        if self.player.steps.is_empty() {
            anyhow::bail!("player.steps cannot be empty");
        }
        for (idx, step) in self.player.steps.iter().enumerate() {
            if step.is_empty() || step.contains('/') {
                anyhow::bail!(
                    "player.steps[{}] must be a non-empty name without '/', got {:?}",
                    idx,
                    step
                );
            }
        }

        Ok(())
    }

    /// Replaces `[extract]` values with the ones given on the command line
    pub fn apply_extract_overrides(&mut self, input: Option<PathBuf>, output: Option<PathBuf>) {
        if let Some(input) = input {
            self.extract.input = input;
        }
        if let Some(output) = output {
            self.extract.output = output;
        }
    }

    /// Replaces `[visualize]` paths with the ones given on the command line
    pub fn apply_visualize_overrides(&mut self, input: Option<PathBuf>, output: Option<PathBuf>) {
        if let Some(input) = input {
            self.visualize.input = input;
        }
        if let Some(output) = output {
            self.visualize.output = output;
        }
    }

    /// Replaces `[player]` values with the ones given on the command line
    pub fn apply_play_overrides(
        &mut self,
        base_url: Option<String>,
        requests_dir: Option<PathBuf>,
        delay_ms: Option<u64>,
    ) {
        if let Some(base_url) = base_url {
            self.player.base_url = base_url;
        }
        if let Some(requests_dir) = requests_dir {
            self.player.requests_dir = requests_dir;
        }
        if let Some(delay_ms) = delay_ms {
            self.player.delay_ms = delay_ms;
        }
    }

    /// Resolves all relative paths in the config relative to the base path
    fn resolve_relative_paths(&mut self, base: &Path) {
        for path in [
            &mut self.extract.input,
            &mut self.extract.output,
            &mut self.visualize.input,
            &mut self.visualize.output,
            &mut self.player.requests_dir,
        ] {
            if !path.as_os_str().is_empty() && path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_fixed_paths() {
        let config = Config::default();
        assert_eq!(config.extract.input, PathBuf::from("locations.txt"));
        assert_eq!(config.extract.output, PathBuf::from("locations.json"));
        assert_eq!(config.visualize.input, PathBuf::from("locations.json"));
        assert_eq!(config.player.base_url, "http://127.0.0.1:7273");
        assert_eq!(config.player.delay_ms, 500);
        assert_eq!(config.player.steps, vec!["hello", "prepare", "start"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("locmap.toml");
        fs::write(
            &path,
            "[extract]\ninput = \"maps/locations.txt\"\n\n[player]\ndelay_ms = 100\n",
        )
        .unwrap();

        let config = Config::load(path.to_str().unwrap(), None).unwrap();
        assert_eq!(config.extract.input, dir.path().join("maps/locations.txt"));
        assert_eq!(config.extract.output, dir.path().join("locations.json"));
        assert_eq!(config.player.requests_dir, dir.path().join("requests"));
        assert_eq!(config.player.delay_ms, 100);
    }

    #[test]
    fn test_flags_override_config_and_config_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("locmap.toml");
        fs::write(
            &path,
            "[extract]\noutput = \"out/locations.json\"\n\n[player]\ndelay_ms = 100\nbase_url = \"http://10.0.0.2:7273\"\n",
        )
        .unwrap();
        let mut config = Config::load(path.to_str().unwrap(), None).unwrap();

        config.apply_extract_overrides(Some(PathBuf::from("cli.txt")), None);
        assert_eq!(config.extract.input, PathBuf::from("cli.txt"));
        assert_eq!(config.extract.output, dir.path().join("out/locations.json"));

        config.apply_play_overrides(None, None, Some(20));
        assert_eq!(config.player.delay_ms, 20);
        assert_eq!(config.player.base_url, "http://10.0.0.2:7273");
        assert_eq!(config.player.requests_dir, dir.path().join("requests"));

        config.apply_visualize_overrides(None, Some(PathBuf::from("plot.svg")));
        assert_eq!(config.visualize.input, dir.path().join("locations.json"));
        assert_eq!(config.visualize.output, PathBuf::from("plot.svg"));
    }

    #[test]
    fn test_no_flags_keep_defaults() {
        let mut config = Config::default();
        config.apply_extract_overrides(None, None);
        config.apply_visualize_overrides(None, None);
        config.apply_play_overrides(None, None, None);

        assert_eq!(config.extract.input, PathBuf::from("locations.txt"));
        assert_eq!(config.visualize.output, PathBuf::from("locations.svg"));
        assert_eq!(config.player.base_url, "http://127.0.0.1:7273");
        assert_eq!(config.player.delay_ms, 500);
    }

    #[test]
    fn test_rejects_bad_player_settings() {
        let mut config = Config::default();
        config.player.base_url = "127.0.0.1:7273".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.player.steps.clear();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.player.steps = vec!["hello".to_string(), "a/b".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_degenerate_canvas() {
        let mut config = Config::default();
        config.visualize.style.width = 50;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("visualize.style"));
    }
}
