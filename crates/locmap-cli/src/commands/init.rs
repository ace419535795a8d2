use anyhow::Result;
use std::fs;
use std::path::Path;

/// Template written by `locmap init`; every value shown is the built-in default
pub const CONFIG_TEMPLATE: &str = r#"# locmap configuration. Relative paths are resolved against this file's directory.

[extract]
input = "locations.txt"
output = "locations.json"

[visualize]
input = "locations.json"
output = "locations.svg"

# [visualize.style]
# width = 800
# height = 600
# margin = 48.0
# padding = 0.05
# marker_radius = 4.0
# font_size = 11.0
# token_color = "red"
# power_color = "blue"
# background = "white"

[player]
base_url = "http://127.0.0.1:7273"
requests_dir = "requests"
delay_ms = 500
steps = ["hello", "prepare", "start"]
"#;

/// Creates the configuration file
pub fn execute_init(path: &str) -> Result<()> {
    let config_path = Path::new(path);
    if config_path.exists() {
        anyhow::bail!("Config file already exists: {}", path);
    }

    fs::write(config_path, CONFIG_TEMPLATE)?;
    println!("Created config file: {}", path);

    Ok(())
}
