use crate::config::{CodemendConfig, CONFIG_FILE_NAME};
use crate::io;
use anyhow::Result;
use std::path::Path;

const HEADER: &str = "# codemend configuration\n\
# Every value below is a built-in default; delete what you do not change.\n\n";

pub fn render_default_config() -> Result<String> {
    let body = toml::to_string_pretty(&CodemendConfig::default())?;
    Ok(format!("{HEADER}{body}"))
}

pub fn init_config(root: &Path, force: bool) -> Result<()> {
    let config_path = root.join(CONFIG_FILE_NAME);

    if io::file_exists(&config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, &render_default_config()?)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
