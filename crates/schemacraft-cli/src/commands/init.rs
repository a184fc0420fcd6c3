use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use colored::Colorize;
use schemacraft_config::SchemaCraftConfig;

pub fn cmd_init(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    let config = SchemaCraftConfig::default();
    let json = serde_json::to_string_pretty(&config).context("serialize default config")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    println!(
        "{} {}",
        "Created".bright_green().bold(),
        format!("{}", path.display()).bright_white()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn cmd_init_creates_config() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("schemacraft.json");

        cmd_init(&path).unwrap();

        let written: SchemaCraftConfig =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, SchemaCraftConfig::default());
    }

    #[test]
    fn cmd_init_fails_when_exists() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("schemacraft.json");

        cmd_init(&path).unwrap();
        let err = cmd_init(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
