use anyhow::Result;

use navtabs_core::AppConfig;

pub fn run(config: &AppConfig, default: bool) -> Result<()> {
    let toml = if default {
        AppConfig::default().to_toml()?
    } else {
        config.to_toml()?
    };
    print!("{}", toml);
    Ok(())
}
