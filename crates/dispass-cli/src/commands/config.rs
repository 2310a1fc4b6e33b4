use crate::app::{resolve_config_path, AppContext};
use crate::config::{write_config, DispassConfig};

pub fn handle_config_init(ctx: &AppContext, force: bool) -> anyhow::Result<()> {
    let path = resolve_config_path(ctx.cli())?;
    if path.exists() && !force {
        return Err(anyhow::anyhow!(
            "Config already exists at {}\nHint: Pass --force to overwrite it.",
            path.display()
        ));
    }

    write_config(&path, &DispassConfig::default())?;
    tracing::debug!(path = %path.display(), "wrote config");
    if !ctx.quiet() {
        println!("Wrote config to {}", path.display());
    }
    Ok(())
}

pub fn handle_config_show(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    let path = resolve_config_path(ctx.cli())?;
    let config = ctx.config()?;
    let defaults = config.label_defaults();
    let charset = config.charset();

    if json {
        let value = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "defaults": defaults,
            "charset": charset,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if !ctx.quiet() {
        let state = if path.exists() { "" } else { " (not found, using built-in defaults)" };
        println!("Config: {}{}", path.display(), state);
    }
    println!("algorithm = {}", defaults.algorithm);
    println!("length    = {}", defaults.length);
    println!("seqno     = {}", defaults.seqno);
    println!(
        "charset   = {}",
        charset.map(|c| c.name()).unwrap_or("none")
    );
    Ok(())
}
