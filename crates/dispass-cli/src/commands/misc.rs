use clap::CommandFactory;
use clap_complete::generate;

use crate::app::AppContext;
use crate::cli::{AlgorithmsArgs, Cli};
use crate::output::{registry_json, registry_text};

pub fn handle_algorithms(ctx: &AppContext, args: &AlgorithmsArgs) -> anyhow::Result<()> {
    let default = ctx.config()?.label_defaults().algorithm;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&registry_json(default))?);
    } else {
        println!("{}", registry_text(default));
    }
    Ok(())
}

pub fn handle_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "dispass", &mut std::io::stdout());
    Ok(())
}
