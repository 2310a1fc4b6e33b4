use crate::app::AppContext;
use crate::cli::InspectArgs;
use crate::output::{spec_json, spec_table};

pub fn handle_inspect(ctx: &AppContext, args: &InspectArgs) -> anyhow::Result<()> {
    let resolved = ctx.resolve(&args.labels, &args.params)?;

    if args.json {
        let values: Vec<serde_json::Value> = resolved
            .specs
            .iter()
            .map(|spec| spec_json(spec, resolved.charset))
            .collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else if ctx.quiet() {
        for spec in &resolved.specs {
            println!("{}", spec);
        }
    } else {
        println!("{}", spec_table(&resolved.specs, resolved.charset));
    }

    Ok(())
}
