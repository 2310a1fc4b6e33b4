use secrecy::ExposeSecret;
use zeroize::Zeroizing;

use crate::app::{read_secret, AppContext, SecretSource};
use crate::cli::GenerateArgs;
use crate::output::{passphrase_json, passphrase_line};

pub fn handle_generate(ctx: &AppContext, args: &GenerateArgs) -> anyhow::Result<()> {
    // Resolve before prompting so a bad spec fails without asking for a password
    let resolved = ctx.resolve(&args.labels, &args.params)?;
    let charset_name = resolved.charset.map(|c| c.name());

    let secret = read_secret(SecretSource {
        stdin: args.password_stdin,
        confirm: args.create,
    })?;

    let passphrases: Vec<Zeroizing<String>> = resolved
        .specs
        .iter()
        .map(|spec| Zeroizing::new(spec.derive(secret.expose_secret(), charset_name)))
        .collect();
    drop(secret);

    if args.json {
        let values: Vec<serde_json::Value> = resolved
            .specs
            .iter()
            .zip(&passphrases)
            .map(|(spec, passphrase)| passphrase_json(spec, resolved.charset, passphrase))
            .collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
        return Ok(());
    }

    for (spec, passphrase) in resolved.specs.iter().zip(&passphrases) {
        if ctx.quiet() {
            println!("{}", passphrase.as_str());
        } else {
            let line = Zeroizing::new(passphrase_line(&spec.label, passphrase));
            println!("{}", line.as_str());
        }
    }

    Ok(())
}
