//! Output formatting helpers for the CLI.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use dispass_core::{Algorithm, Charset, LabelSpec, ALGORITHMS, CHARSETS, DEFAULT_ALGORITHM};

use crate::constants::LABEL_COLUMN_WIDTH;

/// One line of `generate` text output: right-aligned label, then passphrase.
pub fn passphrase_line(label: &str, passphrase: &str) -> String {
    format!("{:>width$} {}", label, passphrase, width = LABEL_COLUMN_WIDTH)
}

/// JSON object for a generated passphrase.
pub fn passphrase_json(spec: &LabelSpec, charset: Option<Charset>, passphrase: &str) -> serde_json::Value {
    serde_json::json!({
        "label": spec.label,
        "length": spec.length,
        "algorithm": spec.algorithm,
        "seqno": spec.seqno,
        "charset": charset.filter(|_| spec.algorithm.supports_charset()),
        "passphrase": passphrase,
    })
}

/// JSON object for a resolved label spec.
pub fn spec_json(spec: &LabelSpec, charset: Option<Charset>) -> serde_json::Value {
    serde_json::json!({
        "label": spec.label,
        "length": spec.length,
        "algorithm": spec.algorithm,
        "seqno": spec.seqno,
        "seqno_used": spec.algorithm.uses_seqno(),
        "charset": charset.filter(|_| spec.algorithm.supports_charset()),
        "labelspec": spec.to_string(),
    })
}

/// Table of resolved label specs.
pub fn spec_table(specs: &[LabelSpec], charset: Option<Charset>) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Label", "Length", "Algorithm", "Seqno", "Charset"]);

    for spec in specs {
        let seqno = if spec.algorithm.uses_seqno() {
            spec.seqno.to_string()
        } else {
            "-".to_string()
        };
        let charset = charset
            .filter(|_| spec.algorithm.supports_charset())
            .map(|c| c.name())
            .unwrap_or("-");
        table.add_row(vec![
            spec.label.clone(),
            spec.length.to_string(),
            spec.algorithm.to_string(),
            seqno,
            charset.to_string(),
        ]);
    }

    table.to_string()
}

/// Registry listing for the `algorithms` command.
pub fn registry_json(default: Algorithm) -> serde_json::Value {
    serde_json::json!({
        "algorithms": ALGORITHMS,
        "default_algorithm": default,
        "charsets": CHARSETS,
    })
}

/// Plain-text registry listing, default algorithm marked with `*`.
pub fn registry_text(default: Algorithm) -> String {
    let mut lines = vec!["Algorithms:".to_string()];
    for algorithm in Algorithm::ALL {
        let marker = if algorithm == default { "*" } else { " " };
        lines.push(format!("  {} {}", marker, algorithm));
    }
    lines.push("Charsets (dispass3 only):".to_string());
    for name in CHARSETS {
        lines.push(format!("    {}", name));
    }
    if default != DEFAULT_ALGORITHM {
        lines.push(format!("(built-in default: {})", DEFAULT_ALGORITHM));
    }
    lines.join("\n")
}
