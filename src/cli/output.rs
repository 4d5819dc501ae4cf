//! JSON output to stdout or a file.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::log;

/// Serialize `value` and write it to `output`, or stdout when `None`.
pub(super) fn write_json<T: Serialize + ?Sized>(
    value: &T,
    pretty: bool,
    output: Option<&Path>,
) -> Result<()> {
    let formatted = render(value, pretty)?;

    if let Some(output_path) = output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("failed to create {}", output_path.display()))?;
        writeln!(file, "{formatted}")?;
        log!("scan"; "wrote output to {}", output_path.display());
    } else {
        println!("{formatted}");
    }

    Ok(())
}

fn render<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let formatted = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(formatted)
}
