//! `sitenav emit`: write the generator-facing configuration.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::config::NavConfig;
use crate::generator::GeneratorConfig;
use crate::log;

pub fn run_emit(config: &NavConfig, pretty: bool, output: Option<&Path>) -> Result<()> {
    let formatted = GeneratorConfig::new(config).to_json(pretty)?;

    // Output to file or stdout
    if let Some(output_path) = output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{formatted}")?;
        log!("emit"; "wrote generator config to {}", output_path.display());
    } else {
        println!("{formatted}");
    }

    Ok(())
}
