//! Commande d'encodage

use crate::{create_spinner, SymbolFormat};
use anyhow::Result;
use console::style;
use fec_core::{encode_bytes, encoded_len};
use fec_utils::format_symbols_hex;
use std::path::PathBuf;

pub fn run(input: PathBuf, output: PathBuf, format: SymbolFormat) -> Result<()> {
    println!("📡 Encodage de: {}", input.display());

    // 1. Lire le fichier
    let spinner = create_spinner("Lecture du fichier...");
    let data = std::fs::read(&input)?;
    spinner.finish_with_message(format!("Fichier lu ({} octets)", data.len()));

    // 2. Encoder
    let spinner = create_spinner("Encodage convolutif...");
    let symbols = encode_bytes(&data);
    spinner.finish_with_message(format!(
        "{} paires de symboles émises",
        symbols.len() / 2
    ));

    // 3. Écrire le flux de symboles
    match format {
        SymbolFormat::Raw => std::fs::write(&output, &symbols)?,
        SymbolFormat::Hex => std::fs::write(&output, format_symbols_hex(&symbols))?,
    }

    println!(
        "{} {} octets de message → {} octets de symboles ({})",
        style("✅").green(),
        data.len(),
        encoded_len(data.len() * 8),
        output.display()
    );

    Ok(())
}
