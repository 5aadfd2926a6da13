//! Commande de décodage

use crate::{create_spinner, SymbolFormat};
use anyhow::{bail, Result};
use console::style;
use fec_core::{encoded_len, ViterbiDecoder, TAIL_BITS};
use fec_utils::{parse_symbols_hex, SymbolPolarity};
use std::path::PathBuf;

pub fn run(
    input: PathBuf,
    output: PathBuf,
    frame_bytes: usize,
    format: SymbolFormat,
) -> Result<()> {
    println!("📡 Décodage de: {}", input.display());

    // 1. Lire le flux de symboles
    let spinner = create_spinner("Lecture des symboles...");
    let symbols = match format {
        SymbolFormat::Raw => std::fs::read(&input)?,
        SymbolFormat::Hex => parse_symbols_hex(&std::fs::read_to_string(&input)?)?,
    };
    spinner.finish_with_message(format!("{} symboles lus", symbols.len()));

    let neutral = symbols
        .iter()
        .filter(|&&s| SymbolPolarity::slice(s) == SymbolPolarity::Neutral)
        .count();
    if neutral > 0 {
        println!(
            "{} {} symboles neutres (effacements) dans le flux",
            style("⚠️").yellow(),
            neutral
        );
    }

    let framebits = frame_bytes * 8;
    if symbols.len() != encoded_len(framebits) {
        bail!(
            "taille de trame incohérente: {} symboles lus, {} attendus pour {} octets de message",
            symbols.len(),
            encoded_len(framebits),
            frame_bytes
        );
    }

    // 2. Décoder la trame
    let spinner = create_spinner("Décodage de Viterbi...");
    let mut decoder = ViterbiDecoder::new(framebits + TAIL_BITS)?;
    let decoded = decoder.decode_frame(&symbols, framebits)?;
    let metric = decoder.best_metric();
    spinner.finish_with_message("Trame décodée");

    // 3. Écrire le message
    std::fs::write(&output, &decoded)?;

    println!(
        "{} {} octets décodés vers {} (métrique {}, ~{} bits corrigés)",
        style("✅").green(),
        decoded.len(),
        output.display(),
        metric,
        metric / 255
    );

    Ok(())
}
