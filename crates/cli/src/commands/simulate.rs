//! Commande de simulation

use crate::create_progress_bar;
use crate::display::stats::display_metrics;
use anyhow::Result;
use console::style;
use fec_core::{encode_bytes, ViterbiDecoder, TAIL_BITS};
use fec_simulation::{ChannelConfig, ErrorModel, MetricsCollector, SymbolChannel};
use fec_utils::bit_errors;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::path::PathBuf;

pub fn run(
    input: PathBuf,
    flip_rate: f64,
    jitter: u8,
    iterations: usize,
    seed: u64,
    json: Option<PathBuf>,
) -> Result<()> {
    println!("📡 Simulation d'erreurs sur: {}", input.display());

    // 1. Lire et encoder le message de référence
    let message = std::fs::read(&input)?;
    let framebits = message.len() * 8;
    let symbols = encode_bytes(&message);
    println!(
        "{} octets de message, {} paires de symboles",
        message.len(),
        symbols.len() / 2
    );

    let model = ErrorModel::new(flip_rate, jitter);
    anyhow::ensure!(model.is_valid(), "modèle d'erreur invalide");

    // 2. Transmettre et décoder en parallèle: un canal et un décodeur
    //    par itération, seed dérivé pour la reproductibilité
    let pb = create_progress_bar(iterations as u64, "Simulation en cours...");

    let results: Vec<_> = (0..iterations)
        .into_par_iter()
        .map(|i| {
            let model = ErrorModel::new(flip_rate, jitter).with_seed(seed + i as u64);
            let mut channel = SymbolChannel::new(ChannelConfig { error_model: model });

            let (corrupted, mut metrics) = channel.transmit(&symbols)?;

            let mut decoder = ViterbiDecoder::new(framebits + TAIL_BITS)?;
            let decoded = decoder.decode_frame(&corrupted, framebits)?;

            metrics.message_bits = framebits;
            metrics.residual_bit_errors = bit_errors(&message, &decoded);
            metrics.path_metric = decoder.best_metric();

            pb.inc(1);
            Ok::<_, anyhow::Error>(metrics)
        })
        .collect();

    pb.finish_with_message(String::from("Simulation terminée"));

    let mut collector = MetricsCollector::new();
    for result in results {
        collector.add(result?);
    }

    // 3. Afficher les résultats
    println!("\n📊 Résultats de la simulation:");
    display_metrics(&collector);

    let perfect = collector.perfect_decodes();
    println!(
        "\n{} {}/{} trames décodées sans erreur résiduelle",
        if perfect == iterations {
            style("✅").green()
        } else {
            style("⚠️").yellow()
        },
        perfect,
        iterations
    );

    // 4. Export JSON optionnel
    if let Some(path) = json {
        let report = serde_json::json!({
            "message_bytes": message.len(),
            "flip_rate": flip_rate,
            "jitter": jitter,
            "iterations": iterations,
            "seed": seed,
            "perfect_decodes": perfect,
            "average": collector.average(),
            "min": collector.min(),
            "max": collector.max(),
        });
        std::fs::write(&path, serde_json::to_string_pretty(&report)?)?;
        println!("Rapport écrit dans: {}", path.display());
    }

    Ok(())
}
