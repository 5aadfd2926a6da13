//! Affichage des statistiques

use fec_simulation::{ChannelMetrics, MetricsCollector};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct MetricsRow {
    #[tabled(rename = "")]
    label: String,
    #[tabled(rename = "Inversions")]
    flipped: usize,
    #[tabled(rename = "Gigue")]
    jittered: usize,
    #[tabled(rename = "Bits corrigés ~")]
    corrected: u32,
    #[tabled(rename = "Erreurs résiduelles")]
    residual: usize,
    #[tabled(rename = "BER résiduel")]
    ber: String,
}

impl MetricsRow {
    fn from(label: &str, metrics: &ChannelMetrics) -> Self {
        Self {
            label: label.to_string(),
            flipped: metrics.flipped_symbols,
            jittered: metrics.jittered_symbols,
            corrected: metrics.estimated_corrected_bits(),
            residual: metrics.residual_bit_errors,
            ber: format!("{:.2e}", metrics.residual_ber()),
        }
    }
}

/// Affiche les métriques agrégées en tableau
pub fn display_metrics(collector: &MetricsCollector) {
    if collector.is_empty() {
        println!("Aucune transmission à afficher");
        return;
    }

    let rows = vec![
        MetricsRow::from("Moyenne", &collector.average()),
        MetricsRow::from("Minimum", &collector.min()),
        MetricsRow::from("Maximum", &collector.max()),
    ];

    println!();
    println!("{}", Table::new(rows));
}
