//! Métriques de simulation

use serde::{Deserialize, Serialize};

/// Métriques collectées pendant une transmission simulée
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelMetrics {
    /// Nombre total de symboles transmis
    pub total_symbols: usize,

    /// Symboles dont la polarité a été inversée
    pub flipped_symbols: usize,

    /// Symboles dégradés par la gigue douce
    pub jittered_symbols: usize,

    /// Taille du message de référence, en bits
    pub message_bits: usize,

    /// Bits encore faux après décodage
    pub residual_bit_errors: usize,

    /// Métrique du chemin survivant rapportée par le décodeur
    pub path_metric: u32,
}

impl ChannelMetrics {
    /// Crée de nouvelles métriques vides
    pub fn new() -> Self {
        Self::default()
    }

    /// Proportion de symboles inversés
    pub fn flip_ratio(&self) -> f64 {
        if self.total_symbols == 0 {
            return 0.0;
        }
        self.flipped_symbols as f64 / self.total_symbols as f64
    }

    /// Taux d'erreur binaire résiduel après décodage
    pub fn residual_ber(&self) -> f64 {
        if self.message_bits == 0 {
            return 0.0;
        }
        self.residual_bit_errors as f64 / self.message_bits as f64
    }

    /// Estimation du nombre de bits corrigés, dérivée de la métrique du
    /// chemin survivant (un symbole dur inversé coûte 255)
    pub fn estimated_corrected_bits(&self) -> u32 {
        self.path_metric / 255
    }

    /// Formate les métriques en tableau
    pub fn format_table(&self) -> String {
        format!(
            "┌────────────────────────────────────┐\n\
             │ Métriques de Transmission          │\n\
             ├────────────────────────────────────┤\n\
             │ Symboles totaux  : {:>8}        │\n\
             │ Inversions       : {:>8} ({:>4.1}%)│\n\
             │ Gigue            : {:>8}        │\n\
             │ Bits corrigés ~  : {:>8}        │\n\
             │ BER résiduel     : {:>8.2e}      │\n\
             └────────────────────────────────────┘",
            self.total_symbols,
            self.flipped_symbols,
            100.0 * self.flip_ratio(),
            self.jittered_symbols,
            self.estimated_corrected_bits(),
            self.residual_ber()
        )
    }
}

/// Collecteur de métriques pour plusieurs transmissions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsCollector {
    metrics: Vec<ChannelMetrics>,
}

impl MetricsCollector {
    /// Crée un nouveau collecteur
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute des métriques
    pub fn add(&mut self, metrics: ChannelMetrics) {
        self.metrics.push(metrics);
    }

    /// Retourne les métriques moyennes
    pub fn average(&self) -> ChannelMetrics {
        if self.metrics.is_empty() {
            return ChannelMetrics::new();
        }

        let n = self.metrics.len();

        ChannelMetrics {
            total_symbols: self.metrics.iter().map(|m| m.total_symbols).sum::<usize>() / n,
            flipped_symbols: self.metrics.iter().map(|m| m.flipped_symbols).sum::<usize>() / n,
            jittered_symbols: self.metrics.iter().map(|m| m.jittered_symbols).sum::<usize>() / n,
            message_bits: self.metrics.iter().map(|m| m.message_bits).sum::<usize>() / n,
            residual_bit_errors: self
                .metrics
                .iter()
                .map(|m| m.residual_bit_errors)
                .sum::<usize>()
                / n,
            path_metric: (self.metrics.iter().map(|m| m.path_metric as u64).sum::<u64>()
                / n as u64) as u32,
        }
    }

    /// Retourne les métriques minimales
    pub fn min(&self) -> ChannelMetrics {
        if self.metrics.is_empty() {
            return ChannelMetrics::new();
        }

        ChannelMetrics {
            total_symbols: self.metrics.iter().map(|m| m.total_symbols).min().unwrap_or(0),
            flipped_symbols: self.metrics.iter().map(|m| m.flipped_symbols).min().unwrap_or(0),
            jittered_symbols: self.metrics.iter().map(|m| m.jittered_symbols).min().unwrap_or(0),
            message_bits: self.metrics.iter().map(|m| m.message_bits).min().unwrap_or(0),
            residual_bit_errors: self
                .metrics
                .iter()
                .map(|m| m.residual_bit_errors)
                .min()
                .unwrap_or(0),
            path_metric: self.metrics.iter().map(|m| m.path_metric).min().unwrap_or(0),
        }
    }

    /// Retourne les métriques maximales
    pub fn max(&self) -> ChannelMetrics {
        if self.metrics.is_empty() {
            return ChannelMetrics::new();
        }

        ChannelMetrics {
            total_symbols: self.metrics.iter().map(|m| m.total_symbols).max().unwrap_or(0),
            flipped_symbols: self.metrics.iter().map(|m| m.flipped_symbols).max().unwrap_or(0),
            jittered_symbols: self.metrics.iter().map(|m| m.jittered_symbols).max().unwrap_or(0),
            message_bits: self.metrics.iter().map(|m| m.message_bits).max().unwrap_or(0),
            residual_bit_errors: self
                .metrics
                .iter()
                .map(|m| m.residual_bit_errors)
                .max()
                .unwrap_or(0),
            path_metric: self.metrics.iter().map(|m| m.path_metric).max().unwrap_or(0),
        }
    }

    /// Nombre de transmissions enregistrées
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Vérifie si vide
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Vide le collecteur
    pub fn clear(&mut self) {
        self.metrics.clear();
    }

    /// Nombre de transmissions décodées sans erreur résiduelle
    pub fn perfect_decodes(&self) -> usize {
        self.metrics
            .iter()
            .filter(|m| m.residual_bit_errors == 0)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = ChannelMetrics::new();
        assert_eq!(metrics.total_symbols, 0);
        assert_eq!(metrics.residual_ber(), 0.0);
    }

    #[test]
    fn test_flip_ratio() {
        let metrics = ChannelMetrics {
            total_symbols: 200,
            flipped_symbols: 10,
            ..Default::default()
        };
        assert!((metrics.flip_ratio() - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_estimated_corrected_bits() {
        let metrics = ChannelMetrics {
            path_metric: 3 * 255,
            ..Default::default()
        };
        assert_eq!(metrics.estimated_corrected_bits(), 3);
    }

    #[test]
    fn test_collector_average_and_extremes() {
        let mut collector = MetricsCollector::new();

        collector.add(ChannelMetrics {
            total_symbols: 100,
            flipped_symbols: 10,
            ..Default::default()
        });
        collector.add(ChannelMetrics {
            total_symbols: 100,
            flipped_symbols: 20,
            ..Default::default()
        });

        assert_eq!(collector.len(), 2);
        assert_eq!(collector.average().flipped_symbols, 15);
        assert_eq!(collector.min().flipped_symbols, 10);
        assert_eq!(collector.max().flipped_symbols, 20);
    }

    #[test]
    fn test_perfect_decodes() {
        let mut collector = MetricsCollector::new();

        collector.add(ChannelMetrics::default());
        collector.add(ChannelMetrics {
            residual_bit_errors: 3,
            ..Default::default()
        });

        assert_eq!(collector.perfect_decodes(), 1);
    }
}
