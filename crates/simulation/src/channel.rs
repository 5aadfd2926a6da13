//! Canal de transmission de symboles simulé

use crate::error_model::ErrorModel;
use crate::metrics::ChannelMetrics;
use fec_core::Result;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Configuration du canal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Modèle d'erreur
    pub error_model: ErrorModel,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            error_model: ErrorModel::default(),
        }
    }
}

/// Canal de transmission simulé
///
/// Corrompt un buffer de symboles sans en changer la longueur: un flux
/// de symboles n'a ni insertions ni délétions, seules les valeurs se
/// dégradent.
pub struct SymbolChannel {
    config: ChannelConfig,
    rng: ChaCha8Rng,
}

impl SymbolChannel {
    /// Crée un nouveau canal
    pub fn new(config: ChannelConfig) -> Self {
        let seed = config.error_model.seed;
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Simule la transmission avec erreurs
    pub fn transmit(&mut self, symbols: &[u8]) -> Result<(Vec<u8>, ChannelMetrics)> {
        let mut corrupted = Vec::with_capacity(symbols.len());
        let mut metrics = ChannelMetrics::new();

        let flip_rate = self.config.error_model.flip_rate;
        let jitter = self.config.error_model.jitter;

        for &symbol in symbols {
            let mut out = symbol;

            if jitter > 0 {
                // Gigue douce: glisse vers le neutre sans changer de côté
                let j = self.rng.gen_range(0..=jitter);
                out = if out < 0x80 {
                    out.saturating_add(j).min(0x7F)
                } else {
                    out.saturating_sub(j).max(0x80)
                };
                if out != symbol {
                    metrics.jittered_symbols += 1;
                }
            }

            if self.rng.gen::<f64>() < flip_rate {
                // Inversion de polarité
                out = 0xFF - out;
                metrics.flipped_symbols += 1;
            }

            corrupted.push(out);
        }

        metrics.total_symbols = symbols.len();

        Ok((corrupted, metrics))
    }

    /// Simule plusieurs transmissions du même buffer
    pub fn transmit_iterations(
        &mut self,
        symbols: &[u8],
        n: usize,
    ) -> Vec<Result<(Vec<u8>, ChannelMetrics)>> {
        (0..n).map(|_| self.transmit(symbols)).collect()
    }

    /// Réinitialise le RNG
    pub fn reset_rng(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.config.error_model.seed);
    }
}
