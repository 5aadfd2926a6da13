//! Modèles d'erreur pour la simulation

use serde::{Deserialize, Serialize};

/// Modèle d'erreur appliqué à un flux de symboles
///
/// Deux dégradations indépendantes: l'inversion de polarité (un symbole
/// remplacé par son opposé) et la gigue douce (le symbole glisse vers le
/// point neutre sans changer de côté).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorModel {
    /// Probabilité d'inversion de polarité (par symbole)
    pub flip_rate: f64,

    /// Amplitude maximale de la gigue douce, dans [0, 127]
    pub jitter: u8,

    /// Seed pour reproductibilité
    pub seed: u64,
}

impl Default for ErrorModel {
    fn default() -> Self {
        Self {
            flip_rate: 0.01, // 1%
            jitter: 32,
            seed: 42,
        }
    }
}

impl ErrorModel {
    /// Crée un nouveau modèle d'erreur
    pub fn new(flip_rate: f64, jitter: u8) -> Self {
        Self {
            flip_rate,
            jitter,
            seed: 42,
        }
    }

    /// Définit le seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Vérifie si le modèle est valide
    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.flip_rate) && self.jitter <= 127
    }
}
