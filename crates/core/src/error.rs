//! Types d'erreurs pour la bibliothèque FEC

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FecError {
    #[error("Capacité de décodeur invalide: {0} (doit être >= 1 paire de symboles)")]
    InvalidCapacity(usize),

    #[error("État de treillis invalide: {state} (doit être dans [0, {max}])")]
    InvalidState { state: usize, max: usize },

    #[error("Buffer de symboles de longueur impaire: {len} (attendu 2 octets par paire)")]
    OddSymbolCount { len: usize },

    #[error("Capacité d'historique dépassée: besoin de {need} pas, reste {have}")]
    CapacityExceeded { need: usize, have: usize },

    #[error("Historique insuffisant pour le chainback: besoin de {need} pas, avons {have}")]
    InsufficientHistory { need: usize, have: usize },

    #[error("Message trop court: {framebits} bits demandés, {have} bits disponibles")]
    FrameTooShort { framebits: usize, have: usize },

    #[error("Erreur IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erreur de sérialisation: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Erreur de décodage: {0}")]
    Decoding(String),
}

pub type Result<T> = std::result::Result<T, FecError>;
