//! Système de logging pour FEC Core

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise le système de logging
///
/// Le niveau se pilote par la variable d'environnement RUST_LOG
/// (ex: `RUST_LOG=fec_core=debug` pour tracer les renormalisations).
pub fn init_logging() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

/// Macro pour le logging des opérations critiques
#[macro_export]
macro_rules! log_operation {
    ($name:expr, $block:block) => {{
        let span = tracing::span!(tracing::Level::INFO, $name);
        let _enter = span.enter();
        tracing::info!("Opération démarrée: {}", $name);
        let result = $block;
        tracing::info!("Opération terminée: {}", $name);
        result
    }};
}

/// Macro pour le logging des erreurs
#[macro_export]
macro_rules! log_error {
    ($error:expr) => {{
        tracing::error!("Erreur: {}", $error);
        $error
    }};
}
