//! FEC Core Library
//!
//! Bibliothèque principale pour l'encodage convolutif K=7 rendement 1/2
//! et le décodage de Viterbi à maximum de vraisemblance.

pub mod bits;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod logging;
pub mod trellis;

// Réexportations principales
pub use error::{FecError, Result};
pub use decoder::ViterbiDecoder;
pub use encoder::{encode, encode_bytes, encoded_len};
pub use trellis::{
    Trellis, CONSTRAINT_LENGTH, NUM_STATES, POLY_A, POLY_B, RATE, SYMBOL_NEUTRAL, SYMBOL_ONE,
    SYMBOL_ZERO, TAIL_BITS,
};
pub use logging::init_logging;
// Les macros log_operation et log_error sont automatiquement exportées à la racine du crate
