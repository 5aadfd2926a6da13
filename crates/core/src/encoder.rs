//! Encodeur convolutif K=7, rendement 1/2
//!
//! Parcourt le treillis vers l'avant depuis l'état 0 en consommant les
//! bits du message (compactés MSB-first), puis ajoute les 6 bits de
//! bourrage à zéro qui ramènent le registre à l'état 0. Chaque bit
//! d'entrée produit une paire de symboles durs (0x00 ou 0xFF), dans la
//! même convention de polarité que celle attendue par le décodeur.

use crate::bits;
use crate::error::{FecError, Result};
use crate::trellis::{self, RATE, TAIL_BITS};

/// Nombre d'octets de symboles produits pour un message de `framebits` bits
#[inline]
pub fn encoded_len(framebits: usize) -> usize {
    RATE * (framebits + TAIL_BITS)
}

/// Encode `framebits` bits de `data` (compactés MSB-first)
///
/// Retourne `2 * (framebits + 6)` octets de symboles, bourrage compris.
/// L'état terminal du treillis est toujours 0.
///
/// # Erreurs
/// [`FecError::FrameTooShort`] si `data` contient moins de `framebits` bits.
pub fn encode(data: &[u8], framebits: usize) -> Result<Vec<u8>> {
    if framebits > data.len() * 8 {
        return Err(FecError::FrameTooShort {
            framebits,
            have: data.len() * 8,
        });
    }

    let mut channel = Vec::with_capacity(encoded_len(framebits));
    let mut state = 0usize;

    for i in 0..framebits + TAIL_BITS {
        let bit = if i < framebits { bits::get_bit(data, i) } else { 0 };

        let (a, b) = trellis::expected_pair(state, bit);
        channel.push(a);
        channel.push(b);

        state = trellis::next_state(state, bit);
    }

    Ok(channel)
}

/// Encode un message d'octets entiers (framebits = 8 × longueur)
pub fn encode_bytes(data: &[u8]) -> Vec<u8> {
    // Ne peut pas échouer: framebits est exactement la taille du buffer
    encode(data, data.len() * 8).expect("framebits cohérent avec data")
}
