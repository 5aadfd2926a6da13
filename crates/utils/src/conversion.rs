//! Conversions entre buffers de symboles et représentations texte

use fec_core::{FecError, Result, SYMBOL_NEUTRAL};

/// Polarité d'un symbole souple après tranchage dur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPolarity {
    /// Plus proche du rail 0x00
    Zero,
    /// Plus proche du rail 0xFF
    One,
    /// Exactement au point neutre (0x80)
    Neutral,
}

impl SymbolPolarity {
    /// Tranche un symbole souple en polarité dure
    pub fn slice(symbol: u8) -> Self {
        match symbol.cmp(&SYMBOL_NEUTRAL) {
            std::cmp::Ordering::Less => Self::Zero,
            std::cmp::Ordering::Equal => Self::Neutral,
            std::cmp::Ordering::Greater => Self::One,
        }
    }

    /// Décision dure associée (le neutre est arbitrairement un 0)
    pub fn hard_bit(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Zero | Self::Neutral => 0,
        }
    }
}

/// Formate un buffer de symboles en hexadécimal lisible
pub fn format_symbols_hex(symbols: &[u8]) -> String {
    let mut out = String::with_capacity(symbols.len() * 2 + symbols.len() / 16);

    for (i, symbol) in symbols.iter().enumerate() {
        if i > 0 && i % 16 == 0 {
            out.push('\n');
        }
        out.push_str(&format!("{:02x}", symbol));
    }

    out
}

/// Relit un buffer de symboles depuis sa forme hexadécimale
///
/// Les espaces et sauts de ligne sont ignorés.
pub fn parse_symbols_hex(text: &str) -> Result<Vec<u8>> {
    let digits: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();

    if digits.len() % 2 != 0 {
        return Err(FecError::Decoding(format!(
            "Nombre impair de chiffres hexadécimaux: {}",
            digits.len()
        )));
    }

    digits
        .chunks(2)
        .map(|pair| {
            let high = pair[0]
                .to_digit(16)
                .ok_or_else(|| FecError::Decoding(format!("Chiffre invalide: {:?}", pair[0])))?;
            let low = pair[1]
                .to_digit(16)
                .ok_or_else(|| FecError::Decoding(format!("Chiffre invalide: {:?}", pair[1])))?;
            Ok((high * 16 + low) as u8)
        })
        .collect()
}
