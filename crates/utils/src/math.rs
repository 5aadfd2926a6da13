//! Fonctions mathématiques

/// Nombre de bits différents entre deux buffers d'octets
///
/// Les buffers sont comparés sur la longueur du plus court; les octets
/// excédentaires comptent pour 8 bits d'erreur chacun.
pub fn bit_errors(a: &[u8], b: &[u8]) -> usize {
    let common: usize = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (x ^ y).count_ones() as usize)
        .sum();

    let excess = a.len().abs_diff(b.len()) * 8;
    common + excess
}

/// Taux d'erreur binaire entre un message de référence et sa version décodée
pub fn bit_error_rate(reference: &[u8], decoded: &[u8]) -> f64 {
    if reference.is_empty() {
        return 0.0;
    }
    bit_errors(reference, decoded) as f64 / (reference.len() * 8) as f64
}

/// Nombre de symboles (octets) différents entre deux buffers
pub fn symbol_differences(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b.iter()).filter(|(x, y)| x != y).count() + a.len().abs_diff(b.len())
}
