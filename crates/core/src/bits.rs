//! Manipulation de bits compactés, poids fort en premier
//!
//! Les buffers de bits décodés et d'entrée de l'encodeur sont des octets
//! compactés MSB-first: le bit 0 du message occupe le bit 7 du premier
//! octet. Cet ordre est celui du format de transmission et ne doit jamais
//! être modifié.

/// Lit le bit d'index `index` (MSB-first) d'un buffer compacté
#[inline]
pub fn get_bit(data: &[u8], index: usize) -> u8 {
    (data[index / 8] >> (7 - (index % 8))) & 1
}

/// Compacte une liste de bits (valeurs 0/1) en octets MSB-first
///
/// Le dernier octet est complété par des zéros si le nombre de bits n'est
/// pas un multiple de 8.
pub fn pack_bits(bits: &[u8]) -> Vec<u8> {
    let mut data = vec![0u8; bits.len().div_ceil(8)];

    for (i, &bit) in bits.iter().enumerate() {
        if bit != 0 {
            data[i / 8] |= 1 << (7 - (i % 8));
        }
    }

    data
}

/// Décompacte `nbits` bits (MSB-first) d'un buffer d'octets
pub fn unpack_bits(data: &[u8], nbits: usize) -> Vec<u8> {
    (0..nbits).map(|i| get_bit(data, i)).collect()
}
