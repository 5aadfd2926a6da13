//! Décodeur de Viterbi à maximum de vraisemblance
//!
//! Implémente la récursion add-compare-select sur le treillis à 64 états,
//! avec métriques de chemin en double buffer, mémoire de survivants
//! compactée (un mot de 64 bits par pas de temps) et chainback arrière
//! depuis un état final connu.
//!
//! Cycle de vie: [`ViterbiDecoder::new`] alloue les buffers pour une
//! profondeur maximale déclarée, [`ViterbiDecoder::init`] fixe l'état de
//! départ, un ou plusieurs [`ViterbiDecoder::update`] consomment les
//! paires de symboles reçues, puis [`ViterbiDecoder::chainback`]
//! reconstruit les bits décodés. Un appel rejeté ne modifie jamais
//! l'instance. La libération des buffers est automatique (Drop).
//!
//! Convention de signe: les métriques sont des distances, minimisées.
//! Une paire de symboles parfaitement conforme coûte 0, une paire
//! exactement opposée coûte 510.

use crate::error::{FecError, Result};
use crate::trellis::{Trellis, NUM_STATES, RATE, TAIL_BITS};

// Importer les macros depuis la racine du crate
pub use crate::{log_error, log_operation};

/// Métrique sentinelle des états interdits au départ
const WORST_METRIC: u32 = 1 << 24;

/// Seuil de renormalisation: dès que la meilleure métrique le dépasse,
/// le minimum est soustrait de tous les états. L'écart entre métriques
/// vivantes est borné (tout état est joignable depuis le meilleur chemin
/// en 6 pas, soit au plus 6 × 510), donc u32 ne peut pas déborder entre
/// deux renormalisations.
const RENORM_THRESHOLD: u32 = 1 << 20;

/// Décodeur de Viterbi pour le code convolutif K=7, rendement 1/2
///
/// Une instance n'est pas partageable entre threads pendant une passe de
/// décodage; des instances indépendantes peuvent être pilotées en
/// parallèle sans coordination.
#[derive(Debug, Clone)]
pub struct ViterbiDecoder {
    trellis: Trellis,

    /// Profondeur maximale d'historique, en paires de symboles
    capacity: usize,

    /// Métriques de chemin accumulées, double buffer
    metrics: [[u32; NUM_STATES]; 2],

    /// Index du buffer actif dans `metrics`
    current: usize,

    /// Mots de décision: le bit s du mot t indique quel prédécesseur de
    /// l'état s a gagné au pas t (1 = prédécesseur de poids fort)
    decisions: Vec<u64>,

    /// Nombre de pas de temps enregistrés
    cursor: usize,
}

impl ViterbiDecoder {
    /// Crée un décodeur pouvant enregistrer jusqu'à `capacity` paires
    ///
    /// # Erreurs
    /// [`FecError::InvalidCapacity`] si `capacity` est nul.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(FecError::InvalidCapacity(capacity));
        }

        let mut decoder = Self {
            trellis: Trellis::new(),
            capacity,
            metrics: [[0; NUM_STATES]; 2],
            current: 0,
            decisions: vec![0; capacity],
            cursor: 0,
        };

        decoder.reset_metrics(0);
        Ok(decoder)
    }

    /// Réinitialise le décodeur pour une nouvelle passe
    ///
    /// La métrique de `starting_state` passe à 0, celle des 63 autres
    /// états à une valeur sentinelle qui force tout chemin valide à
    /// partir de `starting_state`. Le curseur revient à 0; l'historique
    /// précédent est perdu.
    ///
    /// # Erreurs
    /// [`FecError::InvalidState`] si `starting_state` est hors de [0, 63].
    pub fn init(&mut self, starting_state: usize) -> Result<()> {
        if starting_state >= NUM_STATES {
            return Err(FecError::InvalidState {
                state: starting_state,
                max: NUM_STATES - 1,
            });
        }

        self.reset_metrics(starting_state);
        Ok(())
    }

    fn reset_metrics(&mut self, starting_state: usize) {
        self.metrics[0] = [WORST_METRIC; NUM_STATES];
        self.metrics[0][starting_state] = 0;
        self.current = 0;
        self.cursor = 0;
    }

    /// Consomme un lot de paires de symboles reçues
    ///
    /// `symbols` contient deux octets par paire, chaque octet dans
    /// [0, 255]: 0x00 et 0xFF sont les polarités de confiance maximale,
    /// 0x80 le point neutre. Effectue un pas add-compare-select par
    /// paire, enregistre les décisions de survivants et avance le
    /// curseur. Retourne la meilleure métrique accumulée (plus elle est
    /// basse, plus le chemin survivant colle au flux reçu).
    ///
    /// # Erreurs
    /// - [`FecError::OddSymbolCount`] si `symbols.len()` est impair;
    /// - [`FecError::CapacityExceeded`] si le lot déborderait
    ///   l'historique déclaré à la création.
    ///
    /// Dans les deux cas l'instance n'est pas modifiée.
    pub fn update(&mut self, symbols: &[u8]) -> Result<u32> {
        if symbols.len() % RATE != 0 {
            return Err(FecError::OddSymbolCount {
                len: symbols.len(),
            });
        }

        let npairs = symbols.len() / RATE;
        if self.cursor + npairs > self.capacity {
            return Err(FecError::CapacityExceeded {
                need: npairs,
                have: self.capacity - self.cursor,
            });
        }

        for pair in symbols.chunks_exact(RATE) {
            self.acs_step(pair[0], pair[1]);
        }

        Ok(self.best_metric())
    }

    /// Un pas add-compare-select: papillons sur les 32 paires d'états
    fn acs_step(&mut self, s0: u8, s1: u8) {
        let half = NUM_STATES / 2;
        let (prev, next) = (self.current, self.current ^ 1);
        let mut decision_word = 0u64;

        for i in 0..half {
            // Distance de la branche i -> 2i; les trois autres branches
            // du papillon sont complémentaires
            let bm = self.trellis.branch_metric(i, s0, s1);
            let bm_inv = 2 * 255 - bm;

            let m0 = self.metrics[prev][i] + bm;
            let m1 = self.metrics[prev][i + half] + bm_inv;
            let m2 = self.metrics[prev][i] + bm_inv;
            let m3 = self.metrics[prev][i + half] + bm;

            // Égalité: le prédécesseur de poids faible gagne
            if m1 < m0 {
                self.metrics[next][2 * i] = m1;
                decision_word |= 1 << (2 * i);
            } else {
                self.metrics[next][2 * i] = m0;
            }

            if m3 < m2 {
                self.metrics[next][2 * i + 1] = m3;
                decision_word |= 1 << (2 * i + 1);
            } else {
                self.metrics[next][2 * i + 1] = m2;
            }
        }

        self.current = next;
        self.decisions[self.cursor] = decision_word;
        self.cursor += 1;

        self.renormalize();
    }

    /// Soustrait la métrique minimale de tous les états quand elle
    /// franchit le seuil; l'ordre relatif (et donc toute décision
    /// future) est inchangé.
    fn renormalize(&mut self) {
        let minimum = self.best_metric();
        if minimum < RENORM_THRESHOLD {
            return;
        }

        tracing::debug!(minimum, cursor = self.cursor, "renormalisation des métriques");
        for metric in self.metrics[self.current].iter_mut() {
            *metric -= minimum;
        }
    }

    /// Meilleure (plus basse) métrique accumulée sur les 64 états
    pub fn best_metric(&self) -> u32 {
        self.metrics[self.current]
            .iter()
            .copied()
            .min()
            .unwrap_or(WORST_METRIC)
    }

    /// Nombre de pas de temps enregistrés depuis le dernier init
    pub fn recorded_steps(&self) -> usize {
        self.cursor
    }

    /// Profondeur maximale d'historique déclarée à la création
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Reconstruit `nbits` bits décodés en remontant l'historique
    ///
    /// Part de `endstate` au pas courant et remonte la mémoire de
    /// survivants: à chaque pas le bit de décision de l'état courant est
    /// émis tel quel comme bit décodé, puis l'état recule vers le
    /// prédécesseur désigné. Les bits sont ensuite remis dans l'ordre
    /// chronologique et compactés MSB-first.
    ///
    /// L'appel ne modifie ni les métriques ni l'historique: il peut être
    /// répété, y compris après de nouveaux `update`.
    ///
    /// # Erreurs
    /// - [`FecError::InvalidState`] si `endstate` est hors de [0, 63];
    /// - [`FecError::InsufficientHistory`] si `nbits` dépasse le nombre
    ///   de pas enregistrés.
    pub fn chainback(&self, nbits: usize, endstate: usize) -> Result<Vec<u8>> {
        if endstate >= NUM_STATES {
            return Err(FecError::InvalidState {
                state: endstate,
                max: NUM_STATES - 1,
            });
        }
        if nbits > self.cursor {
            return Err(FecError::InsufficientHistory {
                need: nbits,
                have: self.cursor,
            });
        }

        let mut bits = Vec::with_capacity(nbits);
        let mut state = endstate;

        for step in (self.cursor - nbits..self.cursor).rev() {
            let bit = ((self.decisions[step] >> state) & 1) as u8;
            bits.push(bit);

            state >>= 1;
            if bit != 0 {
                state |= NUM_STATES / 2;
            }
        }

        // Le traceback émet du plus récent au plus ancien
        bits.reverse();
        Ok(crate::bits::pack_bits(&bits))
    }

    /// Décode une trame complète produite par l'encodeur
    ///
    /// Enchaîne init(0), update sur `framebits + 6` paires et chainback
    /// à l'état final 0, la séquence d'appels canonique pour une trame
    /// terminée par les bits de bourrage.
    ///
    /// # Erreurs
    /// [`FecError::Decoding`] si `symbols` n'a pas exactement
    /// `2 * (framebits + 6)` octets, plus les erreurs d'`update` et de
    /// `chainback`.
    pub fn decode_frame(&mut self, symbols: &[u8], framebits: usize) -> Result<Vec<u8>> {
        log_operation!("decode_frame", {
            let expected = RATE * (framebits + TAIL_BITS);
            if symbols.len() != expected {
                return Err(FecError::Decoding(format!(
                    "trame de {} octets de symboles, attendu {}",
                    symbols.len(),
                    expected
                )));
            }

            self.init(0)?;
            let metric = self.update(symbols)?;
            tracing::debug!(framebits, metric, "trame décodée");

            self.chainback(framebits, 0)
        })
    }
}
