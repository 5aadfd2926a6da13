//! Tests d'intégration du cycle de vie du décodeur

use fec_core::{encode_bytes, FecError, ViterbiDecoder, TAIL_BITS};
use std::thread;

#[test]
fn test_streaming_updates_then_final_chainback() {
    // Alimentation par lots de tailles variées, chainback unique à la fin
    let message: Vec<u8> = (0..200).map(|i| (i * 23 % 256) as u8).collect();
    let framebits = message.len() * 8;
    let symbols = encode_bytes(&message);

    let mut decoder = ViterbiDecoder::new(framebits + TAIL_BITS).unwrap();
    decoder.init(0).unwrap();

    let mut offset = 0;
    for size in [2usize, 8, 32, 128, 512].iter().cycle() {
        if offset >= symbols.len() {
            break;
        }
        let end = (offset + size).min(symbols.len());
        // Toujours un nombre pair d'octets
        let end = end - (end - offset) % 2;
        decoder.update(&symbols[offset..end]).unwrap();
        offset = end;
    }

    assert_eq!(decoder.recorded_steps(), framebits + TAIL_BITS);
    assert_eq!(decoder.chainback(framebits, 0).unwrap(), message);
}

#[test]
fn test_intermediate_chainback_then_more_updates() {
    // Le chainback ne fige pas l'instance: on peut continuer à empiler
    // des paires après une lecture intermédiaire
    let message = b"lecture intermediaire autorisee";
    let framebits = message.len() * 8;
    let symbols = encode_bytes(message);

    let mut decoder = ViterbiDecoder::new(framebits + TAIL_BITS).unwrap();
    decoder.init(0).unwrap();

    let half = (symbols.len() / 2) & !1;
    decoder.update(&symbols[..half]).unwrap();

    // Lecture partielle, ignorée: on vérifie seulement qu'elle passe
    let partial = decoder.chainback(8, 0);
    assert!(partial.is_ok());

    decoder.update(&symbols[half..]).unwrap();
    assert_eq!(decoder.chainback(framebits, 0).unwrap(), message);
}

#[test]
fn test_rejected_calls_leave_instance_valid() {
    let message = b"instance robuste";
    let framebits = message.len() * 8;
    let symbols = encode_bytes(message);

    let mut decoder = ViterbiDecoder::new(framebits + TAIL_BITS).unwrap();
    decoder.init(0).unwrap();

    // Série d'appels invalides entre deux lots valides
    let half = (symbols.len() / 2) & !1;
    decoder.update(&symbols[..half]).unwrap();

    assert!(matches!(
        decoder.update(&symbols[half..half + 3]),
        Err(FecError::OddSymbolCount { .. })
    ));
    assert!(matches!(
        decoder.chainback(framebits + TAIL_BITS + 1, 0),
        Err(FecError::InsufficientHistory { .. })
    ));
    assert!(matches!(
        decoder.chainback(1, 200),
        Err(FecError::InvalidState { .. })
    ));

    decoder.update(&symbols[half..]).unwrap();
    assert_eq!(decoder.chainback(framebits, 0).unwrap(), message);
}

#[test]
fn test_independent_instances_on_threads() {
    // Deux flux décodés en parallèle donnent exactement le même résultat
    // qu'en séquentiel: les instances ne partagent aucun état mutable
    let messages: Vec<Vec<u8>> = vec![
        (0..150).map(|i| (i * 7 % 256) as u8).collect(),
        (0..150u32).map(|i| (255 - i % 256) as u8).collect(),
    ];

    let sequential: Vec<Vec<u8>> = messages
        .iter()
        .map(|m| {
            let framebits = m.len() * 8;
            let symbols = encode_bytes(m);
            let mut decoder = ViterbiDecoder::new(framebits + TAIL_BITS).unwrap();
            decoder.decode_frame(&symbols, framebits).unwrap()
        })
        .collect();

    let handles: Vec<_> = messages
        .iter()
        .cloned()
        .map(|m| {
            thread::spawn(move || {
                let framebits = m.len() * 8;
                let symbols = encode_bytes(&m);
                let mut decoder = ViterbiDecoder::new(framebits + TAIL_BITS).unwrap();
                decoder.decode_frame(&symbols, framebits).unwrap()
            })
        })
        .collect();

    let parallel: Vec<Vec<u8>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(sequential, parallel);
    for (decoded, message) in sequential.iter().zip(&messages) {
        assert_eq!(decoded, message);
    }
}

#[test]
fn test_nonzero_starting_state() {
    // Un init sur un autre état force le chemin à partir de là: pour un
    // flux encodé depuis l'état 0, la métrique n'est plus nulle
    let message = b"depart impose";
    let framebits = message.len() * 8;
    let symbols = encode_bytes(message);

    let mut decoder = ViterbiDecoder::new(framebits + TAIL_BITS).unwrap();
    decoder.init(21).unwrap();
    let metric = decoder.update(&symbols).unwrap();

    assert!(metric > 0);
}
