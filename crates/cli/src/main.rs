//! CLI pour l'encodeur/décodeur convolutif

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

mod commands;
mod display;

use commands::{decode, encode, simulate};

#[derive(Parser)]
#[command(name = "fec")]
#[command(about = "Encodage convolutif K=7 r=1/2 et décodage de Viterbi", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode un fichier en flux de symboles
    Encode {
        /// Fichier d'entrée
        #[arg(short, long)]
        input: PathBuf,

        /// Fichier de symboles de sortie
        #[arg(short, long)]
        output: PathBuf,

        /// Format de sortie des symboles
        #[arg(short, long, value_enum, default_value = "raw")]
        format: SymbolFormat,
    },

    /// Décode un flux de symboles en fichier original
    Decode {
        /// Fichier de symboles d'entrée
        #[arg(short, long)]
        input: PathBuf,

        /// Fichier de sortie
        #[arg(short, long)]
        output: PathBuf,

        /// Taille du message d'origine en octets
        #[arg(short = 'n', long)]
        frame_bytes: usize,

        /// Format du fichier de symboles
        #[arg(short, long, value_enum, default_value = "raw")]
        format: SymbolFormat,
    },

    /// Simule des transmissions bruitées et mesure la correction
    Simulate {
        /// Fichier message de référence
        #[arg(short, long)]
        input: PathBuf,

        /// Probabilité d'inversion d'un symbole (0.0-1.0)
        #[arg(short = 'r', long, default_value = "0.005")]
        flip_rate: f64,

        /// Amplitude de la gigue douce (0-127)
        #[arg(short, long, default_value = "32")]
        jitter: u8,

        /// Nombre d'itérations
        #[arg(short = 'n', long, default_value = "100")]
        iterations: usize,

        /// Seed du canal
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Exporter le rapport en JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum SymbolFormat {
    /// Octets bruts, un par symbole
    Raw,
    /// Hexadécimal lisible
    Hex,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    fec_core::init_logging();

    match cli.command {
        Commands::Encode {
            input,
            output,
            format,
        } => {
            encode::run(input, output, format)?;
        }
        Commands::Decode {
            input,
            output,
            frame_bytes,
            format,
        } => {
            decode::run(input, output, frame_bytes, format)?;
        }
        Commands::Simulate {
            input,
            flip_rate,
            jitter,
            iterations,
            seed,
            json,
        } => {
            simulate::run(input, flip_rate, jitter, iterations, seed, json)?;
        }
    }

    Ok(())
}

/// Crée une barre de progression
pub fn create_progress_bar(length: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(length);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );
    pb.set_message(msg.to_string());
    pb
}

/// Crée une barre de progression spinner
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed_precise}] {msg}")
        .unwrap());
    pb.set_message(msg.to_string());
    pb
}
