//! truth-table: evaluate every bootstrapped gate on encrypted inputs
//!
//! Run with: cargo run --release --example truth_table -- --params testing
//!
//! Generates a key pair, encrypts all input combinations, evaluates each
//! gate under the cloud key and prints the decrypted truth tables next to
//! the expected ones.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use eyre::{Context, Result};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use torus_gates::{
    boots_mux, decrypt_bit, encrypt_bit, generate_keys, BinaryGate, GateBootstrappingParams,
    TorusSampler,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ParamSet {
    /// Small ring, fast, not secure
    Testing,
    /// n = 500, N = 1024
    Default80bit,
}

#[derive(Parser)]
#[command(name = "truth-table")]
#[command(about = "Print the truth tables of bootstrapped gates")]
#[command(version)]
struct Args {
    /// Parameter set
    #[arg(long, value_enum, default_value = "testing")]
    params: ParamSet,

    /// Random seed for deterministic key generation (optional)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of times each table is evaluated
    #[arg(long, default_value = "1")]
    trials: usize,

    /// Write the cloud key as JSON to this path
    #[arg(long)]
    save_cloud_key: Option<PathBuf>,
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let params = match args.params {
        ParamSet::Testing => GateBootstrappingParams::testing(),
        ParamSet::Default80bit => GateBootstrappingParams::default_80bit(),
    };
    let mut sampler = match args.seed {
        Some(seed) => TorusSampler::with_seed(seed),
        None => TorusSampler::new(),
    };

    let keygen_start = Instant::now();
    let (secret, cloud) = generate_keys(params, &mut sampler)
        .map_err(|e| eyre::eyre!("Invalid parameters: {}", e))?;
    info!("Key generation took {:.2?}", keygen_start.elapsed());

    if let Some(path) = &args.save_cloud_key {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        serde_json::to_writer(BufWriter::new(file), &cloud)
            .with_context(|| "Failed to serialize cloud key")?;
        info!("Cloud key written to {}", path.display());
    }

    let mut result = cloud.new_sample();
    let mut mismatches = 0usize;
    let eval_start = Instant::now();

    for trial in 0..args.trials {
        println!("trial {}", trial);
        println!("{:<6} 00 01 10 11", "gate");

        for gate in BinaryGate::ALL {
            let mut row = String::new();
            for (a, b) in [(false, false), (false, true), (true, false), (true, true)] {
                let ca = encrypt_bit(a, &secret, &mut sampler);
                let cb = encrypt_bit(b, &secret, &mut sampler);
                gate.apply(&mut result, &ca, &cb, &cloud);

                let got = decrypt_bit(&result, &secret);
                if got != gate.eval_plain(a, b) {
                    mismatches += 1;
                    warn!(?gate, a, b, "wrong output");
                }
                row.push_str(if got { " 1 " } else { " 0 " });
            }
            println!("{:<6}{}", format!("{:?}", gate).to_uppercase(), row);
        }

        println!("{:<6} 001 010 101 110", "sbc");
        let mut row = String::new();
        for selector in [false, true] {
            for (b, c) in [(false, true), (true, false)] {
                let cs = encrypt_bit(selector, &secret, &mut sampler);
                let cb = encrypt_bit(b, &secret, &mut sampler);
                let cc = encrypt_bit(c, &secret, &mut sampler);
                boots_mux(&mut result, &cs, &cb, &cc, &cloud);

                let got = decrypt_bit(&result, &secret);
                if got != if selector { b } else { c } {
                    mismatches += 1;
                    warn!(selector, b, c, "wrong MUX output");
                }
                row.push_str(if got { "  1 " } else { "  0 " });
            }
        }
        println!("{:<6}{}", "MUX", row);
        println!();
    }

    info!(
        "Evaluated {} tables in {:.2?}",
        args.trials,
        eval_start.elapsed()
    );

    if mismatches > 0 {
        return Err(eyre::eyre!("{} gate outputs decrypted incorrectly", mismatches));
    }
    info!("All outputs correct");
    Ok(())
}
