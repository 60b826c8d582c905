//! Command-line harness for `rijndael-core`.
//!
//! Every subcommand hands the library exactly one 16-byte key and one 16-byte
//! block at a time; there is no chaining or padding here.

#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rijndael_core::{decrypt_block, encrypt_block, expand_key, Aes128, Aes128Key};

/// Rijndael (AES-128) single-block CLI.
#[derive(Parser)]
#[command(
    name = "rijndael",
    version,
    author,
    about = "Encrypt or decrypt one AES-128 block"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one block.
    Enc {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt one block.
    Dec {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Print the 11 round keys derived from a key.
    Expand {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
    /// Run the built-in known-answer vectors and random round trips.
    Check {
        /// Number of random round trips to run.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a local demo: random key and block, encrypt, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// (key, plaintext, ciphertext) triples checked by `check`.
const KNOWN_ANSWERS: [(&str, &str, &str); 3] = [
    (
        "000102030405060708090a0b0c0d0e0f",
        "00112233445566778899aabbccddeeff",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    ),
    (
        "2b7e151628aed2a6abf7158809cf4f3c",
        "3243f6a8885a308d313198a2e0370734",
        "3925841d02dc09fbdc118597196a0b32",
    ),
    (
        "00000000000000000000000000000000",
        "00000000000000000000000000000000",
        "66e94bd4ef8a2c3b884cfa59ca342b2e",
    ),
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc { key_hex, block_hex } => cmd_enc(&key_hex, &block_hex),
        Commands::Dec { key_hex, block_hex } => cmd_dec(&key_hex, &block_hex),
        Commands::Expand { key_hex } => cmd_expand(&key_hex),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_enc(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = decode_hex(key_hex).context("decode key hex")?;
    let block = decode_hex(block_hex).context("decode block hex")?;
    let ct = encrypt_block(&block, &key).context("encrypt block")?;
    println!("{}", hex::encode(ct));
    Ok(())
}

fn cmd_dec(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = decode_hex(key_hex).context("decode key hex")?;
    let block = decode_hex(block_hex).context("decode block hex")?;
    let pt = decrypt_block(&block, &key).context("decrypt block")?;
    println!("{}", hex::encode(pt));
    Ok(())
}

fn cmd_expand(key_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    for (round, round_key) in expand_key(&key).round_keys().enumerate() {
        println!("{round:2}: {}", hex::encode(round_key));
    }
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    run_known_answers()?;

    let mut rng = seeded_rng(seed);
    for _ in 0..samples {
        let mut key_bytes = [0u8; 16];
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut key_bytes);
        rng.fill_bytes(&mut block);
        let cipher = Aes128::new(&Aes128Key::from(key_bytes));
        if cipher.decrypt(&cipher.encrypt(&block)) != block {
            bail!(
                "round trip failed for key {} block {}",
                hex::encode(key_bytes),
                hex::encode(block)
            );
        }
    }
    println!(
        "ok: {} known-answer vectors, {} random round trips",
        KNOWN_ANSWERS.len(),
        samples
    );
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    rng.fill_bytes(&mut block);

    let ciphertext = encrypt_block(&block, &key_bytes).context("encrypt block")?;
    let decrypted = decrypt_block(&ciphertext, &key_bytes).context("decrypt block")?;

    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext: {}", hex::encode(block));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted: {}", hex::encode(decrypted));
    if decrypted != block {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn run_known_answers() -> Result<()> {
    for (key_hex, pt_hex, ct_hex) in KNOWN_ANSWERS {
        let key = decode_hex(key_hex)?;
        let pt = decode_hex(pt_hex)?;
        let ct = encrypt_block(&pt, &key)?;
        if hex::encode(ct) != ct_hex {
            bail!("known-answer mismatch for key {key_hex}: got {}", hex::encode(ct));
        }
        let back = decrypt_block(&ct, &key)?;
        if back.as_slice() != pt.as_slice() {
            bail!("known-answer decrypt mismatch for key {key_hex}");
        }
    }
    Ok(())
}

/// Decodes hex without checking the length; the library enforces the 16-byte contract.
fn decode_hex(hex_str: &str) -> Result<Vec<u8>> {
    hex::decode(hex_str.trim()).context("invalid hex")
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = decode_hex(hex_str).context("decode key hex")?;
    Ok(Aes128Key::try_from(bytes.as_slice())?)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
