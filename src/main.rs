//! txmerkle CLI - build transaction merkle trees and check membership proofs
//!
//! All results are written to stdout as JSON; logs go to stderr and are
//! controlled with `RUST_LOG`.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use txmerkle::{
    build_full_tree, build_skeleton_tree, Config, Hash, MessageCache, ProofBundle, PublicKey,
    Transaction,
};

#[derive(Parser)]
#[command(name = "txmerkle")]
#[command(about = "Merkle trees over transactions with compact membership proofs")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.config/txmerkle/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (json or text)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical hash of a transaction
    Hash {
        /// JSON file holding one transaction
        transaction: PathBuf,
    },

    /// Build a tree from a JSON array of transactions
    Build {
        /// JSON file holding the transactions
        transactions: PathBuf,
    },

    /// Generate a membership proof for one transaction
    Prove {
        /// JSON file holding the transactions
        transactions: PathBuf,
        /// Hash of the leaf to prove
        #[arg(short, long)]
        leaf: String,
    },

    /// Verify proof bundles against their claimed roots
    Verify {
        /// Proof bundle JSON files
        #[arg(required = true)]
        bundles: Vec<PathBuf>,
    },

    /// Build a tree from leaf hashes and populate it with transactions
    Skeleton {
        /// JSON file holding an array of leaf hashes
        hashes: PathBuf,
        /// JSON file holding transactions to load
        #[arg(short, long)]
        load: Option<PathBuf>,
    },

    /// Create a transaction paying into the configured staking wallet
    Stake {
        /// Source wallet public key (hex)
        #[arg(short, long)]
        source: String,
        /// Amount to stake
        #[arg(short, long)]
        amount: u64,
        /// Tip for the block producer
        #[arg(short, long, default_value = "0")]
        tip: u64,
        /// Signature bytes (hex)
        #[arg(long, default_value = "")]
        signature: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Commands::Hash { transaction } => {
            let tx: Transaction = read_json(&transaction)?;
            output(
                &cli.format,
                &serde_json::json!({
                    "hash": tx.hash().to_hex()
                }),
            );
        }

        Commands::Build { transactions } => {
            let txs: Vec<Transaction> = read_json(&transactions)?;
            let root = build_full_tree(txs)?;
            let leaves: Vec<String> = root.leaves().iter().map(Hash::to_hex).collect();
            output(
                &cli.format,
                &serde_json::json!({
                    "root": root.hash().to_hex(),
                    "depth": root.depth(),
                    "complete": root.is_complete(),
                    "leaves": leaves
                }),
            );
        }

        Commands::Prove { transactions, leaf } => {
            let txs: Vec<Transaction> = read_json(&transactions)?;
            let leaf: Hash = leaf.parse()?;
            let root = build_full_tree(txs)?;
            let bundle = ProofBundle::generate(&root, &leaf)?;
            output(&cli.format, &serde_json::to_value(&bundle)?);
        }

        Commands::Verify { bundles } => {
            let config = Config::load_or_default(cli.config.as_deref())?;
            let seen = MessageCache::new(config.message_cache_capacity)?;

            let mut results = Vec::with_capacity(bundles.len());
            let mut all_valid = true;
            for path in &bundles {
                let bundle: ProofBundle = read_json(path)?;
                if !seen.add(bundle.id()?) {
                    results.push(serde_json::json!({
                        "file": path.display().to_string(),
                        "duplicate": true
                    }));
                    continue;
                }
                let valid = bundle.verify();
                all_valid &= valid;
                results.push(serde_json::json!({
                    "file": path.display().to_string(),
                    "root": bundle.root.to_hex(),
                    "leaf": bundle.leaf.to_hex(),
                    "valid": valid
                }));
            }

            output(
                &cli.format,
                &serde_json::json!({
                    "valid": all_valid,
                    "results": results
                }),
            );
            if !all_valid {
                std::process::exit(1);
            }
        }

        Commands::Skeleton { hashes, load } => {
            let leaf_hashes: Vec<Hash> = read_json(&hashes)?;
            let mut root = build_skeleton_tree(&leaf_hashes)?;

            let mut loaded = Vec::new();
            let mut rejected = Vec::new();
            if let Some(load) = load {
                let txs: Vec<Transaction> = read_json(&load)?;
                for tx in txs {
                    let hash = tx.hash().to_hex();
                    if root.load(tx) {
                        loaded.push(hash);
                    } else {
                        rejected.push(hash);
                    }
                }
            }

            output(
                &cli.format,
                &serde_json::json!({
                    "root": root.hash().to_hex(),
                    "complete": root.is_complete(),
                    "loaded": loaded,
                    "rejected": rejected
                }),
            );
        }

        Commands::Stake {
            source,
            amount,
            tip,
            signature,
        } => {
            let config = Config::load_or_default(cli.config.as_deref())?;
            let staking = config.staking()?;
            let source: PublicKey = source.parse()?;
            let signature = hex::decode(&signature)?;

            let tx = Transaction::staking(&staking, source, amount, tip, signature);
            output(
                &cli.format,
                &serde_json::json!({
                    "hash": tx.hash().to_hex(),
                    "transaction": tx
                }),
            );
        }
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
    Ok(serde_json::from_str(&content)?)
}

fn output(format: &OutputFormat, value: &serde_json::Value) {
    match format {
        OutputFormat::Json => {
            println!("{}", value);
        }
        OutputFormat::Text => {
            println!(
                "{}",
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            );
        }
    }
}
