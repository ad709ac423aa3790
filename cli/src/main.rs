// SPDX-License-Identifier: CC0-1.0

//! `bchaddr`: convert Bitcoin Cash addresses between CashAddr and legacy form.
//!
//! # Examples
//!
//! ```text
//! $ bchaddr convert 12gLdGD5q5KdWViDtq3MouheF9PJr8HmB1
//! network:  mainnet
//! type:     p2pkh
//! hash:     1268bb083ae0f2ed74fc45923f4eccfa12240050
//! cashaddr: bitcoincash:qqfx3wcg8ts09mt5l3zey06wenapyfqq2qrcyj5x0s
//! legacy:   12gLdGD5q5KdWViDtq3MouheF9PJr8HmB1
//!
//! $ bchaddr network qph2v4mkxjgdqgmlyjx6njmey0ftrxlnggt9t0a6zy
//! testnet
//! ```
//!
//! Extra networks can be loaded with `--networks FILE`, a JSON array of profiles:
//!
//! ```text
//! [{"id": "ecash", "cashaddr_prefix": "ecash", "p2pkh_version": 0, "p2sh_version": 5}]
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use addresses::{Address, AddressType, NetworkProfile, NetworkRegistry};
use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use hex::{DisplayHex, FromHex};
use serde::Serialize;

/// Convert Bitcoin Cash addresses between CashAddr and legacy form.
#[derive(Parser, Debug)]
#[command(name = "bchaddr", version, about, long_about = None)]
struct Args {
    /// JSON file of extra network profiles, searched after the built-in ones.
    #[arg(long, value_name = "FILE", global = true)]
    networks: Option<PathBuf>,

    /// More log output, repeat for more.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// No log output.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse an address and print it in every form.
    Convert {
        /// The address, CashAddr (prefix optional) or legacy.
        address: String,

        /// Only accept addresses for this network id.
        #[arg(long, value_name = "ID")]
        network: Option<String>,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Print the id of the network an address belongs to.
    Network {
        /// The address, CashAddr (prefix optional) or legacy.
        address: String,
    },
    /// Build an address from a hash.
    Encode {
        /// Network id.
        #[arg(long, value_name = "ID")]
        network: String,

        /// Address type.
        #[arg(long = "type", value_name = "TYPE", default_value = "p2pkh")]
        kind: AddressType,

        /// The hash in hex.
        hash: String,
    },
}

/// Everything `convert` reports about an address.
#[derive(Serialize, Debug, PartialEq, Eq)]
struct Report {
    network: String,
    #[serde(rename = "type")]
    kind: String,
    hash: String,
    cashaddr: String,
    legacy: String,
}

impl Report {
    fn new(address: &Address) -> Self {
        Report {
            network: address.network().id().to_owned(),
            kind: address.address_type().to_string(),
            hash: address.hash().to_lower_hex_string(),
            cashaddr: address.to_cashaddr(),
            legacy: address.to_base58(),
        }
    }

    fn write_text(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "network:  {}", self.network)?;
        writeln!(out, "type:     {}", self.kind)?;
        writeln!(out, "hash:     {}", self.hash)?;
        writeln!(out, "cashaddr: {}", self.cashaddr)?;
        writeln!(out, "legacy:   {}", self.legacy)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    stderrlog::new()
        .quiet(args.quiet)
        .verbosity(usize::from(args.verbose) + 1)
        .timestamp(stderrlog::Timestamp::Off)
        .init()
        .context("failed to initialise logging")?;

    let stdout = io::stdout();
    run(args, &mut stdout.lock())
}

fn run(args: Args, out: &mut impl Write) -> Result<()> {
    let registry = load_registry(args.networks.as_deref())?;

    match args.command {
        Command::Convert { address, network, json } => {
            let address = match network {
                Some(id) => Address::from_text_for(&address, registry.require(&id)?),
                None => Address::from_text(&address, &registry),
            }
            .with_context(|| format!("invalid address {}", address))?;

            let report = Report::new(&address);
            if json {
                serde_json::to_writer_pretty(&mut *out, &report)?;
                writeln!(out)?;
            } else {
                report.write_text(out)?;
            }
        }
        Command::Network { address } => match Address::network_of(&address, &registry) {
            Some(network) => writeln!(out, "{}", network.id())?,
            None => bail!("no registered network matches {}", address),
        },
        Command::Encode { network, kind, hash } => {
            let network = registry.require(&network)?;
            let hash = Vec::<u8>::from_hex(&hash).context("hash is not valid hex")?;
            let address = Address::new(network, kind, &hash)?;
            writeln!(out, "{}", address.to_cashaddr())?;
            writeln!(out, "{}", address.to_base58())?;
        }
    }
    Ok(())
}

/// Returns the built-in networks followed by any loaded from `path`.
fn load_registry(path: Option<&Path>) -> Result<NetworkRegistry> {
    let registry = NetworkRegistry::builtin();
    let path = match path {
        Some(path) => path,
        None => return Ok(registry),
    };

    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read network profiles from {}", path.display()))?;
    let extra: Vec<NetworkProfile> = serde_json::from_str(&json)
        .with_context(|| format!("invalid network profiles in {}", path.display()))?;
    log::info!("loaded {} network profiles from {}", extra.len(), path.display());

    Ok(registry.extend_with(extra)?)
}
