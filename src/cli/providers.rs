//! CLI command for listing recognized orbit types

use crate::provider::ProviderKey;
use crate::registry::strategy_for;
use clap::Args;
use serde_json::json;

use super::CliError;

/// Providers subcommand
#[derive(Debug, Args)]
pub struct ProvidersCommand {
    /// Output format
    #[arg(long, default_value = "human")]
    format: OutputFormat,
}

/// Output format for the providers command
#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Short human description for a provider
fn describe(key: ProviderKey) -> &'static str {
    match key {
        ProviderKey::BroadcastNav => "daily GPS broadcast navigation file",
        ProviderKey::IgsFinal => "IGS final combined orbits",
        ProviderKey::IgsRapid => "IGS rapid combined orbits",
        ProviderKey::Esa => "ESA final orbits",
        ProviderKey::MultiGnssFinal => "GFZ multi-GNSS final orbits",
        ProviderKey::Jaxa => "JAXA orbits (GPS+GLONASS)",
        ProviderKey::Grg => "CNES/GRG multi-GNSS orbits",
        ProviderKey::Wuhan => "Wuhan University multi-GNSS orbits",
        ProviderKey::GfzRapid => "GFZ rapid multi-GNSS orbits",
        ProviderKey::GfzUltraRapid => "GFZ ultra-rapid orbits (--hour selects the product hour)",
        ProviderKey::IgnMirror => "GFZ multi-GNSS orbits via the IGN mirror",
        ProviderKey::BroadcastRinex3 => "RINEX-3 broadcast file (experimental, not stored)",
    }
}

/// The alias table, as (alias, target token) pairs
const ALIAS_ROWS: [(&str, &str); 4] = [
    ("gps", "nav"),
    ("gnss", "gbm"),
    ("gps+glo", "jax"),
    ("rapid", "gfr"),
];

impl ProvidersCommand {
    /// Execute the providers command
    pub fn execute(&self) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Json => {
                let providers: Vec<_> = ProviderKey::ALL
                    .iter()
                    .map(|key| {
                        let strategy = strategy_for(*key);
                        json!({
                            "token": key.token(),
                            "description": describe(*key),
                            "persisted": strategy.persist(),
                        })
                    })
                    .collect();
                let aliases: Vec<_> = ALIAS_ROWS
                    .iter()
                    .map(|(alias, target)| json!({ "alias": alias, "target": target }))
                    .collect();

                let output = json!({ "providers": providers, "aliases": aliases });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output).map_err(|e| {
                        CliError::InvalidArgument(format!("failed to serialize output: {e}"))
                    })?
                );
            }
            OutputFormat::Human => {
                println!("Orbit types:");
                for key in ProviderKey::ALL {
                    println!("  {:8} {}", key.token(), describe(key));
                }
                println!("\nAliases:");
                for (alias, target) in ALIAS_ROWS {
                    println!("  {alias:8} -> {target}");
                }
            }
        }

        Ok(())
    }
}
