#![forbid(unsafe_code)]
use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use permanence::{io, model::QueryWindow, planning, storage};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planning d'astreinte (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculer le planning effectif sur une fenêtre
    Render {
        /// Fichier JSON de rotation
        #[arg(long)]
        schedule: String,
        /// Fichier JSON d'overrides
        #[arg(long)]
        overrides: String,
        /// Borne basse de la fenêtre (RFC3339 UTC)
        #[arg(long)]
        from: String,
        /// Borne haute, exclue (RFC3339 UTC)
        #[arg(long)]
        until: String,
        /// Export JSON (écriture atomique) au lieu de stdout
        #[arg(long)]
        out_json: Option<String>,
        /// Export CSV
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Convertir des overrides CSV en JSON
    ImportOverrides {
        #[arg(long)]
        csv: String,
        /// Fichier JSON de sortie
        #[arg(long)]
        out: String,
    },

    /// Vérifier la configuration et les overrides
    Check {
        /// Fichier JSON de rotation
        #[arg(long)]
        schedule: String,
        /// Fichier JSON d'overrides (optionnel)
        #[arg(long)]
        overrides: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let code = match cli.cmd {
        Commands::Render {
            schedule,
            overrides,
            from,
            until,
            out_json,
            out_csv,
        } => {
            let rotation = io::load_rotation_json(schedule)?;
            let overrides = io::load_overrides_json(overrides)?;
            let from: DateTime<Utc> = from.parse()?;
            let until: DateTime<Utc> = until.parse()?;

            let entries =
                planning::render_schedule(&rotation, &overrides, QueryWindow::new(from, until))?;

            let mut exported = false;
            if let Some(path) = out_json {
                storage::write_schedule_json(path, &entries)?;
                exported = true;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &entries)?;
                exported = true;
            }
            if !exported {
                println!("{}", io::schedule_to_json(&entries)?);
            }
            0
        }
        Commands::ImportOverrides { csv, out } => {
            let overrides = io::import_overrides_csv(csv)?;
            let json = serde_json::to_string_pretty(&overrides)?;
            std::fs::write(&out, json)?;
            println!("{} override(s) written to {}", overrides.len(), out);
            0
        }
        Commands::Check {
            schedule,
            overrides,
        } => {
            let rotation = io::load_rotation_json(schedule)?;
            planning::validate_rotation(&rotation)?;

            let mut degenerate = 0usize;
            if let Some(path) = overrides {
                for ov in io::load_overrides_json(path)? {
                    if ov.is_degenerate() {
                        eprintln!(
                            "warning: degenerate override for {} ({} >= {}), ignored",
                            ov.user.as_str(),
                            ov.start_at.to_rfc3339(),
                            ov.end_at.to_rfc3339()
                        );
                        degenerate += 1;
                    }
                }
            }

            if degenerate == 0 {
                println!("OK: configuration valid");
                0
            } else {
                eprintln!("Found {degenerate} degenerate override(s)");
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
    };

    std::process::exit(code);
}
