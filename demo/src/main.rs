//! FAILSAFE Reference Fleet: Demo CLI
//!
//! Runs the operator scenarios against a fictional fleet, or prints the
//! roster and incident log of a seeded fleet.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- emergency-stop
//!   cargo run -p demo -- manual-intervention
//!   cargo run -p demo -- risk-escalation
//!   cargo run -p demo -- roster --seed crates/failsafe-ref-fleet/seeds/warehouse.toml --filter drone
//!   cargo run -p demo -- incidents --limit 5 --json

use std::{error::Error, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use failsafe_contracts::agent::{AgentFilter, AgentKind};
use failsafe_ref_fleet::{
    mock_data::seed_snapshot,
    scenarios::{
        emergency_stop, manual_intervention, print_chain_status, print_incidents, print_roster,
        risk_escalation,
    },
    Fleet, FleetSnapshot,
};

type DemoResult<T = ()> = Result<T, Box<dyn Error>>;

// ── CLI definition ────────────────────────────────────────────────────────────

/// FAILSAFE fleet safety console demo.
///
/// Scenario subcommands drive the safety coordinator the way an operator
/// would. `roster` and `incidents` print the state of a freshly seeded fleet.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "FAILSAFE reference fleet demo",
    long_about = "Runs FAILSAFE operator scenarios showing the confirmed emergency stop,\n\
                  manual interventions, risk-policy auto-stops and incident chain integrity."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three scenarios in sequence.
    RunAll,
    /// Scenario 1: confirmed fleet-wide emergency stop and reset.
    EmergencyStop,
    /// Scenario 2: per-agent pause, quarantine and resume.
    ManualIntervention,
    /// Scenario 3: risk scores evaluated against the reference policy.
    RiskEscalation,
    /// Print the agent roster.
    Roster {
        #[command(flatten)]
        seed: SeedArgs,
        /// Case-insensitive name match, or substring of the agent id.
        #[arg(long)]
        filter: Option<String>,
        /// Restrict to one kind: PHYSICAL, INFO or HYBRID.
        #[arg(long)]
        kind: Option<AgentKind>,
    },
    /// Print the incident log, newest first.
    Incidents {
        #[command(flatten)]
        seed: SeedArgs,
        /// Show at most this many incidents.
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// Print the full hash-chained log as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct SeedArgs {
    /// Fleet snapshot TOML to load instead of the built-in roster.
    #[arg(long)]
    seed: Option<PathBuf>,
}

impl SeedArgs {
    fn load(&self) -> DemoResult<Fleet> {
        let snapshot = match &self.seed {
            Some(path) => {
                debug!(path = %path.display(), "loading fleet snapshot");
                FleetSnapshot::from_file(path)?
            }
            None => seed_snapshot(),
        };
        Ok(Fleet::from_snapshot(snapshot)?)
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug for the coordinator's structured events.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::RunAll => {
            print_banner();
            run_all()
        }
        Command::EmergencyStop => {
            print_banner();
            emergency_stop::run_scenario().map_err(Into::into)
        }
        Command::ManualIntervention => {
            print_banner();
            manual_intervention::run_scenario().map_err(Into::into)
        }
        Command::RiskEscalation => {
            print_banner();
            risk_escalation::run_scenario().map_err(Into::into)
        }
        Command::Roster { seed, filter, kind } => show_roster(&seed, AgentFilter { text: filter, kind }),
        Command::Incidents { seed, limit, json } => show_incidents(&seed, limit, json),
    };

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

// ── Scenario dispatch ─────────────────────────────────────────────────────────

fn run_all() -> DemoResult {
    emergency_stop::run_scenario()?;
    manual_intervention::run_scenario()?;
    risk_escalation::run_scenario()?;
    println!("All scenarios completed successfully.");
    Ok(())
}

// ── Views ─────────────────────────────────────────────────────────────────────

fn show_roster(seed: &SeedArgs, filter: AgentFilter) -> DemoResult {
    let fleet = seed.load()?;
    let summary = fleet.coordinator.fleet_summary();
    let agents = fleet.coordinator.list_agents(&filter);

    println!(
        "Fleet: {} agents | {} running | {} paused | {} stopped | {} quarantined | state {}",
        summary.total,
        summary.running,
        summary.paused,
        summary.stopped,
        summary.quarantined,
        fleet.coordinator.global_state()
    );
    println!();
    print_roster(&agents);
    println!();
    println!("{} of {} agent(s) shown", agents.len(), summary.total);
    Ok(())
}

fn show_incidents(seed: &SeedArgs, limit: usize, json: bool) -> DemoResult {
    let fleet = seed.load()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&fleet.recorder.export_log())?);
        return Ok(());
    }

    print_incidents(&fleet.coordinator.list_incidents(Some(limit)));
    println!();
    print_chain_status(&fleet.recorder);
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("FAILSAFE — Fleet Safety Console");
    println!("Reference Fleet Demo");
    println!("===============================");
    println!();
    println!("Every operator command runs to completion in one step:");
    println!("  [1] Validate: confirmation phrase, agent id, risk score range");
    println!("  [2] Record: one incident appended to the SHA-256 chained log");
    println!("  [3] Mutate: roster statuses updated");
    println!("  [4] Transition: global state NORMAL / PARTIAL_STOP / EMERGENCY_MODE");
    println!();
}
