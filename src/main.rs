//! Headless encounter runner
//!
//! Drives a demo session against the engine the way the excluded table UI
//! would: declare stances, advance the round, read the snapshot surface.
//! Outputs text tables or JSON.

use clap::Parser;
use fraymaster::combat::{AutonomousSource, Combatant, Encounter, Stance};
use fraymaster::core::error::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Headless encounter runner - scripted rounds over a demo roster
#[derive(Parser, Debug)]
#[command(name = "fraymaster")]
#[command(about = "Run a demo combat session and print the turn order per round")]
struct Args {
    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Number of rounds to advance
    #[arg(long, default_value_t = 3)]
    rounds: u32,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,

    /// Randomly declare stances before each round
    #[arg(long)]
    stances: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "fraymaster=info".to_owned()),
        )
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "session seeded");

    let mut encounter = Encounter::new(demo_roster(seed)?);
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..args.rounds {
        if args.stances {
            let names: Vec<String> = encounter
                .snapshots()
                .into_iter()
                .map(|s| s.name)
                .collect();
            for name in names {
                let stance = Stance::ALL.choose(&mut rng).copied().unwrap_or_default();
                encounter.set_stance(&name, stance)?;
            }
        }

        encounter.advance_round()?;

        match args.format.as_str() {
            "json" => println!("{}", serde_json::to_string_pretty(&encounter.snapshots())?),
            _ => print_round(&encounter),
        }
    }

    Ok(())
}

fn print_round(encounter: &Encounter) {
    println!("--- round {} ---", encounter.round());
    for snap in encounter.snapshots() {
        println!(
            "{:>3}  {:<20} def {:>3}  {}",
            snap.initiative,
            snap.name,
            snap.effective_defense,
            snap.health_track()
        );
    }
}

fn demo_roster(seed: u64) -> Result<Vec<Combatant>> {
    // name, dexterity, wits, hit points, defense, persistent modifier
    let cast: [(&str, i32, i32, i32, i32, i32); 5] = [
        ("Sir Aldren", 3, 3, 8, 1, 0),
        ("Mirelle", 4, 2, 6, 2, 1),
        ("Brother Casca", 2, 4, 7, 1, 0),
        ("Tavern Tough", 3, 2, 5, 0, 0),
        ("Tavern Tough 2", 3, 2, 5, 0, 0),
    ];

    cast.into_iter()
        .enumerate()
        .map(|(i, (name, dexterity, wits, hit_points, defense, modifier))| {
            Combatant::new(
                name,
                dexterity,
                wits,
                hit_points,
                defense,
                Box::new(AutonomousSource::seeded(seed.wrapping_add(i as u64))),
            )
            .map(|c| c.with_persistent_modifier(modifier))
        })
        .collect()
}
