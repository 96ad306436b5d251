use std::time::Duration;

use anyhow::Result;
use clap::Subcommand;
use haven_core::exercise::{
    BUBBLE_COLUMNS, BalloonField, BreathPhase, BreathingSession, BubbleGrid, FlipOutcome,
    GroundingExercise, GroundingStep, MEMORY_COLUMNS, MemoryMatch, PopOutcome,
};
use haven_core::library::{
    categories, helplines_for, random_affirmation, resources_in, search_therapists,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use super::context::AppContext;

#[derive(Subcommand)]
pub enum ToolsAction {
    /// Guided 4-7-8 breathing
    Breathe {
        #[arg(long, default_value_t = 3)]
        cycles: u32,
    },
    /// 5-4-3-2-1 grounding
    Ground,
    /// A random affirmation
    Affirmation,
    /// Browse the self-help library
    Library {
        #[arg(long)]
        category: Option<String>,
    },
    /// Search the therapist directory by name, language or specialization
    Therapists {
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Crisis helplines for your region
    Helplines,
    /// Pop a sheet of bubble wrap
    Bubbles,
    /// Pop rising balloons before they drift away
    Balloons {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Find the matching pairs
    Memory {
        #[arg(long)]
        seed: Option<u64>,
    },
}

pub async fn run(ctx: &AppContext, action: ToolsAction) -> Result<()> {
    match action {
        ToolsAction::Breathe { cycles } => breathe(cycles).await,
        ToolsAction::Ground => {
            let mut exercise = GroundingExercise::new();
            let mut step = exercise.current();
            while let Some(current) = step {
                print_grounding_step(current);
                tokio::time::sleep(Duration::from_secs(5)).await;
                step = exercise.next();
            }
            println!("Well done. Notice how you feel right now.");
        }
        ToolsAction::Affirmation => println!("{}", random_affirmation(&mut rand::thread_rng())),
        ToolsAction::Library { category } => {
            let is_premium = ctx.is_premium().await;
            let resources = resources_in(category.as_deref());
            if resources.is_empty() {
                println!("No resources in that category. Try one of: {}", categories().join(", "));
            }
            for resource in resources {
                let lock = if resource.is_locked_for(is_premium) { " [premium]" } else { "" };
                println!(
                    "{:<36} {:<12} {:>7}{}",
                    resource.title, resource.category, resource.duration, lock
                );
            }
        }
        ToolsAction::Therapists { query } => {
            let matches = search_therapists(&query);
            if matches.is_empty() {
                println!("No therapists match '{query}'.");
            }
            for therapist in matches {
                println!("{} - {} ({})", therapist.name, therapist.title, therapist.experience);
                println!("    speaks {}", therapist.languages.join(", "));
                println!("    {}", therapist.specializations.join(", "));
                println!(
                    "    ₹{} per session, next available {}",
                    therapist.fee, therapist.next_available
                );
            }
        }
        ToolsAction::Helplines => {
            let settings = ctx.settings().get().await;
            println!("Helplines for {}:", settings.region.label());
            for line in helplines_for(settings.region) {
                println!("  {}: {} ({})", line.name, line.number, line.hours);
            }
        }
        ToolsAction::Bubbles => bubbles().await?,
        ToolsAction::Balloons { seed } => balloons(seeded(seed)).await?,
        ToolsAction::Memory { seed } => memory(seeded(seed)).await?,
    }

    Ok(())
}

async fn breathe(cycles: u32) {
    let mut session = BreathingSession::new();
    session.start();
    print_phase(session.phase());

    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    ticker.tick().await;
    while session.cycles() < cycles {
        ticker.tick().await;
        if let Some(phase) = session.tick() {
            if session.cycles() >= cycles {
                break;
            }
            print_phase(phase);
        }
    }
    session.stop();
    println!("Done: {cycles} cycles.");
}

fn print_phase(phase: BreathPhase) {
    println!("{} ({}s)", phase.instruction(), phase.duration());
}

fn print_grounding_step(step: &GroundingStep) {
    println!("{} - {}", step.count, step.title);
    println!("    {}", step.prompt);
}

fn seeded(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}

fn input() -> Lines<BufReader<Stdin>> {
    BufReader::new(tokio::io::stdin()).lines()
}

/// Next trimmed input line. `None` on end of input or `q`.
async fn prompt(lines: &mut Lines<BufReader<Stdin>>, text: &str) -> Result<Option<String>> {
    println!("{text}");
    let Some(line) = lines.next_line().await? else {
        return Ok(None);
    };
    let line = line.trim().to_string();
    Ok((line != "q").then_some(line))
}

async fn bubbles() -> Result<()> {
    let mut grid = BubbleGrid::new();
    let mut lines = input();
    loop {
        for (row, bubbles) in grid.rows().enumerate() {
            let cells: Vec<String> = bubbles
                .iter()
                .enumerate()
                .map(|(col, popped)| {
                    if *popped {
                        "  .".to_string()
                    } else {
                        format!("{:>3}", row * BUBBLE_COLUMNS + col)
                    }
                })
                .collect();
            println!("{}", cells.join(" "));
        }

        let Some(line) = prompt(&mut lines, "Bubble number, r to reset, q to quit:").await?
        else {
            return Ok(());
        };
        if line == "r" {
            grid.reset();
            continue;
        }
        let Ok(index) = line.parse::<usize>() else {
            continue;
        };
        match grid.pop(index) {
            Ok(PopOutcome::Cleared) => {
                println!("All cleared! Feels good, right? Here's a fresh sheet.");
                grid.reset();
            }
            Ok(PopOutcome::Popped) => println!("pop!"),
            Ok(PopOutcome::AlreadyPopped) => {}
            Err(e) => println!("{e}"),
        }
    }
}

/// Balloons keep rising in real time between inputs.
async fn balloons(mut rng: StdRng) -> Result<()> {
    let mut field = BalloonField::new();
    let mut lines = input();
    let mut last = tokio::time::Instant::now();
    loop {
        let now = tokio::time::Instant::now();
        field.elapse(now - last, &mut rng);
        last = now;

        println!("Score: {}", field.score());
        if field.balloons().is_empty() {
            println!("  (no balloons yet, press enter to wait)");
        }
        for balloon in field.balloons() {
            println!(
                "  {:>3}: {} balloon {:.0}% up",
                balloon.id,
                balloon.color,
                (110.0 - balloon.y).max(0.0)
            );
        }

        let Some(line) = prompt(&mut lines, "Balloon id to pop, q to quit:").await? else {
            break;
        };
        let Ok(id) = line.parse::<u64>() else {
            continue;
        };

        let now = tokio::time::Instant::now();
        field.elapse(now - last, &mut rng);
        last = now;
        if field.pop(id) {
            println!("pop! Thought released.");
        } else {
            println!("That one already drifted away.");
        }
    }

    println!("Final score: {}", field.score());
    Ok(())
}

async fn memory(mut rng: StdRng) -> Result<()> {
    let mut game = MemoryMatch::new(&mut rng);
    let mut lines = input();
    while !game.is_complete() {
        for (row, cards) in game.cards().chunks(MEMORY_COLUMNS).enumerate() {
            let cells: Vec<String> = cards
                .iter()
                .enumerate()
                .map(|(col, card)| {
                    if card.face_up || card.matched {
                        format!("{:>6}", card.icon)
                    } else {
                        format!("{:>6}", row * MEMORY_COLUMNS + col)
                    }
                })
                .collect();
            println!("{}", cells.join(" "));
        }

        let Some(line) = prompt(&mut lines, "Card number, q to quit:").await? else {
            return Ok(());
        };
        let Ok(index) = line.parse::<usize>() else {
            continue;
        };
        match game.flip(index) {
            Ok(FlipOutcome::Match) => println!("A match!"),
            Ok(FlipOutcome::Mismatch) => {
                let shown: Vec<&str> = game
                    .cards()
                    .iter()
                    .filter(|c| c.face_up && !c.matched)
                    .map(|c| c.icon)
                    .collect();
                println!("{} - not a pair.", shown.join(" and "));
                tokio::time::sleep(Duration::from_secs(1)).await;
                game.resolve();
            }
            Ok(FlipOutcome::First | FlipOutcome::Ignored) => {}
            Err(e) => println!("{e}"),
        }
    }

    println!("Sharp mind! Finished in {} moves.", game.moves());
    Ok(())
}
