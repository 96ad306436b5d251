use anyhow::Result;
use clap::Subcommand;
use haven_application::InsightView;
use haven_core::HavenError;
use haven_core::mood::score_label;

use super::context::AppContext;

#[derive(Subcommand)]
pub enum MoodAction {
    /// Record today's mood from 1 (rough) to 5 (great)
    Log {
        score: u8,
        #[arg(long, default_value = "")]
        note: String,
    },
    /// Weekly insight (premium)
    Insight,
    /// Totals over all entries
    Stats,
    /// Recent entries as a bar chart
    Chart,
}

pub async fn run(ctx: &AppContext, action: MoodAction) -> Result<()> {
    let service = ctx.mood();

    match action {
        MoodAction::Log { score, note } => match service.log(score, &note).await {
            Ok(entry) => println!(
                "Logged {} ({}). Thanks for checking in.",
                entry.score,
                score_label(entry.score)
            ),
            Err(HavenError::AlreadyCheckedIn { date }) => {
                println!("You already checked in on {date}. Come back tomorrow.");
            }
            Err(e) => return Err(e.into()),
        },
        MoodAction::Insight => match service.insight().await? {
            InsightView::Locked => {
                println!("Weekly insights are part of Premium: haven premium buy monthly");
            }
            InsightView::NotEnoughData { entries, required } => {
                println!(
                    "Log at least {required} days this week to see an insight ({entries} so far)."
                );
            }
            InsightView::Ready(insight) => {
                println!(
                    "Average {:.1} over {} check-ins this week.",
                    insight.average, insight.entries
                );
                println!("{}", insight.message());
            }
        },
        MoodAction::Stats => {
            let stats = service.stats().await?;
            println!("Entries: {}", stats.total_entries);
            match stats.average {
                Some(average) => println!("Average: {average:.1}"),
                None => println!("Average: -"),
            }
            match stats.best_score {
                Some(best) => println!("Best:    {best} ({})", score_label(best)),
                None => println!("Best:    -"),
            }
        }
        MoodAction::Chart => {
            let points = service.chart().await?;
            if points.is_empty() {
                println!("No mood entries yet. Try: haven mood log 4");
            }
            for point in points {
                println!("{} {} {}", point.label, "█".repeat(point.score as usize), point.score);
            }
        }
    }

    Ok(())
}
