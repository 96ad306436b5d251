use anyhow::Result;
use clap::Subcommand;

use super::context::AppContext;

#[derive(Subcommand)]
pub enum JournalAction {
    /// Print the draft
    Show,
    /// Replace the draft
    Write { text: String },
    /// Delete the draft
    Clear,
    /// Suggest something to write about
    Prompt,
}

pub async fn run(ctx: &AppContext, action: JournalAction) -> Result<()> {
    let service = ctx.journal();

    match action {
        JournalAction::Show => {
            let draft = service.show().await?;
            if draft.is_empty() {
                println!("Your journal is empty. Need an idea? {}", service.prompt());
            } else {
                println!("{}", draft.text);
                println!("({} words)", draft.word_count());
            }
        }
        JournalAction::Write { text } => {
            let draft = service.write(&text).await?;
            println!("Saved ({} words).", draft.word_count());
        }
        JournalAction::Clear => {
            service.clear().await?;
            println!("Journal cleared.");
        }
        JournalAction::Prompt => println!("{}", service.prompt()),
    }

    Ok(())
}
