use anyhow::Result;
use clap::Subcommand;
use haven_core::HavenError;
use haven_core::chat::{ChatMessage, ChatRole, QuotaStatus, chat_locale};

use super::context::AppContext;

#[derive(Subcommand)]
pub enum ChatAction {
    /// Send a message and print the reply
    Send {
        /// Message text
        text: String,
    },
    /// Print the conversation
    History,
    /// Start over from the greeting
    Clear,
    /// Show today's free message allowance
    Quota,
}

pub async fn run(ctx: &AppContext, action: ChatAction) -> Result<()> {
    let service = ctx.chat();

    match action {
        ChatAction::Send { text } => match service.send(&text).await {
            Ok(outcome) => {
                print_message(&outcome.reply);
                if let Some(action) = outcome.smart_action {
                    println!("  → {} (haven tools / {})", action.label, action.view);
                }
                if let Some(remaining) = outcome.remaining() {
                    println!("  {remaining} free messages left today");
                }
            }
            Err(HavenError::QuotaExceeded { limit }) => {
                println!("You've used all {limit} free messages for today.");
                println!("Upgrade for unlimited chat: haven premium buy monthly");
            }
            Err(e) => return Err(e.into()),
        },
        ChatAction::History => {
            let history = service.load().await?;
            for message in &history.messages {
                print_message(message);
            }
            if history.is_only_greeting() {
                let settings = ctx.settings().get().await;
                println!();
                println!("Try: {}", chat_locale(settings.language).quick_replies.join(" | "));
            }
        }
        ChatAction::Clear => {
            service.clear().await?;
            println!("Chat history cleared.");
        }
        ChatAction::Quota => print_quota(&service.quota().await?),
    }

    Ok(())
}

fn print_message(message: &ChatMessage) {
    let who = match message.role {
        ChatRole::User => "You",
        ChatRole::Model if message.is_error => "Anya (!)",
        ChatRole::Model => "Anya",
    };
    println!(
        "[{}] {}: {}",
        message.timestamp.with_timezone(&chrono::Local).format("%H:%M"),
        who,
        message.text
    );
}

fn print_quota(quota: &QuotaStatus) {
    match quota.remaining() {
        None => println!("Premium: unlimited messages."),
        Some(remaining) => println!(
            "{} of {} free messages used today ({} left).",
            quota.used, quota.limit, remaining
        ),
    }
}
