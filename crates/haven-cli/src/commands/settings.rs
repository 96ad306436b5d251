use anyhow::{Context, Result};
use clap::Subcommand;
use haven_core::settings::{Currency, Language, Region, UserSettings};

use super::context::AppContext;

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print the current settings
    Show,
    /// Set the region (GLOBAL, IN, US, UK, CA, AU); also switches currency
    Region { code: String },
    /// Set the display currency (USD, INR, GBP, EUR, CAD, AUD)
    Currency { code: String },
    /// Set the conversation language (en, hi, es, fr, de)
    Language { code: String },
    /// Toggle sound effects
    Sound,
}

pub async fn run(ctx: &AppContext, action: SettingsAction) -> Result<()> {
    let service = ctx.settings();

    let settings = match action {
        SettingsAction::Show => service.get().await,
        SettingsAction::Region { code } => {
            let region: Region = code.parse().with_context(|| format!("Unknown region '{code}'"))?;
            service.set_region(region).await?
        }
        SettingsAction::Currency { code } => {
            let currency: Currency =
                code.parse().with_context(|| format!("Unknown currency '{code}'"))?;
            service.set_currency(currency).await?
        }
        SettingsAction::Language { code } => {
            let language: Language =
                code.parse().with_context(|| format!("Unknown language '{code}'"))?;
            let settings = service.set_language(language).await?;
            if ctx.chat().relocalize(language).await? {
                println!("Greeting updated to {}.", language.native_name());
            }
            settings
        }
        SettingsAction::Sound => service.toggle_sound().await?,
    };

    print_settings(&settings);
    Ok(())
}

fn print_settings(settings: &UserSettings) {
    println!("Region:   {} ({})", settings.region.label(), settings.region);
    println!("Currency: {} {}", settings.currency, settings.currency.symbol());
    println!("Language: {}", settings.language.native_name());
    println!("Sound:    {}", if settings.sound_enabled { "on" } else { "off" });
}
