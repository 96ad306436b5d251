use anyhow::Result;
use haven_core::pricing::resolve_price_for_code;

use super::context::AppContext;

pub async fn run(ctx: &AppContext, currency: Option<String>) -> Result<()> {
    let code = match currency {
        Some(code) => code.trim().to_uppercase(),
        None => ctx.settings().get().await.currency.to_string(),
    };

    let quote = resolve_price_for_code(&code);
    println!("Monthly: {}", quote.monthly_display());
    println!("Yearly:  {}", quote.yearly_display());
    if !quote.is_direct {
        println!("(converted from USD at a fixed rate)");
    }
    Ok(())
}
