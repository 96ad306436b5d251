use std::sync::Arc;

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use haven_application::PremiumStatus;
use haven_core::subscription::{Plan, product_for_plan};
use haven_interaction::{CheckoutBehavior, SimulatedCheckout};

use super::context::AppContext;

#[derive(Clone, Copy, ValueEnum)]
pub enum PlanArg {
    Monthly,
    Yearly,
}

impl From<PlanArg> for Plan {
    fn from(plan: PlanArg) -> Self {
        match plan {
            PlanArg::Monthly => Plan::Monthly,
            PlanArg::Yearly => Plan::Yearly,
        }
    }
}

/// How the simulated checkout should answer.
#[derive(Clone, Copy, ValueEnum)]
pub enum CheckoutArg {
    Approve,
    Cancel,
    Decline,
    Unavailable,
}

impl From<CheckoutArg> for CheckoutBehavior {
    fn from(arg: CheckoutArg) -> Self {
        match arg {
            CheckoutArg::Approve => CheckoutBehavior::Approve,
            CheckoutArg::Cancel => CheckoutBehavior::Cancel,
            CheckoutArg::Decline => CheckoutBehavior::Decline("card declined".to_string()),
            CheckoutArg::Unavailable => CheckoutBehavior::Unavailable,
        }
    }
}

#[derive(Subcommand)]
pub enum PremiumAction {
    /// Show plan and next billing date
    Status,
    /// Buy a plan through the simulated checkout
    Buy {
        #[arg(value_enum)]
        plan: PlanArg,
        #[arg(long, value_enum, default_value = "approve")]
        checkout: CheckoutArg,
    },
    /// Restore a previous purchase
    Restore,
    /// List products
    Products,
}

pub async fn run(ctx: &AppContext, action: PremiumAction) -> Result<()> {
    let checkout = match &action {
        PremiumAction::Buy { checkout, .. } => (*checkout).into(),
        _ => CheckoutBehavior::Approve,
    };
    let service = ctx.subscription(Arc::new(SimulatedCheckout::new(checkout)));

    match action {
        PremiumAction::Status => print_status(&service.status().await?),
        PremiumAction::Buy { plan, .. } => {
            let product = product_for_plan(plan.into());
            if service.purchase(product.product_id).await? {
                println!("Welcome to Premium! {} is active.", product.title);
                print_status(&service.status().await?);
            } else {
                println!("Checkout cancelled. Nothing was charged.");
            }
        }
        PremiumAction::Restore => {
            let status = service.restore().await?;
            if status.is_premium {
                println!("Purchase restored.");
            } else {
                println!("No previous purchase found.");
            }
            print_status(&status);
        }
        PremiumAction::Products => {
            for product in service.products() {
                println!("{:<24} {:>8}  {}", product.title, product.price, product.description);
            }
        }
    }

    Ok(())
}

fn print_status(status: &PremiumStatus) {
    if !status.is_premium {
        println!("Plan: Free");
        return;
    }
    let plan = status.plan.map(|p| p.to_string()).unwrap_or_else(|| "monthly".into());
    println!("Plan: Premium ({plan})");
    if let Some(started) = status.started_at {
        println!("Since: {}", started.format("%Y-%m-%d"));
    }
    if let Some(next) = status.next_billing_date {
        println!("Next billing: {}", next.format("%Y-%m-%d"));
    }
}
