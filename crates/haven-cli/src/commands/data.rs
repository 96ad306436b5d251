use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Subcommand;
use haven_infrastructure::BackupWriter;

use super::context::AppContext;

#[derive(Subcommand)]
pub enum DataAction {
    /// Write chat, mood and journal data to a JSON backup
    Export {
        /// Target directory (defaults to the current directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Permanently delete chat history, mood logs and the journal
    Reset {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(ctx: &AppContext, action: DataAction) -> Result<()> {
    let service = ctx.data();

    match action {
        DataAction::Export { out } => {
            let bundle = service.export().await?;
            let dir = out.unwrap_or_else(|| PathBuf::from("."));
            let path = BackupWriter::new(dir).write(bundle.file_date(), &bundle).await?;
            println!("Exported to {}", path.display());
        }
        DataAction::Reset { yes } => {
            if !yes {
                bail!("This deletes all chat history, mood logs and journal entries. Re-run with --yes to confirm.");
            }
            service.reset().await?;
            println!("All personal data deleted. Settings and subscription were kept.");
        }
    }

    Ok(())
}
