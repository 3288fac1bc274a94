use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use bishun::config::Config;
use bishun::services::{ImageGenClient, WordInfoClient};
use bishun::store::{AvatarManager, FileStorage, MasteryStore};
use bishun::ui::app::App;
use bishun::ui::runtime::{run, Services};
use bishun::widget::TerminalWriterFactory;

/// 筆順大冒險 — practice Chinese character stroke order.
#[derive(Debug, Parser)]
#[command(name = "bishun", version)]
struct Args {
    /// Path to the config file (default: platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the data directory holding progress and logs.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Skip the generative services entirely; word cards use the local
    /// fallback content.
    #[arg(long)]
    offline: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(dir) = args.data_dir {
        config.storage.data_dir = Some(dir);
    }

    let data_dir = config.data_dir();
    bishun::logging::init(&data_dir)
        .with_context(|| format!("failed to set up logging in {}", data_dir.display()))?;
    tracing::info!(data_dir = %data_dir.display(), offline = args.offline, "starting");

    let mastery = MasteryStore::load(FileStorage::new(data_dir.clone()));
    let avatar = AvatarManager::load(FileStorage::new(data_dir));
    let app = App::new(mastery, avatar, Box::new(TerminalWriterFactory));

    let services = Services {
        word_info: WordInfoClient::new(config.word_service.clone(), args.offline),
        image_gen: ImageGenClient::new(config.image_service.clone(), args.offline),
    };
    if !services.word_info.is_configured() {
        tracing::info!("word-info service not configured; using fallback content");
    }

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    run(app, services, runtime.handle().clone()).context("UI loop failed")?;

    Ok(())
}
