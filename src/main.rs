use clap::Parser;
use portfolio_site::core::ConfigProvider;
use portfolio_site::utils::error::{ErrorSeverity, SiteError};
use portfolio_site::utils::{logger, validation::Validate};
use portfolio_site::{
    CliConfig, LocalStorage, PortfolioView, SiteConfig, SiteEngine, StaticSitePipeline,
};
use std::sync::Arc;

fn exit_with(e: &SiteError) -> ! {
    tracing::error!(
        "❌ Site build failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting portfolio-site");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading site file: {}", path);
            SiteConfig::from_file(path).unwrap_or_else(|e| exit_with(&e))
        }
        None => SiteConfig::default(),
    };
    cli.apply_overrides(&mut config);

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let store = Arc::new(config.content_store().unwrap_or_else(|e| exit_with(&e)));
    let options = config.page_options(&store);
    tracing::info!(
        "✅ Content ready: {} project(s), {} skill(s), nav offset {}px",
        store.projects().len(),
        store.skills().len(),
        options.nav_offset
    );

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        let view = PortfolioView::with_active(&store, &options, config.initial_section());
        let page = view.render();
        println!(
            "Would write {} bytes to {}/{}",
            page.len(),
            config.output_path(),
            config.page_file()
        );
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path());
    let pipeline = StaticSitePipeline::with_page_options(storage, config, store, options);
    let engine = SiteEngine::new(pipeline);

    match engine.run().await {
        Ok(page_path) => {
            tracing::info!("✅ Site built successfully!");
            println!("✅ Site built successfully!");
            println!("📁 Page saved to: {}", page_path);
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}
