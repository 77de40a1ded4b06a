use anyhow::Context;
use clap::Parser;
use skip_picker::adapters::storage::split_output_path;
use skip_picker::app::{render_output, PageContext, StepProgress};
use skip_picker::core::{ConfigProvider, Storage};
use skip_picker::utils::error::{ErrorSeverity, SkipError};
use skip_picker::utils::{logger, validation::Validate};
use skip_picker::{CliConfig, DisplaySettings, HttpSkipSource, SkipEngine, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose, cli.log_json);

    tracing::info!("Starting skip-picker");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let exit_code = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            let config = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?;
            let display = cli.display_settings(config.display_settings());
            run(&config, display, &cli).await
        }
        None => {
            let display = cli.display_settings(DisplaySettings::default());
            run(&cli, display, &cli).await
        }
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

async fn run<C: ConfigProvider + Validate>(
    config: &C,
    display: DisplaySettings,
    cli: &CliConfig,
) -> i32 {
    let validated = config.validate().and_then(|_| display.validate()).and_then(|_| {
        match &cli.output {
            Some(output) => skip_picker::utils::validation::validate_path("output", output),
            None => Ok(()),
        }
    });
    if let Err(e) = validated {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        return 1;
    }

    match show_skips(config, display, cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(
                "skip-picker failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            exit_code_for(&e)
        }
    }
}

/// Fetches, applies `--select` toggles and prints or saves the page.
/// Returns 2 when the page ended in its error view.
async fn show_skips<C: ConfigProvider>(
    config: &C,
    display: DisplaySettings,
    cli: &CliConfig,
) -> skip_picker::Result<i32> {
    let source = HttpSkipSource::from_config(config)?;
    tracing::debug!("Using endpoint {}", source.endpoint());

    let engine = SkipEngine::new(source);
    let query = config.location_query();
    let mut page = engine.run(&query).await?;

    for id in &cli.select {
        match page.toggle(*id) {
            Ok(Some(skip)) => tracing::info!("Selected {} (id {})", skip.name, skip.id()),
            Ok(None) => tracing::info!("Selection cleared"),
            Err(e) => tracing::warn!("Ignoring --select {}: {}", id, e),
        }
    }

    let context = PageContext::new(
        query,
        StepProgress::new(display.current_step, display.total_steps),
    );
    let rendered = render_output(display.format, &page, &context)?;

    match &cli.output {
        Some(output) => {
            let (storage, file_name) = split_output_path(output);
            storage.write_file(&file_name, rendered.as_bytes()).await?;
            tracing::info!("Output saved to: {}", output);
            println!("📁 Output saved to: {}", output);
        }
        None => println!("{}", rendered),
    }

    if let Some(selected) = page.selected() {
        tracing::info!(
            "Ready to continue to Permit Check with {} (id {})",
            selected.name,
            selected.id()
        );
    }

    Ok(if page.is_error() { 2 } else { 0 })
}

fn exit_code_for(error: &SkipError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
