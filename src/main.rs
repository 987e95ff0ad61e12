use clap::Parser;
use met_search::core::ConfigProvider;
use met_search::utils::{logger, validation::Validate};
use met_search::{CliConfig, LocalStorage, SearchError, SearchSession, SessionReport, TomlConfig};
use tokio::io::BufReader;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting met-search");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match cli.config.clone() {
        Some(path) => match TomlConfig::from_file(&path) {
            Ok(file_config) => run(&file_config, &cli).await,
            Err(e) => Err(e),
        },
        None => run(&cli, &cli).await,
    };

    match result {
        Ok((report, page_path)) => {
            tracing::info!(
                "✅ {} of {} searches rendered an image",
                report.succeeded.len(),
                report.total()
            );
            println!("📁 Page saved to: {}", page_path);
            if report.all_failed() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!("❌ met-search failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

async fn run<C: ConfigProvider + Validate>(
    config: &C,
    cli: &CliConfig,
) -> Result<(SessionReport, String), SearchError> {
    // 驗證配置
    config.validate()?;

    let storage = LocalStorage::new(config.output_path().to_string());
    let mut session = SearchSession::from_config(config, storage)?;

    let mut submissions = cli
        .terms
        .iter()
        .map(|term| session.submit(term))
        .collect::<Vec<_>>();

    if cli.interactive {
        tracing::info!("Reading search terms from stdin, one per line");
        let from_stdin = session
            .submit_lines(BufReader::new(tokio::io::stdin()))
            .await;
        submissions.extend(from_stdin);
    }

    if submissions.is_empty() {
        tracing::warn!("No search terms given; writing an empty page");
    }

    let report = session.collect(submissions).await;
    for (term, e) in &report.failed {
        eprintln!("❌ {:?}: {}", term.as_str(), e.user_friendly_message());
    }
    for (term, image) in &report.succeeded {
        println!("🖼  {:?} → {}", term.as_str(), image.src);
    }

    let page_path = session.save().await?;
    Ok((report, page_path))
}
