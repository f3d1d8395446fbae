use clap::Parser;
use shobdo_bisharod::utils::{logger, validation::Validate};
use shobdo_bisharod::{build_checker, CliConfig, OriginError, TomlConfig};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting shobdo-bisharod CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let built = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path).and_then(|toml| {
                toml.validate()?;
                build_checker(&toml)
            })
        }
        None => config.validate().and_then(|_| build_checker(&config)),
    };

    let checker = match built {
        Ok(checker) => checker,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let mut words = config.words.clone();
    if config.stdin {
        if let Err(e) = read_stdin_words(&mut words).await {
            tracing::error!("❌ Failed to read words from stdin: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    }

    if words.is_empty() {
        tracing::warn!("No words supplied; pass words as arguments or use --stdin");
    }

    for word in &words {
        let result = checker.check(Some(word)).await;
        tracing::info!("{} → {} ({})", result.word, result.kind, result.reason);

        let line = if config.pretty {
            serde_json::to_string_pretty(&result)?
        } else {
            serde_json::to_string(&result)?
        };
        println!("{}", line);
    }

    Ok(())
}

/// 每行一個詞；空白行略過
async fn read_stdin_words(words: &mut Vec<String>) -> Result<(), OriginError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if !line.trim().is_empty() {
            words.push(line);
        }
    }
    Ok(())
}
