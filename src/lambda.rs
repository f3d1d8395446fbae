use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use shobdo_bisharod::utils::{logger, validation::Validate};
use shobdo_bisharod::{build_checker, ClassificationResult, LambdaConfig, WiktionarySource, WordChecker};
use serde::Deserialize;
use std::sync::Arc;

/// 請求內容 `{ "word": ... }`；word 可能缺少或不是字串
#[derive(Deserialize)]
pub struct Request {
    #[serde(default)]
    pub word: Option<serde_json::Value>,
}

async fn function_handler(
    checker: &WordChecker<WiktionarySource>,
    event: LambdaEvent<Request>,
) -> Result<ClassificationResult, Error> {
    let result = checker.check_value(event.payload.word.as_ref()).await;
    tracing::info!(word = %result.word, kind = %result.kind, "Word checked");
    Ok(result)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()?;
    config.validate()?;

    // 詞庫與標記表在第一個請求前載入一次，之後各請求共用
    let checker = Arc::new(build_checker(&config)?);
    tracing::info!("Word checker ready");

    run(service_fn(move |event: LambdaEvent<Request>| {
        let checker = Arc::clone(&checker);
        async move { function_handler(&checker, event).await }
    }))
    .await
}
