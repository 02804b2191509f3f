use std::process::ExitCode;

use anyhow::Context;

use relingua::config::load_settings;
use relingua::infrastructure::observability::{TracingConfig, init_tracing};
use relingua::presentation::PipelineAssembly;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let (environment, settings) = load_settings().context("loading settings")?;
    init_tracing(TracingConfig::from_settings(&environment, &settings.logging));

    let assembly = PipelineAssembly::from_settings(&settings)
        .await
        .context("assembling pipeline")?;

    let code = tokio::select! {
        result = assembly.pipeline.run(&assembly.request) => match result {
            Ok(run) => {
                tracing::info!(
                    job = %run.job.name,
                    chunks = run.chunk_count,
                    audio_files = run.audio.len(),
                    skipped = run.skipped.len(),
                    chart = %run.chart_path.display(),
                    "Run finished"
                );
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!(error = %e, exit_code = e.exit_code(), "Run failed");
                ExitCode::from(e.exit_code())
            }
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("Interrupted, abandoning run");
            ExitCode::FAILURE
        }
    };

    Ok(code)
}
