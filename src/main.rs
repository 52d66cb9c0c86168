//! hottp: send one request through a decorated client pipeline.
//!
//! ```text
//! hottp [--config pipeline.toml] [-X METHOD] [-H 'Name: value']... [-d BODY] URL
//! ```
//!
//! The configuration decides which layers wrap the transport and in what
//! order. Without a config file the defaults apply: request logging inside
//! a 3-attempt retry.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use http::header::{HeaderName, HeaderValue};
use http::Method;
use url::Url;

use hottp::config::{load_config, PipelineConfig};
use hottp::observability::logging::init_logging;
use hottp::{pipeline, CallContext, Canceller, Executor, ReqwestExecutor, Request, SharedExecutor};

#[derive(Parser)]
#[command(name = "hottp")]
#[command(about = "Send an HTTP request through a decorated client pipeline", long_about = None)]
struct Cli {
    /// Pipeline configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Request method
    #[arg(short = 'X', long, default_value = "GET")]
    method: String,

    /// Extra request header, as 'Name: value' (repeatable)
    #[arg(short = 'H', long = "header")]
    headers: Vec<String>,

    /// Request body
    #[arg(short, long)]
    data: Option<String>,

    /// Overall deadline for the call, retries included
    #[arg(long)]
    deadline_secs: Option<u64>,

    /// Target URL
    url: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PipelineConfig::default(),
    };
    init_logging(&config.observability)?;

    let mut request = Request::new(
        Method::from_bytes(cli.method.to_uppercase().as_bytes())?,
        Url::parse(&cli.url)?,
    );
    for raw in &cli.headers {
        let (name, value) = raw
            .split_once(':')
            .ok_or_else(|| format!("malformed header '{raw}', expected 'Name: value'"))?;
        request.headers.append(
            HeaderName::from_bytes(name.trim().as_bytes())?,
            HeaderValue::from_str(value.trim())?,
        );
    }
    if let Some(data) = cli.data {
        request.body = data.into();
    }

    let base: SharedExecutor = Arc::new(ReqwestExecutor::from_config(&config.transport)?);
    let client = pipeline::build(&config, base)?;

    let canceller = Canceller::new();
    let mut ctx = CallContext::new().with_cancel(canceller.token());
    if let Some(secs) = cli.deadline_secs {
        ctx = ctx.with_timeout(Duration::from_secs(secs));
    }
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupt received, cancelling request");
            canceller.cancel();
        }
    });

    let response = client.execute(&ctx, &mut request).await?;

    tracing::info!(status = %response.status, url = %request.url, "Request complete");
    println!("{}", response.status);
    println!("{}", response.text());

    if !response.is_success() {
        return Err(format!("request failed with status {}", response.status).into());
    }
    Ok(())
}
