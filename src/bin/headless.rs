//! Headless Chimp Test runner.
//!
//! Speaks the line-delimited JSON protocol from `chimp_test::session::protocol`
//! on stdin/stdout. Timers run on the async session clock, so observations
//! arrive on their own when numbers hide or the next round starts.

use anyhow::Result;
use tokio::io::BufReader;

use chimp_test::logging::{self, Fallback};
use chimp_test::session::{serve, AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    logging::init(config.log_path.as_deref(), Fallback::Stderr)?;

    let stdin = BufReader::new(tokio::io::stdin());
    serve(config.engine, stdin, tokio::io::stdout()).await?;
    Ok(())
}
