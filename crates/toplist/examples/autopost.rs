//! Complete example of autoposting guild counts to top.gg.
//!
//! This example demonstrates:
//! - Building target descriptors from environment tokens
//! - Starting the autopost loop with a stat source
//! - Consuming cycle events
//!
//! Run with:
//! ```bash
//! TOPGG_TOKEN=... BOT_ID=... cargo run --example autopost
//! ```

use async_trait::async_trait;
use std::sync::Arc;
use toplist::{
    AutopostConfig, AutopostEvent, Autoposter, BotList, Dispatcher, DispatcherConfig, PostPayload,
    StatSource, StatSourceError, TargetDescriptor,
};

/// Stand-in for a bot framework's guild cache.
struct DemoSource;

#[async_trait]
impl StatSource for DemoSource {
    async fn stats(&self) -> Result<PostPayload, StatSourceError> {
        Ok(PostPayload::new(1500))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let token = std::env::var("TOPGG_TOKEN")?;
    let bot_id = std::env::var("BOT_ID")?;

    let targets = vec![TargetDescriptor::builder()
        .list(BotList::TopGg)
        .token(token)
        .bot_id(bot_id)
        .build()];

    let dispatcher = Dispatcher::over_http(targets, DispatcherConfig::default())?;
    let autoposter = Autoposter::new(dispatcher, AutopostConfig::default());
    let mut events = autoposter.start(Arc::new(DemoSource)).await?;

    println!("Autoposting every 15 minutes; Ctrl+C to stop.");
    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(AutopostEvent::CycleSuccess(result)) => {
                    println!("posted to {} list(s) at {}", result.outcomes.len(), result.timestamp);
                }
                Some(AutopostEvent::CycleError(result)) => {
                    for (list, outcome) in result.failures() {
                        eprintln!("{list} rejected the post: {outcome:?}");
                    }
                }
                Some(AutopostEvent::StatSourceError(e)) => eprintln!("count unavailable: {e}"),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                autoposter.stop(true).await?;
            }
        }
    }
    Ok(())
}
