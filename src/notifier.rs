use crate::{
    config::{Context as RunContext, Environment, Options},
    descriptor::DescriptorLoader,
    http::{self, Transport},
    message, webhook,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Resolve, load, compose, deliver. The transport is only built once the
/// inputs are known to be good, so a bad setup never touches the network.
pub async fn run<T, F>(
    env: &impl Environment,
    loader: &impl DescriptorLoader,
    connect: F,
    now: DateTime<Utc>,
) -> Result<()>
where
    T: Transport,
    F: FnOnce(Option<Duration>) -> Result<T, http::Error>,
{
    let context = RunContext::resolve(env).context("Cannot resolve configuration")?;
    let options =
        Options::load(context.options_path.as_deref()).context("Cannot load options")?;

    log::info!("Reading {}", context.descriptor_path.display());
    let descriptor = loader
        .load(&context.descriptor_path)
        .context("Cannot load the release descriptor")?;

    let message = message::compose(&descriptor, &context, &options, now);

    let transport = connect(options.timeout_secs.map(Duration::from_secs))
        .context("Cannot create the http client")?;

    log::info!("Sending webhook");
    webhook::deliver(
        &transport,
        &context.webhook_url,
        &message,
        options.with_components,
    )
    .await
    .context("Cannot deliver the notification")?;

    log::info!("Webhook sent successfully");
    Ok(())
}
