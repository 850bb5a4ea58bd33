use crate::{
    discord::Message,
    http::{Error, Transport},
    prune::{contains_null, prune_nulls},
};
use serde_json::Value;

const WITH_COMPONENTS_QUERY: &str = "with_components=true";

/// Final request URL; component rendering has to be opted into per request.
pub fn target_url(webhook_url: &str, with_components: bool) -> String {
    if !with_components {
        return webhook_url.to_owned();
    }

    let separator = if webhook_url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", webhook_url, separator, WITH_COMPONENTS_QUERY)
}

pub fn payload(message: &Message) -> Result<Value, Error> {
    let value = serde_json::to_value(message).map_err(|cause| Error::Serialize { cause })?;

    let value = prune_nulls(value);
    debug_assert!(!contains_null(&value));

    Ok(value)
}

/// One attempt, no retries. Non-2xx replies come back as [`Error::Status`].
pub async fn deliver(
    transport: &impl Transport,
    webhook_url: &str,
    message: &Message,
    with_components: bool,
) -> Result<(), Error> {
    let body = payload(message)?;
    let url = target_url(webhook_url, with_components);

    log::debug!("posting {} bytes", body.to_string().len());
    let response = transport.post_json(&url, &body).await?;
    let status = response.status;

    response.collect()?;
    log::debug!("webhook answered with {}", status);

    Ok(())
}
