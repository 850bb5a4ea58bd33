use super::{Error, Response, Transport};
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use serde_json::Value;
use std::{ops::Deref, time::Duration};

const USER_AGENT_VALUE: &str = concat!("geode-release-notifier/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct Client(reqwest::Client);

impl Client {
    pub fn new(timeout: Option<Duration>) -> Result<Client, Error> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|cause| Error::BuildClient { cause })?;

        Ok(Client(client))
    }
}

impl Deref for Client {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Transport for Client {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Response, Error> {
        let response = self
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, USER_AGENT_VALUE)
            .json(body)
            .send()
            .await
            .map_err(|cause| Error::Transport { cause })?;

        Response::read(response).await
    }
}
