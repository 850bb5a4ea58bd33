use super::Error;

/// Status and body of a webhook reply, read eagerly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub text: String,
}

impl Response {
    pub fn new(status: u16, text: impl Into<String>) -> Self {
        Response {
            status,
            text: text.into(),
        }
    }

    pub async fn read(value: reqwest::Response) -> Result<Self, Error> {
        let status = value.status().as_u16();

        let text = value
            .text()
            .await
            .map_err(|cause| Error::ReadResponseText { cause })?;

        Ok(Response::new(status, text))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn collect(self) -> Result<String, Error> {
        if self.is_success() {
            Ok(self.text)
        } else {
            Err(Error::Status {
                status: self.status,
                body: self.text,
            })
        }
    }
}
