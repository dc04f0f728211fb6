use cardtable_core::ImageError;
use std::time::Duration;

pub const DEFAULT_AVATAR_URL: &str = "https://www.gravatar.com/avatar/{hash}?d=monsterid&f=y&s=100";

/// Fetches raw image bytes. Blocking; no retry.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageError>;
}

pub fn avatar_url(template: &str, hash: &str) -> String {
    template.replace("{hash}", hash)
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, ImageError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|err| ImageError::Fetch {
                url: String::new(),
                reason: err.to_string(),
            })?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageError> {
        let fetch_err = |err: reqwest::Error| ImageError::Fetch {
            url: url.to_string(),
            reason: err.to_string(),
        };
        let response = self.client.get(url).send().map_err(fetch_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.bytes().map_err(fetch_err)?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_template_takes_hash() {
        assert_eq!(
            avatar_url(DEFAULT_AVATAR_URL, "abc"),
            "https://www.gravatar.com/avatar/abc?d=monsterid&f=y&s=100"
        );
        assert_eq!(avatar_url("http://x/{hash}/{hash}", "h"), "http://x/h/h");
    }
}
