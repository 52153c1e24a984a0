// File: src/reachability.rs
// Purpose: Optional check that a well-formed URL actually answers

use url::Url;
use veritas_validation::UrlError;

/// Decides whether a parsed URL is reachable
///
/// Runs only after the format check has passed. Implementations must be
/// shareable across threads because a `Validator` is.
pub trait Reachability: Send + Sync {
    fn check(&self, url: &Url) -> Result<(), UrlError>;
}

/// Probe that sends a `HEAD` request and expects `200 OK`
#[cfg(feature = "reachability")]
pub struct HttpProbe {
    agent: ureq::Agent,
}

#[cfg(feature = "reachability")]
impl HttpProbe {
    pub fn new(timeout: std::time::Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self { agent }
    }
}

#[cfg(feature = "reachability")]
impl Reachability for HttpProbe {
    fn check(&self, url: &Url) -> Result<(), UrlError> {
        tracing::debug!(url = %url, "probing URL");

        match self.agent.head(url.as_str()).call() {
            Ok(response) if response.status() == 200 => Ok(()),
            Ok(response) => Err(UrlError::UnexpectedStatus(response.status())),
            Err(ureq::Error::Status(code, _)) => Err(UrlError::UnexpectedStatus(code)),
            Err(ureq::Error::Transport(transport)) => {
                tracing::warn!(url = %url, error = %transport, "URL probe failed");
                Err(UrlError::Unreachable(transport.to_string()))
            }
        }
    }
}
