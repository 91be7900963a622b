use crate::render::{extract_hrefs, RenderedPage, Renderer};
use crate::RenderError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// User agent sent with every render request
const USER_AGENT: &str = concat!("linkrake/", env!("CARGO_PKG_VERSION"));

/// HTTP-backed renderer
///
/// Fetches the target with redirects followed, so the response URL is the
/// final post-redirect URL, and reads anchor hrefs out of HTML bodies.
/// Non-HTML documents render successfully with an empty href list.
pub struct HttpRenderer {
    client: Client,
}

impl HttpRenderer {
    /// Builds the renderer and its HTTP client.
    ///
    /// `request_timeout` bounds the whole request, body included; the
    /// controller layers its own render deadline on top of this.
    pub fn new(request_timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(request_timeout)
            .connect_timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Renderer for HttpRenderer {
    async fn extract_links(&self, target: &str) -> Result<RenderedPage, RenderError> {
        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|e| classify(target, e))?;

        let status = response.status();
        let final_url = response.url().to_string();

        if !status.is_success() {
            return Err(RenderError::Navigation {
                url: target.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        // Non-HTML documents have no anchors to read; that is an empty
        // result, not a failure.
        if !content_type.is_empty() && !content_type.contains("text/html") {
            tracing::debug!("{}: no link extraction for {}", target, content_type);
            return Ok(RenderedPage {
                final_url,
                hrefs: Vec::new(),
            });
        }

        let body = response.text().await.map_err(|e| classify(target, e))?;

        Ok(RenderedPage {
            final_url,
            hrefs: extract_hrefs(&body),
        })
    }
}

/// Maps a transport error onto the render error taxonomy
fn classify(url: &str, error: reqwest::Error) -> RenderError {
    if error.is_timeout() {
        RenderError::Timeout {
            url: url.to_string(),
        }
    } else {
        RenderError::Network {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_renderer() {
        let renderer = HttpRenderer::new(Duration::from_secs(30));
        assert!(renderer.is_ok());
    }
}
