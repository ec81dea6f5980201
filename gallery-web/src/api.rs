use crate::dom;
use gallery_common::FetchError;
use reqwest::{StatusCode, Url};
use tracing::{debug, warn};

/// GET `url` and read the body as text.
///
/// Relative paths resolve against the current page. Non-success statuses,
/// transport failures and unreadable bodies all come back as [`FetchError`].
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let result = get_text(url).await;
    if let Err(e) = &result {
        warn!(%url, "Fetch failed: {e}");
    }
    result
}

async fn get_text(url: &str) -> Result<String, FetchError> {
    let target = absolute_url(url)?;
    debug!(%target, "Fetching");

    let resp = reqwest::get(target).await.map_err(classify)?;
    check_status(resp.status())?;
    resp.text().await.map_err(classify)
}

fn absolute_url(url: &str) -> Result<Url, FetchError> {
    if let Ok(parsed) = Url::parse(url) {
        return Ok(parsed);
    }
    let base = dom::page_url().ok_or(FetchError::Unknown)?;
    Url::parse(&base)
        .and_then(|base| base.join(url))
        .map_err(|e| FetchError::transport(format!("Invalid URL {url}: {e}")))
}

fn check_status(status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::Status(status.as_u16()))
    }
}

fn classify(err: reqwest::Error) -> FetchError {
    if let Some(status) = err.status() {
        return FetchError::Status(status.as_u16());
    }
    if err.is_builder() || err.is_request() || err.is_body() || err.is_decode() || err.is_redirect()
    {
        FetchError::transport(err.to_string())
    } else {
        FetchError::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses_pass() {
        assert_eq!(check_status(StatusCode::OK), Ok(()));
        assert_eq!(check_status(StatusCode::NO_CONTENT), Ok(()));
    }

    #[test]
    fn test_failure_statuses_carry_code() {
        assert_eq!(
            check_status(StatusCode::NOT_FOUND),
            Err(FetchError::Status(404))
        );
        assert_eq!(
            check_status(StatusCode::INTERNAL_SERVER_ERROR).unwrap_err().to_string(),
            "HTTP error, status = 500"
        );
    }

    #[test]
    fn test_absolute_urls_skip_page_lookup() {
        let url =
            absolute_url("https://raw.githubusercontent.com/robopro/x/main/README.md").unwrap();
        assert_eq!(url.host_str(), Some("raw.githubusercontent.com"));
    }
}
