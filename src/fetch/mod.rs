use std::time::{Duration, Instant};

use reqwest::{Client, Error as RequestError};
use tracing::{instrument, Level};

pub fn make_client(timeout: Duration) -> Result<Client, RequestError> {
    Client::builder().gzip(true).timeout(timeout).build()
}

/// Downloads the menu page markup. Non-success statuses are errors; there is no retry.
#[instrument(skip(client), level = Level::DEBUG)]
pub async fn menu_page(client: &Client, url: &str) -> Result<String, RequestError> {
    let start = Instant::now();
    let response = client.get(url).send().await?.error_for_status()?;
    let text = response.text().await?;
    log::debug!("Got text of menu page in \t {:?}", start.elapsed());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_client() {
        assert!(make_client(Duration::from_secs(5)).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_page_is_an_error() {
        let client = make_client(Duration::from_secs(2)).unwrap();
        // nothing listens on the discard port
        let res = menu_page(&client, "http://127.0.0.1:9/restaurante").await;
        assert!(res.is_err());
    }

    #[tokio::test]
    #[ignore = "hits the live restaurant site"]
    async fn test_fetch_menu_page() {
        let client = make_client(Duration::from_secs(30)).unwrap();
        let page = menu_page(&client, "https://www.ufpe.br/restaurante")
            .await
            .unwrap();
        assert!(page.contains("tabs__content"));
    }
}
