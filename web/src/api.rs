use gloo::net::http::Request;
use jeopardy_core as game;

pub(crate) const DEFAULT_API_BASE: &str = "https://jservice.io";

/// Reads categories from a jservice-compatible HTTP API.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpCategorySource {
    base_url: String,
}

impl HttpCategorySource {
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn category_url(&self, id: game::CategoryId) -> String {
        format!("{}/api/category?id={}", self.base_url, id)
    }
}

impl Default for HttpCategorySource {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

fn fetch_error(id: game::CategoryId, reason: impl ToString) -> game::GameError {
    game::GameError::Fetch {
        id,
        reason: reason.to_string(),
    }
}

impl game::CategorySource for HttpCategorySource {
    async fn fetch_category(&self, id: game::CategoryId) -> game::Result<game::Category> {
        let url = self.category_url(id);
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| fetch_error(id, err))?;
        if !response.ok() {
            return Err(fetch_error(
                id,
                format!("HTTP {} {}", response.status(), response.status_text()),
            ));
        }

        let body = response.text().await.map_err(|err| fetch_error(id, err))?;
        game::parse_category(id, &body)
    }
}
