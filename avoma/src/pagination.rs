//! Cursor pagination: the list envelope and the opt-in loop that walks `next` links.

use std::collections::HashSet;

use log::*;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::error::{schema_error, Error};
use crate::http::{HttpClient, QueryParams};
use crate::schema::validate;

/// One page of a listing as returned by the server.
///
/// `next` and `previous` are kept as the literal strings the server sent so
/// that following a link never re-encodes its cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Checks a page as received from the server: it cannot hold more results
    /// than its `count`, and its links must be absolute http(s) URLs.
    fn check_page(&self) -> Result<(), Error> {
        if self.results.len() as u64 > self.count {
            return Err(schema_error(
                "count",
                &format!(
                    "page holds {} results but reports a count of {}",
                    self.results.len(),
                    self.count
                ),
            ));
        }
        check_link("next", self.next.as_deref())?;
        check_link("previous", self.previous.as_deref())
    }
}

fn check_link(path: &str, link: Option<&str>) -> Result<(), Error> {
    let Some(link) = link else {
        return Ok(());
    };
    match Url::parse(link) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => {
            warn!("Pagination link `{}` is not an absolute URL: {}", path, link);
            Err(schema_error(
                path,
                &format!("expected an absolute http(s) URL, got `{}`", link),
            ))
        }
    }
}

/// Validates one page of a listing, envelope included.
pub(crate) fn validate_page<T: DeserializeOwned>(
    value: Value,
) -> Result<PaginatedResponse<T>, Error> {
    let page: PaginatedResponse<T> = validate(value)?;
    page.check_page()?;
    Ok(page)
}

/// Fetches the first page of a listing and, when `follow` is set, every page
/// after it.
pub(crate) async fn list<T: DeserializeOwned>(
    http: &HttpClient,
    path: &str,
    params: &QueryParams,
    follow: bool,
) -> Result<PaginatedResponse<T>, Error> {
    let first: PaginatedResponse<T> =
        validate_page(http.request(Method::GET, path, Some(params), None).await?)?;

    if follow {
        follow_pages(http, first).await
    } else {
        Ok(first)
    }
}

/// Fetches the page behind an absolute pagination link.
pub(crate) async fn fetch_page<T: DeserializeOwned>(
    http: &HttpClient,
    url: &str,
) -> Result<PaginatedResponse<T>, Error> {
    validate_page(http.request(Method::GET, url, None, None).await?)
}

/// Walks `next` links until exhausted and merges every page into one response.
///
/// The merged `count` is the first page's count, results keep page order and
/// both links are cleared. A link that was already fetched fails the walk
/// instead of looping.
pub(crate) async fn follow_pages<T: DeserializeOwned>(
    http: &HttpClient,
    first: PaginatedResponse<T>,
) -> Result<PaginatedResponse<T>, Error> {
    let PaginatedResponse {
        count,
        mut next,
        results: mut accumulated,
        ..
    } = first;
    let mut visited = HashSet::new();
    let mut pages = 1;

    while let Some(url) = next.take() {
        if !visited.insert(url.clone()) {
            warn!("Pagination link {} was already fetched", url);
            return Err(schema_error(
                "next",
                &format!("pagination link `{}` repeats an earlier page", url),
            ));
        }
        debug!("Following pagination link {} (page {})", url, pages + 1);
        let page = fetch_page::<T>(http, &url).await?;
        accumulated.extend(page.results);
        next = page.next;
        pages += 1;
    }

    if pages > 1 {
        info!(
            "Collected {} results across {} pages (server count {})",
            accumulated.len(),
            pages,
            count
        );
    }

    Ok(PaginatedResponse {
        count,
        next: None,
        previous: None,
        results: accumulated,
    })
}
