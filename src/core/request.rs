use crate::utils::error::{MetricsError, Result};
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://api.ahrefs.com/v3/batch-analysis";

pub const SELECT_FIELDS: &str =
    "domain_rating,backlinks,refdomains,organic_keywords,organic_traffic";

/// Builds the batch-analysis query for a single domain. Query values are
/// form-encoded, so a domain can never break out of its parameter.
pub fn build_request_url(api_base: &str, domain: &str) -> Result<Url> {
    let mut url = Url::parse(api_base).map_err(|e| MetricsError::RequestBuildError {
        message: format!("invalid API base URL {}: {}", api_base, e),
    })?;

    url.query_pairs_mut()
        .append_pair("targets", domain)
        .append_pair("mode", "domain")
        .append_pair("select", SELECT_FIELDS);

    Ok(url)
}
