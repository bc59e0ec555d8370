use serde::{Deserialize, Deserializer};

/// Envelope returned by the batch-analysis endpoint. Absent or `null` keys
/// decode to their zero value; only malformed JSON or wrong types fail.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub result: BatchResult,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub targets: Vec<TargetMetrics>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TargetMetrics {
    #[serde(default, deserialize_with = "null_as_default")]
    pub target: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub domain_rating: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub backlinks: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub refdomains: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub organic_keywords: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub organic_traffic: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl MetricsResponse {
    /// Only the first entry is ever used.
    pub fn into_first_target(self) -> Option<TargetMetrics> {
        self.result.targets.into_iter().next()
    }
}
