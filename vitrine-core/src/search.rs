use serde::{Deserialize, Serialize};
use vitrine_catalog::Product;

use crate::{CoreError, CoreResult};

pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 50;

/// Raw query-string parameters. Kept as strings so that bad numbers fall
/// back to defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Normalized keyword search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// As supplied, trimmed
    pub query: String,
    /// Lower-cased form matched against the catalog
    pub keyword: String,
    pub limit: usize,
    pub offset: usize,
}

impl SearchQuery {
    pub fn new(query: &str, limit: usize, offset: usize) -> Self {
        let query = query.trim().to_string();
        let keyword = query.to_lowercase();
        Self {
            query,
            keyword,
            limit,
            offset,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keyword.is_empty()
    }
}

impl TryFrom<SearchParams> for SearchQuery {
    type Error = CoreError;

    fn try_from(params: SearchParams) -> CoreResult<Self> {
        let q = params.q.unwrap_or_default();
        if q.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Required parameter 'q' is missing".to_string(),
            ));
        }

        let limit = match params.limit.as_deref() {
            None | Some("") => DEFAULT_LIMIT,
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if (1..=MAX_LIMIT).contains(&n) => n,
                _ => {
                    tracing::warn!(limit = raw, "Invalid limit, using default");
                    DEFAULT_LIMIT
                }
            },
        };

        let offset = match params.offset.as_deref() {
            None | Some("") => 0,
            Some(raw) => raw.parse::<usize>().unwrap_or_else(|_| {
                tracing::warn!(offset = raw, "Invalid offset, using default");
                0
            }),
        };

        Ok(Self::new(&q, limit, offset))
    }
}

/// One page of search results
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage {
    pub query: String,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub products: Vec<Product>,
}

impl SearchPage {
    pub fn empty(query: &SearchQuery) -> Self {
        Self {
            query: query.query.clone(),
            total: 0,
            limit: query.limit,
            offset: query.offset,
            products: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(q: Option<&str>, limit: Option<&str>, offset: Option<&str>) -> SearchParams {
        SearchParams {
            q: q.map(String::from),
            limit: limit.map(String::from),
            offset: offset.map(String::from),
        }
    }

    #[test]
    fn test_missing_query_is_rejected() {
        assert!(matches!(
            SearchQuery::try_from(params(None, None, None)),
            Err(CoreError::ValidationError(_))
        ));
        assert!(SearchQuery::try_from(params(Some("   "), None, None)).is_err());
    }

    #[test]
    fn test_defaults_and_normalization() {
        let query = SearchQuery::try_from(params(Some("  Samsung Galaxy "), None, None)).unwrap();
        assert_eq!(query.query, "Samsung Galaxy");
        assert_eq!(query.keyword, "samsung galaxy");
        assert_eq!(query.limit, DEFAULT_LIMIT);
        assert_eq!(query.offset, 0);
    }

    #[test]
    fn test_out_of_range_limit_falls_back() {
        for raw in ["0", "51", "-3", "ten"] {
            let query = SearchQuery::try_from(params(Some("tv"), Some(raw), None)).unwrap();
            assert_eq!(query.limit, DEFAULT_LIMIT, "limit {}", raw);
        }
        let query = SearchQuery::try_from(params(Some("tv"), Some("50"), Some("20"))).unwrap();
        assert_eq!(query.limit, 50);
        assert_eq!(query.offset, 20);
    }

    #[test]
    fn test_negative_offset_falls_back() {
        let query = SearchQuery::try_from(params(Some("tv"), None, Some("-1"))).unwrap();
        assert_eq!(query.offset, 0);
    }

    #[test]
    fn test_params_deserialization() {
        let params: SearchParams =
            serde_json::from_str(r#"{ "q": "notebook", "limit": "5" }"#).expect("Failed to deserialize");
        assert_eq!(params.q.as_deref(), Some("notebook"));
        assert_eq!(params.limit.as_deref(), Some("5"));
        assert!(params.offset.is_none());
    }
}
