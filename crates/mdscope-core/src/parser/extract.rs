//! Domain records derived from parsed tables and code blocks.

use super::tables::extract_tables;
use crate::{ApiEndpoint, CodeBlock, Table};

/// Vocabulary that marks a code block as an HTTP API example.
const API_VOCABULARY: &[&str] = &["curl", "fetch", "axios", "http", "post", "get"];

/// Path fragments that identify requests against the documented API.
pub const DEFAULT_API_MARKERS: &[&str] = &["/api/", "/v1/"];

/// Extract `(name, method, endpoint)` rows from an endpoint table.
///
/// The table qualifies when its headers (case-insensitively) contain an
/// `api` or `기능` column, a `method` column, and an `endpoint` or `url`
/// column. Rows missing any of those three cells are skipped. Tables that do
/// not qualify yield nothing.
pub fn extract_api_endpoints(table: &Table) -> Vec<ApiEndpoint> {
    let Some((name_col, method_col, endpoint_col)) = endpoint_columns(&table.headers) else {
        return Vec::new();
    };

    table
        .rows
        .iter()
        .filter_map(|row| {
            let name = row.cell(name_col).filter(|c| !c.is_empty())?;
            let method = row.cell(method_col).filter(|c| !c.is_empty())?;
            let endpoint = row.cell(endpoint_col).filter(|c| !c.is_empty())?;
            Some(ApiEndpoint {
                name: name.to_string(),
                method: method.to_string(),
                endpoint: endpoint.to_string(),
            })
        })
        .collect()
}

/// Extract endpoint rows from every table in `text`.
pub fn api_endpoints_in(text: &str) -> Vec<ApiEndpoint> {
    extract_tables(text)
        .iter()
        .flat_map(extract_api_endpoints)
        .collect()
}

fn endpoint_columns(headers: &[String]) -> Option<(usize, usize, usize)> {
    let lowered: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();

    Some((
        find_column(&lowered, &["api", "기능"])?,
        find_column(&lowered, &["method"])?,
        find_column(&lowered, &["endpoint", "url"])?,
    ))
}

fn find_column(headers: &[String], keys: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| keys.iter().any(|k| h.contains(k)))
}

/// Decides whether a code block is an API request example.
///
/// A block matches when its lowercased body contains one of the fixed HTTP
/// vocabulary words or one of the configured API path markers.
#[derive(Debug, Clone)]
pub struct ApiExampleFilter {
    markers: Vec<String>,
}

impl ApiExampleFilter {
    /// Build a filter with custom API path markers.
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            markers: markers
                .into_iter()
                .map(|m| m.as_ref().to_lowercase())
                .filter(|m| !m.is_empty())
                .collect(),
        }
    }

    pub fn matches(&self, block: &CodeBlock) -> bool {
        let code = block.code.to_lowercase();
        API_VOCABULARY.iter().any(|word| code.contains(word))
            || self.markers.iter().any(|marker| code.contains(marker.as_str()))
    }
}

impl Default for ApiExampleFilter {
    fn default() -> Self {
        Self::new(DEFAULT_API_MARKERS)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::parser::parse_table;

    fn block(code: &str) -> CodeBlock {
        CodeBlock {
            language: None,
            code: code.to_string(),
            line_start: 0,
            line_end: 0,
        }
    }

    #[test]
    fn test_single_full_row_yields_one_endpoint() {
        let table = parse_table(&[
            "| API | Method | Endpoint |",
            "|-----|--------|----------|",
            "| Confirm payment | POST | /v1/payments/confirm |",
        ])
        .unwrap();

        let endpoints = extract_api_endpoints(&table);
        assert_eq!(
            endpoints,
            vec![ApiEndpoint {
                name: "Confirm payment".to_string(),
                method: "POST".to_string(),
                endpoint: "/v1/payments/confirm".to_string(),
            }]
        );
    }

    #[test]
    fn test_rows_with_empty_cells_are_excluded() {
        let table = parse_table(&[
            "| API | Method | Endpoint |",
            "|---|---|---|",
            "| Cancel | POST | /v1/payments/cancel |",
            "| Lookup | GET |  |",
            "|  | GET | /v1/payments |",
            "| Refund |  | /v1/refunds |",
        ])
        .unwrap();

        let endpoints = extract_api_endpoints(&table);
        assert_eq!(endpoints.len(), 1);
        assert_eq!(endpoints[0].name, "Cancel");
    }

    #[test]
    fn test_korean_and_url_headers() {
        let table = parse_table(&[
            "| 기능 | HTTP Method | URL |",
            "|---|---|---|",
            "| 결제 승인 | POST | /v1/payments/confirm |",
        ])
        .unwrap();

        let endpoints = extract_api_endpoints(&table);
        assert_eq!(endpoints.len(), 1);
        assert_eq!(endpoints[0].name, "결제 승인");
        assert_eq!(endpoints[0].endpoint, "/v1/payments/confirm");
    }

    #[test]
    fn test_headers_are_case_insensitive() {
        let table = parse_table(&[
            "| api name | METHOD | endPoint |",
            "|---|---|---|",
            "| Issue key | POST | /v1/billing |",
        ])
        .unwrap();
        assert_eq!(extract_api_endpoints(&table).len(), 1);
    }

    #[test]
    fn test_blank_row_yields_no_endpoint() {
        let table = parse_table(&[
            "| API | Method | Endpoint |",
            "|---|---|---|",
            "| | | |",
            "| Refund | POST | /v1/refunds |",
        ])
        .unwrap();

        assert_eq!(table.rows.len(), 2);
        let endpoints = extract_api_endpoints(&table);
        assert_eq!(endpoints.len(), 1);
        assert_eq!(endpoints[0].name, "Refund");
    }

    #[test]
    fn test_non_endpoint_table_yields_nothing() {
        let table = parse_table(&["| Name | Type |", "|---|---|", "| id | string |"]).unwrap();
        assert!(extract_api_endpoints(&table).is_empty());
    }

    #[test]
    fn test_api_endpoints_in_text() {
        let text = "# Endpoints\n\n| API | Method | Endpoint |\n|---|---|---|\n| List | GET | /v1/items |\n\ntext\n\n| Name | Type |\n|---|---|\n| id | string |";
        let endpoints = api_endpoints_in(text);
        assert_eq!(endpoints.len(), 1);
        assert_eq!(endpoints[0].method, "GET");
    }

    #[test]
    fn test_api_example_filter_vocabulary() {
        let filter = ApiExampleFilter::default();

        assert!(filter.matches(&block("curl -X POST https://example.com")));
        assert!(filter.matches(&block("const res = await FETCH(url)")));
        assert!(filter.matches(&block("axios.create()")));
        assert!(!filter.matches(&block("let x = 1 + 2;")));
    }

    #[test]
    fn test_api_example_filter_markers() {
        let filter = ApiExampleFilter::new(["payments.example.com"]);

        assert!(filter.matches(&block("base = 'PAYMENTS.example.com'")));
        assert!(!filter.matches(&block("base = '/api/items'")));
        assert!(ApiExampleFilter::default().matches(&block("base = '/api/items'")));
    }
}
