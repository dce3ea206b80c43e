use recall_core::rank::QueryMode;

/// Parse query mode from string
pub fn parse_query_mode(s: &str) -> std::result::Result<QueryMode, String> {
    s.parse::<QueryMode>().map_err(|e| e.to_string())
}
