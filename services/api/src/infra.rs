use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Parses a `key=value` profile field; the value may be empty.
pub(crate) fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing field name in '{raw}'"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_field_splits_on_first_equals() {
        assert_eq!(
            parse_field("client_name=Ali=Hassan"),
            Ok(("client_name".to_string(), "Ali=Hassan".to_string()))
        );
        assert_eq!(
            parse_field("target_country="),
            Ok(("target_country".to_string(), String::new()))
        );
    }

    #[test]
    fn parse_field_rejects_missing_key() {
        assert!(parse_field("=40").is_err());
        assert!(parse_field("age").is_err());
    }
}
