//! `key=value` argument parsing for traits and properties.

use serde_json::{Map, Value};

/// Parse one `key=value` pair. Values that parse as JSON keep their type,
/// anything else is taken as a plain string.
pub fn parse_pair(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{}`", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in `{}`", raw));
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

/// Collect parsed pairs into a map; later keys win.
pub fn into_map(pairs: Vec<(String, Value)>) -> Map<String, Value> {
    pairs.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_pair_types() {
        assert_eq!(parse_pair("plan=pro").unwrap(), ("plan".to_string(), json!("pro")));
        assert_eq!(parse_pair("seats=3").unwrap(), ("seats".to_string(), json!(3)));
        assert_eq!(parse_pair("beta=true").unwrap(), ("beta".to_string(), json!(true)));
        assert_eq!(
            parse_pair(r#"tags=["a","b"]"#).unwrap(),
            ("tags".to_string(), json!(["a", "b"]))
        );
        assert_eq!(parse_pair("url=a=b").unwrap(), ("url".to_string(), json!("a=b")));
        assert_eq!(parse_pair("empty=").unwrap(), ("empty".to_string(), json!("")));
    }

    #[test]
    fn test_parse_pair_errors() {
        assert!(parse_pair("novalue").is_err());
        assert!(parse_pair("=value").is_err());
    }

    #[test]
    fn test_into_map_later_wins() {
        let map = into_map(vec![
            ("plan".to_string(), json!("free")),
            ("plan".to_string(), json!("pro")),
        ]);
        assert_eq!(Value::Object(map), json!({"plan": "pro"}));
    }
}
