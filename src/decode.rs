use serde_json::Value;

/// Decode one raw metric payload into a JSON document.
///
/// New dumps are standard JSON and parse directly. Dumps produced by the
/// original Python exporter use Python literal tokens (`'`-quoted strings,
/// `None`, `True`, `False`); those are normalized and re-parsed. Standard
/// input never goes through normalization, so decode is idempotent on it.
pub fn decode(raw: &str) -> Result<Value, serde_json::Error> {
    match serde_json::from_str(raw) {
        Ok(value) => Ok(value),
        Err(_) => serde_json::from_str(&normalize_legacy_literals(raw)),
    }
}

/// Token-level replacement, matching the legacy convention. A string value
/// that itself contains `None`, `True`, `False` or a single quote is
/// ambiguous under this convention and is not round-trip safe.
fn normalize_legacy_literals(raw: &str) -> String {
    raw.replace('\'', "\"")
        .replace("None", "null")
        .replace("True", "true")
        .replace("False", "false")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_standard_json_directly() {
        let doc = decode(r#"{"averageSpO2": 95, "status": "BALANCED"}"#).unwrap();
        assert_eq!(doc["averageSpO2"], 95);
        assert_eq!(doc["status"], "BALANCED");
    }

    #[test]
    fn decode_is_idempotent_on_serialized_documents() {
        let doc = json!({
            "hrvSummary": {"weeklyAvg": 55, "status": "BALANCED", "baseline": null},
            "readings": [1, 2, 3]
        });
        let text = serde_json::to_string(&doc).unwrap();
        assert_eq!(decode(&text).unwrap(), doc);
    }

    #[test]
    fn normalizes_python_literal_tokens() {
        let raw = "{'restingHeartRate': 52, 'sleepScores': None, 'validated': True, 'napDay': False}";
        let doc = decode(raw).unwrap();
        assert_eq!(doc["restingHeartRate"], 52);
        assert!(doc["sleepScores"].is_null());
        assert_eq!(doc["validated"], true);
        assert_eq!(doc["napDay"], false);
    }

    #[test]
    fn normalizes_nested_structures() {
        let raw = "{'hrvSummary': {'weeklyAvg': 55, 'baseline': {'lowUpper': 42}}}";
        let doc = decode(raw).unwrap();
        assert_eq!(doc["hrvSummary"]["baseline"]["lowUpper"], 42);
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(decode("{not valid}").is_err());
        assert!(decode("").is_err());
    }
}
