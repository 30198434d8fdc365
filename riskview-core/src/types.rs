use serde::{Deserialize, Serialize};

/// One risk annotation attached to a comparison run by the service.
///
/// `severity` has no fixed enumeration on the client side; whatever string the
/// service sends is carried through and rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFlag {
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: String,
    pub reason: String,
}

/// Successful outcome of one comparison run.
///
/// `run_id` and `disagreement_score` are opaque values assigned by the
/// service; the client only displays them. Flag order reflects service output
/// order and is never re-sorted client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub run_id: i64,
    pub response_a: String,
    pub response_b: String,
    pub disagreement_score: f64,

    // Absent in the payload means "no flags", not an error.
    #[serde(default)]
    pub flags: Vec<RiskFlag>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_default_to_empty_when_absent() {
        let body = r#"{"run_id":1,"response_a":"a","response_b":"b","disagreement_score":0.5}"#;
        let result: ComparisonResult = serde_json::from_str(body).unwrap();
        assert!(result.flags.is_empty());
    }

    #[test]
    fn flag_kind_maps_to_wire_type_field() {
        let body = r#"{"type":"phishing","severity":"high","reason":"credential request"}"#;
        let flag: RiskFlag = serde_json::from_str(body).unwrap();
        assert_eq!(flag.kind, "phishing");
        assert_eq!(flag.severity, "high");

        let encoded = serde_json::to_string(&flag).unwrap();
        assert!(encoded.contains(r#""type":"phishing""#));
    }
}
