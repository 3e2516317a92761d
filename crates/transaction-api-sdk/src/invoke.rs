//! Invocation envelope returned to the function host

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::HandlerError;
use crate::greeting::Greeting;
use crate::response::HttpResponse;

/// Named outputs of an invocation.
///
/// The transaction function has a single HTTP output binding, `res`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outputs {
    pub res: HttpResponse,
}

/// Envelope the host expects from a custom handler.
///
/// Field names and casing are dictated by the host: `Outputs`, `Logs`,
/// `ReturnValue`. Absent logs and return value are sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvokeResponse {
    #[serde(rename = "Outputs")]
    pub outputs: Outputs,

    #[serde(rename = "Logs", default)]
    pub logs: Option<Vec<String>>,

    #[serde(rename = "ReturnValue", default)]
    pub return_value: Option<serde_json::Value>,
}

impl InvokeResponse {
    /// Wrap an HTTP response as the `res` output
    pub fn http(res: HttpResponse) -> Self {
        Self {
            outputs: Outputs { res },
            logs: None,
            return_value: None,
        }
    }

    /// The `/transaction` answer: a 200 carrying the greeting stamped with `time`
    pub fn greeting(time: &NaiveDateTime) -> Result<Self, HandlerError> {
        Ok(Self::http(HttpResponse::ok(&Greeting::at(time))?))
    }

    /// Encode the envelope as the outer HTTP body
    pub fn to_json_vec(&self) -> Result<Vec<u8>, HandlerError> {
        Ok(serde_json::to_vec(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::{json, Value};

    fn sample_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, 31)
            .and_then(|d| d.and_hms_opt(23, 59, 58))
            .unwrap()
    }

    #[test]
    fn test_greeting_envelope_shape() {
        let bytes = InvokeResponse::greeting(&sample_time()).unwrap().to_json_vec().unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["Logs"], Value::Null);
        assert_eq!(value["ReturnValue"], Value::Null);

        let outputs = value["Outputs"].as_object().unwrap();
        assert_eq!(outputs.len(), 1);

        let res = &outputs["res"];
        assert_eq!(res["statusCode"], 200);
        assert_eq!(res["headers"], json!({"Content-Type": "application/json"}));

        let body: Value = serde_json::from_str(res["body"].as_str().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "hello": "world",
                "message": "Software version: GREEN",
                "timestamp": "2025-12-31 23:59:58"
            })
        );
    }

    #[test]
    fn test_envelope_reads_back_from_host_json() {
        let raw = r#"{"Outputs":{"res":{"statusCode":201,"body":"x","headers":{}}},"Logs":["a"],"ReturnValue":7}"#;
        let parsed: InvokeResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.outputs.res.status_code, 201);
        assert_eq!(parsed.logs, Some(vec!["a".to_string()]));
        assert_eq!(parsed.return_value, Some(json!(7)));
    }
}
