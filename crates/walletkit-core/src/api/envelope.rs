//! The JSON envelope every wallet service response is wrapped in:
//! `{ "statusCode": 200, "data": { "status": "success", "msg": "...", ... } }`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::{Result, WalletError};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(default)]
    pub status_code: Option<i64>,
    #[serde(default)]
    pub data: EnvelopeData,
}

impl Envelope {
    pub fn parse(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|_| WalletError::invalid_response(body))
    }

    /// The envelope's own status code, when it reports one, must agree
    /// with the transport status for a response to count as a success.
    pub fn reports_success(&self) -> bool {
        self.status_code
            .map(|code| (200..300).contains(&code))
            .unwrap_or(true)
    }
}

/// The `data` member of an envelope: status, message and the
/// endpoint-specific payload fields flattened beside them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvelopeData {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub msg: Option<Value>,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl EnvelopeData {
    /// The service message, if it sent a textual one
    pub fn message(&self) -> Option<&str> {
        self.msg.as_ref().and_then(Value::as_str)
    }

    /// Deserialize the whole payload (everything except status/msg).
    pub fn into_payload<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_value(Value::Object(self.payload))?)
    }

    /// Deserialize a single payload field, failing if it is absent.
    pub fn take_field<T: DeserializeOwned>(&mut self, name: &str) -> Result<T> {
        let value = self.payload.remove(name).ok_or_else(|| {
            WalletError::InvalidResponse(format!("Missing field '{}' in response", name))
        })?;
        Ok(serde_json::from_value(value)?)
    }
}
