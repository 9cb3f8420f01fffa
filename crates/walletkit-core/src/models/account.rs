//! User profile, leaderboard and currency conversion payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::timestamp::{self, parse_timestamp};

/// Account details. Date fields arrive as strings, epoch numbers or
/// timestamp objects and are reshaped into `DateTime<Utc>`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, alias = "uid")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default, rename = "photoURL", alias = "photoUrl")]
    pub photo_url: Option<String>,
    #[serde(
        default,
        alias = "creationTime",
        deserialize_with = "timestamp::deserialize_optional"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        alias = "lastSignInTime",
        alias = "lastLogin",
        deserialize_with = "timestamp::deserialize_optional"
    )]
    pub last_sign_in_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub date_of_birth: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Parse any other date-like field the service sent.
    pub fn timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        self.extra.get(key).and_then(parse_timestamp)
    }

    pub fn display_name_or_email(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self.email.as_deref())
            .unwrap_or("")
    }
}

/// Selector headers for `Session::leaderboard`.
#[derive(Debug, Clone, Default)]
pub struct LeaderboardQuery {
    pub next_page_token: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    #[serde(default)]
    pub leaderboard: Vec<LeaderboardEntry>,
    #[serde(default)]
    pub next_page_token: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    #[serde(default)]
    pub paymail: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConversion {
    pub balance: Value,
    #[serde(default)]
    pub currency: Option<String>,
}

impl CurrencyConversion {
    /// The converted amount whether the service sent it as a number or a
    /// string.
    pub fn amount(&self) -> Option<f64> {
        match &self.balance {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
