use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Lifecycle flag carried by both campaigns and prospects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Active,
    Inactive,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "active",
            RecordStatus::Inactive => "inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RecordStatus::Active)
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(RecordStatus::Active),
            "inactive" => Ok(RecordStatus::Inactive),
            _ => Err(StatusParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status `{0}`, expected `active` or `inactive`")]
pub struct StatusParseError(pub String);

/// A named outreach effort. Counters are maintained by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: RecordStatus,
    /// RFC 3339 timestamp; kept as received
    pub created_at: String,
    pub total_prospects: u64,
    pub total_mails_sent: u64,
}

impl Campaign {
    /// Parsed `created_at`, or `None` when the backend sent something else
    pub fn created_at_datetime(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.created_at).ok()
    }
}

/// A contact targeted by a campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prospect {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(rename = "linkedInUrl", default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<String>,
    pub status: RecordStatus,
}

impl Prospect {
    /// "First Last" when a name is known, otherwise the email address
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            self.email.clone()
        } else {
            parts.join(" ")
        }
    }
}

/// Keys the settings types serialize from their typed fields
const TYPED_SETTINGS_KEYS: &[&str] = &["name", "description", "sequence", "prospectIds", "dailySendLimit"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is a typed settings field, not an extra field")]
pub struct ReservedFieldError(pub String);

fn insert_extra_field(
    extra: &mut Map<String, Value>,
    key: impl Into<String>,
    value: Value,
) -> Result<Option<Value>, ReservedFieldError> {
    let key = key.into();
    if TYPED_SETTINGS_KEYS.contains(&key.as_str()) {
        return Err(ReservedFieldError(key));
    }
    Ok(extra.insert(key, value))
}

/// Settings submitted by the campaign creation form.
///
/// Every field is optional on the wire. Fields the UI does not know about are
/// kept verbatim in the extra map so they survive a round trip through the
/// front-end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<String>,
    #[serde(default)]
    pub prospect_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_send_limit: Option<u32>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl CreateCampaignSettings {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Fields without a typed counterpart
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Store an unknown field, returning the value it replaced.
    /// Keys of the typed fields are refused so they are never written twice.
    pub fn insert_extra(
        &mut self,
        key: impl Into<String>,
        value: Value,
    ) -> Result<Option<Value>, ReservedFieldError> {
        insert_extra_field(&mut self.extra, key, value)
    }
}

/// Partial campaign settings, as held by the settings store.
/// `Default` is the empty object `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSettingsDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prospect_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_send_limit: Option<u32>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl CampaignSettingsDraft {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.sequence.is_none()
            && self.prospect_ids.is_none()
            && self.daily_send_limit.is_none()
            && self.extra.is_empty()
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    pub fn insert_extra(
        &mut self,
        key: impl Into<String>,
        value: Value,
    ) -> Result<Option<Value>, ReservedFieldError> {
        insert_extra_field(&mut self.extra, key, value)
    }
}

impl From<CreateCampaignSettings> for CampaignSettingsDraft {
    fn from(settings: CreateCampaignSettings) -> Self {
        Self {
            name: settings.name,
            description: settings.description,
            sequence: settings.sequence,
            prospect_ids: Some(settings.prospect_ids),
            daily_send_limit: settings.daily_send_limit,
            extra: settings.extra,
        }
    }
}
