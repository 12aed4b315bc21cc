use std::fmt::{Debug, Display};
use std::str::FromStr;

use mongodb::bson::Bson;
use serde::{de::Error as _, Deserialize, Serialize};
use uuid::Uuid;

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

const ID_TAG: &str = "CPN";

/// Opaque server-generated campaign identifier, rendered as `CPN-<uuid>`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct CampaignId(Uuid);

impl CampaignId {
    pub fn new() -> CampaignId {
        CampaignId(Uuid::new_v4())
    }
}

impl Display for CampaignId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}-{:X}", ID_TAG, self.0)
    }
}

impl Debug for CampaignId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Display::fmt(self, f)
    }
}

impl FromStr for CampaignId {
    type Err = CampaignIdParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let index = s.find('-').ok_or(CampaignIdParseError::InvalidFormat)?;
        let (tag, id) = s.split_at(index);

        if tag != ID_TAG {
            return Err(CampaignIdParseError::InvalidTag);
        }

        let uuid = Uuid::from_str(&id[1..]).map_err(|_| CampaignIdParseError::InvalidUuid)?;

        Ok(CampaignId(uuid))
    }
}

impl Serialize for CampaignId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CampaignId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CampaignId::from_str(&s).map_err(D::Error::custom)
    }
}

impl From<CampaignId> for Bson {
    fn from(id: CampaignId) -> Bson {
        id.to_string().into()
    }
}

#[derive(Copy, Clone, Debug)]
pub enum CampaignIdParseError {
    InvalidFormat,
    InvalidTag,
    InvalidUuid,
}

impl Display for CampaignIdParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Debug::fmt(self, f)
    }
}

/// A funding record with a target/current amount and an attached chat
/// transcript.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(rename = "_id")]
    pub id: CampaignId,
    pub name: String,
    pub description: String,
    pub current_amount: i64,
    pub target_amount: i64,
    pub chat: Vec<Message>,
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One chat entry. Immutable once appended; the chat is append-only.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campaign_id_round_trips_through_display() {
        let id = CampaignId::new();
        let parsed: CampaignId = id.to_string().parse().unwrap();

        assert_eq!(id, parsed);
    }

    #[test]
    fn campaign_id_rejects_wrong_tag() {
        let text = format!("XYZ-{:X}", Uuid::new_v4());

        assert!(matches!(
            text.parse::<CampaignId>(),
            Err(CampaignIdParseError::InvalidTag)
        ));
    }

    #[test]
    fn campaign_id_rejects_garbage() {
        assert!(matches!(
            "not an id".parse::<CampaignId>(),
            Err(CampaignIdParseError::InvalidFormat)
        ));
        assert!(matches!(
            "CPN-zzz".parse::<CampaignId>(),
            Err(CampaignIdParseError::InvalidUuid)
        ));
    }

    #[test]
    fn message_roles_serialize_lowercase() {
        let message = Message {
            role: Role::Assistant,
            content: "hello".to_string(),
        };

        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["role"], "assistant");
        assert_eq!(json["content"], "hello");
    }
}
