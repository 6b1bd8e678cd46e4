use crate::error::AppError;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Game {
    pub id: Option<String>,
    pub home: Team,
    pub away: Team,
    /// ISO-8601 instant in the display zone.
    pub start_time: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Team {
    pub credentials: String,
    pub name: String,
    pub side: Side,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

/// Final points for one side, or `Pending` while the box score is not posted.
///
/// On the wire a pending score is `""` and a final score is a bare integer,
/// which is what the schedule front end already consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Score {
    Final(u32),
    Pending,
}

impl Score {
    /// Reads a points cell. Blank means not yet played.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the cell holds anything other than digits.
    pub fn from_cell(text: &str) -> Result<Self, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Self::Pending);
        }
        text.parse::<u32>()
            .map(Self::Final)
            .map_err(|e| AppError::Parse(format!("bad score '{text}': {e}")))
    }

    #[must_use]
    pub fn points(&self) -> Option<u32> {
        match self {
            Self::Final(points) => Some(*points),
            Self::Pending => None,
        }
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Final(points) => serializer.serialize_u32(*points),
            Self::Pending => serializer.serialize_str(""),
        }
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Self::Pending),
            Value::Number(n) => n
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .map(Self::Final)
                .ok_or_else(|| de::Error::custom(format!("invalid score {n}"))),
            Value::String(s) => Self::from_cell(&s).map_err(de::Error::custom),
            other => Err(de::Error::custom(format!("invalid score {other}"))),
        }
    }
}
