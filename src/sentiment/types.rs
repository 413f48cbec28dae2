use serde::{Deserialize, Serialize};
use std::{fmt, num::ParseIntError};

/// Sentiment label that routes a ticket to the negative tag event.
pub const NEGATIVE: &str = "NEGATIVE";

/// Ticket identifier as sent by Zendesk: sometimes a JSON string, sometimes
/// a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TicketId {
    Number(i64),
    Text(String),
}

impl TicketId {
    pub fn to_i64(&self) -> Result<i64, ParseIntError> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => s.parse(),
        }
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Payload of an inbound ticket-created event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRequest {
    pub id: TicketId,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentResponse {
    pub id: i64,
    pub tag: String,
    pub description: String,
}
