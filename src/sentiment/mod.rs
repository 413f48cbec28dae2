mod client;
mod tagger;
mod types;

pub use client::{ComprehendClassifier, SentimentClassifier};
pub use tagger::{SentimentTagger, event_source, event_type_for};
pub use types::{NEGATIVE, SentimentRequest, SentimentResponse, TicketId};
