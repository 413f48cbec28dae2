use super::{
    client::SentimentClassifier,
    types::{NEGATIVE, SentimentRequest, SentimentResponse},
};
use crate::{
    Result,
    event::{
        AttributesReader, Event, EventExt, TAG_CREATE_EVENT_TYPE, TAG_NEGATIVE_EVENT_TYPE,
        TICKET_CREATED_EVENT_TYPE, tag_event,
    },
    transform::Transformation,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Tags tickets with the sentiment of their description.
pub struct SentimentTagger {
    classifier: Arc<dyn SentimentClassifier>,
    source: String,
}

impl SentimentTagger {
    pub fn new(classifier: Arc<dyn SentimentClassifier>, namespace: &str) -> Self {
        Self {
            classifier,
            source: event_source(namespace),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Classifies the request description.
    ///
    /// An id that is not an integer is logged and reported as `0`. A
    /// classifier failure is returned as an error.
    pub async fn handle(&self, request: &SentimentRequest) -> Result<SentimentResponse> {
        let id = request.id.to_i64().unwrap_or_else(|e| {
            error!("Ticket id '{}' is not an integer: {}", request.id, e);
            0
        });

        let tag = self.classifier.classify(&request.description).await?;

        Ok(SentimentResponse {
            id,
            tag,
            description: request.description.clone(),
        })
    }
}

/// Outbound event source for the given namespace.
pub fn event_source(namespace: &str) -> String {
    format!("transformations.zenformation.{}", namespace)
}

/// `com.zendesk.tag.negative` for a `NEGATIVE` tag, `com.zendesk.tag.create`
/// for anything else.
pub fn event_type_for(tag: &str) -> &'static str {
    if tag == NEGATIVE {
        TAG_NEGATIVE_EVENT_TYPE
    } else {
        TAG_CREATE_EVENT_TYPE
    }
}

#[async_trait]
impl Transformation for SentimentTagger {
    fn name(&self) -> &str {
        "sentiment-tagger"
    }

    async fn transform(&self, event: Event) -> Result<Event> {
        if event.ty() != TICKET_CREATED_EVENT_TYPE {
            debug!(
                "Unexpected event type '{}', expected '{}'",
                event.ty(),
                TICKET_CREATED_EVENT_TYPE
            );
        }

        let request: SentimentRequest = event.data_as()?;
        info!("Got ticket {} from {}", request.id, event.source());

        // A failed classification still produces an event, built from an
        // empty response.
        let response = self.handle(&request).await.unwrap_or_else(|e| {
            error!("Failed to classify ticket {}: {}", request.id, e);
            SentimentResponse::default()
        });

        let event_type = event_type_for(&response.tag);
        if event_type == TAG_NEGATIVE_EVENT_TYPE {
            info!("Got a negative event for ticket {}", response.id);
        }

        tag_event(event_type, &self.source, &response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, sentiment::TicketId};
    use cloudevents::EventBuilder;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    struct StaticClassifier {
        result: std::result::Result<String, String>,
        calls: Mutex<Vec<String>>,
    }

    impl StaticClassifier {
        fn ok(label: &str) -> Arc<Self> {
            Arc::new(Self {
                result: Ok(label.to_string()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn failing(msg: &str) -> Arc<Self> {
            Arc::new(Self {
                result: Err(msg.to_string()),
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl SentimentClassifier for StaticClassifier {
        async fn classify(&self, text: &str) -> Result<String> {
            self.calls.lock().unwrap().push(text.to_string());
            self.result.clone().map_err(Error::upstream)
        }
    }

    fn request(id: TicketId, description: &str) -> SentimentRequest {
        SentimentRequest {
            id,
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn test_handle_builds_response() {
        let classifier = StaticClassifier::ok("POSITIVE");
        let tagger = SentimentTagger::new(classifier.clone(), "prod");

        let response = tagger
            .handle(&request(TicketId::Text("7".to_string()), "Thanks, all fixed"))
            .await
            .unwrap();

        assert_eq!(
            response,
            SentimentResponse {
                id: 7,
                tag: "POSITIVE".to_string(),
                description: "Thanks, all fixed".to_string(),
            }
        );
        assert_eq!(*classifier.calls.lock().unwrap(), vec!["Thanks, all fixed"]);
    }

    #[tokio::test]
    async fn test_handle_unparseable_id_becomes_zero() {
        let tagger = SentimentTagger::new(StaticClassifier::ok("NEUTRAL"), "prod");

        let response = tagger
            .handle(&request(TicketId::Text("abc".to_string()), "meh"))
            .await
            .unwrap();

        assert_eq!(response.id, 0);
        assert_eq!(response.tag, "NEUTRAL");
    }

    #[tokio::test]
    async fn test_handle_propagates_classifier_error() {
        let tagger = SentimentTagger::new(StaticClassifier::failing("throttled"), "prod");

        let result = tagger.handle(&request(TicketId::Number(1), "x")).await;
        assert!(matches!(result, Err(Error::Upstream(_))));
    }

    #[test]
    fn test_source_uses_namespace() {
        assert_eq!(event_source("prod"), "transformations.zenformation.prod");

        let tagger = SentimentTagger::new(StaticClassifier::ok("POSITIVE"), "team-a");
        assert_eq!(tagger.source(), "transformations.zenformation.team-a");
    }

    #[tokio::test]
    async fn test_transform_emits_namespaced_source() {
        let tagger = SentimentTagger::new(StaticClassifier::ok("NEGATIVE"), "prod");
        let inbound = cloudevents::EventBuilderV10::new()
            .id("1")
            .ty(TICKET_CREATED_EVENT_TYPE)
            .source("zendesk")
            .data(
                crate::event::JSON_CONTENT_TYPE,
                serde_json::json!({"id": "42", "description": "This is terrible"}),
            )
            .build()
            .unwrap();

        let outbound = tagger.transform(inbound).await.unwrap();

        assert_eq!(outbound.ty(), TAG_NEGATIVE_EVENT_TYPE);
        assert_eq!(outbound.source().to_string(), "transformations.zenformation.prod");
    }

    #[test]
    fn test_event_type_for() {
        assert_eq!(event_type_for("NEGATIVE"), TAG_NEGATIVE_EVENT_TYPE);
        assert_eq!(event_type_for("negative"), TAG_CREATE_EVENT_TYPE);
        assert_eq!(event_type_for(""), TAG_CREATE_EVENT_TYPE);
    }
}
