use tracing::instrument;

use royale_cr_client::{normalize_tag, tag::encode_tag};

use crate::error::Result;
use crate::replay::Replay;

use super::RoyaleRestClient;

/// Operations on a single replay, bound to its normalised tag.
#[derive(Debug, Clone)]
pub struct ReplayHandle<'a> {
    client: &'a RoyaleRestClient,
    tag: String,
}

impl<'a> ReplayHandle<'a> {
    pub(crate) fn new(client: &'a RoyaleRestClient, tag: &str) -> Self {
        Self {
            client,
            tag: normalize_tag(tag),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[instrument(skip(self), fields(tag = %self.tag))]
    pub fn get(&self) -> Result<Replay> {
        let path = format!("/v1/replays/{}", encode_tag(&self.tag));
        self.client.client.get_json(&path).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::super::test_support::client_for;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_get_replay() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/replays/%23R1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "tag": "#R1",
                "battleTime": "20180712T110230.000Z",
                "replayData": {"events": []},
                "shareCount": 2,
                "viewCount": 40
            })))
            .mount(&mock_server)
            .await;

        let uri = mock_server.uri();
        let replay = tokio::task::spawn_blocking(move || client_for(&uri).replay("R1").get())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(replay.view_count, 40);
        assert!(replay.replay_data["events"].is_array());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_server_error_is_reported() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/replays/%23R2"))
            .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({
                "reason": "inMaintenance",
                "message": "The API is in maintenance"
            })))
            .mount(&mock_server)
            .await;

        let uri = mock_server.uri();
        let err = tokio::task::spawn_blocking(move || client_for(&uri).replay("#R2").get())
            .await
            .unwrap()
            .unwrap_err();

        assert_eq!(err.status(), Some(503));
        assert_eq!(err.reason(), Some("inMaintenance"));
        assert!(!err.is_not_found());
    }
}
