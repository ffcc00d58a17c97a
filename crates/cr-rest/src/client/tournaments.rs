use tracing::instrument;

use royale_cr_client::{normalize_tag, tag::encode_tag, Page};

use crate::error::Result;
use crate::tournament::{Tournament, TournamentHeader, TournamentQuery};

use super::RoyaleRestClient;

impl RoyaleRestClient {
    /// Search tournaments by name.
    ///
    /// Names shorter than 3 characters fail locally with `InvalidInput`.
    #[instrument(skip(self))]
    pub fn search_tournaments(&self, query: &TournamentQuery) -> Result<Page<TournamentHeader>> {
        let params = query.to_params()?;
        self.client
            .get_json_with_query("/v1/tournaments", params)
            .map_err(Into::into)
    }
}

/// Operations on a single tournament, bound to its normalised tag.
#[derive(Debug, Clone)]
pub struct TournamentHandle<'a> {
    client: &'a RoyaleRestClient,
    tag: String,
}

impl<'a> TournamentHandle<'a> {
    pub(crate) fn new(client: &'a RoyaleRestClient, tag: &str) -> Self {
        Self {
            client,
            tag: normalize_tag(tag),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Get tournament details including its ranked members.
    #[instrument(skip(self), fields(tag = %self.tag))]
    pub fn get(&self) -> Result<Tournament> {
        let path = format!("/v1/tournaments/{}", encode_tag(&self.tag));
        self.client.client.get_json(&path).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::super::test_support::client_for;
    use crate::error::{ErrorKind, Result};
    use crate::tournament::{Tournament, TournamentQuery};

    #[tokio::test(flavor = "multi_thread")]
    async fn test_search_tournaments() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/tournaments"))
            .and(query_param("name", "weekend"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [{"tag": "#T1", "name": "Weekend Cup", "type": "open", "capacity": 12}]
            })))
            .mount(&mock_server)
            .await;

        let uri = mock_server.uri();
        let page = tokio::task::spawn_blocking(move || {
            client_for(&uri).search_tournaments(&TournamentQuery::new("weekend"))
        })
        .await
        .unwrap()
        .unwrap();

        assert_eq!(page.items[0].tournament_type, "open");
        assert_eq!(page.items[0].capacity, 12);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_search_with_short_name_sends_nothing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})))
            .expect(0)
            .mount(&mock_server)
            .await;

        let uri = mock_server.uri();
        let result = tokio::task::spawn_blocking(move || {
            client_for(&uri).search_tournaments(&TournamentQuery::new("ab"))
        })
        .await
        .unwrap();

        assert!(matches!(result.unwrap_err().kind, ErrorKind::InvalidInput(_)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_get_tournament() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/tournaments/%23T1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "tag": "#T1",
                "status": "ended",
                "createdTime": "20180712T110230.000Z",
                "startedTime": "20180712T120230.000Z",
                "endedTime": "20180712T130230.000Z",
                "gameMode": {"id": 72000009, "name": "Tournament"},
                "membersList": [{"tag": "#P1", "name": "Winner", "score": 12, "rank": 1}]
            })))
            .mount(&mock_server)
            .await;

        let uri = mock_server.uri();
        let tournament = tokio::task::spawn_blocking(move || -> Result<Tournament> {
            client_for(&uri).tournament("T1").get()
        })
        .await
        .unwrap()
        .unwrap();

        assert_eq!(tournament.members_list[0].rank, 1);
        let started = tournament.started_time().unwrap().unwrap();
        let ended = tournament.ended_time().unwrap().unwrap();
        assert_eq!((ended - started).num_hours(), 1);
    }
}
