use log::*;
use reqwest::Method;
use uuid::Uuid;

use crate::error::Error;
use crate::http::{HttpClient, IntoQueryParams};
use crate::pagination;
use crate::schema::{to_body, validate};
use crate::types::call;

/// `/calls`: scheduling plus the start, end and cancel transitions.
pub struct Calls<'a> {
    http: &'a HttpClient,
}

impl<'a> Calls<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self, query: &call::Query) -> Result<call::List, Error> {
        let params = query.into_query_params()?;
        pagination::list(self.http, "calls", &params, query.follow_pagination).await
    }

    pub async fn get(&self, uuid: Uuid) -> Result<call::Call, Error> {
        validate(
            self.http
                .request(Method::GET, &format!("calls/{}", uuid), None, None)
                .await?,
        )
    }

    pub async fn create(&self, call: &call::Create) -> Result<call::Call, Error> {
        let body = to_body(call)?;
        validate(
            self.http
                .request(Method::POST, "calls", None, Some(&body))
                .await?,
        )
    }

    pub async fn update(&self, uuid: Uuid, update: &call::Update) -> Result<call::Call, Error> {
        let body = to_body(update)?;
        validate(
            self.http
                .request(Method::PUT, &format!("calls/{}", uuid), None, Some(&body))
                .await?,
        )
    }

    /// Moves a scheduled call to `in_progress`.
    pub async fn start(&self, uuid: Uuid) -> Result<call::Call, Error> {
        self.transition(uuid, "start").await
    }

    /// Moves an in-progress call to `completed`.
    pub async fn end(&self, uuid: Uuid) -> Result<call::Call, Error> {
        self.transition(uuid, "end").await
    }

    pub async fn cancel(&self, uuid: Uuid) -> Result<call::Call, Error> {
        self.transition(uuid, "cancel").await
    }

    async fn transition(&self, uuid: Uuid, action: &str) -> Result<call::Call, Error> {
        let call: call::Call = validate(
            self.http
                .request(
                    Method::POST,
                    &format!("calls/{}/{}", uuid, action),
                    None,
                    None,
                )
                .await?,
        )?;
        info!(
            "Call {} is now {} after {}",
            uuid,
            call.status.state.as_str(),
            action
        );
        Ok(call)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_client;
    use crate::schema::Field;
    use crate::types::call;
    use chrono::{TimeZone, Utc};
    use mockito::{Matcher, Server};
    use serde_json::{json, Value};
    use uuid::Uuid;

    const CALL_UUID: &str = "123e4567-e89b-12d3-a456-426614174000";

    fn call_json(status: Value) -> Value {
        json!({
            "uuid": CALL_UUID,
            "title": "Weekly Team Sync",
            "description": "Regular team sync meeting",
            "created": "2024-02-14T12:00:00Z",
            "modified": "2024-02-14T12:00:00Z",
            "scheduled_start": "2024-02-15T15:00:00Z",
            "scheduled_duration": 30,
            "status": status,
            "participants": [{
                "uuid": "123e4567-e89b-12d3-a456-426614174001",
                "email": "participant@example.com",
                "name": "Team Member",
                "role": "attendee"
            }],
            "host": {
                "uuid": "123e4567-e89b-12d3-a456-426614174002",
                "email": "host@example.com",
                "name": "Meeting Host",
                "role": "host"
            },
            "meeting_url": "https://meet.example.com/123",
            "recording_available": false,
            "transcription_available": false,
            "integration_type": "zoom"
        })
    }

    #[tokio::test]
    async fn test_list_calls() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/calls")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("from_date".into(), "2024-02-14T00:00:00Z".into()),
                Matcher::UrlEncoded("to_date".into(), "2024-02-14T23:59:59Z".into()),
                Matcher::UrlEncoded("status".into(), "scheduled".into()),
            ]))
            .with_status(200)
            .with_body(
                json!({
                    "count": 1,
                    "next": null,
                    "previous": null,
                    "results": [call_json(json!({"state": "scheduled"}))]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = test_client(&server.url());
        let query = call::Query::new(
            Utc.with_ymd_and_hms(2024, 2, 14, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 2, 14, 23, 59, 59).unwrap(),
        )
        .with_status(call::State::Scheduled);
        let calls = client.calls().list(&query).await.unwrap();

        assert_eq!(calls.count, 1);
        let call = &calls.results[0];
        assert_eq!(call.status.state, call::State::Scheduled);
        assert_eq!(call.host.email.as_str(), "host@example.com");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_call() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/calls")
            .match_body(Matcher::Json(json!({
                "title": "Weekly Team Sync",
                "scheduled_start": "2024-02-15T15:00:00Z",
                "scheduled_duration": 30,
                "host_email": "host@example.com",
                "participant_emails": ["participant@example.com"],
                "integration_type": "zoom"
            })))
            .with_status(201)
            .with_body(call_json(json!({"state": "scheduled"})).to_string())
            .create_async()
            .await;

        let client = test_client(&server.url());
        let create = call::Create::new(
            "Weekly Team Sync",
            Utc.with_ymd_and_hms(2024, 2, 15, 15, 0, 0).unwrap(),
            30,
            "host@example.com".parse().unwrap(),
        )
        .with_participants(vec!["participant@example.com".parse().unwrap()])
        .with_integration_type("zoom");
        let call = client.calls().create(&create).await.unwrap();

        assert_eq!(call.scheduled_duration, 30);
        assert_eq!(call.participants.len(), 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_sends_only_assigned_fields() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", format!("/calls/{}", CALL_UUID).as_str())
            .match_body(Matcher::Json(json!({
                "title": "Updated Meeting Title",
                "description": null
            })))
            .with_status(200)
            .with_body(call_json(json!({"state": "scheduled"})).to_string())
            .create_async()
            .await;

        let client = test_client(&server.url());
        let update = call::Update {
            title: Field::Set("Updated Meeting Title".to_string()),
            description: Field::Null,
            ..Default::default()
        };
        client
            .calls()
            .update(Uuid::parse_str(CALL_UUID).unwrap(), &update)
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_call_lifecycle() {
        let mut server = Server::new_async().await;
        let start = server
            .mock("POST", format!("/calls/{}/start", CALL_UUID).as_str())
            .with_status(200)
            .with_body(
                call_json(json!({
                    "state": "in_progress",
                    "started_at": "2024-02-15T15:00:00Z",
                    "ended_at": null,
                    "duration": null
                }))
                .to_string(),
            )
            .create_async()
            .await;
        let end = server
            .mock("POST", format!("/calls/{}/end", CALL_UUID).as_str())
            .with_status(200)
            .with_body(
                call_json(json!({
                    "state": "completed",
                    "started_at": "2024-02-15T15:00:00Z",
                    "ended_at": "2024-02-15T15:30:00Z",
                    "duration": 1800
                }))
                .to_string(),
            )
            .create_async()
            .await;

        let client = test_client(&server.url());
        let uuid = Uuid::parse_str(CALL_UUID).unwrap();

        let started = client.calls().start(uuid).await.unwrap();
        assert_eq!(started.status.state, call::State::InProgress);
        assert!(started.status.started_at.is_some());

        let ended = client.calls().end(uuid).await.unwrap();
        assert_eq!(ended.status.state, call::State::Completed);
        assert_eq!(ended.status.duration, Some(1800));
        assert!(ended.status.state.is_terminal());

        start.assert_async().await;
        end.assert_async().await;
    }

    #[tokio::test]
    async fn test_cancel_conflict_surfaces_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", format!("/calls/{}/cancel", CALL_UUID).as_str())
            .with_status(409)
            .with_body("{\"detail\":\"Call already completed\"}")
            .create_async()
            .await;

        let client = test_client(&server.url());
        let err = client
            .calls()
            .cancel(Uuid::parse_str(CALL_UUID).unwrap())
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(409));
    }
}
