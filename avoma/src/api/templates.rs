use reqwest::Method;
use uuid::Uuid;

use crate::error::Error;
use crate::http::HttpClient;
use crate::schema::{to_body, validate};
use crate::types::template::{self, Template};

/// `/template`: note templates. The listing is a bare array.
pub struct Templates<'a> {
    http: &'a HttpClient,
}

impl<'a> Templates<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Template>, Error> {
        validate(
            self.http
                .request(Method::GET, "template", None, None)
                .await?,
        )
    }

    pub async fn get(&self, uuid: Uuid) -> Result<Template, Error> {
        validate(
            self.http
                .request(Method::GET, &format!("template/{}", uuid), None, None)
                .await?,
        )
    }

    pub async fn create(&self, template: &template::Create) -> Result<Template, Error> {
        let body = to_body(template)?;
        validate(
            self.http
                .request(Method::POST, "template", None, Some(&body))
                .await?,
        )
    }

    /// Updates the template named by `update.uuid`.
    pub async fn update(&self, update: &template::Update) -> Result<Template, Error> {
        let body = to_body(update)?;
        validate(
            self.http
                .request(Method::PUT, "template", None, Some(&body))
                .await?,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_client;
    use crate::schema::Field;
    use crate::types::template;
    use mockito::{Matcher, Server};
    use serde_json::{json, Value};
    use uuid::Uuid;

    const TEMPLATE_UUID: &str = "123e4567-e89b-12d3-a456-426614174010";
    const CATEGORY_UUID: &str = "123e4567-e89b-12d3-a456-426614174001";
    const MEETING_TYPE_UUID: &str = "123e4567-e89b-12d3-a456-426614174004";

    fn template_json() -> Value {
        json!({
            "uuid": TEMPLATE_UUID,
            "name": "Discovery Call Template",
            "privacy": "organization",
            "meeting_types": [{"label": "Discovery Call", "uuid": MEETING_TYPE_UUID}],
            "email": "owner@example.com"
        })
    }

    #[tokio::test]
    async fn test_list_templates() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/template")
            .with_status(200)
            .with_body(json!([template_json()]).to_string())
            .create_async()
            .await;

        let client = test_client(&server.url());
        let templates = client.templates().list().await.unwrap();

        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].meeting_types[0].label, "Discovery Call");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_template_without_privacy() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/template")
            .match_body(Matcher::Json(json!({
                "name": "Discovery Call Template",
                "categories": [CATEGORY_UUID],
                "meeting_type_uuids": [MEETING_TYPE_UUID]
            })))
            .with_status(201)
            .with_body(template_json().to_string())
            .create_async()
            .await;

        let client = test_client(&server.url());
        let create = template::Create {
            name: "Discovery Call Template".to_string(),
            categories: vec![Uuid::parse_str(CATEGORY_UUID).unwrap()],
            meeting_type_uuids: vec![Uuid::parse_str(MEETING_TYPE_UUID).unwrap()],
            privacy: Field::Unset,
        };
        let created = client.templates().create(&create).await.unwrap();

        assert_eq!(created.uuid, Uuid::parse_str(TEMPLATE_UUID).unwrap());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_puts_uuid_in_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", "/template")
            .match_body(Matcher::Json(json!({
                "uuid": TEMPLATE_UUID,
                "categories": [CATEGORY_UUID]
            })))
            .with_status(200)
            .with_body(template_json().to_string())
            .create_async()
            .await;

        let client = test_client(&server.url());
        let mut update = template::Update::new(Uuid::parse_str(TEMPLATE_UUID).unwrap());
        update.categories = Field::Set(vec![Uuid::parse_str(CATEGORY_UUID).unwrap()]);
        client.templates().update(&update).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_template() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", format!("/template/{}", TEMPLATE_UUID).as_str())
            .with_status(200)
            .with_body(template_json().to_string())
            .create_async()
            .await;

        let client = test_client(&server.url());
        let template = client
            .templates()
            .get(Uuid::parse_str(TEMPLATE_UUID).unwrap())
            .await
            .unwrap();

        assert_eq!(template.email.unwrap().as_str(), "owner@example.com");
    }
}
