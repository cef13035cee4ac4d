use log::*;
use reqwest::Method;
use uuid::Uuid;

use crate::error::Error;
use crate::http::{HttpClient, IntoQueryParams};
use crate::pagination;
use crate::schema::{to_body, validate};
use crate::types::user;

/// `/users`: workspace membership.
pub struct Users<'a> {
    http: &'a HttpClient,
}

impl<'a> Users<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self, query: &user::Query) -> Result<user::List, Error> {
        let params = query.into_query_params()?;
        pagination::list(self.http, "users", &params, query.follow_pagination).await
    }

    pub async fn get(&self, uuid: Uuid) -> Result<user::User, Error> {
        validate(
            self.http
                .request(Method::GET, &format!("users/{}", uuid), None, None)
                .await?,
        )
    }

    /// The user that owns the API key.
    pub async fn current(&self) -> Result<user::User, Error> {
        validate(
            self.http
                .request(Method::GET, "users/me", None, None)
                .await?,
        )
    }

    pub async fn create(&self, user: &user::Create) -> Result<user::User, Error> {
        let body = to_body(user)?;
        validate(
            self.http
                .request(Method::POST, "users", None, Some(&body))
                .await?,
        )
    }

    /// Replaces the user's attributes with `PUT`.
    pub async fn update(&self, uuid: Uuid, update: &user::Update) -> Result<user::User, Error> {
        self.write(Method::PUT, uuid, update).await
    }

    /// Changes only the given attributes with `PATCH`.
    pub async fn patch(&self, uuid: Uuid, update: &user::Update) -> Result<user::User, Error> {
        self.write(Method::PATCH, uuid, update).await
    }

    pub async fn delete(&self, uuid: Uuid) -> Result<(), Error> {
        info!("Deleting user {}", uuid);
        self.http
            .request(Method::DELETE, &format!("users/{}", uuid), None, None)
            .await?;
        Ok(())
    }

    async fn write(
        &self,
        method: Method,
        uuid: Uuid,
        update: &user::Update,
    ) -> Result<user::User, Error> {
        let body = to_body(update)?;
        validate(
            self.http
                .request(method, &format!("users/{}", uuid), None, Some(&body))
                .await?,
        )
    }
}
