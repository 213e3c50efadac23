use async_trait::async_trait;
use eyre::{eyre, Result, WrapErr};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use slotkeeper_core::{
    calendar::DateRange,
    errors::{ScheduleError, ScheduleResult},
    models::{
        appointment::Appointment,
        exception::{ExceptionPayload, ScheduleException},
        schedule::ScheduleDay,
    },
};
use tracing::debug;
use uuid::Uuid;

use crate::{backend::ScheduleBackend, config::ClientConfig};

/// Body the backend sends with every error status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// [`ScheduleBackend`] over the REST contract.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .wrap_err("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn exception_url(&self, id: Uuid) -> String {
        self.url(&format!("/api/schedule/exceptions/{}", id))
    }

    async fn send(&self, request: RequestBuilder) -> ScheduleResult<Response> {
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        debug!("{} {}", status, response.url());

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or(text);

        Err(match status {
            StatusCode::NOT_FOUND => ScheduleError::NotFound(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ScheduleError::Validation(message),
            _ => ScheduleError::Backend(eyre!("Backend returned {}: {}", status, message)),
        })
    }

    async fn json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ScheduleResult<T> {
        self.send(request).await?.json().await.map_err(transport)
    }
}

fn transport(err: reqwest::Error) -> ScheduleError {
    ScheduleError::Backend(eyre::Report::new(err).wrap_err("Request to schedule backend failed"))
}

#[async_trait]
impl ScheduleBackend for HttpBackend {
    async fn weekly_schedule(&self) -> ScheduleResult<Vec<ScheduleDay>> {
        self.json(self.client.get(self.url("/api/schedule/weekly"))).await
    }

    async fn save_weekly_schedule(&self, days: Vec<ScheduleDay>) -> ScheduleResult<Vec<ScheduleDay>> {
        self.json(self.client.put(self.url("/api/schedule/weekly")).json(&days))
            .await
    }

    async fn list_exceptions(&self, range: DateRange) -> ScheduleResult<Vec<ScheduleException>> {
        self.json(self.client.get(self.url("/api/schedule/exceptions")).query(&range))
            .await
    }

    async fn create_exception(&self, payload: ExceptionPayload) -> ScheduleResult<ScheduleException> {
        self.json(self.client.post(self.url("/api/schedule/exceptions")).json(&payload))
            .await
    }

    async fn update_exception(&self, id: Uuid, payload: ExceptionPayload) -> ScheduleResult<ScheduleException> {
        self.json(self.client.patch(self.exception_url(id)).json(&payload))
            .await
    }

    async fn delete_exception(&self, id: Uuid) -> ScheduleResult<()> {
        self.send(self.client.delete(self.exception_url(id))).await?;
        Ok(())
    }

    async fn list_appointments(&self, range: DateRange) -> ScheduleResult<Vec<Appointment>> {
        self.json(self.client.get(self.url("/api/appointments")).query(&range))
            .await
    }
}
