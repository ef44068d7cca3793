//! HTTP binding of the gateway contract.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::Serialize;

use certreq_model::{
    AccountRecord, BatchSubmitRequest, BatchSubmitResponse, CertificateRequest,
    EnrolledStudentsEnvelope, EnrollmentRecord, ItemResult, RequestId, RequestItem, Student,
    SubjectId, SubjectRecord, SubjectRequestsEnvelope,
};

use crate::error::GatewayError;
use crate::gateway::RequestGateway;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`HttpGateway`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the API, e.g. `https://api.example.edu`.
    pub base_url: String,
    /// Per-request timeout; the engine defines no other timeout policy.
    pub timeout: Duration,
    /// Fixed offset used to normalize due dates to wire instants.
    pub zone_offset: FixedOffset,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            zone_offset: default_zone_offset(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_zone_offset(mut self, zone_offset: FixedOffset) -> Self {
        self.zone_offset = zone_offset;
        self
    }

    fn validate(&self) -> Result<(), GatewayError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(GatewayError::Configuration(format!(
                "base_url must be an http(s) URL, got {:?}",
                self.base_url
            )));
        }
        Ok(())
    }
}

/// Offset of the deployment region (+05:30).
pub fn default_zone_offset() -> FixedOffset {
    FixedOffset::east_opt(5 * 3600 + 1800).expect("+05:30 is a valid fixed offset")
}

/// Production binding of [`RequestGateway`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    config: GatewayConfig,
    client: Client,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| GatewayError::Configuration(err.to_string()))?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }

    fn ensure_ok(response: Response, endpoint: &str) -> Result<Response, GatewayError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(GatewayError::BadStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            })
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: String,
    ) -> Result<T, GatewayError> {
        let response = self
            .client
            .get(&endpoint)
            .send()
            .await
            .map_err(|source| GatewayError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;
        let response = Self::ensure_ok(response, &endpoint)?;
        response
            .json()
            .await
            .map_err(|source| GatewayError::Decode { endpoint, source })
    }

    async fn post_opaque<B: Serialize + ?Sized>(
        &self,
        endpoint: String,
        body: &B,
    ) -> Result<(), GatewayError> {
        let response = self
            .client
            .post(&endpoint)
            .json(body)
            .send()
            .await
            .map_err(|source| GatewayError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;
        Self::ensure_ok(response, &endpoint)?;
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DueDateUpdateBody<'a> {
    subject_id: &'a SubjectId,
    due_date: DateTime<Utc>,
}

#[async_trait]
impl RequestGateway for HttpGateway {
    async fn fetch_enrolled_students(
        &self,
        subject: &SubjectId,
    ) -> Result<Vec<Student>, GatewayError> {
        let endpoint = self.endpoint(&format!("subjects/{subject}/students"));
        let envelope: EnrolledStudentsEnvelope = self.get_json(endpoint).await?;
        Ok(envelope.enrolled_students)
    }

    async fn fetch_subject_requests(
        &self,
        subject: &SubjectId,
    ) -> Result<Vec<CertificateRequest>, GatewayError> {
        let endpoint = self.endpoint(&format!("subjects/{subject}/requests"));
        let envelope: SubjectRequestsEnvelope = self.get_json(endpoint).await?;
        Ok(envelope.requests)
    }

    async fn create_accounts(&self, accounts: &[AccountRecord]) -> Result<(), GatewayError> {
        self.post_opaque(self.endpoint("accounts/bulk"), accounts).await
    }

    async fn create_subjects(&self, subjects: &[SubjectRecord]) -> Result<(), GatewayError> {
        self.post_opaque(self.endpoint("subjects/bulk"), subjects).await
    }

    async fn create_enrollments(
        &self,
        enrollments: &[EnrollmentRecord],
    ) -> Result<(), GatewayError> {
        self.post_opaque(self.endpoint("enrollments/bulk"), enrollments)
            .await
    }

    async fn submit_requests(
        &self,
        items: &[RequestItem],
    ) -> Result<Vec<ItemResult>, GatewayError> {
        let endpoint = self.endpoint("requests/batch");
        let body = BatchSubmitRequest {
            items: items.to_vec(),
        };
        let response = self
            .client
            .post(&endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|source| GatewayError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;
        let response = Self::ensure_ok(response, &endpoint)?;
        let decoded: BatchSubmitResponse = response
            .json()
            .await
            .map_err(|source| GatewayError::Decode { endpoint, source })?;
        Ok(decoded.results)
    }

    async fn update_due_date(
        &self,
        subject: &SubjectId,
        due_date: DateTime<Utc>,
    ) -> Result<(), GatewayError> {
        let endpoint = self.endpoint("requests/due-date");
        let body = DueDateUpdateBody {
            subject_id: subject,
            due_date,
        };
        let response = self
            .client
            .put(&endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|source| GatewayError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;
        Self::ensure_ok(response, &endpoint)?;
        Ok(())
    }

    async fn upload_certificate(
        &self,
        request: &RequestId,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), GatewayError> {
        let endpoint = self.endpoint(&format!("certificates/{request}"));
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("certificate", part);
        let response = self
            .client
            .post(&endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|source| GatewayError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;
        Self::ensure_ok(response, &endpoint)?;
        Ok(())
    }
}
