//! Sequential probe suite
//!
//! Runs the five contract probes one after another over a shared client.
//! Every failure mode of a probe, wrong status, wrong body shape, network
//! error, parse error, is caught and recorded as a failed outcome so the
//! remaining probes still run.

use crate::{
    Result,
    config::ExpectationSettings,
    probe::{ApiClient, ProbeHttpResponse, ProbeOutcome, fixtures},
    report::ProbeReport,
    types::{ContactRequest, SubmitResponse},
};
use reqwest::StatusCode;
use tracing::{info, warn};

/// Status the backend must answer with for rejected payloads
const REJECTED: StatusCode = StatusCode::UNPROCESSABLE_ENTITY;

/// The fixed sequence of contract probes
#[derive(Debug)]
pub struct ProbeSuite {
    /// Shared HTTP client
    client: ApiClient,
    /// Expected backend validation behavior
    expect: ExpectationSettings,
}

impl ProbeSuite {
    /// Create a new suite
    pub fn new(client: ApiClient, expect: ExpectationSettings) -> Self {
        Self { client, expect }
    }

    /// Run all probes in order and collect the report
    pub async fn run(&self) -> ProbeReport {
        let mut report = ProbeReport::new(self.client.endpoint().as_str());

        let first = self.valid_submission().await;
        let first_contact_id = first.contact_id.clone();
        report.record(first);

        report.record(self.invalid_email().await);
        report.record(self.missing_fields().await);
        report.record(self.invalid_message().await);
        report.record(self.persistence(first_contact_id.as_deref()).await);

        report
    }

    /// Probe 1: a well-formed submission must be accepted
    ///
    /// Expects HTTP 200 with `success: true` and a non-empty `contact_id`,
    /// which is captured for the distinct-ids check of the persistence probe.
    pub async fn valid_submission(&self) -> ProbeOutcome {
        const NAME: &str = "valid_submission";
        info!("Running probe: {}", NAME);

        let response = match self.send(NAME, &fixtures::valid_submission()).await {
            Ok(response) => response,
            Err(outcome) => return outcome,
        };

        if response.status != StatusCode::OK {
            warn!(
                "{}",
                crate::Error::unexpected_status(NAME, 200, response.status.as_u16())
            );
            return ProbeOutcome::failed(NAME);
        }

        let body: SubmitResponse = match self.parse(NAME, &response) {
            Ok(body) => body,
            Err(outcome) => return outcome,
        };

        if !body.is_success() {
            warn!(
                "{}",
                crate::Error::response_shape(NAME, "success flag missing or false")
            );
            return ProbeOutcome::failed(NAME);
        }

        match body.contact_id() {
            Some(contact_id) => {
                info!("Probe {}: accepted with contact_id {}", NAME, contact_id);
                ProbeOutcome::passed(NAME).with_contact_id(contact_id)
            }
            None => {
                warn!(
                    "{}",
                    crate::Error::response_shape(NAME, "contact_id missing or empty")
                );
                ProbeOutcome::failed(NAME)
            }
        }
    }

    /// Probe 2: a syntactically invalid email must be rejected with 422
    pub async fn invalid_email(&self) -> ProbeOutcome {
        const NAME: &str = "invalid_email";
        info!("Running probe: {}", NAME);

        let response = match self.send(NAME, &fixtures::invalid_email_submission()).await {
            Ok(response) => response,
            Err(outcome) => return outcome,
        };

        self.expect_rejection(NAME, &response)
    }

    /// Probe 3: omitting any required field must be rejected with 422
    ///
    /// Three sub-cases, one per field; the probe passes only when every
    /// sub-case is rejected.
    pub async fn missing_fields(&self) -> ProbeOutcome {
        const NAME: &str = "missing_fields";
        info!("Running probe: {}", NAME);

        let mut all_rejected = true;

        for (field, payload) in fixtures::missing_field_cases() {
            info!("Probe {}: omitting field '{}'", NAME, field);

            let response = match self.send(NAME, &payload).await {
                Ok(response) => response,
                Err(_) => {
                    all_rejected = false;
                    continue;
                }
            };

            if response.status != REJECTED {
                warn!(
                    "Missing '{}': {}",
                    field,
                    crate::Error::unexpected_status(NAME, 422, response.status.as_u16())
                );
                all_rejected = false;
            }
        }

        if all_rejected {
            ProbeOutcome::passed(NAME)
        } else {
            ProbeOutcome::failed(NAME)
        }
    }

    /// Probe 4: messages below the minimum length must be rejected with 422
    ///
    /// Two sub-cases: one character short of the configured minimum and the
    /// empty string.
    pub async fn invalid_message(&self) -> ProbeOutcome {
        const NAME: &str = "invalid_message";
        info!("Running probe: {}", NAME);

        let mut all_rejected = true;

        for (case, payload) in fixtures::invalid_message_cases(self.expect.min_message_length) {
            info!("Probe {}: case '{}'", NAME, case);

            let response = match self.send(NAME, &payload).await {
                Ok(response) => response,
                Err(_) => {
                    all_rejected = false;
                    continue;
                }
            };

            if response.status != REJECTED {
                warn!(
                    "Case '{}': {}",
                    case,
                    crate::Error::unexpected_status(NAME, 422, response.status.as_u16())
                );
                all_rejected = false;
            }
        }

        if all_rejected {
            ProbeOutcome::passed(NAME)
        } else {
            ProbeOutcome::failed(NAME)
        }
    }

    /// Probe 5: a uniquely-named valid payload is stored and acknowledged
    ///
    /// Expects HTTP 200 with the complete response schema (`success`,
    /// `message`, `contact_id`) and, when probe 1 captured an id, a
    /// `contact_id` distinct from it.
    pub async fn persistence(&self, prior_contact_id: Option<&str>) -> ProbeOutcome {
        const NAME: &str = "persistence";
        info!("Running probe: {}", NAME);

        let payload = fixtures::unique_persistence_submission();
        let response = match self.send(NAME, &payload).await {
            Ok(response) => response,
            Err(outcome) => return outcome,
        };

        if response.status != StatusCode::OK {
            warn!(
                "{}",
                crate::Error::unexpected_status(NAME, 200, response.status.as_u16())
            );
            return ProbeOutcome::failed(NAME);
        }

        let body: SubmitResponse = match self.parse(NAME, &response) {
            Ok(body) => body,
            Err(outcome) => return outcome,
        };

        if !body.has_complete_shape() {
            warn!(
                "{}",
                crate::Error::response_shape(NAME, "expected fields missing from body")
            );
            return ProbeOutcome::failed(NAME);
        }

        if !body.is_success() {
            warn!(
                "{}",
                crate::Error::response_shape(NAME, "success flag missing or false")
            );
            return ProbeOutcome::failed(NAME);
        }

        let Some(contact_id) = body.contact_id() else {
            warn!(
                "{}",
                crate::Error::response_shape(NAME, "contact_id missing or empty")
            );
            return ProbeOutcome::failed(NAME);
        };

        if prior_contact_id == Some(contact_id) {
            warn!(
                "Probe {}: contact_id {} duplicates an earlier submission",
                NAME, contact_id
            );
            return ProbeOutcome::failed(NAME);
        }

        info!("Probe {}: stored with contact_id {}", NAME, contact_id);
        ProbeOutcome::passed(NAME).with_contact_id(contact_id)
    }

    /// Issue one request, mapping transport errors to a failed outcome
    async fn send(
        &self,
        name: &'static str,
        payload: &ContactRequest,
    ) -> std::result::Result<ProbeHttpResponse, ProbeOutcome> {
        match self.client.submit(payload).await {
            Ok(response) => {
                info!(
                    "Probe {}: status={} body={}",
                    name, response.status, response.body
                );
                Ok(response)
            }
            Err(e) => {
                warn!("Probe {}: request failed ({}): {}", name, e.category(), e);
                Err(ProbeOutcome::failed(name))
            }
        }
    }

    /// Parse a JSON body, mapping parse errors to a failed outcome
    fn parse(
        &self,
        name: &'static str,
        response: &ProbeHttpResponse,
    ) -> std::result::Result<SubmitResponse, ProbeOutcome> {
        let parsed: Result<SubmitResponse> = response.json();
        match parsed {
            Ok(body) => Ok(body),
            Err(e) => {
                warn!("Probe {}: unparseable response body: {}", name, e);
                Err(ProbeOutcome::failed(name))
            }
        }
    }

    /// Assert a rejection status on a response
    fn expect_rejection(&self, name: &'static str, response: &ProbeHttpResponse) -> ProbeOutcome {
        if response.status == REJECTED {
            ProbeOutcome::passed(name)
        } else {
            warn!(
                "{}",
                crate::Error::unexpected_status(name, 422, response.status.as_u16())
            );
            ProbeOutcome::failed(name)
        }
    }
}
