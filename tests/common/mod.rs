//! Scripted transport and survey fixtures shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use heart_risk_form::{
    error::TransportError,
    transport::{HttpResponse, Transport},
    SurveyInput,
};
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: &'static str,
    pub url: String,
    pub body: Option<serde_json::Value>,
}

/// Replays queued responses; an empty queue answers with a network error.
#[derive(Default)]
pub struct MockTransport {
    get_responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    post_responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<Recorded>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_get(self, status: u16, body: &str) -> Self {
        self.get_responses.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn on_post(self, status: u16, body: &str) -> Self {
        self.post_responses.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn on_post_error(self) -> Self {
        self.post_responses
            .lock()
            .unwrap()
            .push_back(Err(network_error("/predict")));
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

fn network_error(url: &str) -> TransportError {
    TransportError::Request {
        url: url.to_string(),
        reason: "connection refused".to_string(),
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(Recorded {
            method: "GET",
            url: url.to_string(),
            body: None,
        });
        self.get_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(network_error(url)))
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(Recorded {
            method: "POST",
            url: url.to_string(),
            body: Some(body.clone()),
        });
        self.post_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(network_error(url)))
    }
}

pub fn sample_survey() -> SurveyInput {
    SurveyInput {
        age: Some(54),
        gender: "male".into(),
        chest_pain: "Yes".into(),
        shortness_of_breath: "No".into(),
        fatigue: "Yes".into(),
        palpitations: "No".into(),
        dizziness: "No".into(),
        swelling: "No".into(),
        radiating_pain: "Yes".into(),
        cold_sweat: "No".into(),
        blood_pressure_history: "Yes".into(),
        cholesterol_level: "Yes".into(),
        diabetes_history: "No".into(),
        smoking_history: "Yes".into(),
        obesity: "No".into(),
        lifestyle: "Yes".into(),
        family_history: "No".into(),
        chronic_stress: "Yes".into(),
    }
}
