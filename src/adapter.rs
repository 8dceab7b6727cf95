//! Form adapter: survey fields in, prediction request out, risk panel rendered.

use crate::config::{ApiConfig, ClientConfig};
use crate::error::{AdapterError, SubmitError, PREDICTION_FAILED};
use crate::page::{
    Element, Page, CATEGORY_TEXT_ID, FADE_IN_CLASS, FORM_ID, HIDDEN_CLASS,
    PRIORITY_TEXT_ID, RECOMMENDATIONS_ID, RESULT_SECTION_ID, RISK_DISPLAY_ID, RISK_ICON_ID,
    RISK_LEVEL_ID, RISK_PERCENTAGE_ID, STATUS_TEXT_ID,
};
use crate::risk::{HealthStatus, PredictionResult, RiskEngine};
use crate::survey::{clamp_age_value, SurveyInput, FIELD_IDS};
use crate::transport::{ReqwestTransport, Transport};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Submit button label while a prediction is in flight.
pub const BUSY_LABEL: &str = r#"<i class="fas fa-spinner fa-spin mr-2"></i>Memproses..."#;
pub const RECOMMENDATION_ITEM_CLASS: &str = "flex items-start";

fn recommendation_html(text: &str) -> String {
    format!(
        r#"<i class="fas fa-check-circle text-red-600 mr-2 mt-1"></i><span>{}</span>"#,
        text
    )
}

/// Holds the submit control in its busy state; restores label and enabled state on drop.
pub struct BusyGuard<'a> {
    button: &'a dyn Element,
    original_label: String,
}

impl<'a> BusyGuard<'a> {
    pub fn acquire(button: &'a dyn Element) -> Self {
        let original_label = button.inner_html();
        button.set_inner_html(BUSY_LABEL);
        button.set_disabled(true);
        Self {
            button,
            original_label,
        }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.button.set_inner_html(&self.original_label);
        self.button.set_disabled(false);
    }
}

struct ResultPanel {
    section: Arc<dyn Element>,
    display: Arc<dyn Element>,
    icon: Arc<dyn Element>,
    level: Arc<dyn Element>,
    percentage: Arc<dyn Element>,
    status: Arc<dyn Element>,
    category: Arc<dyn Element>,
    priority: Arc<dyn Element>,
    recommendations: Arc<dyn Element>,
}

pub struct FormAdapter {
    api: ApiConfig,
    engine: RiskEngine,
    page: Arc<dyn Page>,
    transport: Arc<dyn Transport>,
    /// Survey inputs in `FIELD_IDS` order
    fields: Vec<Arc<dyn Element>>,
    submit: Arc<dyn Element>,
    panel: ResultPanel,
}

fn require(page: &dyn Page, id: &str) -> Result<Arc<dyn Element>, AdapterError> {
    page.element_by_id(id)
        .ok_or_else(|| AdapterError::MissingElement(id.to_string()))
}

impl FormAdapter {
    /// Resolve every element the adapter touches. Fails if any is missing.
    pub fn new(
        config: &ClientConfig,
        page: Arc<dyn Page>,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, AdapterError> {
        let fields = FIELD_IDS
            .iter()
            .map(|id| require(page.as_ref(), id))
            .collect::<Result<Vec<_>, _>>()?;
        let submit = page
            .submit_button()
            .ok_or(AdapterError::MissingSubmitButton)?;
        let p = page.as_ref();
        require(p, FORM_ID)?;
        let panel = ResultPanel {
            section: require(p, RESULT_SECTION_ID)?,
            display: require(p, RISK_DISPLAY_ID)?,
            icon: require(p, RISK_ICON_ID)?,
            level: require(p, RISK_LEVEL_ID)?,
            percentage: require(p, RISK_PERCENTAGE_ID)?,
            status: require(p, STATUS_TEXT_ID)?,
            category: require(p, CATEGORY_TEXT_ID)?,
            priority: require(p, PRIORITY_TEXT_ID)?,
            recommendations: require(p, RECOMMENDATIONS_ID)?,
        };
        debug!(base_url = %config.api.base_url, "form adapter ready");
        Ok(Self {
            api: config.api.clone(),
            engine: RiskEngine::new(config.risk.clone()),
            page,
            transport,
            fields,
            submit,
            panel,
        })
    }

    /// Adapter talking to the configured service over reqwest.
    pub fn with_reqwest(config: &ClientConfig, page: Arc<dyn Page>) -> Result<Self, AdapterError> {
        let transport = Arc::new(ReqwestTransport::new(&config.api)?);
        Self::new(config, page, transport)
    }

    /// Current form contents.
    pub fn read_survey(&self) -> SurveyInput {
        let values: [String; 18] = std::array::from_fn(|i| self.fields[i].value());
        SurveyInput::from_values(values)
    }

    fn age_field(&self) -> &dyn Element {
        // FIELD_IDS[0] is "age"
        self.fields[0].as_ref()
    }

    /// Best-effort liveness probe. Never fails and never touches the form.
    pub async fn check_connectivity(&self) {
        let url = self.api.health_url();
        match self.transport.get(&url).await {
            Ok(res) if res.is_success() => {
                match serde_json::from_str::<HealthStatus>(&res.body) {
                    Ok(health) if !health.model_loaded => {
                        warn!(status = %health.status, "API reachable but model not loaded")
                    }
                    Ok(health) => debug!(status = %health.status, "API reachable"),
                    Err(e) => debug!(error = %e, "API reachable; health body not understood"),
                }
            }
            Ok(res) => warn!(status = res.status, "API not available"),
            Err(e) => warn!(error = %e, "API not available"),
        }
    }

    /// Send the form to the prediction service and render the outcome.
    /// Any failure raises exactly one alert; the submit control is restored either way.
    pub async fn submit(&self) -> Result<PredictionResult, SubmitError> {
        let submission_id = Uuid::new_v4();
        let input = self.read_survey();
        if input.age.is_none() {
            debug!(%submission_id, "age is blank or not numeric; sending null");
        }

        let _busy = BusyGuard::acquire(self.submit.as_ref());
        match self.request_prediction(&input).await {
            Ok(result) => {
                self.render_result(&result);
                info!(%submission_id, risk_level = %result.risk_level, "prediction rendered");
                Ok(result)
            }
            Err(e) => {
                warn!(%submission_id, error = %e, "prediction failed");
                self.page.alert(e.alert_message());
                Err(e)
            }
        }
    }

    async fn request_prediction(&self, input: &SurveyInput) -> Result<PredictionResult, SubmitError> {
        let body =
            serde_json::to_value(input).map_err(|e| SubmitError::Encode(e.to_string()))?;
        let res = self
            .transport
            .post_json(&self.api.predict_url(), &body)
            .await?;
        if !res.is_success() {
            debug!(status = res.status, body = %res.body, "non-success status from predict");
            return Err(SubmitError::Status { status: res.status });
        }
        let result: PredictionResult = serde_json::from_str(&res.body)?;
        if !result.success {
            let message = result
                .message
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| PREDICTION_FAILED.to_string());
            if let Some(ref detail) = result.error {
                debug!(error = %detail, "service reported prediction error");
            }
            return Err(SubmitError::Rejected(message));
        }
        Ok(result)
    }

    /// Fill the result panel from `result` and bring it into view.
    pub fn render_result(&self, result: &PredictionResult) {
        let assessment = self.engine.assess(result);
        if !assessment.level.is_known() {
            warn!(risk_level = %result.risk_level, "unrecognised risk level; showing high-risk advice");
        } else if assessment.band_mismatch() {
            warn!(
                risk_level = %result.risk_level,
                risk_score = ?result.risk_score,
                "risk label disagrees with score band"
            );
        }
        let bundle = assessment.bundle;
        let p = &self.panel;

        p.display
            .set_class_name(&format!("text-center p-8 rounded-lg {}", bundle.style_class));
        p.icon
            .set_class_name(&format!("fas {} text-6xl", bundle.icon_class));
        p.level.set_text(&result.risk_level);
        p.percentage.set_display("none");
        p.status.set_text(&result.status);
        p.category.set_text(&result.category);
        p.priority.set_text(&result.priority);

        p.recommendations.clear_children();
        for rec in bundle.recommendations {
            p.recommendations
                .append_list_item(RECOMMENDATION_ITEM_CLASS, &recommendation_html(rec));
        }

        p.section.remove_class(HIDDEN_CLASS);
        p.section.add_class(FADE_IN_CLASS);
        p.section.scroll_into_view();
    }

    /// Age input handler: pull the value back into [0, 120].
    pub fn clamp_age(&self) {
        let age = self.age_field();
        if let Some(clamped) = clamp_age_value(&age.value()) {
            age.set_value(&clamped);
        }
    }
}
