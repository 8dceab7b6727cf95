//! In-memory page with the survey form layout. Backs the headless CLI and the tests.

use super::{
    Element, Page, CATEGORY_TEXT_ID, FORM_ID, HIDDEN_CLASS, PRIORITY_TEXT_ID,
    RECOMMENDATIONS_ID, RESULT_SECTION_ID, RISK_DISPLAY_ID, RISK_ICON_ID, RISK_LEVEL_ID,
    RISK_PERCENTAGE_ID, STATUS_TEXT_ID,
};
use crate::survey::{SurveyInput, FIELD_IDS};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Idle label of the submit button in the survey layout.
pub const SUBMIT_LABEL: &str = r#"<i class="fas fa-calculator mr-2"></i>Hitung Risiko"#;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub class: String,
    pub html: String,
}

#[derive(Debug, Default)]
struct ElementState {
    value: String,
    inner_html: String,
    text: String,
    disabled: bool,
    class_name: String,
    display: Option<String>,
    children: Vec<ListItem>,
    scrolls: usize,
}

#[derive(Debug, Default)]
pub struct MemoryElement {
    id: String,
    state: Mutex<ElementState>,
}

impl MemoryElement {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: Mutex::new(ElementState::default()),
        }
    }

    pub fn with_class(self, class_name: &str) -> Self {
        self.set_class_name(class_name);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.state().class_name.split_whitespace().any(|c| c == class)
    }

    /// Inline display style, if one was set
    pub fn display(&self) -> Option<String> {
        self.state().display.clone()
    }

    pub fn children(&self) -> Vec<ListItem> {
        self.state().children.clone()
    }

    /// Number of scroll-into-view requests received
    pub fn scrolls(&self) -> usize {
        self.state().scrolls
    }

    fn state(&self) -> MutexGuard<'_, ElementState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Element for MemoryElement {
    fn value(&self) -> String {
        self.state().value.clone()
    }

    fn set_value(&self, value: &str) {
        self.state().value = value.to_string();
    }

    fn inner_html(&self) -> String {
        self.state().inner_html.clone()
    }

    fn set_inner_html(&self, html: &str) {
        self.state().inner_html = html.to_string();
    }

    fn text(&self) -> String {
        self.state().text.clone()
    }

    fn set_text(&self, text: &str) {
        self.state().text = text.to_string();
    }

    fn is_disabled(&self) -> bool {
        self.state().disabled
    }

    fn set_disabled(&self, disabled: bool) {
        self.state().disabled = disabled;
    }

    fn class_name(&self) -> String {
        self.state().class_name.clone()
    }

    fn set_class_name(&self, class_name: &str) {
        self.state().class_name = class_name.to_string();
    }

    fn add_class(&self, class: &str) {
        let mut s = self.state();
        if !s.class_name.split_whitespace().any(|c| c == class) {
            if !s.class_name.is_empty() {
                s.class_name.push(' ');
            }
            s.class_name.push_str(class);
        }
    }

    fn remove_class(&self, class: &str) {
        let mut s = self.state();
        let kept: Vec<&str> = s.class_name.split_whitespace().filter(|c| *c != class).collect();
        s.class_name = kept.join(" ");
    }

    fn set_display(&self, display: &str) {
        self.state().display = Some(display.to_string());
    }

    fn clear_children(&self) {
        let mut s = self.state();
        s.children.clear();
        s.inner_html.clear();
    }

    fn append_list_item(&self, class: &str, html: &str) {
        self.state().children.push(ListItem {
            class: class.to_string(),
            html: html.to_string(),
        });
    }

    fn scroll_into_view(&self) {
        self.state().scrolls += 1;
    }
}

/// Document held entirely in memory. Alerts are recorded instead of shown.
#[derive(Debug, Default)]
pub struct MemoryPage {
    elements: Mutex<HashMap<String, Arc<MemoryElement>>>,
    submit: Mutex<Option<Arc<MemoryElement>>>,
    alerts: Mutex<Vec<String>>,
}

impl MemoryPage {
    /// Empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// The survey page: form, 18 blank inputs, submit button, hidden result panel.
    pub fn survey_layout() -> Self {
        let page = Self::new();
        page.insert(MemoryElement::new(FORM_ID));
        for id in FIELD_IDS {
            page.insert(MemoryElement::new(id));
        }
        page.insert(MemoryElement::new(RESULT_SECTION_ID).with_class(&format!("mt-8 {}", HIDDEN_CLASS)));
        page.insert(MemoryElement::new(RISK_DISPLAY_ID).with_class("text-center p-8 rounded-lg"));
        page.insert(MemoryElement::new(RISK_ICON_ID).with_class("fas fa-heart text-6xl"));
        for id in [
            RISK_LEVEL_ID,
            RISK_PERCENTAGE_ID,
            STATUS_TEXT_ID,
            CATEGORY_TEXT_ID,
            PRIORITY_TEXT_ID,
            RECOMMENDATIONS_ID,
        ] {
            page.insert(MemoryElement::new(id));
        }
        let submit = MemoryElement::new("submitButton");
        submit.set_inner_html(SUBMIT_LABEL);
        page.set_submit_button(submit);
        page
    }

    /// Survey layout with every field filled from `input`.
    pub fn with_survey(input: &SurveyInput) -> Self {
        let page = Self::survey_layout();
        page.fill(input);
        page
    }

    pub fn insert(&self, element: MemoryElement) -> Arc<MemoryElement> {
        let element = Arc::new(element);
        lock(&self.elements).insert(element.id().to_string(), element.clone());
        element
    }

    pub fn remove(&self, id: &str) -> Option<Arc<MemoryElement>> {
        lock(&self.elements).remove(id)
    }

    pub fn set_submit_button(&self, element: MemoryElement) -> Arc<MemoryElement> {
        let element = Arc::new(element);
        *lock(&self.submit) = Some(element.clone());
        element
    }

    pub fn remove_submit_button(&self) {
        *lock(&self.submit) = None;
    }

    /// Concrete handle for inspection
    pub fn element(&self, id: &str) -> Option<Arc<MemoryElement>> {
        lock(&self.elements).get(id).cloned()
    }

    pub fn submit(&self) -> Option<Arc<MemoryElement>> {
        lock(&self.submit).clone()
    }

    /// Write each survey answer into the matching input. Missing inputs are skipped.
    pub fn fill(&self, input: &SurveyInput) {
        let elements = lock(&self.elements);
        for (id, value) in FIELD_IDS.iter().zip(input.to_values()) {
            if let Some(el) = elements.get(*id) {
                el.set_value(&value);
            }
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        lock(&self.alerts).clone()
    }
}

impl Page for MemoryPage {
    fn element_by_id(&self, id: &str) -> Option<Arc<dyn Element>> {
        self.element(id).map(|e| e as Arc<dyn Element>)
    }

    fn submit_button(&self) -> Option<Arc<dyn Element>> {
        self.submit().map(|e| e as Arc<dyn Element>)
    }

    fn alert(&self, message: &str) {
        lock(&self.alerts).push(message.to_string());
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}
