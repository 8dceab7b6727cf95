//! Page surface the adapter reads from and renders into.
//! A browser binding implements these traits over the DOM; [`MemoryPage`] keeps everything in memory.

mod memory;

pub use memory::{ListItem, MemoryElement, MemoryPage, SUBMIT_LABEL};

use std::sync::Arc;

pub const FORM_ID: &str = "healthForm";
pub const RESULT_SECTION_ID: &str = "resultSection";
pub const RISK_DISPLAY_ID: &str = "riskDisplay";
pub const RISK_ICON_ID: &str = "riskIcon";
pub const RISK_LEVEL_ID: &str = "riskLevel";
pub const RISK_PERCENTAGE_ID: &str = "riskPercentage";
pub const STATUS_TEXT_ID: &str = "statusText";
pub const CATEGORY_TEXT_ID: &str = "categoryText";
pub const PRIORITY_TEXT_ID: &str = "priorityText";
pub const RECOMMENDATIONS_ID: &str = "recommendations";

/// Class that keeps the result panel out of view until a prediction arrives.
pub const HIDDEN_CLASS: &str = "hidden";
pub const FADE_IN_CLASS: &str = "fade-in";

/// One element of the page. Mutation goes through `&self`; implementations use interior mutability.
pub trait Element: Send + Sync {
    /// Current value of an input or select
    fn value(&self) -> String;
    fn set_value(&self, value: &str);

    fn inner_html(&self) -> String;
    fn set_inner_html(&self, html: &str);

    fn text(&self) -> String;
    fn set_text(&self, text: &str);

    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool);

    fn class_name(&self) -> String;
    fn set_class_name(&self, class_name: &str);
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    /// Inline `style.display`
    fn set_display(&self, display: &str);

    /// Remove every child node
    fn clear_children(&self);
    /// Append `<li class="{class}">{html}</li>`
    fn append_list_item(&self, class: &str, html: &str);

    /// Smooth-scroll so the element's top edge is aligned with the viewport
    fn scroll_into_view(&self);
}

/// The document hosting the survey form.
pub trait Page: Send + Sync {
    fn element_by_id(&self, id: &str) -> Option<Arc<dyn Element>>;

    /// The form's `button[type="submit"]`
    fn submit_button(&self) -> Option<Arc<dyn Element>>;

    /// Blocking user-facing alert
    fn alert(&self, message: &str);
}
