//! View components for the two boards and the shared shell chrome.

pub mod image_modal;
pub mod incident_form;
pub mod incident_table;
pub mod map_view;
pub mod notice_form;
pub mod notice_table;
pub mod sidebar;
pub mod spinner;
pub mod toast;
