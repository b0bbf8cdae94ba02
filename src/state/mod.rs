/// State management module
///
/// This module handles the report-side application state, including:
/// - The draft report data model (draft.rs)
/// - The form store owning the live draft (store.rs)
/// - Pre-submission validation (validate.rs)
/// - The submission workflow state machine (workflow.rs)

pub mod draft;
pub mod store;
pub mod validate;
pub mod workflow;
