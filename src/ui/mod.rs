/// UI widgets and layers
///
/// This module builds the iced views:
/// - The report form (form.rs)
/// - The toast strip, the in-app notification sink (toast.rs)
/// - The modal success overlay (overlay.rs)

pub mod form;
pub mod overlay;
pub mod toast;
