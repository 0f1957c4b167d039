/// State management module
///
/// This module handles all application state:
/// - The immutable view model and generation tokens (session.rs)
/// - Upload, completion, download and reset sequencing (controller.rs)

pub mod controller;
pub mod session;
