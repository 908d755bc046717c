//! Input processing module
//! Handles file detection, text extraction, and resume input management

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use manager::InputManager;
