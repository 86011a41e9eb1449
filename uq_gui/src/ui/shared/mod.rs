//! Shared UI components reusable across the input panels
//!
//! Contains:
//! - `form` - Labeled text inputs, pickers and section headings

pub mod form;
