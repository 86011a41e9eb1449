//! UI module for the UQ workflow window
//!
//! # Layout (top to bottom)
//! - `header` - Application heading
//! - `toolbar` - File commands (New, Open, Save, Save As, Quit), theme toggle
//! - `input_random_variables` - Random variable table
//! - `input_fem` - FEM program and input files
//! - `input_edp` - Engineering demand parameter list
//! - `input_sampling` - Sampling method, samples, seed
//! - `footer` - Funding acknowledgement
//! - `status_bar` - Current file and status messages
//!
//! # Shared Components
//! - `shared/form` - Labeled inputs and section headings used by every panel

// Static display
pub mod header;
pub mod footer;

// Chrome
pub mod toolbar;
pub mod status_bar;

// Input panels
pub mod input_random_variables;
pub mod input_fem;
pub mod input_edp;
pub mod input_sampling;

// Shared components
pub mod shared;
