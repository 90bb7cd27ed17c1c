//! Declarative web UI over the analysis pipeline.
//!
//! Rendering is kept strictly separate from the pipeline: handlers call
//! [`crate::VideoAnalyzer::analyze`] and hand the result to pure page
//! templates in [`pages`].

mod pages;
mod routes;

pub use routes::{router, AppState};
