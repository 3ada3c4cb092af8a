//! CLI library components for the bulk ticket loader.

pub mod logging;
