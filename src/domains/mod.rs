//! Domain logic exposed over MCP.
//!
//! `prompts` owns the SAS-to-Python prompt texts and their rendering,
//! `resources` publishes the raw texts, and `tools` checks requests before
//! they are sent.

pub mod prompts;
pub mod resources;
pub mod tools;
