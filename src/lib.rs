//! Logic core of the Crown & Blade Academy website
//!
//! - [`assistant`]: the Gemini-backed admissions chat assistant
//! - [`chat`]: the chat widget state machine and session driver
//! - [`booking`]: the enrollment interview wizard
//! - [`site`]: page navigation tying the pieces together
//!
//! Rendering is left to the host shell; everything here is plain state.

pub mod assistant;
pub mod booking;
pub mod chat;
pub mod config;
pub mod conversation;
pub mod llm;
pub mod logging;
pub mod profile;
pub mod prompt;
pub mod site;

#[cfg(test)]
mod testing;
