//! API Layer
//!
//! HTTP client for the confession backend plus stored client settings.

pub mod client;

pub use client::{
    fetch_confessions, get_api_base, get_submit_mode, submit_confession, ConfessionDto,
    SubmitMode,
};
