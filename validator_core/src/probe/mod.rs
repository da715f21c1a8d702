pub mod client;

pub use client::{ProbeClient, ProbeOptions, ProbeResponse};
