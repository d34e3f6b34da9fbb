//! Clausewise Domain Layer
//!
//! Core types and trait interfaces for the contract analyzer. Like every
//! domain crate in this workspace it has no third-party dependencies; the
//! PDF and LLM integrations live in their own crates and implement the traits
//! defined here.
//!
//! ## Key Concepts
//!
//! - **ContractText**: the extracted text of one contract, read-only for a run
//! - **Message / ChatRequest**: role-tagged input for one chat completion
//! - **RiskArea**: the fixed checklist of contract-risk categories
//! - **RiskLevel**: the qualitative level embedded in a risk summary

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod message;
pub mod risk;
pub mod traits;

// Re-exports for convenience
pub use contract::ContractText;
pub use message::{ChatRequest, Message, Role};
pub use risk::{RiskArea, RiskFinding, RiskLevel};
pub use traits::{ChatProvider, TextExtractor};
