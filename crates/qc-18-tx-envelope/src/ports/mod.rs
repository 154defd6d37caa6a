//! # Ports Layer
//!
//! - **Inbound (Driving)**: API the node calls
//! - **Outbound (Driven)**: Context and signing capabilities the host supplies

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
