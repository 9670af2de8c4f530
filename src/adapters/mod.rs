//! Adapters: concrete implementations of the domain ports (outbound) and
//! the user-facing surface (inbound).

pub mod inbound;
pub mod outbound;
