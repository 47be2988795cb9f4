//! Checkout Domain
//!
//! [`assembler`] maps a checkout request into the persistence-ready
//! aggregate; [`CheckoutService`] coordinates the atomic commit and the
//! image-enrichment read path.

pub mod assembler;
pub mod service;

pub use assembler::{OrderIdSource, RandomOrderIds, assemble};
pub use service::CheckoutService;
