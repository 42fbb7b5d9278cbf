//! Stripe pattern generation for structured light scanning.

mod stripes;

pub use stripes::{StripeConfig, StripeGenerator};
