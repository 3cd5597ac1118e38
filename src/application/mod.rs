//! Application layer containing the checkout orchestration.
//!
//! `OrderWorkflow` is the entry point: it runs the `OrderValidator` over a cart
//! and only then asks the `PaymentProcessor` to charge it.

pub mod payment;
pub mod validator;
pub mod workflow;
