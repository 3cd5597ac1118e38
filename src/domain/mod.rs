//! Domain types and the ports through which the checkout core talks to its
//! collaborators. Nothing in here performs I/O.

pub mod cart;
pub mod menu;
pub mod money;
pub mod order;
pub mod payment;
pub mod ports;
pub mod restaurant;
