//! Platform-agnostic state and behavior behind the landing page.

pub mod theme;
pub mod timing;
pub mod toast;
pub mod waitlist;
