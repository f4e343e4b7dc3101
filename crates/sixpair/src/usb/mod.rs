//! USB access layer
//!
//! Enumeration of attached SIXAXIS controllers and the per-candidate
//! pairing session that issues the master-address control transfers.

pub mod enumerate;
pub mod session;

pub use enumerate::{Candidate, find_candidates};
pub use session::PairingSession;
