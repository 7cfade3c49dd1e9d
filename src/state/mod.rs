//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session mirror is the only authoritative client-side state: a plain
//! struct placed in an `RwSignal` provided via context, so components read a
//! single snapshot and the pure logic stays testable off the browser.

pub mod session;
