//! # Window Affinity
//! A DLL that toggles whether a window is excluded from screen capture.
//!
//! Hosts load the library and call `SetWindowAffinity` with the address of an
//! [AffinityRequest], either directly or as the start routine of a thread. The same types and
//! calls are usable from Rust through [apply_request] and [query_affinity].
//!

mod affinity;
mod exports;
mod load_hook;
pub mod platform;
mod request;
mod result;
mod send;
mod setter;

#[cfg(test)]
mod test_api;

pub use affinity::DisplayAffinity;
pub use exports::{DllMain, QueryWindowAffinity, SetWindowAffinity};
pub use load_hook::LoadHook;
pub use request::{AffinityQuery, AffinityRequest};
pub use result::{LabelledWinResult, WinError, WinErrorSource};
pub use send::SendHWND;
pub use setter::{Error, apply_query, apply_request, query_affinity};
