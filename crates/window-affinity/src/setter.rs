use thiserror::Error;
use tracing::{debug, warn};
use windows::Win32::Foundation::HWND;

use crate::{
    AffinityQuery, AffinityRequest, DisplayAffinity, WinError, platform::DisplayAffinityApi,
};

/// Set the display affinity a request asks for.
///
/// Makes exactly one Windows call for a present request and none for an absent one. The
/// handle is not validated, Windows decides if it is usable.
pub fn apply_request<A: DisplayAffinityApi>(
    api: &A,
    request: Option<&AffinityRequest>,
) -> Result<DisplayAffinity, Error> {
    let request = request.ok_or(Error::InvalidInput)?;
    let affinity = request.affinity();

    debug!(
        "Setting display affinity of {:?} to {}",
        request.window_handle, affinity
    );

    if let Err(error) = api.set_display_affinity(request.window_handle, affinity) {
        warn!("{error}");
        return Err(error.into());
    }

    Ok(affinity)
}

/// Read the raw display affinity of the queried window into the query.
///
/// The query is only written when Windows reports success.
pub fn apply_query<A: DisplayAffinityApi>(
    api: &A,
    query: Option<&mut AffinityQuery>,
) -> Result<u32, Error> {
    let query = query.ok_or(Error::InvalidInput)?;

    let affinity = api.display_affinity(query.window_handle).inspect_err(|error| {
        warn!("{error}");
    })?;

    query.affinity = affinity;
    Ok(affinity)
}

/// Get the display affinity of a window.
pub fn query_affinity<A: DisplayAffinityApi>(
    api: &A,
    handle: HWND,
) -> Result<DisplayAffinity, Error> {
    let raw = api.display_affinity(handle)?;
    DisplayAffinity::from_raw(raw).ok_or(Error::UnknownAffinity(raw))
}

/// Why an affinity request failed.
///
/// All variants are reported as `0` across the C boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// The parameter block address was null.
    #[error("The parameter block address was null")]
    InvalidInput,

    /// Windows declined the call.
    #[error("Windows rejected the request:\n{0}")]
    PlatformRejection(#[from] WinError),

    /// Windows reported an affinity with no known meaning.
    #[error("Windows reported an unknown display affinity: {0:#x}")]
    UnknownAffinity(u32),
}
