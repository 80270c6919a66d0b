//! Adaptive-streaming URL construction.
//!
//! Playback identifiers are opaque tokens issued by the streaming CDN. The
//! site never proxies video; it only builds manifest and poster URLs that
//! the browser loads directly.

/// Base URL for HLS manifests.
pub const STREAM_BASE_URL: &str = "https://stream.mux.com";

/// Base URL for poster/thumbnail images.
pub const IMAGE_BASE_URL: &str = "https://image.mux.com";

/// Build the HLS manifest URL for a playback identifier.
///
/// ```
/// use studio_core::streaming::manifest_url;
///
/// assert_eq!(manifest_url("abc123"), "https://stream.mux.com/abc123.m3u8");
/// ```
pub fn manifest_url(playback_id: &str) -> String {
    format!("{STREAM_BASE_URL}/{playback_id}.m3u8")
}

/// Build the poster image URL for a playback identifier.
pub fn poster_url(playback_id: &str) -> String {
    format!("{IMAGE_BASE_URL}/{playback_id}/thumbnail.jpg")
}
