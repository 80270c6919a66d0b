//! Client-side HLS attachment shared by the home carousel and detail pages.
//!
//! Browsers with native HLS play the manifest directly; others go through
//! hls.js. Videos marked `data-autoattach` load as soon as the script runs.

use maud::{html, Markup, PreEscaped};

/// hls.js build loaded for browsers without native HLS playback.
pub const HLS_JS_URL: &str = "https://cdn.jsdelivr.net/npm/hls.js@1/dist/hls.min.js";

/// Exposes `window.studioPlayer.attach(video)` and `.reset(video)`.
pub const PLAYER_JS: &str = r#"
window.studioPlayer = (function () {
  function attach(video) {
    if (!video || video.dataset.attached) return;
    var src = video.dataset.src;
    if (!src) return;
    video.dataset.attached = '1';
    if (video.canPlayType('application/vnd.apple.mpegurl')) {
      if (video.getAttribute('src') !== src) video.src = src;
    } else if (window.Hls && window.Hls.isSupported()) {
      var hls = new window.Hls();
      hls.loadSource(src);
      hls.attachMedia(video);
      video._hls = hls;
    } else {
      video.src = src;
    }
  }
  function reset(video) {
    if (!video) return;
    if (video._hls) {
      video._hls.destroy();
      video._hls = null;
    }
    delete video.dataset.attached;
    video.removeAttribute('src');
    video.load();
  }
  return { attach: attach, reset: reset };
})();
document.querySelectorAll('video[data-autoattach]').forEach(function (video) {
  window.studioPlayer.attach(video);
});
"#;

/// Script tags for pages that play video. Must precede page scripts that
/// call `window.studioPlayer`.
pub fn scripts() -> Markup {
    html! {
        script src=(HLS_JS_URL) {}
        script { (PreEscaped(PLAYER_JS)) }
    }
}
