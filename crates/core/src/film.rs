//! Project/film content model and featured-selection rules.
//!
//! Films are authored in the content store and only ever read here. The
//! serde layout matches the projection produced by the query catalogue in
//! `studio-content` (camelCase keys, `_id` for the identifier).

use serde::{Deserialize, Serialize};

use crate::streaming;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum number of projects shown in the home-page carousel.
pub const MAX_FEATURED: usize = 4;

/// Video status reported by the streaming CDN once an asset can be played.
pub const VIDEO_STATUS_READY: &str = "ready";

/// Category tags known to the site, in navigation order.
pub const CATEGORIES: &[(&str, &str)] = &[
    ("commercial", "Commercial"),
    ("music-video", "Music Video"),
    ("documentary", "Documentary"),
    ("short-film", "Short Film"),
    ("branded-content", "Branded Content"),
];

/// Human-readable label for a category tag.
///
/// Unknown tags are returned unchanged.
pub fn category_label(tag: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, label)| *label)
        .unwrap_or(tag)
}

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

/// A still image attached to a film.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Metadata reported by the streaming CDN for an asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
}

/// Reference to an adaptive-stream asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRef {
    #[serde(default)]
    pub playback_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub metadata: VideoMetadata,
}

impl VideoRef {
    /// The playback identifier, if this asset can be played.
    ///
    /// An empty identifier or an explicit non-ready status makes the asset
    /// unplayable. A missing status is treated as ready.
    pub fn playable_id(&self) -> Option<&str> {
        let id = self.playback_id.as_deref().map(str::trim)?;
        if id.is_empty() {
            return None;
        }
        match self.status.as_deref() {
            None | Some(VIDEO_STATUS_READY) => Some(id),
            Some(_) => None,
        }
    }

    /// HLS manifest URL for this asset, if playable.
    pub fn manifest_url(&self) -> Option<String> {
        self.playable_id().map(streaming::manifest_url)
    }
}

/// A project/film entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stills: Vec<ImageRef>,
    #[serde(default)]
    pub preview_video: Option<VideoRef>,
    #[serde(default)]
    pub full_video: Option<VideoRef>,
}

/// Query projections yield `null` for absent members; treat that as the
/// type's default instead of a decode failure.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Film {
    /// Playback identifier of the preview clip, if it can be played.
    pub fn preview_playback_id(&self) -> Option<&str> {
        self.preview_video.as_ref().and_then(VideoRef::playable_id)
    }

    /// Playback identifier of the full film, if it can be played.
    pub fn full_playback_id(&self) -> Option<&str> {
        self.full_video.as_ref().and_then(VideoRef::playable_id)
    }

    /// Display label for the film's category.
    pub fn category_label(&self) -> Option<&str> {
        self.category.as_deref().map(category_label)
    }
}

// ---------------------------------------------------------------------------
// Featured selection
// ---------------------------------------------------------------------------

/// Choose the films shown in the carousel.
///
/// Flagged films come first, capped at [`MAX_FEATURED`]. When nothing is
/// flagged, the first [`MAX_FEATURED`] films in the given order are used.
pub fn select_featured(films: &[Film]) -> Vec<&Film> {
    let flagged: Vec<&Film> = films
        .iter()
        .filter(|f| f.featured)
        .take(MAX_FEATURED)
        .collect();

    if !flagged.is_empty() {
        return flagged;
    }

    films.iter().take(MAX_FEATURED).collect()
}

/// One entry of the carousel display list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselSlide {
    pub index: usize,
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub playback_id: String,
    pub manifest_url: String,
    pub poster_url: String,
}

/// Build the carousel display list from the full film list.
///
/// Applies [`select_featured`] and then drops films without a playable
/// preview. Slide indices are contiguous from zero.
pub fn carousel_slides(films: &[Film]) -> Vec<CarouselSlide> {
    select_featured(films)
        .into_iter()
        .filter_map(|film| {
            let id = film.preview_playback_id()?;
            Some((film, id))
        })
        .enumerate()
        .map(|(index, (film, id))| CarouselSlide {
            index,
            title: film.title.clone(),
            slug: film.slug.clone(),
            category: film.category.clone(),
            playback_id: id.to_string(),
            manifest_url: streaming::manifest_url(id),
            poster_url: streaming::poster_url(id),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Slugs
// ---------------------------------------------------------------------------

/// Check whether `slug` is a well-formed routing key.
///
/// Lowercase ASCII letters and digits, separated by single hyphens, with no
/// leading or trailing hyphen.
///
/// ```
/// use studio_core::film::is_valid_slug;
///
/// assert!(is_valid_slug("night-drive-2023"));
/// assert!(!is_valid_slug("Night Drive"));
/// assert!(!is_valid_slug("-night"));
/// ```
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .split('-')
            .all(|part| {
                !part.is_empty()
                    && part
                        .bytes()
                        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
            })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film(slug: &str, featured: bool, playback_id: Option<&str>) -> Film {
        Film {
            id: format!("film-{slug}"),
            title: slug.to_uppercase(),
            slug: slug.to_string(),
            category: Some("commercial".to_string()),
            description: None,
            year: Some(2024),
            client: None,
            featured,
            stills: vec![],
            preview_video: playback_id.map(|id| VideoRef {
                playback_id: Some(id.to_string()),
                status: Some(VIDEO_STATUS_READY.to_string()),
                metadata: VideoMetadata::default(),
            }),
            full_video: None,
        }
    }

    #[test]
    fn featured_caps_at_four() {
        let films: Vec<Film> = (0..6).map(|i| film(&format!("f{i}"), true, Some("p"))).collect();
        assert_eq!(select_featured(&films).len(), MAX_FEATURED);
    }

    #[test]
    fn featured_prefers_flagged_films() {
        let films = vec![
            film("a", false, Some("p")),
            film("b", true, Some("p")),
            film("c", false, Some("p")),
            film("d", true, Some("p")),
        ];
        let slugs: Vec<&str> = select_featured(&films).iter().map(|f| f.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "d"]);
    }

    #[test]
    fn featured_falls_back_to_first_four() {
        let films: Vec<Film> = (0..6).map(|i| film(&format!("f{i}"), false, Some("p"))).collect();
        let slugs: Vec<&str> = select_featured(&films).iter().map(|f| f.slug.as_str()).collect();
        assert_eq!(slugs, vec!["f0", "f1", "f2", "f3"]);
    }

    #[test]
    fn featured_of_empty_list_is_empty() {
        assert!(select_featured(&[]).is_empty());
    }

    #[test]
    fn slides_skip_unplayable_previews() {
        let films = vec![
            film("a", true, Some("pa")),
            film("b", true, None),
            film("c", true, Some("")),
            film("d", true, Some("pd")),
        ];
        let slides = carousel_slides(&films);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].slug, "a");
        assert_eq!(slides[0].index, 0);
        assert_eq!(slides[1].slug, "d");
        assert_eq!(slides[1].index, 1);
        assert_eq!(slides[1].manifest_url, "https://stream.mux.com/pd.m3u8");
    }

    #[test]
    fn non_ready_status_is_not_playable() {
        let video = VideoRef {
            playback_id: Some("abc".into()),
            status: Some("preparing".into()),
            metadata: VideoMetadata::default(),
        };
        assert_eq!(video.playable_id(), None);

        let video = VideoRef {
            status: None,
            ..video
        };
        assert_eq!(video.playable_id(), Some("abc"));
    }

    #[test]
    fn film_deserializes_from_store_projection() {
        let json = serde_json::json!({
            "_id": "abc",
            "title": "Night Drive",
            "slug": "night-drive",
            "category": "music-video",
            "year": 2023,
            "featured": true,
            "stills": [{ "url": "https://cdn.example/1.jpg", "alt": "Car" }],
            "previewVideo": { "playbackId": "p1", "status": "ready", "duration": 12.5 }
        });
        let film: Film = serde_json::from_value(json).unwrap();
        assert_eq!(film.id, "abc");
        assert_eq!(film.preview_playback_id(), Some("p1"));
        assert_eq!(film.preview_video.unwrap().metadata.duration, Some(12.5));
        assert_eq!(film.full_video, None);
        assert_eq!(film.stills[0].alt.as_deref(), Some("Car"));
    }

    #[test]
    fn null_members_fall_back_to_defaults() {
        let json = serde_json::json!({
            "_id": "abc",
            "title": "Untitled",
            "slug": "untitled",
            "featured": null,
            "stills": null,
            "previewVideo": null
        });
        let film: Film = serde_json::from_value(json).unwrap();
        assert!(!film.featured);
        assert!(film.stills.is_empty());
        assert_eq!(film.preview_playback_id(), None);
    }

    #[test]
    fn category_labels() {
        assert_eq!(category_label("music-video"), "Music Video");
        assert_eq!(category_label("experimental"), "experimental");
    }

    #[test]
    fn slug_validation() {
        assert!(is_valid_slug("a"));
        assert!(is_valid_slug("spring-2024-campaign"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("double--hyphen"));
        assert!(!is_valid_slug("trailing-"));
        assert!(!is_valid_slug("../etc"));
    }
}
