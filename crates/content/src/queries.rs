//! Query catalogue.
//!
//! Every query projects films into the shape expected by
//! [`studio_core::film::Film`].

macro_rules! film_projection {
    () => {
        r#"{
  _id,
  title,
  "slug": slug.current,
  category,
  description,
  year,
  client,
  featured,
  "stills": stills[]{ "url": asset->url, alt },
  "previewVideo": previewVideo.asset->{ playbackId, status, "duration": data.duration, "aspectRatio": data.aspect_ratio },
  "fullVideo": fullVideo.asset->{ playbackId, status, "duration": data.duration, "aspectRatio": data.aspect_ratio }
}"#
    };
}

/// Default ordering for film lists: newest first, then by creation.
macro_rules! film_order {
    () => {
        "order(year desc, _createdAt desc)"
    };
}

/// All films in default order.
pub const ALL_FILMS: &str = concat!(
    r#"*[_type == "film" && defined(slug.current)] | "#,
    film_order!(),
    " ",
    film_projection!()
);

/// Films in one category. Parameters: `$category`.
pub const FILMS_BY_CATEGORY: &str = concat!(
    r#"*[_type == "film" && defined(slug.current) && category == $category] | "#,
    film_order!(),
    " ",
    film_projection!()
);

/// Films flagged as featured, capped at four.
pub const FEATURED_FILMS: &str = concat!(
    r#"*[_type == "film" && defined(slug.current) && featured == true] | "#,
    film_order!(),
    " [0...4] ",
    film_projection!()
);

/// A single film by slug, or `null`. Parameters: `$slug`.
pub const FILM_BY_SLUG: &str = concat!(
    r#"*[_type == "film" && slug.current == $slug][0] "#,
    film_projection!()
);

/// The studio/about page document, or `null`.
pub const STUDIO_PAGE: &str = r#"*[_type == "studio"][0]{
  title,
  intro,
  "body": body[_type == "block"].children[].text,
  "team": team[]{ name, role, "image": image.asset->url },
  clients
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameterised_queries_reference_their_params() {
        assert!(FILMS_BY_CATEGORY.contains("$category"));
        assert!(FILM_BY_SLUG.contains("$slug"));
        assert!(!ALL_FILMS.contains('$'));
    }

    #[test]
    fn film_queries_share_the_projection() {
        for query in [ALL_FILMS, FILMS_BY_CATEGORY, FEATURED_FILMS, FILM_BY_SLUG] {
            assert!(query.contains(r#""slug": slug.current"#), "{query}");
            assert!(query.contains(r#""previewVideo""#), "{query}");
        }
    }
}
