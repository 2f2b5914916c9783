//! Multi-source anime site extraction library
//!
//! This library turns raw listing, search, detail and episode documents from
//! a closed set of anime streaming sites into uniform [`AnimeSummary`],
//! [`EpisodeRef`] and [`AnimeDetail`] records.
//!
//! Fetching is the caller's concern: every entry point takes the
//! already-downloaded response body and is a pure, synchronous function over
//! it, so calls are safe to run from any number of concurrent tasks.
//!
//! ```
//! use anime_sources::{ParseOutcome, Source};
//!
//! let html = r#"<div class="film-list"><div class="item">
//!     <a class="name" href="/play/naruto.4avc">Naruto</a>
//!     <a class="poster" href="/play/naruto.4avc"><img src="https://img.animeworld.so/naruto.jpg"></a>
//! </div></div>"#;
//!
//! match Source::AnimeWorld.parse_featured(html).unwrap() {
//!     ParseOutcome::Items(items) => assert_eq!(items[0].title, "Naruto"),
//!     ParseOutcome::Empty => unreachable!(),
//! }
//! ```

pub mod error;
pub mod models;
pub mod normalize;
pub mod select;
pub mod source;
pub mod sources;

pub use error::{ExtractError, ExtractResult, ParseOutcome};
pub use models::{AnimeDetail, AnimeSummary, EpisodeRef, ScoreBucket};
pub use source::{DocumentKind, Source};
