use serde::{Deserialize, Serialize};
use std::fmt;

/// Production label a movie listing belongs to. `DisneyOwned` is the
/// pre-merged superset of every studio listing, not a studio itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brand {
    Marvel,
    LucasFilm,
    Pixar,
    WaltDisneyAnimation,
    DisneyChannel,
    DisneyToon,
    Disneynature,
    BlueSky,
    DisneyOwned,
}

impl Brand {
    pub const ALL: [Brand; 9] = [
        Brand::Marvel,
        Brand::LucasFilm,
        Brand::Pixar,
        Brand::WaltDisneyAnimation,
        Brand::DisneyChannel,
        Brand::DisneyToon,
        Brand::Disneynature,
        Brand::BlueSky,
        Brand::DisneyOwned,
    ];

    /// The eight real studio labels, excluding the merged aggregate.
    pub fn studios() -> impl Iterator<Item = Brand> {
        Brand::ALL
            .into_iter()
            .filter(|b| *b != Brand::DisneyOwned)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Brand::Marvel => "Marvel",
            Brand::LucasFilm => "LucasFilm",
            Brand::Pixar => "Pixar",
            Brand::WaltDisneyAnimation => "Walt Disney Animation",
            Brand::DisneyChannel => "Disney Channel",
            Brand::DisneyToon => "DisneyToon",
            Brand::Disneynature => "Disneynature",
            Brand::BlueSky => "Blue Sky",
            Brand::DisneyOwned => "Disney Owned",
        }
    }

    /// Reverse of `display_name`. Returns `None` for anything outside the
    /// known key set; callers decide whether that is a lookup error.
    pub fn from_name(name: &str) -> Option<Brand> {
        Brand::ALL.into_iter().find(|b| b.display_name() == name)
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
