//! The [`Tile`] type — one board cell and its distance annotations.

/// Static terrain of a tile.
///
/// Everything except [`Category::Obstacle`] is walkable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Category {
    #[default]
    Floor,
    Obstacle,
    /// Floor carrying a target marker.
    Goal,
}

/// A single board cell.
///
/// Walkability is derived from the category and is not serialized.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "TileRepr", into = "TileRepr")
)]
pub struct Tile {
    category: Category,
    walkable: bool,
    source_distance: Option<u32>,
    target_distance: Option<u32>,
}

impl Tile {
    /// Create a tile of the given category with both distances unreached.
    #[inline]
    pub const fn new(category: Category) -> Self {
        Self {
            category,
            walkable: !matches!(category, Category::Obstacle),
            source_distance: None,
            target_distance: None,
        }
    }

    #[inline]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Set the category and recompute walkability.
    #[inline]
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
        self.walkable = category != Category::Obstacle;
    }

    /// Whether the static terrain allows standing here.
    #[inline]
    pub const fn is_walkable(&self) -> bool {
        self.walkable
    }

    /// Push distance from the nearest crate start, or `None` if unreached.
    #[inline]
    pub const fn source_distance(&self) -> Option<u32> {
        self.source_distance
    }

    /// Push distance to the nearest crate target, or `None` if unreached.
    #[inline]
    pub const fn target_distance(&self) -> Option<u32> {
        self.target_distance
    }

    #[inline]
    pub fn set_source_distance(&mut self, d: Option<u32>) {
        self.source_distance = d;
    }

    #[inline]
    pub fn set_target_distance(&mut self, d: Option<u32>) {
        self.target_distance = d;
    }

    /// Reset both annotations to unreached.
    #[inline]
    pub fn clear_distances(&mut self) {
        self.source_distance = None;
        self.target_distance = None;
    }
}

impl Default for Tile {
    #[inline]
    fn default() -> Self {
        Self::new(Category::Floor)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct TileRepr {
    category: Category,
    #[serde(default)]
    source_distance: Option<u32>,
    #[serde(default)]
    target_distance: Option<u32>,
}

#[cfg(feature = "serde")]
impl From<TileRepr> for Tile {
    fn from(r: TileRepr) -> Self {
        let mut t = Tile::new(r.category);
        t.source_distance = r.source_distance;
        t.target_distance = r.target_distance;
        t
    }
}

#[cfg(feature = "serde")]
impl From<Tile> for TileRepr {
    fn from(t: Tile) -> Self {
        Self {
            category: t.category,
            source_distance: t.source_distance,
            target_distance: t.target_distance,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn tile_round_trip() {
        let mut t = Tile::new(Category::Goal);
        t.set_source_distance(Some(4));
        let json = serde_json::to_string(&t).unwrap();
        assert!(!json.contains("walkable"));
        let back: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }

    #[test]
    fn walkable_follows_category_on_load() {
        let json = r#"{"category":"Obstacle","walkable":true,"source_distance":null,"target_distance":2}"#;
        let t: Tile = serde_json::from_str(json).unwrap();
        assert!(!t.is_walkable());
        assert_eq!(t, {
            let mut o = Tile::new(Category::Obstacle);
            o.set_target_distance(Some(2));
            o
        });

        let t: Tile = serde_json::from_str(r#"{"category":"Floor","walkable":false}"#).unwrap();
        assert!(t.is_walkable());
        assert_eq!(t.source_distance(), None);
    }
}
