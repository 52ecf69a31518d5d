//! Face catalog for image lookup.
//!
//! The `FaceCatalog` stores every face a board can be built from, in a
//! fixed order, together with the directory the images are served from.

use rustc_hash::FxHashSet;

use super::face::{FaceDefinition, FaceId};
use crate::error::{GameError, Result};

/// Directory the standard face images live in.
pub const DEFAULT_FACE_DIRECTORY: &str = "assets/images/card_faces";

/// Image shown on the back of every card.
pub const CARD_BACK_IMAGE: &str = "assets/images/card_back.png";

/// Image names of the standard seven-face deck.
pub const STANDARD_FACES: [&str; 7] = [
    "0db24329c0b525cb883e4f809fbd269a.jpg",
    "26526022247041616a4bb0cca3164ead.jpg",
    "620fc6e9c798ca52968c8e71931b9a98.jpg",
    "68cc1598b0e6ab85e6f419ddfd22b322.jpg",
    "871a89f8dc755be110bfff58a0520138.jpg",
    "af7d25d12b736dbbac7bdb04ba0cab16.jpg",
    "c5c3cee183ecb7105747dc0e5566e9fc.jpg",
];

/// Ordered catalog of unique faces.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{FaceCatalog, FaceId};
///
/// let catalog = FaceCatalog::new(["cat.jpg", "dog.jpg", "owl.jpg"]).unwrap();
///
/// assert_eq!(catalog.len(), 3);
/// assert_eq!(catalog.max_card_amount(), 6);
/// assert_eq!(catalog.get(FaceId::new(1)).unwrap().name, "dog.jpg");
/// assert_eq!(catalog.image_path(FaceId::new(2)).unwrap(), "assets/images/card_faces/owl.jpg");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceCatalog {
    faces: Vec<FaceDefinition>,
    directory: String,
}

impl FaceCatalog {
    /// Build a catalog from image names.
    ///
    /// Fails on an empty list or on a repeated name.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = FxHashSet::default();
        let mut faces = Vec::new();

        for name in names {
            let name = name.into();
            if !seen.insert(name.clone()) {
                return Err(GameError::DuplicateFace(name));
            }
            let id = FaceId::new(faces.len() as u32);
            faces.push(FaceDefinition::new(id, name));
        }

        if faces.is_empty() {
            return Err(GameError::EmptyCatalog);
        }

        Ok(Self {
            faces,
            directory: DEFAULT_FACE_DIRECTORY.to_string(),
        })
    }

    /// The seven-face catalog the game ships with.
    #[must_use]
    pub fn standard() -> Self {
        let faces = STANDARD_FACES
            .iter()
            .enumerate()
            .map(|(i, name)| FaceDefinition::new(FaceId::new(i as u32), *name))
            .collect();
        Self {
            faces,
            directory: DEFAULT_FACE_DIRECTORY.to_string(),
        }
    }

    /// Serve images from another directory.
    #[must_use]
    pub fn with_directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = directory.into();
        self
    }

    #[must_use]
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Get a face by ID.
    #[must_use]
    pub fn get(&self, id: FaceId) -> Option<&FaceDefinition> {
        self.faces.get(id.index())
    }

    /// Path of a face's image, `<directory>/<name>`.
    #[must_use]
    pub fn image_path(&self, id: FaceId) -> Option<String> {
        self.get(id)
            .map(|face| format!("{}/{}", self.directory, face.name))
    }

    /// Find a face by image name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&FaceDefinition> {
        self.faces.iter().find(|face| face.name == name)
    }

    /// Check if a face ID belongs to this catalog.
    #[must_use]
    pub fn contains(&self, id: FaceId) -> bool {
        id.index() < self.faces.len()
    }

    /// Number of faces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Always false for a constructed catalog; kept for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Largest board this catalog can fill: two cards per face.
    #[must_use]
    pub fn max_card_amount(&self) -> usize {
        2 * self.faces.len()
    }

    /// All face IDs in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces.iter().map(|face| face.id)
    }

    /// Iterate over all faces in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &FaceDefinition> {
        self.faces.iter()
    }
}

impl Default for FaceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
