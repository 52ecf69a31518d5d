//! Card system: faces, catalog, board cards, and deck building.
//!
//! ## Key Types
//!
//! - `FaceId` / `FaceDefinition`: the images cards are printed with
//! - `FaceCatalog`: ordered set of unique faces
//! - `Card` / `CardId` / `Visibility`: one board slot and its lifecycle
//! - `Board`: the slots of one session
//! - `CardAmount` / `AmountBounds`: validated card counts
//! - `build_board`: the deck builder

pub mod board;
pub mod card;
pub mod catalog;
pub mod deck;
pub mod face;

pub use board::Board;
pub use card::{Card, CardId, Visibility};
pub use catalog::{FaceCatalog, CARD_BACK_IMAGE, DEFAULT_FACE_DIRECTORY, STANDARD_FACES};
pub use deck::{build_board, AmountBounds, CardAmount};
pub use face::{FaceDefinition, FaceId};
