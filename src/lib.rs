//! This is a simple example how to turn the skewb.
//!
//! ```
//! use skewb::prelude::*;
//!
//! let mut skewb = Skewb::new("W", "G", "R", "B", "O", "Y");
//! let scrambled = "R b' F";
//!
//! skewb.apply_rubiskewb_moves(scrambled).unwrap();
//! skewb.apply_rubiskewb_moves(&reverse(scrambled)).unwrap();
//!
//! assert_eq!(skewb, Skewb::new("W", "G", "R", "B", "O", "Y"));
//! ```
//!
//! Comparisons can ignore the orientation and even the colors of the puzzle.
//!
//! ```
//! use skewb::prelude::*;
//!
//! let solved = Skewb::new("W", "G", "R", "B", "O", "Y");
//! let mut spun = solved.clone();
//! spun.apply_wca_moves("y").unwrap();
//!
//! assert!(!solved.exact_eq(&spun));
//! assert!(solved.equal(&spun).unwrap());
//! assert!(solved.full_mirror(&Skewb::new("W", "R", "G", "B", "O", "Y")).unwrap());
//! ```

pub mod generate;
pub mod puzzle;

pub mod prelude {
	pub use crate::generate::{Algorithms, Generator};
	pub use crate::puzzle::{state::*, turn::*};
	pub use crate::puzzle::{
		Corner, Face, SkewbError, ALL_CORNERS, ALL_FACES, CORNER_STICKERS, NUM_CORNERS, NUM_FACES,
	};
}
