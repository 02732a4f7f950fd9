pub mod compare;
pub mod state;
pub mod turn;

use strum::EnumCount;
use turn::Notation;

/// The number of faces (and therefore centers) of a skewb
pub const NUM_FACES: usize = Face::COUNT;

/// The number of stickers on a corner piece
pub const CORNER_STICKERS: usize = 3;

/// A face of the puzzle, which is also the slot of its center.
/// The order is used as the face index of the mirror signature.
#[derive(
	Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug,
	strum::EnumIter, strum::EnumCount, strum::Display, strum::FromRepr,
	serde::Serialize, serde::Deserialize,
)]
#[repr(u8)]
pub enum Face {
	Up,
	Front,
	Right,
	Back,
	Left,
	Down,
}

pub const ALL_FACES: [Face; NUM_FACES] = [
	Face::Up,
	Face::Front,
	Face::Right,
	Face::Back,
	Face::Left,
	Face::Down,
];

// ===== Corner Slot =====

/// The slot of a corner piece.
/// The letters name the faces in the order of the corner's stickers.
#[derive(
	Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug,
	strum::EnumIter, strum::EnumString, strum::EnumCount, strum::Display,
	serde::Serialize, serde::Deserialize,
)]
#[allow(clippy::upper_case_acronyms)]
#[repr(usize)]
#[rustfmt::skip]
pub enum Corner {
	UFR, URB, ULF, UBL, // up corners
	DRF, DBR, DFL, DLB, // down corners
}

pub const NUM_CORNERS: usize = Corner::COUNT;

pub const ALL_CORNERS: [Corner; NUM_CORNERS] = [
	Corner::UFR,
	Corner::URB,
	Corner::ULF,
	Corner::UBL,
	Corner::DRF,
	Corner::DBR,
	Corner::DFL,
	Corner::DLB,
];

impl Corner {
	/// The faces the stickers of this slot lie on, in sticker order.
	pub const fn faces(self) -> [Face; CORNER_STICKERS] {
		match self {
			Corner::UFR => [Face::Up, Face::Front, Face::Right],
			Corner::URB => [Face::Up, Face::Right, Face::Back],
			Corner::ULF => [Face::Up, Face::Left, Face::Front],
			Corner::UBL => [Face::Up, Face::Back, Face::Left],
			Corner::DRF => [Face::Down, Face::Right, Face::Front],
			Corner::DBR => [Face::Down, Face::Back, Face::Right],
			Corner::DFL => [Face::Down, Face::Front, Face::Left],
			Corner::DLB => [Face::Down, Face::Left, Face::Back],
		}
	}
}

/// Everything that can go wrong while turning or comparing a skewb.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SkewbError {
	#[error("\"{token}\" is not a supported {notation} move; valid moves are: {}", vocabulary_list(.notation))]
	UnsupportedMove { token: String, notation: Notation },
	#[error("{0} is not a color of the skewb")]
	ColorNotFound(String),
}

fn vocabulary_list(notation: &Notation) -> String {
	notation
		.vocabulary()
		.iter()
		.map(|(token, _)| format!("\"{}\"", token))
		.collect::<Vec<_>>()
		.join(", ")
}

#[cfg(test)]
mod tests {
	use super::{state::*, turn::*, *};
	use std::error::Error;
	use strum::IntoEnumIterator;

	#[test]
	/// The WCA face turns are the little/upper Rubiskewb turns under another name
	fn wca_turns_match_rubiskewb() -> Result<(), Box<dyn Error>> {
		let pairs = [
			("U", "B"),
			("U'", "B'"),
			("R", "r"),
			("R'", "r'"),
			("B", "b"),
			("B'", "b'"),
			("L", "l"),
			("L'", "l'"),
			("x y2 z'", "x y2 z'"),
		];

		for (wca, rubiskewb) in pairs {
			let mut skewb1 = Skewb::new("W", "G", "R", "B", "O", "Y");
			let mut skewb2 = skewb1.clone();

			skewb1.apply_wca_moves(wca)?;
			skewb2.apply_rubiskewb_moves(rubiskewb)?;

			if skewb1 != skewb2 {
				panic!("WCA {} is not Rubiskewb {}", wca, rubiskewb);
			}
		}

		Ok(())
	}

	#[test]
	/// Every face touches exactly four corner stickers
	fn corner_faces_cover_every_face() {
		assert_eq!((NUM_FACES, NUM_CORNERS), (6, 8));

		for face in Face::iter() {
			let count = Corner::iter()
				.flat_map(|c| c.faces())
				.filter(|f| *f == face)
				.count();
			assert_eq!(count, 4, "{} has {} corner stickers", face, count);
		}

		for (i, corner) in ALL_CORNERS.iter().enumerate() {
			assert_eq!(*corner as usize, i);
		}
		for (i, face) in ALL_FACES.iter().enumerate() {
			assert_eq!(Face::from_repr(i as u8), Some(*face));
		}
	}

	#[test]
	/// The unsupported move error names the token and the vocabulary
	fn unsupported_move_message() {
		let err = SkewbError::UnsupportedMove {
			token: "Q".to_string(),
			notation: Notation::Wca,
		};
		let msg = err.to_string();

		assert!(msg.starts_with("\"Q\" is not a supported WCA move"));
		assert!(msg.contains("\"U'\""));
		assert!(msg.contains("\"z2\""));
		assert!(!msg.contains("\"f\""));
	}
}
