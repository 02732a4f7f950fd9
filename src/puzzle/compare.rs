//! Equality of skewbs up to spin, rotation and relabeling of the colors.
//!
//! None of the comparisons change their arguments: trial rotations are done on
//! private copies. [`Skewb::align_spin`] is the one exception and says so.

use std::fmt;

use const_for::const_for;
use log::debug;

use super::{state::*, turn::*, *};

/// The 24 rotations of the whole puzzle, starting with the identity
pub const ROTATIONS: [&str; 24] = [
	"", "x", "x'", "x2", "y", "y'", "y2", "z", "z'", "z2",
	"x y", "x y'", "x y2", "x z", "x z'", "x z2",
	"x' y", "x' y'", "x' z", "x' z'",
	"x2 y", "x2 y'", "x2 z", "x2 z'",
];

/// The spins around the vertical axis tried after the identity
const SPINS: [&str; 3] = ["y", "y'", "y2"];

// ===== Mirror signature =====

/// A corner sticker: the slot and the position in its color triple
type StickerPos = (Corner, usize);

const STICKERS_PER_FACE: usize = 4;

/// The four corner stickers on each face, ordered by slot
const fn generate_face_stickers() -> [[StickerPos; STICKERS_PER_FACE]; NUM_FACES] {
	let mut out = [[(Corner::UFR, 0); STICKERS_PER_FACE]; NUM_FACES];
	let mut filled = [0; NUM_FACES];

	const_for!(c in 0..NUM_CORNERS => {
		let corner = ALL_CORNERS[c];
		let faces = corner.faces();

		const_for!(i in 0..CORNER_STICKERS => {
			let f = faces[i] as usize;
			out[f][filled[f]] = (corner, i);
			filled[f] += 1;
		});
	});

	out
}

const FACE_STICKERS: [[StickerPos; STICKERS_PER_FACE]; NUM_FACES] = generate_face_stickers();

/// Every corner sticker of a face, replaced by the face whose center has its color
type Signature = [[Option<Face>; STICKERS_PER_FACE]; NUM_FACES];

// ===== One layer patterns =====

/// A sticker of a layer corner, relative to the first corner of the layer
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Sticker {
	Layer,
	First,
	Second,
	Foreign,
}

type LayerPattern = Vec<[Sticker; CORNER_STICKERS]>;

/// Describe the corners without their actual colors.
/// The first corner labels its stickers, the others are described by those labels.
fn layer_pattern<C: PartialEq>(corners: &[&CornerColors<C>], layer: &C) -> LayerPattern {
	let Some((reference, rest)) = corners.split_first() else {
		return Vec::new();
	};

	let mut others = [Sticker::First, Sticker::Second].into_iter();
	let labels = reference.each_ref().map(|color| {
		if color == layer {
			Sticker::Layer
		} else {
			others.next().unwrap_or(Sticker::Foreign)
		}
	});

	let mut out = vec![labels];
	for corner in rest {
		out.push(corner.each_ref().map(|color| {
			reference
				.iter()
				.position(|c| c == color)
				.map_or(Sticker::Foreign, |i| labels[i])
		}));
	}

	out
}

impl<C: Clone + PartialEq + fmt::Debug> Skewb<C> {
	/// Equality up to the spin around the vertical axis.
	///
	/// `other` is brought to the down color of `self` and compared in all
	/// four spins. Fails if no center of `other` has the down color of `self`.
	pub fn equal(&self, other: &Self) -> Result<bool, SkewbError> {
		let mut other = other.clone();
		self.align_spin(&mut other)
	}

	/// Like [`Skewb::equal`], but turns `other` itself.
	///
	/// On a match `other` is left in the orientation equal to `self`.
	/// Otherwise it is left down-aligned and turned by `y'`.
	pub fn align_spin(&self, other: &mut Self) -> Result<bool, SkewbError> {
		other.center_down(self.center(Face::Down))?;

		if self.exact_eq(other) {
			return Ok(true);
		}
		for i in 1..=3 {
			other.apply_turn(Turn::SPIN);
			if self.exact_eq(other) {
				debug!("Equal after {} y turns", i);
				return Ok(true);
			}
		}

		Ok(false)
	}

	/// Whether the layer with the given center color looks the same on both
	/// skewbs, up to spin and the naming of the two other colors of each corner.
	pub fn one_layer_mirror(&self, other: &Self, layer: &C) -> Result<bool, SkewbError> {
		let mut this = self.clone();
		this.center_down(layer)?;
		let mut other = other.clone();
		other.center_down(this.center(Face::Down))?;

		let slots: Vec<Corner> = ALL_CORNERS
			.into_iter()
			.filter(|corner| this.corner(*corner).contains(layer))
			.collect();

		let pattern = |skewb: &Self| {
			let corners: Vec<_> = slots.iter().map(|slot| skewb.corner(*slot)).collect();
			layer_pattern(&corners, layer)
		};
		let expected = pattern(&this);

		if pattern(&other) == expected {
			return Ok(true);
		}
		for spin in SPINS {
			other.apply_wca_moves(spin)?;
			if pattern(&other) == expected {
				debug!("Layer mirrored after {}", spin);
				return Ok(true);
			}
			other.apply_wca_moves(&reverse(spin))?;
		}

		Ok(false)
	}

	/// Whether both skewbs are equal up to any rotation and a consistent
	/// renaming of the colors.
	pub fn full_mirror(&self, other: &Self) -> Result<bool, SkewbError> {
		let expected = self.signature();
		let mut other = other.clone();

		for rotation in ROTATIONS {
			other.apply_wca_moves(rotation)?;
			if other.signature() == expected {
				debug!("Mirrored after rotation \"{}\"", rotation);
				return Ok(true);
			}
			other.apply_wca_moves(&reverse(rotation))?;
		}

		Ok(false)
	}

	/// The colors of the corner stickers, relative to the centers
	fn signature(&self) -> Signature {
		FACE_STICKERS.map(|stickers| {
			stickers.map(|(corner, i)| self.find_center(&self.corner(corner)[i]))
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::error::Error;

	fn colored() -> Skewb<&'static str> {
		Skewb::new("W", "G", "R", "B", "O", "Y")
	}

	fn turned(moves: &str) -> Skewb<&'static str> {
		let mut skewb = colored();
		skewb.apply_rubiskewb_moves(moves).unwrap();
		skewb
	}

	#[test]
	/// Every face lists four distinct stickers lying on it
	fn face_stickers() {
		for (face, stickers) in ALL_FACES.iter().zip(FACE_STICKERS) {
			for (corner, i) in stickers {
				assert_eq!(corner.faces()[i], *face);
			}
		}
		assert_eq!(
			FACE_STICKERS[Face::Front as usize],
			[(Corner::UFR, 1), (Corner::ULF, 2), (Corner::DRF, 2), (Corner::DFL, 1)]
		);
	}

	#[test]
	/// All listed rotations are different
	fn rotations_are_distinct() {
		let states: Vec<_> = ROTATIONS.iter().map(|r| turned(r)).collect();

		for (i, a) in states.iter().enumerate() {
			for (j, b) in states.iter().enumerate() {
				assert_eq!(a.exact_eq(b), i == j, "{} vs {}", ROTATIONS[i], ROTATIONS[j]);
			}
		}
	}

	#[test]
	/// A spin is equal but not exactly equal
	fn equal_and_exact_equal() -> Result<(), Box<dyn Error>> {
		let a = colored();
		let b = turned("y");

		assert!(a.equal(&b)?);
		assert!(!a.exact_eq(&b));
		// The comparison works on a copy
		assert_eq!(b, turned("y"));

		let scrambled = turned("R b' F");
		assert!(scrambled.equal(&turned("R b' F z x'"))?);
		assert!(!scrambled.exact_eq(&turned("R b' F z x'")));
		assert!(!scrambled.equal(&turned("R b' F'"))?);

		Ok(())
	}

	#[test]
	/// Aligning leaves the other skewb in the matching orientation
	fn align_spin_turns_other() -> Result<(), Box<dyn Error>> {
		let a = turned("F r");
		let mut b = turned("F r x' y2");

		assert!(a.align_spin(&mut b)?);
		assert!(a.exact_eq(&b));

		let mut c = turned("f");
		assert!(!a.align_spin(&mut c)?);
		assert_eq!(c.center(Face::Down), a.center(Face::Down));

		Ok(())
	}

	#[test]
	/// The down color of the first skewb must exist on the second
	fn equal_missing_color() {
		let other = Skewb::new("W", "G", "R", "B", "O", "P");
		assert_eq!(
			colored().equal(&other),
			Err(SkewbError::ColorNotFound("\"Y\"".to_string()))
		);
	}

	#[test]
	/// Rotated and relabeled skewbs are mirrors
	fn full_mirror() -> Result<(), Box<dyn Error>> {
		let solved = colored();
		for rotation in ROTATIONS {
			let rotated = turned(rotation);
			assert!(solved.full_mirror(&rotated)?, "rotation {}", rotation);
			assert_eq!(rotated, turned(rotation));
		}

		let relabeled = Skewb::new("W", "R", "G", "B", "O", "Y");
		assert!(solved.full_mirror(&relabeled)?);
		assert!(!solved.exact_eq(&relabeled));

		let a = turned("R");
		let mut b = relabeled.clone();
		b.apply_rubiskewb_moves("R x2")?;
		assert!(a.full_mirror(&b)?);
		assert!(!a.full_mirror(&solved)?);

		Ok(())
	}

	#[test]
	/// A full mirror works for any kind of color
	fn full_mirror_between_color_types() -> Result<(), Box<dyn Error>> {
		let mut faces = Skewb::solved();
		faces.apply_rubiskewb_moves("F r' b")?;
		let mut other = Skewb::from_colors([
			Face::Down,
			Face::Left,
			Face::Back,
			Face::Right,
			Face::Front,
			Face::Up,
		]);
		other.apply_rubiskewb_moves("F r' b y")?;

		assert!(faces.full_mirror(&other)?);

		Ok(())
	}

	#[test]
	/// One layer is compared up to spin and renaming of the side colors
	fn one_layer_mirror() -> Result<(), Box<dyn Error>> {
		let solved = colored();
		assert!(solved.one_layer_mirror(&turned("y"), &"Y")?);

		let swapped = Skewb::new("W", "R", "G", "B", "O", "Y");
		assert!(solved.one_layer_mirror(&swapped, &"Y")?);
		assert!(!solved.equal(&swapped)?);

		let a = turned("F r");
		assert!(a.one_layer_mirror(&turned("F r y2"), &"W")?);
		assert!(a.one_layer_mirror(&turned("F r y2"), &"Y")?);

		assert!(!turned("R").one_layer_mirror(&solved, &"Y")?);
		assert!(!turned("F").one_layer_mirror(&solved, &"W")?);

		Ok(())
	}

	#[test]
	/// The layer color must be a center color
	fn one_layer_mirror_missing_color() {
		assert_eq!(
			colored().one_layer_mirror(&colored(), &"P"),
			Err(SkewbError::ColorNotFound("\"P\"".to_string()))
		);
	}

	#[test]
	/// Patterns only depend on which colors repeat
	fn layer_patterns() {
		let corners = [["Y", "R", "G"], ["G", "Y", "B"], ["O", "R", "Y"]];
		let refs: Vec<_> = corners.iter().collect();

		assert_eq!(
			layer_pattern(&refs, &"Y"),
			vec![
				[Sticker::Layer, Sticker::First, Sticker::Second],
				[Sticker::Second, Sticker::Layer, Sticker::Foreign],
				[Sticker::Foreign, Sticker::First, Sticker::Layer],
			]
		);
		assert!(layer_pattern::<&str>(&[], &"Y").is_empty());
	}
}
