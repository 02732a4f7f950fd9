use std::fmt;

use strum::IntoEnumIterator;

use super::{turn::*, *};

/// The colors of a corner, in the sticker order of its slot
pub type CornerColors<C> = [C; CORNER_STICKERS];

/// A skewb, stored as the colors sitting in each corner and center slot.
///
/// Colors are opaque: anything comparable works (strings, color codes or
/// [`Face`] itself). The slots never move, turning only moves their contents.
/// Well-formedness of the colors is not checked.
#[derive(
	Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug,
	serde::Serialize, serde::Deserialize,
)]
pub struct Skewb<C = String> {
	corners: [CornerColors<C>; NUM_CORNERS],
	centers: [C; NUM_FACES],
}

// ===== Turn definitions =====

/// The corners and centers cycled by a face turn around the pivot.
/// A clockwise turn moves each entry into the next one.
const fn twist_cycle(pivot: Corner) -> ([Corner; 3], [Face; 3]) {
	use Corner::*;
	use Face::*;

	match pivot {
		URB => ([UFR, UBL, DBR], [Right, Up, Back]),
		DBR => ([DRF, URB, DLB], [Right, Back, Down]),
		UBL => ([DLB, URB, ULF], [Up, Left, Back]),
		DLB => ([DBR, UBL, DFL], [Back, Left, Down]),
		ULF => ([UBL, UFR, DFL], [Up, Front, Left]),
		DFL => ([DLB, ULF, DRF], [Front, Down, Left]),
		UFR => ([ULF, URB, DRF], [Front, Up, Right]),
		DRF => ([DFL, UFR, DBR], [Front, Right, Down]),
	}
}

/// The slots moved by a whole-puzzle rotation
struct AxisCycle {
	upper: [Corner; 4],
	lower: [Corner; 4],
	centers: [Face; 4],
	/// Whether the corners are twisted in place afterwards
	reorient: bool,
}

const fn axis_cycle(axis: Axis) -> AxisCycle {
	use Corner::*;
	use Face::*;

	match axis {
		Axis::X => AxisCycle {
			upper: [UFR, URB, DBR, DRF],
			lower: [ULF, UBL, DLB, DFL],
			centers: [Front, Up, Back, Down],
			reorient: true,
		},
		// The stickers on the y axis are centers, so no corner is twisted
		Axis::Y => AxisCycle {
			upper: [UFR, ULF, UBL, URB],
			lower: [DRF, DFL, DLB, DBR],
			centers: [Front, Left, Back, Right],
			reorient: false,
		},
		Axis::Z => AxisCycle {
			upper: [ULF, UFR, DRF, DFL],
			lower: [UBL, URB, DBR, DLB],
			centers: [Up, Right, Down, Left],
			reorient: true,
		},
	}
}

/// Twist directions (true = clockwise) of the rings after an x or z rotation
const UPPER_REORIENT: [bool; 4] = [false, true, false, true];
const LOWER_REORIENT: [bool; 4] = [true, false, true, false];

/// The rotation bringing the center of the face to the down slot
const fn down_rotation(face: Face) -> Option<Turn> {
	match face {
		Face::Up => Some(Turn::rotation(Axis::X, TurnWise::Double)),
		Face::Front => Some(Turn::rotation(Axis::X, TurnWise::CounterClockwise)),
		Face::Right => Some(Turn::rotation(Axis::Z, TurnWise::Clockwise)),
		Face::Back => Some(Turn::rotation(Axis::X, TurnWise::Clockwise)),
		Face::Left => Some(Turn::rotation(Axis::Z, TurnWise::CounterClockwise)),
		Face::Down => None,
	}
}

/// Cycle the contents of the slots.
/// Clockwise moves the content of each slot into the following one.
fn cycle<T>(items: &mut [T], slots: &[usize], clockwise: bool) {
	if clockwise {
		for i in 1..slots.len() {
			items.swap(slots[0], slots[i]);
		}
	} else {
		for i in (1..slots.len()).rev() {
			items.swap(slots[0], slots[i]);
		}
	}
}

/// Twist a corner in place: clockwise is (a, b, c) -> (b, c, a)
fn twist_corner<C>(corner: &mut CornerColors<C>, clockwise: bool) {
	if clockwise {
		corner.rotate_left(1);
	} else {
		corner.rotate_right(1);
	}
}

// ===== Skewb =====

impl<C: Clone> Skewb<C> {
	/// Creates a *solved* skewb with the given face colors
	pub fn new(up: C, front: C, right: C, back: C, left: C, down: C) -> Self {
		Self::from_colors([up, front, right, back, left, down])
	}

	/// Creates a *solved* skewb, the colors are in the order of [`Face`]
	pub fn from_colors(colors: [C; NUM_FACES]) -> Self {
		let corners = ALL_CORNERS.map(|corner| {
			corner
				.faces()
				.map(|face| colors[face as usize].clone())
		});

		Self {
			corners,
			centers: colors,
		}
	}
}

impl Skewb<Face> {
	/// A solved skewb colored by the faces themselves
	pub fn solved() -> Self {
		Self::from_colors(ALL_FACES)
	}
}

impl<C> Skewb<C> {
	pub fn corner(&self, corner: Corner) -> &CornerColors<C> {
		&self.corners[corner as usize]
	}

	pub fn center(&self, face: Face) -> &C {
		&self.centers[face as usize]
	}

	pub fn apply_turn(&mut self, turn: Turn) {
		let (clockwise, times) = match turn.wise {
			TurnWise::Clockwise => (true, 1),
			TurnWise::CounterClockwise => (false, 1),
			TurnWise::Double => (true, 2),
		};

		for _ in 0..times {
			match turn.kind {
				TurnKind::Twist(pivot) => self.twist(pivot, clockwise),
				TurnKind::Rotation(axis) => self.rotate(axis, clockwise),
			}
		}
	}

	/// Apply the given sequence of turns.
	pub fn apply_turns<I>(&mut self, turns: I)
	where
		I: IntoIterator<Item = Turn>,
	{
		for turn in turns {
			self.apply_turn(turn);
		}
	}

	/// Apply a whitespace separated sequence of moves.
	///
	/// Stops at the first unsupported token. The turns before it stay
	/// applied, use [`reverse`] on the applied prefix to roll back.
	pub fn apply_moves(&mut self, notation: Notation, moves: &str) -> Result<(), SkewbError> {
		for token in moves.split_whitespace() {
			let turn = notation.parse_turn(token)?;
			self.apply_turn(turn);
		}

		Ok(())
	}

	/// See [`Skewb::apply_moves`]
	pub fn apply_wca_moves(&mut self, moves: &str) -> Result<(), SkewbError> {
		self.apply_moves(Notation::Wca, moves)
	}

	/// See [`Skewb::apply_moves`]
	pub fn apply_rubiskewb_moves(&mut self, moves: &str) -> Result<(), SkewbError> {
		self.apply_moves(Notation::Rubiskewb, moves)
	}

	fn twist(&mut self, pivot: Corner, clockwise: bool) {
		let (corners, centers) = twist_cycle(pivot);

		twist_corner(&mut self.corners[pivot as usize], clockwise);
		for corner in corners {
			twist_corner(&mut self.corners[corner as usize], !clockwise);
		}

		cycle(&mut self.centers, &centers.map(|f| f as usize), clockwise);
		cycle(&mut self.corners, &corners.map(|c| c as usize), clockwise);
	}

	fn rotate(&mut self, axis: Axis, clockwise: bool) {
		let AxisCycle {
			upper,
			lower,
			centers,
			reorient,
		} = axis_cycle(axis);

		cycle(&mut self.centers, &centers.map(|f| f as usize), clockwise);
		cycle(&mut self.corners, &upper.map(|c| c as usize), clockwise);
		cycle(&mut self.corners, &lower.map(|c| c as usize), clockwise);

		if !reorient {
			return;
		}
		for (corner, cw) in upper.into_iter().zip(UPPER_REORIENT) {
			twist_corner(&mut self.corners[corner as usize], cw);
		}
		for (corner, cw) in lower.into_iter().zip(LOWER_REORIENT) {
			twist_corner(&mut self.corners[corner as usize], cw);
		}
	}
}

impl<C: PartialEq + fmt::Debug> Skewb<C> {
	/// The face whose center has the given color
	pub fn find_center(&self, color: &C) -> Option<Face> {
		ALL_FACES
			.into_iter()
			.find(|face| self.centers[*face as usize] == *color)
	}

	/// Rotate the whole puzzle so the center with the given color is down.
	pub fn center_down(&mut self, color: &C) -> Result<(), SkewbError> {
		let face = self
			.find_center(color)
			.ok_or_else(|| SkewbError::ColorNotFound(format!("{:?}", color)))?;

		if let Some(turn) = down_rotation(face) {
			self.apply_turn(turn);
		}

		Ok(())
	}

	/// Slot by slot comparison, including the orientation of the corners
	pub fn exact_eq(&self, other: &Self) -> bool {
		self.corners == other.corners && self.centers == other.centers
	}
}

impl<C: fmt::Display> fmt::Display for Skewb<C> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for face in Face::iter() {
			writeln!(f, "{:<6}{}", face.to_string(), self.center(face))?;
		}
		for corner in Corner::iter() {
			let [first, second, third] = self.corner(corner);
			writeln!(f, "{:<6}{} {} {}", corner.to_string(), first, second, third)?;
		}

		Ok(())
	}
}
