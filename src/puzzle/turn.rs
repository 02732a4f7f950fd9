use rand::seq::SliceRandom;

use super::{Corner, SkewbError};

/// Whole-puzzle rotation axes
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter, strum::Display)]
pub enum Axis {
	#[strum(to_string = "x")]
	X,
	#[strum(to_string = "y")]
	Y,
	#[strum(to_string = "z")]
	Z,
}

/// You can either turn in (Counter-)Clockwise or Half turns.
/// Half turns only exist for rotations.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter)]
pub enum TurnWise {
	Clockwise,
	Double,
	CounterClockwise,
}

impl std::fmt::Display for TurnWise {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			TurnWise::Clockwise => write!(f, ""),
			TurnWise::CounterClockwise => write!(f, "'"),
			TurnWise::Double => write!(f, "2"),
		}
	}
}

/// What a turn moves: a face turn around a pivot corner or the whole puzzle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TurnKind {
	Twist(Corner),
	Rotation(Axis),
}

/// An entire turn
///
/// kind: The pivot corner or axis
/// wise: See the definition of TurnWise
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Turn {
	pub kind: TurnKind,
	pub wise: TurnWise,
}

impl Turn {
	/// A clockwise quarter rotation around the vertical axis
	pub const SPIN: Turn = Turn::rotation(Axis::Y, TurnWise::Clockwise);

	pub const fn twist(pivot: Corner, wise: TurnWise) -> Self {
		Self {
			kind: TurnKind::Twist(pivot),
			wise,
		}
	}

	pub const fn rotation(axis: Axis, wise: TurnWise) -> Self {
		Self {
			kind: TurnKind::Rotation(axis),
			wise,
		}
	}

	/// Turn itself to the turn, which negates itself.
	pub fn invert(&mut self) {
		match self.wise {
			TurnWise::CounterClockwise => self.wise = TurnWise::Clockwise,
			TurnWise::Clockwise => self.wise = TurnWise::CounterClockwise,
			TurnWise::Double => {}
		}
	}

	pub fn inverse(mut self) -> Self {
		self.invert();
		self
	}

	/// Whether both turns move around the same pivot or axis
	pub fn same_kind(&self, other: &Turn) -> bool {
		self.kind == other.kind
	}
}

// ===== Notations =====

use Axis::*;
use Corner::*;
use TurnWise::*;

const fn tw(pivot: Corner, wise: TurnWise) -> Turn {
	Turn::twist(pivot, wise)
}

const fn rot(axis: Axis, wise: TurnWise) -> Turn {
	Turn::rotation(axis, wise)
}

#[rustfmt::skip]
const WCA_VOCABULARY: [(&str, Turn); 17] = [
	("U", tw(UBL, Clockwise)), ("U'", tw(UBL, CounterClockwise)),
	("R", tw(DBR, Clockwise)), ("R'", tw(DBR, CounterClockwise)),
	("B", tw(DLB, Clockwise)), ("B'", tw(DLB, CounterClockwise)),
	("L", tw(DFL, Clockwise)), ("L'", tw(DFL, CounterClockwise)),
	("x", rot(X, Clockwise)), ("x'", rot(X, CounterClockwise)), ("x2", rot(X, Double)),
	("y", rot(Y, Clockwise)), ("y'", rot(Y, CounterClockwise)), ("y2", rot(Y, Double)),
	("z", rot(Z, Clockwise)), ("z'", rot(Z, CounterClockwise)), ("z2", rot(Z, Double)),
];

#[rustfmt::skip]
const RUBISKEWB_VOCABULARY: [(&str, Turn); 25] = [
	("R", tw(URB, Clockwise)), ("R'", tw(URB, CounterClockwise)),
	("r", tw(DBR, Clockwise)), ("r'", tw(DBR, CounterClockwise)),
	("B", tw(UBL, Clockwise)), ("B'", tw(UBL, CounterClockwise)),
	("b", tw(DLB, Clockwise)), ("b'", tw(DLB, CounterClockwise)),
	("L", tw(ULF, Clockwise)), ("L'", tw(ULF, CounterClockwise)),
	("l", tw(DFL, Clockwise)), ("l'", tw(DFL, CounterClockwise)),
	("F", tw(UFR, Clockwise)), ("F'", tw(UFR, CounterClockwise)),
	("f", tw(DRF, Clockwise)), ("f'", tw(DRF, CounterClockwise)),
	("x", rot(X, Clockwise)), ("x'", rot(X, CounterClockwise)), ("x2", rot(X, Double)),
	("y", rot(Y, Clockwise)), ("y'", rot(Y, CounterClockwise)), ("y2", rot(Y, Double)),
	("z", rot(Z, Clockwise)), ("z'", rot(Z, CounterClockwise)), ("z2", rot(Z, Double)),
];

/// The naming scheme of a move sequence
#[derive(
	Clone, Copy, PartialEq, Eq, Hash, Debug, Default,
	strum::EnumString, strum::Display, strum::EnumIter,
	serde::Serialize, serde::Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Notation {
	#[strum(to_string = "WCA")]
	Wca,
	#[default]
	Rubiskewb,
}

impl Notation {
	/// Every token of the notation together with the turn it stands for
	pub fn vocabulary(self) -> &'static [(&'static str, Turn)] {
		match self {
			Notation::Wca => &WCA_VOCABULARY,
			Notation::Rubiskewb => &RUBISKEWB_VOCABULARY,
		}
	}

	pub fn parse_turn(self, token: &str) -> Result<Turn, SkewbError> {
		self.vocabulary()
			.iter()
			.find(|(t, _)| *t == token)
			.map(|(_, turn)| *turn)
			.ok_or_else(|| SkewbError::UnsupportedMove {
				token: token.to_string(),
				notation: self,
			})
	}

	/// The token of the turn, if the notation can express it
	pub fn token(self, turn: Turn) -> Option<&'static str> {
		self.vocabulary()
			.iter()
			.find(|(_, t)| *t == turn)
			.map(|(token, _)| *token)
	}

	pub fn format_turns(self, turns: &[Turn]) -> Option<String> {
		let tokens = turns
			.iter()
			.map(|turn| self.token(*turn))
			.collect::<Option<Vec<_>>>()?;
		Some(tokens.join(" "))
	}
}

/// Parse a whole sequence. Nothing is returned unless every token is valid.
pub fn parse_turns(notation: Notation, string: &str) -> Result<Vec<Turn>, SkewbError> {
	string
		.split_whitespace()
		.map(|token| notation.parse_turn(token))
		.collect()
}

/// Return the sequence undoing the given one.
/// Works on the tokens alone, so it serves both notations.
pub fn reverse(moves: &str) -> String {
	moves
		.split_whitespace()
		.rev()
		.map(|token| {
			if let Some(base) = token.strip_suffix('\'') {
				base.to_string()
			} else if token.ends_with('2') {
				token.to_string()
			} else {
				format!("{}'", token)
			}
		})
		.collect::<Vec<_>>()
		.join(" ")
}

/// Generate a random sequence of face turns.
/// Two following turns never share a pivot.
pub fn random_sequence(notation: Notation, length: usize) -> String {
	let twists: Vec<_> = notation
		.vocabulary()
		.iter()
		.filter(|(_, turn)| matches!(turn.kind, TurnKind::Twist(_)))
		.collect();

	let mut rng = rand::thread_rng();
	let mut out: Vec<&(&str, Turn)> = Vec::with_capacity(length);

	while out.len() < length {
		let Some(candidate) = twists.choose(&mut rng) else {
			break;
		};
		if let Some(last) = out.last() {
			if last.1.same_kind(&candidate.1) {
				continue;
			}
		}
		out.push(*candidate);
	}

	out.iter().map(|(token, _)| *token).collect::<Vec<_>>().join(" ")
}
