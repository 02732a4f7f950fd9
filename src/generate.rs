//! Breadth-first enumeration of move sequences, as used to build algorithm tables.
//!
//! Premoves are whole-puzzle rotations, kept when they reach a new orientation.
//! Solve moves are face turns, kept when they reach a state which is new up to
//! rotation of the whole puzzle.

use std::collections::{BTreeMap, HashSet};
use std::time::Instant;

use log::info;
use rayon::prelude::*;

use crate::puzzle::{state::*, turn::*, *};

/// The default premoves, every rotation of the puzzle
pub const PRE_MOVES: &str = "x x' x2 y y' y2 z z' z2";

/// The default solve moves in Rubiskewb notation
pub const SOLVE_MOVES: &str = "F F' f f' R R' r r' b b'";

/// The default solve moves in WCA notation, every face turn it has
pub const WCA_SOLVE_MOVES: &str = "U U' R R' B B' L L'";

/// The default solve moves written in the notation
pub const fn default_solve_moves(notation: Notation) -> &'static str {
	match notation {
		Notation::Wca => WCA_SOLVE_MOVES,
		Notation::Rubiskewb => SOLVE_MOVES,
	}
}

/// The generated sequences, in the order they were found
#[derive(Clone, PartialEq, Eq, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Algorithms {
	pub pre_moves: Vec<String>,
	pub solve_moves: BTreeMap<usize, Vec<String>>,
}

#[derive(Clone, Debug, PartialEq)]
struct Move {
	token: String,
	turn: Turn,
}

/// A sequence together with the state it leads to
#[derive(Clone, Debug)]
struct Branch {
	sequence: String,
	last: Option<Turn>,
	state: Skewb<Face>,
}

impl Branch {
	fn root() -> Self {
		Self {
			sequence: String::new(),
			last: None,
			state: Skewb::solved(),
		}
	}

	fn extend(&self, m: &Move) -> Self {
		let mut state = self.state.clone();
		state.apply_turn(m.turn);

		let sequence = if self.sequence.is_empty() {
			m.token.clone()
		} else {
			format!("{} {}", self.sequence, m.token)
		};

		Self {
			sequence,
			last: Some(m.turn),
			state,
		}
	}
}

/// The representative of all states equal up to rotation
fn canonical(state: &Skewb<Face>) -> Result<Skewb<Face>, SkewbError> {
	let mut spun = state.clone();
	spun.center_down(&Face::Down)?;

	let mut min = spun.clone();
	for _ in 1..4 {
		spun.apply_turn(Turn::SPIN);
		if spun < min {
			min = spun.clone();
		}
	}

	Ok(min)
}

#[derive(Clone, Debug)]
pub struct Generator {
	notation: Notation,
	pre_moves: Vec<Move>,
	solve_moves: Vec<Move>,
}

impl Default for Generator {
	fn default() -> Self {
		let notation = Notation::Rubiskewb;
		let known = |moves: &str| {
			moves
				.split_whitespace()
				.filter_map(|token| {
					let turn = notation.parse_turn(token).ok()?;
					Some(Move { token: token.to_string(), turn })
				})
				.collect()
		};

		Self {
			notation,
			pre_moves: known(PRE_MOVES),
			solve_moves: known(SOLVE_MOVES),
		}
	}
}

impl Generator {
	/// Create a generator over the given whitespace separated moves.
	/// Fails if a move is not part of the notation.
	pub fn new(notation: Notation, pre_moves: &str, solve_moves: &str) -> Result<Self, SkewbError> {
		let parse = |moves: &str| -> Result<Vec<Move>, SkewbError> {
			moves
				.split_whitespace()
				.map(|token| {
					Ok(Move {
						token: token.to_string(),
						turn: notation.parse_turn(token)?,
					})
				})
				.collect()
		};

		Ok(Self {
			notation,
			pre_moves: parse(pre_moves)?,
			solve_moves: parse(solve_moves)?,
		})
	}

	pub fn notation(&self) -> Notation {
		self.notation
	}

	/// Extend every branch by every move not turning around its last pivot or axis.
	/// The order of the output only depends on the order of the input.
	fn expand(frontier: &[Branch], moves: &[Move]) -> Vec<Branch> {
		frontier
			.par_iter()
			.flat_map_iter(|branch| {
				moves
					.iter()
					.filter(move |m| !branch.last.is_some_and(|last| last.same_kind(&m.turn)))
					.map(move |m| branch.extend(m))
			})
			.collect()
	}

	/// Every premove sequence of up to `max_depth` moves reaching a new orientation.
	/// The empty sequence comes first.
	pub fn pre_moves(&self, max_depth: usize) -> Vec<String> {
		let root = Branch::root();
		let mut seen = HashSet::from([root.state.clone()]);
		let mut out = vec![root.sequence.clone()];
		let mut frontier = vec![root];

		for depth in 1..=max_depth {
			let start = Instant::now();
			frontier = Self::expand(&frontier, &self.pre_moves);

			let before = out.len();
			for branch in &frontier {
				if seen.insert(branch.state.clone()) {
					out.push(branch.sequence.clone());
				}
			}

			info!(
				"Premoves of depth {}: {} new in {:.2?}",
				depth,
				out.len() - before,
				start.elapsed()
			);
		}

		out
	}

	/// All solve move sequences up to `max_depth`, keyed by their length.
	/// A sequence is kept if no shorter or earlier one reaches the same state up to rotation.
	pub fn solve_moves(&self, max_depth: usize) -> Result<BTreeMap<usize, Vec<String>>, SkewbError> {
		let root = Branch::root();
		let mut seen = HashSet::from([canonical(&root.state)?]);
		let mut out = BTreeMap::from([(0, vec![root.sequence.clone()])]);
		let mut frontier = vec![root];

		for depth in 1..=max_depth {
			let start = Instant::now();
			let candidates = Self::expand(&frontier, &self.solve_moves);
			let keys = candidates
				.par_iter()
				.map(|branch| canonical(&branch.state))
				.collect::<Result<Vec<_>, _>>()?;

			frontier = candidates
				.into_iter()
				.zip(keys)
				.filter_map(|(branch, key)| seen.insert(key).then_some(branch))
				.collect();

			info!(
				"Solve moves of depth {}: {} in {:.2?}",
				depth,
				frontier.len(),
				start.elapsed()
			);
			out.insert(depth, frontier.iter().map(|b| b.sequence.clone()).collect());
		}

		Ok(out)
	}

	pub fn generate(&self, pre_depth: usize, solve_depth: usize) -> Result<Algorithms, SkewbError> {
		Ok(Algorithms {
			pre_moves: self.pre_moves(pre_depth),
			solve_moves: self.solve_moves(solve_depth)?,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::puzzle::compare::ROTATIONS;
	use std::error::Error;

	#[test]
	/// The default moves are the parsed constants
	fn default_generator() -> Result<(), SkewbError> {
		let generator = Generator::new(Notation::Rubiskewb, PRE_MOVES, SOLVE_MOVES)?;
		let default = Generator::default();

		assert_eq!(default.pre_moves, generator.pre_moves);
		assert_eq!(default.solve_moves, generator.solve_moves);
		assert_eq!(default.solve_moves.len(), 10);
		assert_eq!(default.notation(), Notation::Rubiskewb);

		Ok(())
	}

	#[test]
	/// Moves outside of the notation are rejected
	fn invalid_moves() {
		assert_eq!(
			Generator::new(Notation::Wca, PRE_MOVES, SOLVE_MOVES).unwrap_err(),
			SkewbError::UnsupportedMove {
				token: "F".to_string(),
				notation: Notation::Wca
			}
		);
	}

	#[test]
	/// Every notation has default solve moves it can parse
	fn wca_solve_moves() -> Result<(), SkewbError> {
		for notation in [Notation::Wca, Notation::Rubiskewb] {
			Generator::new(notation, PRE_MOVES, default_solve_moves(notation))?;
		}

		let generator = Generator::new(Notation::Wca, PRE_MOVES, default_solve_moves(Notation::Wca))?;
		let out = generator.solve_moves(3)?;
		let counts: Vec<_> = out.values().map(|v| v.len()).collect();

		assert_eq!(counts, vec![1, 8, 48, 288]);
		assert_eq!(out[&1], vec!["U", "U'", "R", "R'", "B", "B'", "L", "L'"]);
		assert_eq!(out[&2][..6], ["U R", "U R'", "U B", "U B'", "U L", "U L'"]);

		Ok(())
	}

	#[test]
	/// Single rotations all reach different orientations
	fn pre_moves_depth_one() {
		let out = Generator::default().pre_moves(1);
		assert_eq!(out, vec!["", "x", "x'", "x2", "y", "y'", "y2", "z", "z'", "z2"]);
	}

	#[test]
	/// Three rotations reach all 24 orientations and no more exist
	fn pre_moves_all_orientations() {
		let generator = Generator::default();
		let out = generator.pre_moves(3);

		assert_eq!(out, ROTATIONS.to_vec());
		assert_eq!(generator.pre_moves(4).len(), 24);
		assert_eq!(generator.pre_moves(0), vec![""]);
	}

	#[test]
	/// The amount of new states per depth
	fn solve_move_counts() -> Result<(), SkewbError> {
		let out = Generator::default().solve_moves(3)?;
		let counts: Vec<_> = out.values().map(|v| v.len()).collect();

		assert_eq!(counts, vec![1, 8, 48, 288]);
		assert_eq!(out[&0], vec![""]);
		assert_eq!(out[&1], vec!["F", "F'", "f", "f'", "R", "R'", "r", "r'"]);
		assert_eq!(
			out[&2][..7],
			["F f", "F f'", "F R", "F R'", "F r", "F r'", "F' f"]
		);

		Ok(())
	}

	#[test]
	/// No kept sequence is equal to another one up to spin
	fn solve_moves_are_distinct() -> Result<(), Box<dyn Error>> {
		let out = Generator::default().solve_moves(2)?;
		let states = out
			.values()
			.flatten()
			.map(|moves| {
				let mut skewb = Skewb::solved();
				skewb.apply_rubiskewb_moves(moves)?;
				Ok(skewb)
			})
			.collect::<Result<Vec<_>, SkewbError>>()?;

		for (i, a) in states.iter().enumerate() {
			for b in &states[i + 1..] {
				assert!(!a.equal(b)?);
			}
		}

		Ok(())
	}

	#[test]
	/// Move counts become object keys in JSON
	fn json_layout() -> Result<(), Box<dyn Error>> {
		let algorithms = Generator::default().generate(1, 1)?;
		let json = serde_json::to_value(&algorithms)?;

		assert_eq!(json["pre_moves"][1], "x");
		assert_eq!(json["solve_moves"]["0"][0], "");
		assert_eq!(json["solve_moves"]["1"][7], "r'");
		assert_eq!(serde_json::from_value::<Algorithms>(json)?, algorithms);

		Ok(())
	}
}
