use std::{
	error::Error,
	fs::File,
	io::{Seek, Write},
	path::Path,
};

use clap::{ArgAction, Parser};
use log::{info, LevelFilter};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use strum::IntoEnumIterator;
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

use skewb::generate::{default_solve_moves, PRE_MOVES};
use skewb::prelude::*;

const DEFAULT_COLORS: [&str; NUM_FACES] = [
	"#FFFFFFFF", "#00FF00FF", "#FF0000FF", "#0000FFFF", "#D67200FF", "#FBFF00FF",
];

const DEFAULT_ARCHIVE: &str = "algorithms/moves.zip";

/// Skewb simulator and algorithm generator written in Rust
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Use a sequence to apply on the solved skewb
	#[arg(short, default_value_t = String::new())]
	sequence: String,

	/// The notation of all sequences
	#[arg(short, long, default_value_t = Notation::default())]
	notation: Notation,

	/// Print all notations and quit
	#[arg(long, default_value_t = false)]
	list_notations: bool,

	/// The colors of the up, front, right, back, left and down centers
	#[arg(long, value_delimiter = ',', default_values_t = DEFAULT_COLORS.map(String::from))]
	colors: Vec<String>,

	/// Scramble the skewb before applying the sequence
	#[arg(short, long, default_value_t = false)]
	random: bool,

	/// Number of turns of the scramble (if --random is used)
	#[arg(long, default_value_t = 11)]
	length: usize,

	/// Output the sequence undoing the scramble and sequence rather than the skewb
	#[arg(long, default_value_t = false)]
	reverse: bool,

	/// Output the skewb as JSON
	#[arg(long, default_value_t = false)]
	json: bool,

	/// Generate the premoves and solve moves and write them to a zip archive
	#[arg(long, default_value_t = false)]
	generate: bool,

	/// Maximum number of premoves (if --generate is used)
	#[arg(long, default_value_t = 3)]
	pre_depth: usize,

	/// Maximum number of solve moves (if --generate is used)
	#[arg(long, default_value_t = 8)]
	depth: usize,

	/// The turns solve moves are built of, in the chosen notation (if --generate is used).
	/// Defaults to every face turn of the notation, or F F' f f' R R' r r' b b' for Rubiskewb.
	#[arg(long)]
	solve_moves: Option<String>,

	/// Print the output to a file rather to the stdout.
	/// The archive of --generate goes to algorithms/moves.zip by default.
	#[arg(short, long, default_value_t = String::new())]
	output: String,

	/// Log more, can be repeated
	#[arg(short, long, action = ArgAction::Count)]
	verbose: u8,
}

fn write_json<W: Write, T: Serialize>(writer: W, value: &T) -> serde_json::Result<()> {
	let mut ser = serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(b"\t"));
	value.serialize(&mut ser)
}

/// Store both tables as JSON files in one archive
fn write_archive<W: Write + Seek>(writer: W, algorithms: &Algorithms) -> Result<W, Box<dyn Error>> {
	let mut zip = ZipWriter::new(writer);
	let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

	zip.start_file("allPreMoves.json", options)?;
	write_json(&mut zip, &algorithms.pre_moves)?;
	zip.start_file("allSolveMoves.json", options)?;
	write_json(&mut zip, &algorithms.solve_moves)?;

	Ok(zip.finish()?)
}

fn main() -> Result<(), Box<dyn Error>> {
	let args = Args::parse();

	let level = match args.verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	};
	pretty_env_logger::formatted_builder().filter_level(level).init();

	// List the notations and exit
	if args.list_notations {
		for notation in Notation::iter() {
			println!("{}", notation);
		}
		return Ok(());
	}

	if args.generate {
		let solve_moves = args
			.solve_moves
			.as_deref()
			.unwrap_or(default_solve_moves(args.notation));
		let generator = Generator::new(args.notation, PRE_MOVES, solve_moves)?;
		let algorithms = generator.generate(args.pre_depth, args.depth)?;

		let path = if args.output.is_empty() { DEFAULT_ARCHIVE } else { args.output.as_str() };
		if let Some(dir) = Path::new(path).parent() {
			std::fs::create_dir_all(dir)?;
		}
		write_archive(File::create(path)?, &algorithms)?;
		info!("Saved algorithms to {}", path);
		return Ok(());
	}

	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(File::create(&args.output)?)
	};

	let colors: [String; NUM_FACES] = args
		.colors
		.try_into()
		.map_err(|c: Vec<String>| format!("Expected {} colors, got {}", NUM_FACES, c.len()))?;
	let mut skewb = Skewb::from_colors(colors);

	// Check the whole sequence before turning anything
	let mut sequence = args.sequence.clone();
	if args.random {
		let scramble = random_sequence(args.notation, args.length);
		info!("Scramble: {}", scramble);
		sequence = format!("{} {}", scramble, sequence);
	}
	let turns = parse_turns(args.notation, &sequence)?;

	if args.reverse {
		writeln!(out, "{}", reverse(&sequence))?;
		return Ok(());
	}

	skewb.apply_turns(turns);

	if args.json {
		write_json(&mut out, &skewb)?;
		writeln!(out)?;
	} else {
		write!(out, "{}", skewb)?;
	}

	Ok(())
}
