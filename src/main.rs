//! Command-line perft tool: enumerates the leaf nodes of a position's
//! legal-move tree, with optional bulk counting, capture-only trees,
//! per-move breakdowns, and a subtree-count cache.

use std::io::{self, Write};
use std::process;
use std::time::Instant;

use clap::Parser;

use magpie::board::fen::{FenBuildError, PERFT_SUITE};
use magpie::board::movegen::MoveGen;
use magpie::board::perft::perft_with;
use magpie::tools::tt::{TranspositionTable, MAX_TABLE_BITS};
use magpie::Board;

#[derive(Parser, Debug)]
#[command(
    name = "magpie",
    version,
    about = "Enumerate moves with magic bitboards.",
    long_about = None
)]
struct Args {
    /// Test the position indicated in FEN format (default: starting
    /// position).
    #[arg(short, long)]
    fen: Option<String>,

    /// Test up to this depth.
    #[arg(short, long, default_value_t = 6)]
    depth: u16,

    /// Do fast bulk counting at the last ply.
    #[arg(short, long)]
    bulk: bool,

    /// Print a node count for each root move.
    #[arg(short = 'r', long)]
    div: bool,

    /// Generate only captures, promotions & check evasions.
    #[arg(short, long)]
    capture: bool,

    /// Loop from depth 1 to the given depth.
    #[arg(short, long = "loop")]
    loop_depths: bool,

    /// Use a hashtable with 2^BITS entries (default: no hashtable).
    #[arg(short = 'H', long, value_name = "BITS")]
    hash: Option<u32>,

    /// Run an internal test to check the move generator.
    #[arg(short, long)]
    test: bool,

    /// Bare depth, equivalent to --depth.
    #[arg(value_name = "DEPTH")]
    depth_pos: Option<u16>,
}

/// Prints a caret diagnostic under the offending FEN byte and exits.
fn fen_error(fen: &str, err: FenBuildError) -> ! {
    eprintln!("Error in FEN '{}': {}", fen, err);
    if let Some(offset) = err.offset() {
        let pad = "Error in FEN '".len() + offset;
        eprintln!("{}^", "-".repeat(pad));
    }
    process::exit(1);
}

/// Runs the built-in correctness suite. Returns false on any mismatch.
fn run_test_suite() -> bool {
    println!("Testing the move generator");
    let mut all_passed = true;
    for position in PERFT_SUITE.iter() {
        print!("Test {} {} ", position.description, position.fen);
        let _ = io::stdout().flush();
        let mut board = match Board::from_fen(position.fen) {
            Ok(board) => board,
            Err(err) => fen_error(position.fen, err),
        };
        let count = perft_with(&mut board, None, position.depth, true, true);
        if count == position.leaves {
            println!("passed");
        } else {
            println!("FAILED! {} != {}", count, position.leaves);
            all_passed = false;
        }
    }
    all_passed
}

fn main() {
    let args = Args::parse();

    println!("Magpie, magic bitboard perft");

    if args.test {
        if run_test_suite() {
            return;
        }
        process::exit(1);
    }

    let mut board = match args.fen {
        Some(ref fen) => match Board::from_fen(fen) {
            Ok(board) => board,
            Err(err) => fen_error(fen, err),
        },
        None => Board::start_pos(),
    };

    let depth = args.depth_pos.unwrap_or(args.depth).max(1);
    let quiets = !args.capture;

    let mut cache = match args.hash {
        Some(bits) => match TranspositionTable::new(bits.min(MAX_TABLE_BITS)) {
            Ok(table) => Some(table),
            Err(err) => {
                eprintln!("Fatal error: hashtable allocation failure: {}", err);
                process::exit(1);
            }
        },
        None => None,
    };

    print!("Perft setting: ");
    match cache {
        Some(ref table) => print!("hashtable size: {} Mbytes; ", table.size_megabytes()),
        None => print!("no hashing; "),
    }
    print!("{} bulk counting;", if args.bulk { "with" } else { "no" });
    if args.capture {
        print!(" capture only;");
    }
    println!();
    print!("{}", board);

    let start = Instant::now();
    let mut total: u64 = 0;

    if args.div {
        let moves = MoveGen::generate(&board, quiets || board.in_check());
        for &mv in moves.iter() {
            board.apply_move(mv);
            let count = if depth <= 1 {
                1
            } else {
                perft_with(&mut board, cache.as_mut(), depth - 1, args.bulk, quiets)
            };
            board.undo_move();
            total += count;
            println!("{:>5} {:>16}", mv.to_string(), count);
        }
    } else {
        let first = if args.loop_depths { 1 } else { depth };
        for d in first..=depth {
            let partial = Instant::now();
            let count = perft_with(&mut board, cache.as_mut(), d, args.bulk, quiets);
            total += count;
            let seconds = partial.elapsed().as_secs_f64();
            println!(
                "perft {:>2} : {:>15} leaves in {:>10.3} s {:>12.0} leaves/s",
                d,
                count,
                seconds,
                count as f64 / seconds
            );
        }
    }

    if args.div || args.loop_depths {
        let seconds = start.elapsed().as_secs_f64();
        println!(
            "total    : {:>15} leaves in {:>10.3} s {:>12.0} leaves/s",
            total,
            seconds,
            total as f64 / seconds
        );
    }
}
