//! Line-oriented worker front-end
//!
//! Drives the worker service over stdin/stdout: print `ready` once the
//! dictionary has loaded, then answer one target word per input line with
//! one reply line. This mirrors the message contract a hosting UI uses.

use std::io::{self, BufRead, Write};

use crate::dictionary::Dictionary;
use crate::service::{self, SolveReply, SolveRequest, WorkerHandle};

/// Serve solve requests from stdin until EOF
///
/// The worker takes ownership of the dictionary; requests are answered one
/// per input line.
///
/// # Errors
/// Returns an error message if the worker fails to start or I/O fails.
pub fn run_serve(dict: Dictionary, hard_mode: bool, be_cheaty: bool) -> Result<(), String> {
    let worker = service::spawn_with(move || Ok(dict))
        .wait_ready()
        .map_err(|e| e.to_string())?;

    let result = serve_loop(
        &worker,
        io::stdin().lock(),
        io::stdout(),
        hard_mode,
        be_cheaty,
    );
    worker.shutdown();
    result
}

fn serve_loop<R: BufRead, W: Write>(
    worker: &WorkerHandle,
    reader: R,
    mut out: W,
    hard_mode: bool,
    be_cheaty: bool,
) -> Result<(), String> {
    writeln!(out, "ready").map_err(|e| e.to_string())?;

    for line in reader.lines() {
        let line = line.map_err(|e| e.to_string())?;
        let target = line.trim();
        if target.is_empty() {
            continue;
        }

        let reply = worker
            .solve(SolveRequest {
                hard_mode,
                be_cheaty,
                target: target.to_string(),
            })
            .map_err(|e| e.to_string())?;

        match reply {
            SolveReply::Suggestions { words, solved } => {
                let suffix = if solved { "" } else { " (unsolved)" };
                writeln!(out, "{}{suffix}", words.join(" ")).map_err(|e| e.to_string())?;
            }
            SolveReply::NotRecognized => {
                writeln!(out, "not in dictionary").map_err(|e| e.to_string())?;
            }
            SolveReply::Failed(reason) => {
                writeln!(out, "error: {reason}").map_err(|e| e.to_string())?;
            }
        }
        out.flush().map_err(|e| e.to_string())?;
    }

    Ok(())
}
