//! Reads a base, a symbol count, and that many probabilities from stdin,
//! then prints the optimal prefix code and its quality metrics.
//!
//! Input is whitespace-separated, e.g. `echo "2 3 0.5 0.25 0.25" | huffgen`.
//! Exit codes: 0 on success, 1 on a validation error, 2 on malformed input.

use std::io::{self, Read};
use std::process;

fn main() {
    let mut input = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut input) {
        eprintln!("error: {err}");
        process::exit(2);
    }

    let (base, probabilities) = match parse(&input) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("error: {msg}");
            process::exit(2);
        }
    };

    let analysis = match rhuff::compute(base, &probabilities) {
        Ok(analysis) => analysis,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    println!("Huffman codes (base {base}):");
    for (symbol, code) in analysis.codebook.iter() {
        println!("symbol {symbol} (p = {:.3}): {code}", probabilities[symbol]);
    }
    println!();
    println!("entropy: {:.3}", analysis.entropy);
    println!("average length: {:.3}", analysis.avg_length);
    match analysis.efficiency {
        Some(eta) => println!("efficiency: {eta:.3}"),
        None => println!("efficiency: n/a"),
    }
}

/// Parse whitespace-separated tokens: base, symbol count, then that many
/// probabilities. Trailing tokens are rejected to catch count mismatches.
fn parse(input: &str) -> Result<(u32, Vec<f64>), String> {
    let mut tokens = input.split_whitespace();
    let base: u32 = tokens
        .next()
        .ok_or_else(|| "missing base".to_string())?
        .parse()
        .map_err(|_| "base must be an unsigned integer".to_string())?;
    let count: usize = tokens
        .next()
        .ok_or_else(|| "missing symbol count".to_string())?
        .parse()
        .map_err(|_| "symbol count must be an unsigned integer".to_string())?;

    let mut probabilities = Vec::with_capacity(count);
    for i in 0..count {
        let token = tokens
            .next()
            .ok_or_else(|| format!("missing probability {i} of {count}"))?;
        let p: f64 = token
            .parse()
            .map_err(|_| format!("probability {i} is not a number: {token}"))?;
        probabilities.push(p);
    }
    if let Some(extra) = tokens.next() {
        return Err(format!("unexpected trailing token: {extra}"));
    }
    Ok((base, probabilities))
}
