//! Deterministic, offline CLI argument surface.
//!
//! - One request file in, artifacts out to a directory
//! - Renderers: `json` and/or `csv`; omit `--render` to emit JSON only
//! - Seed override accepts decimal u64 or `0x`-hex up to 16 digits
//! - `--validate-only` loads and coerces the request without running the
//!   pipeline

use clap::Parser;
use std::path::PathBuf;

/// Parsed CLI arguments.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "mb",
    disable_help_subcommand = true,
    about = "Offline, deterministic monthly distribution for retroactive meter billing"
)]
pub struct Args {
    /// Request JSON path (period readings, balances, tariff fields).
    #[arg(long)]
    pub input: PathBuf,

    /// Output directory for rendered artifacts (default: current directory).
    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    /// Renderer(s) to emit. Choose up to 2 (json, csv). Omit for json.
    #[arg(long, value_parser = ["json", "csv"], num_args = 0..=2)]
    pub render: Vec<String>,

    /// Reconciliation seed override. Accepts decimal u64 or 0x-hex (≤16 hex digits).
    #[arg(long, value_parser = parse_seed)]
    pub seed: Option<u64>,

    /// Load and coerce the request only, do not run the engine.
    #[arg(long)]
    pub validate_only: bool,

    /// Suppress non-essential stdout logs.
    #[arg(long)]
    pub quiet: bool,
}

/// Accept decimal u64 or 0x-prefixed hex (1..16 nybbles).
pub fn parse_seed(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty seed".into());
    }
    if let Some(rest) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        if rest.is_empty() || rest.len() > 16 || !rest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err("hex seed must be 1..16 hex digits".into());
        }
        u64::from_str_radix(rest, 16).map_err(|_| "hex seed out of range".into())
    } else {
        s.parse::<u64>()
            .map_err(|_| "decimal seed must be a valid u64".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_accepts_decimal_and_hex() {
        assert_eq!(parse_seed("42"), Ok(42));
        assert_eq!(parse_seed("0x2a"), Ok(42));
        assert_eq!(parse_seed("0XFF"), Ok(255));
        assert_eq!(parse_seed(" 7 "), Ok(7));
    }

    #[test]
    fn seed_rejects_garbage() {
        assert!(parse_seed("").is_err());
        assert!(parse_seed("0x").is_err());
        assert!(parse_seed("0x12345678901234567").is_err()); // 17 nybbles
        assert!(parse_seed("-1").is_err());
        assert!(parse_seed("12.5").is_err());
    }

    #[test]
    fn render_flags_are_constrained() {
        let args = Args::try_parse_from(["mb", "--input", "r.json", "--render", "json", "csv"]);
        assert!(args.is_ok());
        let args = Args::try_parse_from(["mb", "--input", "r.json", "--render", "html"]);
        assert!(args.is_err());
    }

    #[test]
    fn input_is_required() {
        assert!(Args::try_parse_from(["mb"]).is_err());
    }
}
