// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Command-line argument definitions.
//!
//! Exactly one of `--duration` and `--boxes` must be given; clap enforces
//! the exclusivity and the requirement, so the solver core never sees a
//! conflicting or missing constraint. Times accept plain seconds or
//! `hh:mm:ss` / `mm:ss`.

use ballast_model::time::parse_duration;
use ballast_solver::solver::Strategy;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ballast",
    version,
    about = "Splits a list of tracks across multiple sides of similar length."
)]
pub struct Args {
    /// Input file name containing the track listing
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// The maximum time to spend looking; 0 disables the limit
    #[arg(
        short,
        long,
        value_name = "TIME",
        default_value = "60",
        value_parser = parse_time
    )]
    pub timeout: u64,

    /// Maximum length of each side
    #[arg(
        short,
        long,
        value_name = "TIME",
        value_parser = parse_positive_time,
        conflicts_with = "boxes",
        required_unless_present = "boxes"
    )]
    pub duration: Option<u64>,

    /// Maximum number of containers (sides)
    #[arg(short, long, value_name = "COUNT", value_parser = parse_positive_count)]
    pub boxes: Option<usize>,

    /// Require an even number of sides
    #[arg(short, long)]
    pub even: bool,

    /// Re-order tracks longest first for an optimal fit
    #[arg(short, long)]
    pub shuffle: bool,

    /// Exhaustively try every packing within the timeout
    #[arg(short, long, conflicts_with = "shuffle")]
    pub force: bool,

    /// Display lengths in seconds instead of hh:mm:ss
    #[arg(short, long)]
    pub plain: bool,

    /// Generate output as comma separated values
    #[arg(short, long)]
    pub csv: bool,

    /// Character used to separate csv fields
    #[arg(short = 'a', long, value_name = "CHAR", default_value_t = ',')]
    pub delimiter: char,

    /// Emit progress diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Maps the mode flags to a solving strategy.
    pub fn strategy(&self) -> Strategy {
        if self.force {
            Strategy::Exhaustive
        } else if self.shuffle {
            Strategy::Cyclic
        } else {
            Strategy::Greedy
        }
    }
}

fn parse_time(token: &str) -> Result<u64, String> {
    parse_duration(token).map_err(|e| e.to_string())
}

fn parse_positive_time(token: &str) -> Result<u64, String> {
    match parse_time(token)? {
        0 => Err("duration must be greater than zero".to_string()),
        seconds => Ok(seconds),
    }
}

fn parse_positive_count(token: &str) -> Result<usize, String> {
    let count: usize = token
        .parse()
        .map_err(|_| format!("could not parse '{token}' as a count"))?;
    if count == 0 {
        return Err("count must be greater than zero".to_string());
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_duration_mode() {
        let args = Args::try_parse_from(["ballast", "-i", "tracks.txt", "-d", "19:40"]).unwrap();
        assert_eq!(args.duration, Some(1180));
        assert_eq!(args.boxes, None);
        assert_eq!(args.timeout, 60);
        assert_eq!(args.strategy(), Strategy::Greedy);
    }

    #[test]
    fn test_boxes_mode_with_shuffle() {
        let args =
            Args::try_parse_from(["ballast", "-i", "tracks.txt", "-b", "4", "-s"]).unwrap();
        assert_eq!(args.boxes, Some(4));
        assert_eq!(args.strategy(), Strategy::Cyclic);
    }

    #[test]
    fn test_force_mode() {
        let args =
            Args::try_parse_from(["ballast", "-i", "tracks.txt", "-d", "1200", "-f"]).unwrap();
        assert_eq!(args.strategy(), Strategy::Exhaustive);
    }

    #[test]
    fn test_duration_and_boxes_conflict() {
        let result =
            Args::try_parse_from(["ballast", "-i", "tracks.txt", "-d", "1200", "-b", "4"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_one_of_duration_or_boxes_is_required() {
        let result = Args::try_parse_from(["ballast", "-i", "tracks.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_shuffle_and_force_conflict() {
        let result =
            Args::try_parse_from(["ballast", "-i", "tracks.txt", "-d", "1200", "-s", "-f"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_duration_is_rejected() {
        let result = Args::try_parse_from(["ballast", "-i", "tracks.txt", "-d", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_boxes_is_rejected() {
        let result = Args::try_parse_from(["ballast", "-i", "tracks.txt", "-b", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_timeout_means_unbounded() {
        let args =
            Args::try_parse_from(["ballast", "-i", "tracks.txt", "-d", "1200", "-t", "0"])
                .unwrap();
        assert_eq!(args.timeout, 0);
    }

    #[test]
    fn test_custom_delimiter() {
        let args = Args::try_parse_from([
            "ballast", "-i", "tracks.txt", "-d", "1200", "-c", "-a", ";",
        ])
        .unwrap();
        assert!(args.csv);
        assert_eq!(args.delimiter, ';');
    }
}
