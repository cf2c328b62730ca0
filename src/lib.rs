use std::{
    cmp::Ordering,
    error,
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use clap::Parser;

pub const DEFAULT_TARGET: u64 = 2020;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    InvalidInputStr(String),
    EmptyInput(usize, usize), // (number of given values, number of values the search needs)
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IOError(ioe) => write!(f, "I/O error: {}", ioe),
            Error::InvalidInputStr(s) => write!(
                f,
                "Invalid string({}) found in input, expect unsigned integers.",
                s
            ),
            Error::EmptyInput(given_n, expect_n) => write!(
                f,
                "Only {} value(s) given, expect at least {} values to search in.",
                given_n, expect_n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CliArgs {
    pub input_path: PathBuf,
    /// Sum the found values must add up to.
    #[arg(short, long, default_value_t = DEFAULT_TARGET)]
    pub target: u64,
}

/// Reads one unsigned integer per line, skipping blank lines.
pub fn read_ints<P: AsRef<Path>>(path: P) -> Result<Vec<u32>, Error> {
    let file = File::open(path).map_err(Error::IOError)?;
    let reader = BufReader::new(file);
    let mut ints = Vec::new();
    for line in reader.lines() {
        let s = line.map_err(Error::IOError)?;
        let text = s.trim();
        if text.is_empty() {
            continue;
        }

        let n = text
            .parse::<u32>()
            .map_err(|_| Error::InvalidInputStr(s.clone()))?;
        ints.push(n);
    }

    Ok(ints)
}

/// How many values a search combines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Pair,
    Triple,
}

impl Arity {
    pub fn count(self) -> usize {
        match self {
            Arity::Pair => 2,
            Arity::Triple => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult<const N: usize> {
    /// `values` are in ascending order.
    Found { values: [u32; N], product: u128 },
    NotFound,
}

impl<const N: usize> MatchResult<N> {
    fn found(values: [u32; N]) -> Self {
        let product = values.iter().map(|&n| u128::from(n)).product();
        MatchResult::Found { values, product }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, MatchResult::Found { .. })
    }
}

impl<const N: usize> Display for MatchResult<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchResult::Found { values, product } => {
                for (ind, n) in values.iter().enumerate() {
                    if ind > 0 {
                        write!(f, " * ")?;
                    }
                    write!(f, "{}", n)?;
                }
                write!(f, " = {}", product)
            }
            MatchResult::NotFound => write!(f, "No matching values found"),
        }
    }
}

/// Finds values summing to a target in a sequence sorted once at construction.
///
/// Values are assumed to be distinct. Duplicates aren't rejected, but no
/// result is promised for input containing them.
#[derive(Debug, Clone)]
pub struct SortedKSumSolver {
    values: Vec<u32>,
}

impl SortedKSumSolver {
    pub fn new<I: IntoIterator<Item = u32>>(values: I, arity: Arity) -> Result<Self, Error> {
        let mut values = Vec::from_iter(values);
        if values.len() < arity.count() {
            return Err(Error::EmptyInput(values.len(), arity.count()));
        }

        values.sort_unstable();
        Ok(Self { values })
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn find_pair(&self, target: u64) -> MatchResult<2> {
        match find_pair_inds(&self.values, target) {
            Some((low, high)) => MatchResult::found([self.values[low], self.values[high]]),
            None => MatchResult::NotFound,
        }
    }

    pub fn find_triple(&self, target: u64) -> MatchResult<3> {
        for (anchor, &n) in self.values.iter().enumerate() {
            // The smallest of three distinct values is below a third of their sum.
            if anchor + 2 >= self.values.len() || u64::from(n) * 3 >= target {
                break;
            }

            let rest = &self.values[(anchor + 1)..];
            if let Some((low, high)) = find_pair_inds(rest, target - u64::from(n)) {
                return MatchResult::found([n, rest[low], rest[high]]);
            }
        }

        MatchResult::NotFound
    }
}

/// Index of the greatest element not greater than `key` in `sorted`, `None` if
/// every element is greater.
pub fn last_not_greater(sorted: &[u32], key: u64) -> Option<usize> {
    sorted
        .partition_point(|&n| u64::from(n) <= key)
        .checked_sub(1)
}

// Two-pointer scan over `sorted`. The smaller member of a matching pair sits at
// or below `split`, the larger one above it.
fn find_pair_inds(sorted: &[u32], target: u64) -> Option<(usize, usize)> {
    let split = last_not_greater(sorted, target / 2)?;
    let mut high = last_not_greater(sorted, target)?;
    let mut low = 0;
    while low <= split && high > split {
        let sum = u64::from(sorted[low]) + u64::from(sorted[high]);
        match sum.cmp(&target) {
            Ordering::Equal => return Some((low, high)),
            Ordering::Greater => high -= 1,
            Ordering::Less => low += 1,
        }
    }

    None
}
