use std::{
    error,
    fmt::Display,
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};

use clap::Parser;

mod space;

pub use space::{BoundingBox, CubeGrid, CubeSpaceSimulator, GridDump, Position};

pub const DEFAULT_CYCLE_N: usize = 6;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    EmptyInput,
    InconsistentCubeRectRow(usize, usize), // (count of column in given row, count of column in earlier row(s)).
    InvalidCubeStateChar(char),
    AmbiguousSymbols(char),
    WhitespaceSymbol(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IOError(ioe) => write!(f, "I/O error: {}", ioe),
            Error::EmptyInput => write!(f, "Given input has no row of cube states."),
            Error::InconsistentCubeRectRow(this_col_n, expect_col_n) => write!(f, "Found inconsistent column count({}) in given row, expect {} columns as in earlier row(s).", this_col_n, expect_col_n),
            Error::InvalidCubeStateChar(c) => write!(f, "Invalid character({}) for cube state.", c),
            Error::AmbiguousSymbols(c) => write!(
                f,
                "Character({}) can't stand for both active and inactive cube.",
                c
            ),
            Error::WhitespaceSymbol(c) => write!(
                f,
                "Whitespace character({:?}) can't be used as cube state symbol.",
                c
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    /// Text file of the initial layer, read from standard input if absent.
    pub input_path: Option<PathBuf>,
    /// Count of cycles to simulate.
    #[arg(short, long, default_value_t = DEFAULT_CYCLE_N)]
    pub cycles: usize,
    /// Character of active cube.
    #[arg(long, default_value_t = '#')]
    pub active: char,
    /// Character of inactive cube.
    #[arg(long, default_value_t = '.')]
    pub inactive: char,
    /// Print every layer of the final space.
    #[arg(long)]
    pub dump: bool,
}

impl CLIArgs {
    pub fn symbols(&self) -> Result<SymbolMap, Error> {
        SymbolMap::new(self.active, self.inactive)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeState {
    InActive,
    Active,
}

impl CubeState {
    pub fn is_active(&self) -> bool {
        *self == CubeState::Active
    }
}

/// Characters standing for the two cube states in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolMap {
    active: char,
    inactive: char,
}

impl Default for SymbolMap {
    fn default() -> Self {
        Self {
            active: '#',
            inactive: '.',
        }
    }
}

impl SymbolMap {
    pub fn new(active: char, inactive: char) -> Result<Self, Error> {
        if active == inactive {
            return Err(Error::AmbiguousSymbols(active));
        }

        if let Some(c) = [active, inactive].into_iter().find(|c| c.is_whitespace()) {
            return Err(Error::WhitespaceSymbol(c));
        }

        Ok(Self { active, inactive })
    }

    pub fn state(&self, c: char) -> Option<CubeState> {
        if c == self.active {
            Some(CubeState::Active)
        } else if c == self.inactive {
            Some(CubeState::InActive)
        } else {
            None
        }
    }

    pub fn symbol(&self, state: CubeState) -> char {
        match state {
            CubeState::Active => self.active,
            CubeState::InActive => self.inactive,
        }
    }
}

/// Rectangle of cube states read from text, stored row by row.
#[derive(Debug, Clone)]
pub struct CubeRect2D {
    states: Vec<CubeState>,
    row_n: usize,
    col_n: usize,
}

impl CubeRect2D {
    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    /// States with their (column, row) in given rectangle.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CubeState)> + '_ {
        self.states
            .chunks(self.col_n.max(1))
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, s)| (c, r, *s)))
    }
}

struct CubeRect2DBuilder<'a> {
    symbols: &'a SymbolMap,
    states: Vec<CubeState>,
    row_n: usize,
    col_n: Option<usize>,
}

impl<'a> CubeRect2DBuilder<'a> {
    pub fn new(symbols: &'a SymbolMap) -> Self {
        Self {
            symbols,
            states: Vec::new(),
            row_n: 0,
            col_n: None,
        }
    }

    pub fn push_row(&mut self, row_text: &str) -> Result<(), Error> {
        let this_col_n = row_text.chars().count();
        let expect_col_n = *self.col_n.get_or_insert(this_col_n);
        if expect_col_n != this_col_n {
            return Err(Error::InconsistentCubeRectRow(this_col_n, expect_col_n));
        }

        for c in row_text.chars() {
            let state = self
                .symbols
                .state(c)
                .ok_or(Error::InvalidCubeStateChar(c))?;
            self.states.push(state);
        }

        self.row_n += 1;
        Ok(())
    }

    pub fn build(self) -> Result<CubeRect2D, Error> {
        match self.col_n {
            Some(col_n) if col_n > 0 => Ok(CubeRect2D {
                states: self.states,
                row_n: self.row_n,
                col_n,
            }),
            _ => Err(Error::EmptyInput),
        }
    }
}

pub fn parse_state(text: &str, symbols: &SymbolMap) -> Result<CubeRect2D, Error> {
    let mut builder = CubeRect2DBuilder::new(symbols);
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }

    for line in text.lines() {
        builder.push_row(line)?;
    }

    builder.build()
}

pub fn read_state_from<R: Read>(mut reader: R, symbols: &SymbolMap) -> Result<CubeRect2D, Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(Error::IOError)?;
    parse_state(&text, symbols)
}

pub fn read_state<P: AsRef<Path>>(path: P, symbols: &SymbolMap) -> Result<CubeRect2D, Error> {
    let file = File::open(path).map_err(Error::IOError)?;
    read_state_from(file, symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_glider() {
        let rect = parse_state(".#.\n..#\n###\n", &SymbolMap::default()).unwrap();
        assert_eq!(rect.row_n(), 3);
        assert_eq!(rect.col_n(), 3);

        let active: Vec<_> = rect
            .iter()
            .filter(|(_, _, s)| s.is_active())
            .map(|(c, r, _)| (c, r))
            .collect();
        assert_eq!(active, vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
    }

    #[test]
    fn parse_crlf_and_surrounding_blanks() {
        let rect = parse_state("\r\n#.\r\n.#\r\n\r\n", &SymbolMap::default()).unwrap();
        assert_eq!((rect.row_n(), rect.col_n()), (2, 2));
    }

    #[test]
    fn parse_custom_symbols() {
        let symbols = SymbolMap::new('x', 'o').unwrap();
        let rect = parse_state("xo\nox", &symbols).unwrap();
        assert_eq!(rect.iter().filter(|(_, _, s)| s.is_active()).count(), 2);
        assert!(matches!(
            parse_state("#.", &symbols),
            Err(Error::InvalidCubeStateChar('#'))
        ));
    }

    #[test]
    fn reject_malformed_input() {
        let symbols = SymbolMap::default();
        assert!(matches!(parse_state("", &symbols), Err(Error::EmptyInput)));
        assert!(matches!(parse_state(" \n\n", &symbols), Err(Error::EmptyInput)));
        assert!(matches!(
            parse_state("#..\n#.", &symbols),
            Err(Error::InconsistentCubeRectRow(2, 3))
        ));
        assert!(matches!(
            parse_state("#.\n#?", &symbols),
            Err(Error::InvalidCubeStateChar('?'))
        ));
    }

    #[test]
    fn reject_bad_symbols() {
        assert!(matches!(
            SymbolMap::new('#', '#'),
            Err(Error::AmbiguousSymbols('#'))
        ));
        assert!(matches!(
            SymbolMap::new('#', ' '),
            Err(Error::WhitespaceSymbol(' '))
        ));
    }
}
