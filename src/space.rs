use std::{collections::HashMap, fmt::Display};

use crate::{CubeRect2D, CubeState, SymbolMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: isize,
    pub y: isize,
    pub z: isize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Position {
    pub fn new(x: isize, y: isize, z: isize) -> Self {
        Self { x, y, z }
    }

    /// Positions of the 26 neighbors, ordered by x offset, then y, then z, each from -1 to 1.
    pub fn neighbors(&self) -> impl Iterator<Item = Position> + '_ {
        (-1..=1)
            .flat_map(|dx| (-1..=1).map(move |dy| (dx, dy)))
            .flat_map(|(dx, dy)| (-1..=1).map(move |dz| (dx, dy, dz)))
            .filter(|offset| *offset != (0, 0, 0))
            .map(|(dx, dy, dz)| Position::new(self.x + dx, self.y + dy, self.z + dz))
    }
}

/// Inclusive box in which active cubes may exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min: Position,
    pub max: Position,
}

impl Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

impl BoundingBox {
    pub fn new(min: Position, max: Position) -> Self {
        Self { min, max }
    }

    pub fn grown(&self) -> Self {
        Self {
            min: Position::new(self.min.x - 1, self.min.y - 1, self.min.z - 1),
            max: Position::new(self.max.x + 1, self.max.y + 1, self.max.z + 1),
        }
    }

    /// The box after growing given times.
    pub fn grown_by(&self, n: usize) -> Self {
        let n = n as isize;
        Self {
            min: Position::new(self.min.x - n, self.min.y - n, self.min.z - n),
            max: Position::new(self.max.x + n, self.max.y + n, self.max.z + n),
        }
    }

    pub fn contains(&self, pos: &Position) -> bool {
        (self.min.x..=self.max.x).contains(&pos.x)
            && (self.min.y..=self.max.y).contains(&pos.y)
            && (self.min.z..=self.max.z).contains(&pos.z)
    }

    pub fn volume(&self) -> usize {
        [
            self.max.x - self.min.x,
            self.max.y - self.min.y,
            self.max.z - self.min.z,
        ]
        .into_iter()
        .map(|d| usize::try_from(d + 1).unwrap_or(0))
        .product()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let (min, max) = (self.min, self.max);
        (min.x..=max.x)
            .flat_map(move |x| (min.y..=max.y).map(move |y| (x, y)))
            .flat_map(move |(x, y)| (min.z..=max.z).map(move |z| Position::new(x, y, z)))
    }
}

/// Sparse cube space, positions missing from the map are inactive.
#[derive(Debug, Clone)]
pub struct CubeGrid {
    cubes: HashMap<Position, CubeState>,
    bounds: BoundingBox,
}

impl From<&CubeRect2D> for CubeGrid {
    fn from(value: &CubeRect2D) -> Self {
        let cubes = value
            .iter()
            .map(|(c, r, s)| (Position::new(c as isize, r as isize, 0), s))
            .collect();
        let bounds = BoundingBox::new(
            Position::new(0, 0, 0),
            Position::new(value.col_n() as isize - 1, value.row_n() as isize - 1, 0),
        );

        Self { cubes, bounds }
    }
}

impl Display for CubeGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dump(&SymbolMap::default()))
    }
}

impl CubeGrid {
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Count of positions holding a state, active or not.
    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    pub fn lookup(&self, pos: &Position) -> CubeState {
        self.cubes.get(pos).copied().unwrap_or(CubeState::InActive)
    }

    pub fn neighbors<'a>(&'a self, pos: &'a Position) -> impl Iterator<Item = CubeState> + 'a {
        pos.neighbors().map(|n| self.lookup(&n))
    }

    pub fn next_state(&self, pos: &Position) -> CubeState {
        let active_count = self.neighbors(pos).filter(CubeState::is_active).count();
        match self.lookup(pos) {
            CubeState::Active if active_count != 2 && active_count != 3 => CubeState::InActive,
            CubeState::InActive if active_count == 3 => CubeState::Active,
            org_state => org_state,
        }
    }

    pub fn advance(&self) -> CubeGrid {
        let bounds = self.bounds.grown();
        let mut cubes = HashMap::with_capacity(bounds.volume());
        for pos in bounds.positions() {
            cubes.insert(pos, self.next_state(&pos));
        }

        CubeGrid { cubes, bounds }
    }

    pub fn active_n(&self) -> usize {
        self.cubes.values().filter(|s| s.is_active()).count()
    }

    pub fn dump<'a>(&'a self, symbols: &'a SymbolMap) -> GridDump<'a> {
        GridDump {
            grid: self,
            symbols,
        }
    }
}

/// Layer by layer text of a grid, from the lowest z.
pub struct GridDump<'a> {
    grid: &'a CubeGrid,
    symbols: &'a SymbolMap,
}

impl Display for GridDump<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let BoundingBox { min, max } = *self.grid.bounds();
        for z in min.z..=max.z {
            writeln!(f, "z = {}", z)?;
            for y in min.y..=max.y {
                for x in min.x..=max.x {
                    let state = self.grid.lookup(&Position::new(x, y, z));
                    write!(f, "{}", self.symbols.symbol(state))?;
                }
                writeln!(f)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

pub struct CubeSpaceSimulator {
    grid: CubeGrid,
    cycle_n: usize,
}

impl CubeSpaceSimulator {
    pub fn new(init_states: &CubeRect2D) -> Self {
        Self::with_grid(CubeGrid::from(init_states))
    }

    pub fn with_grid(grid: CubeGrid) -> Self {
        Self { grid, cycle_n: 0 }
    }

    pub fn step(&mut self) {
        self.grid = self.grid.advance();
        self.cycle_n += 1;
        log::debug!(
            "Cycle {}: bounds {}, {} cube(s) stored, {} active.",
            self.cycle_n,
            self.grid.bounds(),
            self.grid.len(),
            self.grid.active_n()
        );
    }

    pub fn run(&mut self, step_n: usize) {
        log::debug!(
            "Run {} cycle(s), final space will hold {} cube(s).",
            step_n,
            self.grid.bounds().grown_by(step_n).volume()
        );
        for _ in 0..step_n {
            self.step();
        }
    }

    pub fn cycle_n(&self) -> usize {
        self.cycle_n
    }

    pub fn grid(&self) -> &CubeGrid {
        &self.grid
    }

    pub fn active_n(&self) -> usize {
        self.grid.active_n()
    }
}
