use std::ops::{Index, IndexMut};

use anyhow::{bail, Result};

pub type Pos = (usize, usize);

const DIRS4: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
const DIRS8: [(isize, isize); 8] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

/// Rectangular row-major grid, indexed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    pub fn new(rows: usize, cols: usize, fill: T) -> Self
    where
        T: Clone,
    {
        Grid { rows, cols, cells: vec![fill; rows * cols] }
    }

    /// Parses one cell per byte; blank lines around the grid are ignored.
    pub fn parse(input: &str, mut cell: impl FnMut(u8) -> Result<T>) -> Result<Self> {
        let lines: Vec<&str> = input
            .trim_matches(|c: char| c == '\n' || c == '\r')
            .lines()
            .map(str::trim_end)
            .collect();
        let cols = lines.first().map_or(0, |line| line.len());
        let mut cells = Vec::with_capacity(lines.len() * cols);
        for (ri, line) in lines.iter().enumerate() {
            if line.len() != cols {
                bail!("row {} has {} cells, expected {}", ri, line.len(), cols);
            }
            for &b in line.as_bytes() {
                cells.push(cell(b)?);
            }
        }
        Ok(Grid { rows: lines.len(), cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, (ri, ci): Pos) -> Option<&T> {
        (ri < self.rows && ci < self.cols).then(|| &self.cells[ri * self.cols + ci])
    }

    pub fn get_mut(&mut self, (ri, ci): Pos) -> Option<&mut T> {
        if ri < self.rows && ci < self.cols {
            Some(&mut self.cells[ri * self.cols + ci])
        } else {
            None
        }
    }

    /// Position `steps` cells away in direction `(dr, dc)`, if still inside.
    pub fn step(&self, (ri, ci): Pos, (dr, dc): (isize, isize), steps: isize) -> Option<Pos> {
        let nr = ri as isize + dr * steps;
        let nc = ci as isize + dc * steps;
        (nr >= 0 && nc >= 0 && (nr as usize) < self.rows && (nc as usize) < self.cols)
            .then_some((nr as usize, nc as usize))
    }

    pub fn neighbours4(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        DIRS4.iter().filter_map(move |&dir| self.step(pos, dir, 1))
    }

    pub fn neighbours8(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        DIRS8.iter().filter_map(move |&dir| self.step(pos, dir, 1))
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let cols = self.cols;
        (0..self.rows * cols).map(move |i| (i / cols, i % cols))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    pub fn row(&self, ri: usize) -> &[T] {
        &self.cells[ri * self.cols..(ri + 1) * self.cols]
    }

    pub fn position(&self, pred: impl Fn(&T) -> bool) -> Option<Pos> {
        self.cells.iter().position(pred).map(|i| (i / self.cols, i % self.cols))
    }

    /// Renders each row with `f`, rows joined by newlines.
    pub fn render(&self, f: impl Fn(&T) -> char) -> String {
        (0..self.rows)
            .map(|ri| self.row(ri).iter().map(&f).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Grid<u8> {
    pub fn from_bytes(input: &str) -> Result<Self> {
        Grid::parse(input, Ok)
    }

    /// Grid of single decimal digits.
    pub fn digits(input: &str) -> Result<Self> {
        Grid::parse(input, |b| match b {
            b'0'..=b'9' => Ok(b - b'0'),
            _ => bail!("not a digit: {:?}", b as char),
        })
    }
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;

    fn index(&self, (ri, ci): Pos) -> &T {
        assert!(ri < self.rows && ci < self.cols, "({}, {}) outside {}x{} grid", ri, ci, self.rows, self.cols);
        &self.cells[ri * self.cols + ci]
    }
}

impl<T> IndexMut<Pos> for Grid<T> {
    fn index_mut(&mut self, (ri, ci): Pos) -> &mut T {
        assert!(ri < self.rows && ci < self.cols, "({}, {}) outside {}x{} grid", ri, ci, self.rows, self.cols);
        &mut self.cells[ri * self.cols + ci]
    }
}
