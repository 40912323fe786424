//! Day 22: Monkey Map
//!
//! Part two folds the map into a cube. The net is read from the input: each
//! face gets its outward normal and the 3D directions of its local right and
//! down, and stepping off a face is resolved in 3D.

use std::collections::VecDeque;

use anyhow::{bail, ensure, Context};
use aoc_common::{check_part, parse::normalize, Answer};

type Vec3 = [i32; 3];

/// Right, down, left, up; the facing values of the password.
const DIRS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

fn neg(v: Vec3) -> Vec3 {
    v.map(|x| -x)
}

fn dot(a: Vec3, b: Vec3) -> i32 {
    a.iter().zip(&b).map(|(x, y)| x * y).sum()
}

fn combine(terms: &[(i32, Vec3)]) -> Vec3 {
    let mut sum = [0; 3];
    for (k, v) in terms {
        for axis in 0..3 {
            sum[axis] += k * v[axis];
        }
    }
    sum
}

#[derive(Debug, Clone, Copy)]
enum Move {
    Forward(usize),
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
struct Face {
    block: (usize, usize),
    normal: Vec3,
    right: Vec3,
    down: Vec3,
}

impl Face {
    /// 3D direction of net direction `dir` on this face.
    fn heading(&self, dir: usize) -> Vec3 {
        [self.right, self.down, neg(self.right), neg(self.down)][dir]
    }
}

struct Board {
    tiles: Vec<Vec<u8>>,
    path: Vec<Move>,
}

type State = ((usize, usize), usize);

impl Board {
    fn parse(input: &str) -> anyhow::Result<Self> {
        let input = normalize(input);
        let (map, path) = input.split_once("\n\n").context("expected a map and a path")?;
        let width = map.lines().map(str::len).max().unwrap_or(0);
        let tiles: Vec<Vec<u8>> = map
            .lines()
            .map(|line| {
                let mut row = line.as_bytes().to_vec();
                row.resize(width, b' ');
                row
            })
            .collect();
        if let Some(bad) = tiles.iter().flatten().find(|&&tile| !matches!(tile, b' ' | b'.' | b'#')) {
            bail!("unexpected tile {:?}", *bad as char);
        }

        let mut moves = vec![];
        let mut steps = None;
        for b in path.trim().bytes() {
            if b.is_ascii_digit() {
                steps = Some(steps.unwrap_or(0) * 10 + (b - b'0') as usize);
                continue;
            }
            if let Some(n) = steps.take() {
                moves.push(Move::Forward(n));
            }
            moves.push(match b {
                b'L' => Move::Left,
                b'R' => Move::Right,
                _ => bail!("unexpected {:?} in path", b as char),
            });
        }
        moves.extend(steps.map(Move::Forward));
        Ok(Board { tiles, path: moves })
    }

    fn tile(&self, (r, c): (usize, usize)) -> u8 {
        self.tiles.get(r).and_then(|row| row.get(c)).copied().unwrap_or(b' ')
    }

    /// Follows the path, `wrap` deciding where a step off the map lands.
    fn walk(&self, wrap: impl Fn(State) -> anyhow::Result<State>) -> anyhow::Result<usize> {
        let start = self.tiles.first().and_then(|row| row.iter().position(|&t| t == b'.')).context("no open tile on top")?;
        let (mut pos, mut dir): State = ((0, start), 0);
        for &step in &self.path {
            match step {
                Move::Left => dir = (dir + 3) % 4,
                Move::Right => dir = (dir + 1) % 4,
                Move::Forward(n) => {
                    for _ in 0..n {
                        let (dr, dc) = DIRS[dir];
                        let ahead = (pos.0.wrapping_add_signed(dr), pos.1.wrapping_add_signed(dc));
                        let (next, next_dir) =
                            if self.tile(ahead) == b' ' { wrap((pos, dir))? } else { (ahead, dir) };
                        if self.tile(next) == b'#' {
                            break;
                        }
                        (pos, dir) = (next, next_dir);
                    }
                }
            }
        }
        Ok(1000 * (pos.0 + 1) + 4 * (pos.1 + 1) + dir)
    }

    /// Flat wrapping: walk back to the far edge of the row or column.
    fn wrap_flat(&self, (pos, dir): State) -> anyhow::Result<State> {
        let (dr, dc) = DIRS[dir];
        let mut back = pos;
        loop {
            let prev = (back.0.wrapping_add_signed(-dr), back.1.wrapping_add_signed(-dc));
            if self.tile(prev) == b' ' {
                return Ok((back, dir));
            }
            back = prev;
        }
    }
}

struct Cube {
    size: usize,
    faces: Vec<Face>,
}

impl Cube {
    fn fold(board: &Board) -> anyhow::Result<Self> {
        let cells = board.tiles.iter().flatten().filter(|&&t| t != b' ').count();
        let size = (1..).find(|n| 6 * n * n >= cells).unwrap_or(1);
        ensure!(6 * size * size == cells, "{} tiles cannot fold into a cube", cells);

        let blocks: Vec<(usize, usize)> = (0..board.tiles.len())
            .step_by(size)
            .flat_map(|r| (0..board.tiles[0].len()).step_by(size).map(move |c| (r, c)))
            .filter(|&pos| board.tile(pos) != b' ')
            .map(|(r, c)| (r / size, c / size))
            .collect();
        ensure!(blocks.len() == 6, "the map has {} faces", blocks.len());

        let first = Face { block: blocks[0], normal: [0, 0, 1], right: [1, 0, 0], down: [0, 1, 0] };
        let mut faces = vec![first];
        let mut queue = VecDeque::from([first]);
        while let Some(face) = queue.pop_front() {
            let Face { block: (br, bc), normal: n, right: r, down: d } = face;
            let rolls = [
                ((br, bc + 1), [r, neg(n), d]),
                ((br + 1, bc), [d, r, neg(n)]),
                ((br, bc.wrapping_sub(1)), [neg(r), n, d]),
                ((br.wrapping_sub(1), bc), [neg(d), r, n]),
            ];
            for (block, [normal, right, down]) in rolls {
                if blocks.contains(&block) && faces.iter().all(|f| f.block != block) {
                    let next = Face { block, normal, right, down };
                    faces.push(next);
                    queue.push_back(next);
                }
            }
        }
        ensure!(faces.len() == 6, "the net is not connected");
        Ok(Cube { size, faces })
    }

    /// Steps over the edge of a face onto the face it folds against.
    fn wrap(&self, ((r, c), dir): State) -> anyhow::Result<State> {
        let n = self.size as i32;
        let face = self
            .faces
            .iter()
            .find(|f| f.block == (r / self.size, c / self.size))
            .context("position is not on a face")?;
        let (lr, lc) = ((r % self.size) as i32, (c % self.size) as i32);
        let heading = face.heading(dir);

        // doubled coordinates: a cube of side 2n centred on the origin, cells at odd offsets
        let at = combine(&[(n, face.normal), (2 * lc + 1 - n, face.right), (2 * lr + 1 - n, face.down)]);
        let over = combine(&[(1, at), (1, heading), (-1, face.normal)]);

        let next = self.faces.iter().find(|f| f.normal == heading).context("no face ahead")?;
        let lc = (dot(over, next.right) + n - 1) / 2;
        let lr = (dot(over, next.down) + n - 1) / 2;
        let dir = (0..4).find(|&d| next.heading(d) == neg(face.normal)).context("edge directions disagree")?;
        let (br, bc) = next.block;
        Ok(((br * self.size + lr as usize, bc * self.size + lc as usize), dir))
    }
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let board = Board::parse(input)?;
    let password = if part == 1 {
        board.walk(|state| board.wrap_flat(state))?
    } else {
        let cube = Cube::fold(&board)?;
        board.walk(|state| cube.wrap(state))?
    };
    Ok(password.to_string())
}
