//! Day 21: Monkey Math

use anyhow::{bail, Context};
use aoc_common::{check_part, Answer};
use rustc_hash::FxHashMap;

const ROOT: &str = "root";
const HUMAN: &str = "humn";

#[derive(Debug, Clone, Copy)]
enum Job<'a> {
    Yell(i64),
    Op(&'a str, u8, &'a str),
}

struct Troop<'a> {
    jobs: FxHashMap<&'a str, Job<'a>>,
}

impl<'a> Troop<'a> {
    fn parse(input: &'a str) -> anyhow::Result<Self> {
        let mut jobs = FxHashMap::default();
        for line in input.trim().lines() {
            let (name, job) = line.split_once(": ").with_context(|| format!("cannot parse {:?}", line))?;
            let job = match job.split_whitespace().collect::<Vec<_>>()[..] {
                [a, op, b] if matches!(op, "+" | "-" | "*" | "/") => Job::Op(a, op.as_bytes()[0], b),
                [n] => Job::Yell(n.parse()?),
                _ => bail!("cannot parse job {:?}", job),
            };
            jobs.insert(name, job);
        }
        Ok(Troop { jobs })
    }

    fn job(&self, name: &str) -> anyhow::Result<Job<'a>> {
        self.jobs.get(name).copied().with_context(|| format!("no monkey {}", name))
    }

    fn eval(&self, name: &str) -> anyhow::Result<i64> {
        Ok(match self.job(name)? {
            Job::Yell(n) => n,
            Job::Op(a, op, b) => {
                let (a, b) = (self.eval(a)?, self.eval(b)?);
                match op {
                    b'+' => a + b,
                    b'-' => a - b,
                    b'*' => a * b,
                    _ => a.checked_div(b).with_context(|| format!("{} divides by zero", name))?,
                }
            }
        })
    }

    fn depends_on_human(&self, name: &str) -> anyhow::Result<bool> {
        Ok(name == HUMAN
            || match self.job(name)? {
                Job::Yell(_) => false,
                Job::Op(a, _, b) => self.depends_on_human(a)? || self.depends_on_human(b)?,
            })
    }

    /// What the human must yell for `name` to come out as `target`.
    fn solve_for_human(&self, name: &str, target: i64) -> anyhow::Result<i64> {
        if name == HUMAN {
            return Ok(target);
        }
        let Job::Op(a, op, b) = self.job(name)? else { bail!("{} does not depend on {}", name, HUMAN) };
        if self.depends_on_human(a)? {
            let b = self.eval(b)?;
            let target = match op {
                b'+' => target - b,
                b'-' => target + b,
                b'*' => target / b,
                _ => target * b,
            };
            self.solve_for_human(a, target)
        } else {
            let a = self.eval(a)?;
            let target = match op {
                b'+' => target - a,
                b'-' => a - target,
                b'*' => target / a,
                _ => a / target,
            };
            self.solve_for_human(b, target)
        }
    }
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let troop = Troop::parse(input)?;
    if part == 1 {
        return Ok(troop.eval(ROOT)?.to_string());
    }

    let Job::Op(a, _, b) = troop.job(ROOT)? else { bail!("{} only yells a number", ROOT) };
    let answer = if troop.depends_on_human(a)? {
        troop.solve_for_human(a, troop.eval(b)?)?
    } else {
        troop.solve_for_human(b, troop.eval(a)?)?
    };
    Ok(answer.to_string())
}
