//! New challenge skeletons rendered from the bundled templates.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

const SOLUTION_TEMPLATE: &str = include_str!("../templates/solution.rs.tmpl");
const TEST_TEMPLATE: &str = include_str!("../templates/test.rs.tmpl");
const YEAR_CARGO_TEMPLATE: &str = include_str!("../templates/year_cargo.toml.tmpl");
const YEAR_LIB_TEMPLATE: &str = include_str!("../templates/year_lib.rs.tmpl");
const YEAR_MAIN_TEMPLATE: &str = include_str!("../templates/year_main.rs.tmpl");

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} has no `days!` block to register the day in")]
    NoRegistry(PathBuf),
}

/// Substitutes `{{name}}` placeholders.
pub fn render(template: &str, vars: &[(&str, String)]) -> String {
    vars.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{{{}}}}}", name), value)
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written(PathBuf),
    Skipped(PathBuf),
}

#[derive(Debug, Default)]
pub struct Report {
    pub files: Vec<Outcome>,
    pub year_crate_created: bool,
    pub registered: bool,
}

/// Where the files of one puzzle day live inside the workspace.
#[derive(Debug, Clone)]
pub struct Scaffold {
    root: PathBuf,
    year: u16,
    day: u8,
}

impl Scaffold {
    pub fn new(root: impl Into<PathBuf>, year: u16, day: u8) -> Self {
        Self { root: root.into(), year, day }
    }

    pub fn crate_dir(&self) -> PathBuf {
        self.root.join(format!("aoc{}", self.year))
    }

    pub fn solution_path(&self) -> PathBuf {
        self.crate_dir().join("src").join(format!("day{:02}.rs", self.day))
    }

    pub fn test_path(&self) -> PathBuf {
        self.crate_dir().join("tests").join(format!("day{:02}.rs", self.day))
    }

    fn vars(&self) -> Vec<(&'static str, String)> {
        vec![
            ("year", self.year.to_string()),
            ("day", self.day.to_string()),
            ("day_padded", format!("{:02}", self.day)),
        ]
    }

    /// Creates the year crate if needed, renders both skeletons and
    /// registers the day. Existing skeletons are left alone unless `force`.
    pub fn write(&self, force: bool) -> Result<Report, ScaffoldError> {
        let vars = self.vars();
        let mut report = Report::default();

        let crate_dir = self.crate_dir();
        if !crate_dir.join("Cargo.toml").exists() {
            info!("creating year crate {}", crate_dir.display());
            write_file(&crate_dir.join("Cargo.toml"), &render(YEAR_CARGO_TEMPLATE, &vars))?;
            write_file(&crate_dir.join("src").join("lib.rs"), &render(YEAR_LIB_TEMPLATE, &vars))?;
            write_file(&crate_dir.join("src").join("main.rs"), &render(YEAR_MAIN_TEMPLATE, &vars))?;
            report.year_crate_created = true;
        }

        for (path, template) in [(self.solution_path(), SOLUTION_TEMPLATE), (self.test_path(), TEST_TEMPLATE)] {
            if path.exists() && !force {
                warn!("{} exists, skipping", path.display());
                report.files.push(Outcome::Skipped(path));
                continue;
            }
            write_file(&path, &render(template, &vars))?;
            report.files.push(Outcome::Written(path));
        }

        let lib = crate_dir.join("src").join("lib.rs");
        let source = fs::read_to_string(&lib).map_err(|source| ScaffoldError::Read { path: lib.clone(), source })?;
        match register_day(&source, self.day) {
            Some(updated) => {
                write_file(&lib, &updated)?;
                report.registered = true;
            }
            None if source.contains("days!") => debug!("day {} already registered", self.day),
            None => return Err(ScaffoldError::NoRegistry(lib)),
        }
        Ok(report)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), ScaffoldError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| ScaffoldError::Write { path: dir.to_path_buf(), source })?;
    }
    debug!("writing {}", path.display());
    fs::write(path, contents).map_err(|source| ScaffoldError::Write { path: path.to_path_buf(), source })
}

fn module_day(line: &str) -> Option<u8> {
    line.trim().strip_prefix("pub mod day")?.strip_suffix(';')?.parse().ok()
}

fn entry_day(line: &str) -> Option<u8> {
    let (day, module) = line.trim().split_once("=>")?;
    module.trim().starts_with("day").then_some(())?;
    day.trim().parse().ok()
}

/// Adds `pub mod dayNN;` and `N => dayNN,` to a year's `lib.rs`, both in
/// day order. `None` when the day is already there or there is no
/// `days!` block.
pub fn register_day(lib_rs: &str, day: u8) -> Option<String> {
    let mut lines: Vec<String> = lib_rs.lines().map(str::to_string).collect();
    let block_start = lines.iter().position(|line| line.contains("days!"))?;
    let block_end = block_start + lines[block_start..].iter().position(|line| line.trim() == "}")?;

    let module = format!("day{:02}", day);
    if lines.iter().any(|line| module_day(line) == Some(day)) {
        return None;
    }

    // entry inside the macro first so the module insert does not shift it
    let entry_at = (block_start + 1..block_end)
        .find(|&i| entry_day(&lines[i]).is_some_and(|d| d > day))
        .unwrap_or(block_end);
    lines.insert(entry_at, format!("    {} => {},", day, module));

    let modules: Vec<(usize, u8)> = lines[..block_start]
        .iter()
        .enumerate()
        .filter_map(|(i, line)| module_day(line).map(|d| (i, d)))
        .collect();
    let module_line = format!("pub mod {};", module);
    match modules.iter().find(|&&(_, d)| d > day) {
        Some(&(i, _)) => lines.insert(i, module_line),
        None => match modules.last() {
            Some(&(i, _)) => lines.insert(i + 1, module_line),
            None => {
                lines.insert(block_start, String::new());
                lines.insert(block_start, module_line);
            }
        },
    }

    let mut out = lines.join("\n");
    out.push('\n');
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn render_replaces_every_placeholder() {
        let text = render("aoc{{year}}::day{{day_padded}} ({{day}}) {{year}}", &[
            ("year", "2023".to_string()),
            ("day", "7".to_string()),
            ("day_padded", "07".to_string()),
        ]);
        assert_eq!(text, "aoc2023::day07 (7) 2023");
    }

    #[test]
    fn rendered_skeletons_reference_the_day() {
        let vars = Scaffold::new(".", 2023, 7).vars();
        assert!(render(TEST_TEMPLATE, &vars).starts_with("use aoc2023::day07::solve;"));
        assert!(render(SOLUTION_TEMPLATE, &vars).contains("https://adventofcode.com/2023/day/7"));
        assert!(!render(YEAR_CARGO_TEMPLATE, &vars).contains("{{"));
    }

    #[test]
    fn register_keeps_days_in_order() {
        let lib = indoc! {"
            pub mod day01;
            pub mod day03;

            aoc_common::days! {
                1 => day01,
                3 => day03,
            }
        "};

        let updated = register_day(lib, 2).unwrap();

        assert_eq!(updated, indoc! {"
            pub mod day01;
            pub mod day02;
            pub mod day03;

            aoc_common::days! {
                1 => day01,
                2 => day02,
                3 => day03,
            }
        "});
        assert_eq!(register_day(&updated, 2), None);
    }

    #[test]
    fn register_into_empty_year() {
        let lib = "//! Advent of Code 2025\n\naoc_common::days! {\n}\n";

        let updated = register_day(lib, 1).unwrap();

        assert_eq!(
            updated,
            "//! Advent of Code 2025\n\npub mod day01;\n\naoc_common::days! {\n    1 => day01,\n}\n"
        );
    }

    #[test]
    fn register_appends_after_last_day() {
        let lib = "pub mod day01;\n\naoc_common::days! {\n    1 => day01,\n}\n";
        let updated = register_day(lib, 12).unwrap();
        assert_eq!(updated, "pub mod day01;\npub mod day12;\n\naoc_common::days! {\n    1 => day01,\n    12 => day12,\n}\n");
    }

    #[test]
    fn new_year_gets_a_crate_and_both_skeletons() {
        let temp = TempDir::new().unwrap();
        let scaffold = Scaffold::new(temp.path(), 2025, 3);

        let report = scaffold.write(false).unwrap();

        assert!(report.year_crate_created);
        assert!(report.registered);
        assert_eq!(report.files, vec![
            Outcome::Written(scaffold.solution_path()),
            Outcome::Written(scaffold.test_path()),
        ]);
        let lib = fs::read_to_string(temp.path().join("aoc2025/src/lib.rs")).unwrap();
        assert!(lib.contains("pub mod day03;"));
        assert!(lib.contains("    3 => day03,"));
        let cargo = fs::read_to_string(temp.path().join("aoc2025/Cargo.toml")).unwrap();
        assert!(cargo.contains("name = \"aoc2025\""));
    }

    #[test]
    fn existing_files_are_skipped_unless_forced() {
        let temp = TempDir::new().unwrap();
        let scaffold = Scaffold::new(temp.path(), 2025, 3);
        scaffold.write(false).unwrap();
        fs::write(scaffold.solution_path(), "// solved\n").unwrap();

        let report = scaffold.write(false).unwrap();
        assert!(!report.year_crate_created);
        assert!(!report.registered);
        assert_eq!(report.files[0], Outcome::Skipped(scaffold.solution_path()));
        assert_eq!(fs::read_to_string(scaffold.solution_path()).unwrap(), "// solved\n");

        let report = scaffold.write(true).unwrap();
        assert_eq!(report.files[0], Outcome::Written(scaffold.solution_path()));
        assert_ne!(fs::read_to_string(scaffold.solution_path()).unwrap(), "// solved\n");
    }
}
