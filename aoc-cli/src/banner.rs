//! Festive banner shown before each command.

use colored::{Color, Colorize};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const ORNAMENT_COLORS: [Color; 4] = [Color::Red, Color::Yellow, Color::Blue, Color::Cyan];
const TERMINAL_WIDTH: usize = 80;
const TITLE: &str = "Advent of Code";

/// Branch layers of the tree printed before each command.
pub const TREE_LEVELS: usize = 4;

/// A tree of `levels` branch layers, centered in an 80 column terminal,
/// followed by the title. Ornaments are placed from a fixed seed so the
/// tree looks the same on every run.
pub fn banner(levels: usize) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    let max_width = 2 * levels + 1;

    let mut lines = vec![top(max_width)];
    for width in (1..2 * levels).step_by(2) {
        for line_width in [width, width + 2] {
            lines.push(branches(line_width, max_width, &mut rng));
        }
    }
    lines.push(bottom(max_width));

    let indent = " ".repeat((TERMINAL_WIDTH - max_width) / 2);
    let mut out: Vec<String> = lines.into_iter().map(|line| format!("{}{}", indent, line)).collect();
    out.push(format!("{}{}", " ".repeat(20), "=".repeat(40).black()));
    out.push(format!("{}{}", " ".repeat((TERMINAL_WIDTH - TITLE.len()) / 2), TITLE.yellow().bold()));
    out.join("\n")
}

fn top(max_width: usize) -> String {
    let spacing = " ".repeat((max_width + 1) / 2);
    format!("{}{}{}", spacing, "*".yellow().blink(), spacing)
}

fn branches(width: usize, max_width: usize, rng: &mut StdRng) -> String {
    let ornament_at = rng.gen_range(0..=max_width);
    let inner: String = (0..width)
        .map(|i| {
            if i == ornament_at {
                let color = *ORNAMENT_COLORS.choose(rng).unwrap_or(&Color::Red);
                "O".color(color).to_string()
            } else {
                ".".green().to_string()
            }
        })
        .collect();
    let spacing = " ".repeat((max_width - width) / 2);
    format!("{}{}{}{}{}", spacing, "/".green(), inner, "\\".green(), spacing)
}

fn bottom(max_width: usize) -> String {
    let width = (max_width + 1) / 2;
    let spacing = " ".repeat((max_width - 2 - width) / 2);
    let ground = "^".repeat((width + 2) / 2).green();
    format!("{}{}{}{}{}", spacing, ground, "[_]".black(), ground, spacing)
}
