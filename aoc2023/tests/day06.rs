use aoc2023::day06::solve;
use indoc::indoc;

const EXAMPLE: &str = indoc! {"
    Time:      7  15   30
    Distance:  9  40  200
"};

#[test]
fn part_one() {
    assert_eq!(solve(1, EXAMPLE).unwrap(), "288");
}

#[test]
fn part_two() {
    assert_eq!(solve(2, EXAMPLE).unwrap(), "71503");
}
