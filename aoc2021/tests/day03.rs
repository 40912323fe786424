use aoc2021::day03::solve;
use indoc::indoc;

const EXAMPLE: &str = indoc! {"
    00100
    11110
    10110
    10111
    10101
    01111
    00111
    11100
    10000
    11001
    00010
    01010
"};

#[test]
fn part_one() {
    assert_eq!(solve(1, EXAMPLE).unwrap(), "198");
}

#[test]
fn part_two() {
    assert_eq!(solve(2, EXAMPLE).unwrap(), "230");
}

#[test]
fn ragged_report_is_an_error() {
    assert!(solve(1, "0101\n011\n").is_err());
}
