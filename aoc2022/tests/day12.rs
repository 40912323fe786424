use aoc2022::day12::solve;
use indoc::indoc;

const EXAMPLE: &str = indoc! {"
    Sabqponm
    abcryxxl
    accszExk
    acctuvwj
    abdefghi
"};

#[test]
fn part_one() {
    assert_eq!(solve(1, EXAMPLE).unwrap(), "31");
}

#[test]
fn part_two() {
    assert_eq!(solve(2, EXAMPLE).unwrap(), "29");
}

#[test]
fn unreachable_summit_is_an_error() {
    assert!(solve(1, "SazE\n").is_err());
}
