use aoc2021::day01::solve;
use indoc::indoc;

const EXAMPLE: &str = indoc! {"
    199
    200
    208
    210
    200
    207
    240
    269
    260
    263
"};

#[test]
fn part_one() {
    assert_eq!(solve(1, EXAMPLE).unwrap(), "7");
}

#[test]
fn part_two() {
    assert_eq!(solve(2, EXAMPLE).unwrap(), "5");
}

#[test]
fn rejects_part_three() {
    assert!(solve(3, EXAMPLE).is_err());
}
