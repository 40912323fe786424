use aoc2021::day05::solve;
use indoc::indoc;

const EXAMPLE: &str = indoc! {"
    0,9 -> 5,9
    8,0 -> 0,8
    9,4 -> 3,4
    2,2 -> 2,1
    7,0 -> 7,4
    6,4 -> 2,0
    0,9 -> 2,9
    3,4 -> 1,4
    0,0 -> 8,8
    5,5 -> 8,2
"};

#[test]
fn part_one() {
    assert_eq!(solve(1, EXAMPLE).unwrap(), "5");
}

#[test]
fn part_two() {
    assert_eq!(solve(2, EXAMPLE).unwrap(), "12");
}
