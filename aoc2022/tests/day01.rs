use aoc2022::day01::solve;
use indoc::indoc;

const EXAMPLE: &str = indoc! {"
    1000
    2000
    3000

    4000

    5000
    6000

    7000
    8000
    9000

    10000
"};

#[test]
fn part_one() {
    assert_eq!(solve(1, EXAMPLE).unwrap(), "24000");
}

#[test]
fn part_two() {
    assert_eq!(solve(2, EXAMPLE).unwrap(), "45000");
}

#[test]
fn rejects_part_three() {
    assert!(solve(3, EXAMPLE).is_err());
}
