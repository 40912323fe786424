use aoc2022::day25::solve;
use indoc::indoc;

const EXAMPLE: &str = indoc! {"
    1=-0-2
    12111
    2=0=
    21
    2=01
    111
    20012
    112
    1=-1=
    1-12
    12
    1=
    122
"};

#[test]
fn part_one() {
    assert_eq!(solve(1, EXAMPLE).unwrap(), "2=-1=0");
}

#[test]
fn part_two_has_no_puzzle() {
    assert_eq!(solve(2, EXAMPLE).unwrap(), "0");
}

#[test]
fn bad_digit_is_an_error() {
    assert!(solve(1, "1=3\n").is_err());
}
