use aoc2024::day08::solve;
use indoc::indoc;
use rstest::rstest;

const EXAMPLE: &str = indoc! {"
    ............
    ........0...
    .....0......
    .......0....
    ....0.......
    ......A.....
    ............
    ............
    ........A...
    .........A..
    ............
    ............
"};

const THREE_ANTENNAS: &str = indoc! {"
    ..........
    ..........
    ..........
    ....a.....
    ........a.
    .....a....
    ..........
    ..........
    ..........
    ..........
"};

#[rstest]
#[case(THREE_ANTENNAS, "4")]
#[case(EXAMPLE, "14")]
fn part_one(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(solve(1, input).unwrap(), expected);
}

#[test]
fn part_two() {
    assert_eq!(solve(2, EXAMPLE).unwrap(), "34");
}
