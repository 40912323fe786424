use aoc2021::day15::solve;
use indoc::indoc;
use rstest::rstest;

const EXAMPLE: &str = indoc! {"
    1163751742
    1381373672
    2136511328
    3694931569
    7463417111
    1319128137
    1359912421
    3125421639
    1293138521
    2311944581
"};

#[test]
fn part_one() {
    assert_eq!(solve(1, EXAMPLE).unwrap(), "40");
}

#[test]
fn part_two() {
    assert_eq!(solve(2, EXAMPLE).unwrap(), "315");
}

#[rstest]
#[case("")]
#[case("\n")]
#[case("\n\n\n")]
fn empty_map_is_an_error(#[case] input: &str) {
    assert!(solve(1, input).is_err());
    assert!(solve(2, input).is_err());
}
