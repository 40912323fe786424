use aoc2024::day06::solve;
use indoc::indoc;

const EXAMPLE: &str = indoc! {"
    ....#.....
    .........#
    ..........
    ..#.......
    .......#..
    ..........
    .#..^.....
    ........#.
    #.........
    ......#...
"};

#[test]
fn part_one() {
    assert_eq!(solve(1, EXAMPLE).unwrap(), "41");
}

#[test]
fn part_two() {
    assert_eq!(solve(2, EXAMPLE).unwrap(), "6");
}

#[test]
fn map_without_guard_is_an_error() {
    assert!(solve(1, "..#\n...\n").is_err());
}
