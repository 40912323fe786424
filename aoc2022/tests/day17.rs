use aoc2022::day17::solve;

const EXAMPLE: &str = ">>><<><>><<<>><>>><<<>>><<<><<<>><>><<>>\n";

#[test]
fn part_one() {
    assert_eq!(solve(1, EXAMPLE).unwrap(), "3068");
}

#[test]
fn part_two() {
    assert_eq!(solve(2, EXAMPLE).unwrap(), "1514285714288");
}

#[test]
fn other_characters_are_an_error() {
    assert!(solve(1, "<>x\n").is_err());
}
