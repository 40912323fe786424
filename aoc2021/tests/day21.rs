use aoc2021::day21::solve;
use indoc::indoc;

const EXAMPLE: &str = indoc! {"
    Player 1 starting position: 4
    Player 2 starting position: 8
"};

#[test]
fn part_one() {
    assert_eq!(solve(1, EXAMPLE).unwrap(), "739785");
}

#[test]
fn part_two() {
    assert_eq!(solve(2, EXAMPLE).unwrap(), "444356092776315");
}

#[test]
fn position_off_the_board_is_an_error() {
    assert!(solve(1, "Player 1 starting position: 11\nPlayer 2 starting position: 8\n").is_err());
}
