use aoc2022::day22::solve;
use indoc::indoc;

const EXAMPLE: &str = indoc! {"
            ...#
            .#..
            #...
            ....
    ...#.......#
    ........#...
    ..#....#....
    ..........#.
            ...#....
            .....#..
            .#......
            ......#.

    10R5L5R10L4R5L5
"};

#[test]
fn part_one() {
    assert_eq!(solve(1, EXAMPLE).unwrap(), "6032");
}

#[test]
fn part_two() {
    assert_eq!(solve(2, EXAMPLE).unwrap(), "5031");
}

#[test]
fn map_that_cannot_fold_is_an_error() {
    assert!(solve(2, "....\n....\n\n1R1\n").is_err());
}
