use aoc2024::day11::solve;

const EXAMPLE: &str = "125 17\n";

#[test]
fn part_one() {
    assert_eq!(solve(1, EXAMPLE).unwrap(), "55312");
}

#[test]
fn part_two() {
    assert_eq!(solve(2, EXAMPLE).unwrap(), "65601038650482");
}
