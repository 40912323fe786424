use aoc2022::day06::solve;
use rstest::rstest;

#[rstest]
#[case("bvwbjplbgvbhsrlpgdmjqwftvncz", "5")]
#[case("nppdvjthqldpwncqszvftbrmjlhg", "6")]
#[case("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", "10")]
#[case("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", "11")]
fn part_one(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(solve(1, input).unwrap(), expected);
}

#[rstest]
#[case("mjqjpqmgbljsphdztnvjfqwrcgsmlb", "19")]
#[case("bvwbjplbgvbhsrlpgdmjqwftvncz", "23")]
#[case("nppdvjthqldpwncqszvftbrmjlhg", "23")]
#[case("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", "29")]
#[case("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", "26")]
fn part_two(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(solve(2, input).unwrap(), expected);
}

#[test]
fn no_marker_is_an_error() {
    assert!(solve(1, "aaaaaaaa").is_err());
}
