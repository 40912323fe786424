use aoc2021::day12::solve;
use indoc::indoc;
use rstest::rstest;

const SMALL: &str = indoc! {"
    start-A
    start-b
    A-c
    A-b
    b-d
    A-end
    b-end
"};

const MEDIUM: &str = indoc! {"
    dc-end
    HN-start
    start-kj
    dc-start
    dc-HN
    LN-dc
    HN-end
    kj-sa
    kj-HN
    kj-dc
"};

#[rstest]
#[case(SMALL, "10")]
#[case(MEDIUM, "19")]
fn part_one(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(solve(1, input).unwrap(), expected);
}

#[rstest]
#[case(SMALL, "36")]
#[case(MEDIUM, "103")]
fn part_two(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(solve(2, input).unwrap(), expected);
}

#[test]
fn missing_end_is_an_error() {
    assert!(solve(1, "start-a\n").is_err());
}
