use aoc2023::day01::solve;
use indoc::indoc;

#[test]
fn part_one() {
    let input = indoc! {"
        1abc2
        pqr3stu8vwx
        a1b2c3d4e5f
        treb7uchet
    "};
    assert_eq!(solve(1, input).unwrap(), "142");
}

#[test]
fn part_two() {
    let input = indoc! {"
        two1nine
        eightwothree
        abcone2threexyz
        xtwone3four
        4nineeightseven2
        zoneight234
        7pqrstsixteen
    "};
    assert_eq!(solve(2, input).unwrap(), "281");
}

#[test]
fn line_without_digits_is_an_error() {
    assert!(solve(1, "abc\n").is_err());
}
