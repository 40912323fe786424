use aoc2024::day04::solve;
use indoc::indoc;
use rstest::rstest;

const EXAMPLE: &str = indoc! {"
    MMMSXXMASM
    MSAMXMSMSA
    AMXSXMAAMM
    MSAMASMSMX
    XMASAMXAMM
    XXAMMXXAMA
    SMSMSASXSS
    SAXAMASAAA
    MAMMMXMMMM
    MXMXAXMASX
"};

const ONLY_XMAS: &str = indoc! {"
    ....XXMAS.
    .SAMXMS...
    ...S..A...
    ..A.A.MS.X
    XMASAMX.MM
    X.....XA.A
    S.S.S.S.SS
    .A.A.A.A.A
    ..M.M.M.MM
    .X.X.XMASX
"};

const MINI: &str = indoc! {"
    M.S
    .A.
    M.S
"};

#[rstest]
#[case(EXAMPLE, "18")]
#[case(ONLY_XMAS, "18")]
fn part_one(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(solve(1, input).unwrap(), expected);
}

#[rstest]
#[case(EXAMPLE, "9")]
#[case(MINI, "1")]
fn part_two(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(solve(2, input).unwrap(), expected);
}
