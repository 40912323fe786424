use aoc2022::day10::solve;
use indoc::indoc;

fn program() -> String {
    "addx 2\nnoop\naddx -1\n".repeat(60)
}

#[test]
fn part_one() {
    assert_eq!(solve(1, &program()).unwrap(), "24320");
}

#[test]
fn part_two_draws_the_screen() {
    let expected = indoc! {"
        #####...................................
        ..........#####.........................
        ....................#####...............
        ..............................#####.....
        ........................................
        ........................................"};
    assert_eq!(solve(2, &program()).unwrap(), expected);
}

#[test]
fn short_program_has_no_signal() {
    assert_eq!(solve(1, "noop\naddx 3\naddx -5\n").unwrap(), "0");
}

#[test]
fn unknown_instruction_is_an_error() {
    assert!(solve(1, "jmp 3\n").is_err());
}
