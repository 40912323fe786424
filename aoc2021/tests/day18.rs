use aoc2021::day18::solve;
use indoc::indoc;

const HOMEWORK: &str = indoc! {"
    [[[0,[5,8]],[[1,7],[9,6]]],[[4,[1,2]],[[1,4],2]]]
    [[[5,[2,8]],4],[5,[[9,9],0]]]
    [6,[[[6,2],[5,6]],[[7,6],[4,7]]]]
    [[[6,[0,7]],[0,9]],[4,[9,[9,0]]]]
    [[[7,[6,4]],[3,[1,3]]],[[[5,5],1],9]]
    [[6,[[7,3],[3,2]]],[[[3,8],[5,7]],4]]
    [[[[5,4],[7,7]],8],[[8,3],8]]
    [[9,3],[[9,9],[6,[4,9]]]]
    [[2,[[7,7],7]],[[5,8],[[9,3],[0,2]]]]
    [[[[5,2],5],[8,[3,7]]],[[5,[7,5]],[4,4]]]
"};

#[test]
fn part_one() {
    assert_eq!(solve(1, HOMEWORK).unwrap(), "4140");
}

#[test]
fn part_two() {
    assert_eq!(solve(2, HOMEWORK).unwrap(), "3993");
}

#[test]
fn unbalanced_number_is_an_error() {
    assert!(solve(1, "[[1,2]\n").is_err());
}
