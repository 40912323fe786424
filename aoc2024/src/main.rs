fn main() -> anyhow::Result<()> {
    aoc_common::runner::main(2024, aoc2024::DAYS, aoc2024::solver)
}
