fn main() -> anyhow::Result<()> {
    aoc_common::runner::main(2022, aoc2022::DAYS, aoc2022::solver)
}
