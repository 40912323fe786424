fn main() -> anyhow::Result<()> {
    aoc_common::runner::main(2021, aoc2021::DAYS, aoc2021::solver)
}
