fn main() -> anyhow::Result<()> {
    aoc_common::runner::main(2023, aoc2023::DAYS, aoc2023::solver)
}
