fn main() -> anyhow::Result<()> {
    benchsweep::run()
}
