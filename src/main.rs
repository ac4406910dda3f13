fn main() -> anyhow::Result<()> {
    story_search::cli::run()
}
