mod terminal;

fn main() -> anyhow::Result<()> {
    terminal::run_app()
}
