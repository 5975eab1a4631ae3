mod command;
mod presenter;
mod record;

fn main() -> anyhow::Result<()> {
    command::run()
}
