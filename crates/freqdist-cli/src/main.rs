mod command;
mod input;
mod report;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
