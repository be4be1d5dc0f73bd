use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    let args = ledger_triage::args::parse();
    ledger_triage::cli::main(args)
}
