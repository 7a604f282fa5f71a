fn main() {
    account_ledger::observability::init();

    if let Err(e) = account_ledger::app::run(std::env::args()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
