use std::io::{stdout, BufWriter};

use crate::{
    common::error::AppError,
    domain::ledger::Ledger,
    io::{reader, writer},
    worker::processor::Processor,
};

/// Replays the command CSV named by `args[1]` against a fresh ledger and
/// writes one outcome row per command to stdout.
pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    if args.len() < 2 {
        return Err(AppError::MissingArg);
    }
    let input_path = &args[1];

    let file = std::fs::File::open(input_path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let mut ledger = Ledger::new();
    let mut processor = Processor::new();
    let mut outcomes = Vec::new();

    for command in reader::read_commands(&mut reader) {
        let command = command.map_err(AppError::Parse)?;
        outcomes.push(processor.process(&mut ledger, command));
    }

    let rejected = outcomes.iter().filter(|o| !o.status.is_success()).count();
    tracing::info!(
        input = %input_path,
        commands = outcomes.len(),
        rejected,
        "replay finished"
    );

    let stdout = stdout();
    let writer = BufWriter::new(stdout.lock());
    writer::write_outcomes(writer, &outcomes)?;

    Ok(())
}
