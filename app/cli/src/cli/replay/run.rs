use crate::cli::replay::args::Args;
use crate::cli::replay::read;
use eyre::{Result, WrapErr};
use mapping::dispatch::Outcome;
use mapping::extractor::EventExtractor;
use store::client::Client;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

pub async fn replay(args: &Args) -> Result<()> {
    let client = Client::init(&args.db_url).await?;
    let extractor = EventExtractor::with_store(&client);
    let filter = args.filter();

    let file = File::open(&args.input)
        .await
        .wrap_err_with(|| format!("cannot open {}", args.input.display()))?;
    let mut lines = BufReader::new(file).lines();

    let (mut handled, mut skipped) = (0usize, 0usize);
    let mut line_number = 0;
    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        let Some(primitive) = read::parse_line(line_number, &line)? else {
            continue;
        };
        match extractor
            .handle(&primitive, &filter)
            .await
            .wrap_err_with(|| format!("line {line_number}: handler failed"))?
        {
            Outcome::Handled => handled += 1,
            Outcome::Skipped => skipped += 1,
        }
    }

    tracing::info!("Replay finished: {handled} handled, {skipped} skipped");

    Ok(())
}
