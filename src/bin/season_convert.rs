use anyhow::Result;
use clap::Parser;

use nfl_pickem::config::ConvertArgs;
use nfl_pickem::season_convert;

fn main() -> Result<()> {
    nfl_pickem::logging::init();

    let args = ConvertArgs::parse();
    let mock = season_convert::convert_file(&args.input, &args.output, args.season)?;

    println!(
        "Wrote {} with {} weeks",
        args.output.display(),
        mock.weeks.len()
    );
    Ok(())
}
