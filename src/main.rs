use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tadpole_lastvisit::cli::{Cli, Commands};
use tadpole_lastvisit::ctx::{Ctx, D1_D2_FILE, D3_FILE};
use tadpole_lastvisit::io::summary::format_summary;
use tadpole_lastvisit::pipeline::Pipeline;
use tadpole_lastvisit::pipeline::stage0_scaffold::Stage0Scaffold;
use tadpole_lastvisit::pipeline::stage1_input::{Stage1Input, validate_inputs};
use tadpole_lastvisit::pipeline::stage2_normalize::Stage2Normalize;
use tadpole_lastvisit::pipeline::stage3_forecast::Stage3Forecast;
use tadpole_lastvisit::pipeline::stage4_submission::Stage4Submission;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => {
            let mut ctx = Ctx::new(
                args.data_dir,
                args.out,
                args.verbose,
                args.json,
                env!("CARGO_PKG_VERSION"),
            );
            println!("Generating forecast ...");
            let pipeline = Pipeline::new(vec![
                Box::new(Stage0Scaffold::new()),
                Box::new(Stage1Input::new()),
                Box::new(Stage2Normalize::new()),
                Box::new(Stage3Forecast::new()),
                Box::new(Stage4Submission::new()),
            ]);
            pipeline.run(&mut ctx)?;
            print!("{}", format_summary(&ctx)?);
        }
        Commands::Validate(args) => {
            let summary = validate_inputs(
                &args.data_dir.join(D1_D2_FILE),
                &args.data_dir.join(D3_FILE),
            )?;
            print!("{}", summary);
        }
    }
    Ok(())
}
