use anyhow::Context;
use clap::Parser;
use preseq_plot::utils::{logger, validation::Validate};
use preseq_plot::{
    ClusterFlowRunfileLoader, ModuleArgs, ModuleSettings, NgiVisualizationsPlotter, PreseqModule,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = ModuleArgs::parse();
    let settings = ModuleSettings::from_env();

    logger::init_cli_logger(settings.verbose);
    if settings.verbose {
        tracing::debug!("Module args: {:?}", args);
        tracing::debug!("Module settings: {:?}", settings);
    }

    // Scheduler queries must answer even with a broken plotting setup
    if !args.is_query() {
        settings
            .validate()
            .context("Invalid preseq plotting configuration")?;
    }

    let module = PreseqModule::new(
        ClusterFlowRunfileLoader::new(),
        NgiVisualizationsPlotter::new(settings),
    );

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();

    // Nothing may follow the ###CF success line on stderr
    module
        .run(&args, &mut stdout, &mut stderr)
        .await
        .context("###CF Error! Preseq plotting failed")?;

    Ok(())
}
