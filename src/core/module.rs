use crate::config::ModuleArgs;
use crate::core::{ComplexityPlotter, ModuleOutcome, Result, RunfileLoader, REQUIREMENTS};
use crate::domain::model::ResourceRequirements;
use chrono::Local;
use std::io::Write;
use std::time::Instant;

/// Printed verbatim for `--help`.
pub const MODULE_HELP: &str = "
-----------------------
Preseq Plotting Module
-----------------------
Takes results from preseq and plots nice colourful complexity curves
using the plot_complexity_curves() function in the ngi_visualizations
Python package. This package is available here:
https://github.com/ewels/ngi_visualizations
";

/// Cluster Flow entry point for the preseq plotting module.
pub struct PreseqModule<L: RunfileLoader, P: ComplexityPlotter> {
    loader: L,
    plotter: P,
    requirements: ResourceRequirements,
}

impl<L: RunfileLoader, P: ComplexityPlotter> PreseqModule<L, P> {
    pub fn new(loader: L, plotter: P) -> Self {
        Self {
            loader,
            plotter,
            requirements: REQUIREMENTS,
        }
    }

    pub fn with_requirements(mut self, requirements: ResourceRequirements) -> Self {
        self.requirements = requirements;
        self
    }

    /// Runs exactly one of the module behaviours. Query flags win over
    /// plotting, in the order cores, mem, modules, help.
    pub async fn run<O, E>(
        &self,
        args: &ModuleArgs,
        stdout: &mut O,
        stderr: &mut E,
    ) -> Result<ModuleOutcome>
    where
        O: Write,
        E: Write,
    {
        if args.required_cores {
            writeln!(stdout, "{}", self.requirements.cores)?;
            return Ok(ModuleOutcome::Cores);
        }

        if args.required_mem {
            writeln!(stdout, "{}", self.requirements.mem)?;
            return Ok(ModuleOutcome::Memory);
        }

        if args.required_modules {
            // Comma-separated, or nothing at all when no modules are needed
            if !self.requirements.modules.is_empty() {
                writeln!(stdout, "{}", self.requirements.modules.join(","))?;
            }
            return Ok(ModuleOutcome::Modules);
        }

        if args.print_help {
            writeln!(stdout, "{}", MODULE_HELP)?;
            return Ok(ModuleOutcome::Help);
        }

        let params = self.loader.load(args).await?;
        tracing::info!(
            "📁 Plotting {} preseq result file(s) from {}",
            params.files.len(),
            params.runfile
        );

        let started_at = Local::now();
        let timer = Instant::now();

        self.plotter.plot(&params.files, &params.runfile).await?;

        let elapsed = timer.elapsed();
        tracing::info!("✅ Preseq plots finished at {}", Local::now().format("%Y-%m-%d %H:%M:%S"));

        writeln!(
            stderr,
            "###CF Preseq plots successfully exited, took {}..\n",
            elapsed.as_secs_f64()
        )?;
        stderr.flush()?;

        Ok(ModuleOutcome::Plotted {
            started_at,
            elapsed,
            files: params.files.len(),
        })
    }
}
