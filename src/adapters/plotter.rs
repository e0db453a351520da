use crate::config::ModuleSettings;
use crate::domain::ports::ComplexityPlotter;
use crate::utils::error::{PlotError, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Bootstrap run by the interpreter: argv is `module files_json output_name`.
const BOOTSTRAP: &str = "\
import importlib, json, sys
mod = importlib.import_module(sys.argv[1])
mod.plot_complexity_curves(json.loads(sys.argv[2]), output_name=sys.argv[3])
";

/// Delegates to `plot_complexity_curves()` from the ngi_visualizations
/// package (https://github.com/ewels/ngi_visualizations) in a child process.
#[derive(Debug, Clone)]
pub struct NgiVisualizationsPlotter {
    settings: ModuleSettings,
}

impl NgiVisualizationsPlotter {
    pub fn new(settings: ModuleSettings) -> Self {
        Self { settings }
    }

    /// Arguments passed to the interpreter, after the program name.
    pub fn command_args(&self, files: &[String], output_name: &str) -> Result<Vec<String>> {
        Ok(vec![
            "-c".to_string(),
            BOOTSTRAP.to_string(),
            self.settings.plot_module.clone(),
            serde_json::to_string(files)?,
            output_name.to_string(),
        ])
    }
}

#[async_trait]
impl ComplexityPlotter for NgiVisualizationsPlotter {
    async fn plot(&self, files: &[String], output_name: &str) -> Result<()> {
        let args = self.command_args(files, output_name)?;
        tracing::debug!(
            "Launching {} for {} with {} files",
            self.settings.python,
            self.settings.plot_module,
            files.len()
        );

        let output = Command::new(&self.settings.python)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| PlotError::PlotterFailed {
                message: format!("could not launch {}: {}", self.settings.python, e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PlotError::PlotterFailed {
                message: format!(
                    "{} exited with {}: {}",
                    self.settings.plot_module,
                    output.status,
                    stderr.trim()
                ),
            });
        }

        // Warnings from a successful run are only surfaced in verbose mode
        if !output.stderr.is_empty() {
            tracing::debug!("{}", String::from_utf8_lossy(&output.stderr).trim());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_args() {
        let plotter = NgiVisualizationsPlotter::new(ModuleSettings::default());
        let files = vec!["a_ccurve.txt".to_string(), "b ccurve.txt".to_string()];
        let args = plotter.command_args(&files, "sample.run").unwrap();

        assert_eq!(args[0], "-c");
        assert!(args[1].contains("plot_complexity_curves"));
        assert_eq!(args[2], "ngi_visualizations.plot_complexity_curves");
        assert_eq!(args[3], r#"["a_ccurve.txt","b ccurve.txt"]"#);
        assert_eq!(args[4], "sample.run");
    }

    #[tokio::test]
    async fn test_missing_interpreter_fails() {
        let plotter = NgiVisualizationsPlotter::new(ModuleSettings {
            python: "/nonexistent/bin/python-for-preseq".to_string(),
            ..ModuleSettings::default()
        });
        let err = plotter.plot(&[], "sample.run").await.unwrap_err();
        assert!(matches!(err, PlotError::PlotterFailed { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_fails() {
        // `false` accepts any arguments and exits with status 1
        let plotter = NgiVisualizationsPlotter::new(ModuleSettings {
            python: "false".to_string(),
            ..ModuleSettings::default()
        });
        let files = vec!["sample_ccurve.txt".to_string()];
        match plotter.plot(&files, "sample.run").await {
            Err(PlotError::PlotterFailed { message }) => {
                assert!(message.contains("exited with"));
                assert!(message.contains("ngi_visualizations.plot_complexity_curves"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
