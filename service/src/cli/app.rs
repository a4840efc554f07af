//! `linkml2dh` CLI application

use clap::Parser;
use linkml_core::error::{LinkMLError, Result};
use std::io::Write;
use tracing::{error, info};

use super::types::Linkml2DhCli;
use crate::generator::DataHarmonizerGenerator;
use crate::schema_view::SchemaView;

/// Main `linkml2dh` application
pub struct Linkml2DhApp {
    cli: Linkml2DhCli,
}

impl Linkml2DhApp {
    /// Create the application from command line arguments
    #[must_use]
    pub fn from_args() -> Self {
        Self::new(Linkml2DhCli::parse())
    }

    /// Create the application from already parsed arguments
    #[must_use]
    pub fn new(cli: Linkml2DhCli) -> Self {
        Self { cli }
    }

    /// Run the application
    ///
    /// # Errors
    ///
    /// Returns the first error of the conversion; no output file is written
    /// in that case.
    pub fn run(self) -> Result<()> {
        self.init_logging();
        info!("Starting linkml2dh");

        match self.execute() {
            Ok(()) => {
                info!("Command completed successfully");
                Ok(())
            }
            Err(err) => {
                error!("Command failed: {}", err);
                if !self.cli.quiet {
                    eprintln!("Error: {err}");
                }
                Err(err)
            }
        }
    }

    /// Configure tracing subscriber based on CLI flags
    ///
    /// Logs go to stderr; stdout carries only command output.
    fn init_logging(&self) {
        let level = if self.cli.quiet {
            tracing::Level::ERROR
        } else if self.cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        // A subscriber may already be installed when embedded or under test
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }

    fn execute(&self) -> Result<()> {
        let config = self.cli.template_config()?;
        let view = SchemaView::load_from_file(&self.cli.linkml)?;

        if self.cli.list_classes {
            return Self::list_classes(&view);
        }

        let (Some(class_name), Some(output)) = (&self.cli.classname, &self.cli.dh) else {
            return Err(LinkMLError::config(
                "--classname and --dh are required unless --list-classes is given",
            ));
        };

        let generator = DataHarmonizerGenerator::with_config(config);
        let template = generator.write_file(&view, class_name, output)?;
        info!(
            class = %template.class_name,
            sections = template.section_rows.len(),
            slots = template.slot_rows.len(),
            enum_values = template.enum_rows.len(),
            "Generated DataHarmonizer template {}",
            output.display()
        );
        Ok(())
    }

    fn list_classes(view: &SchemaView) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for name in view.all_class_names() {
            writeln!(out, "{name}")?;
        }
        Ok(())
    }
}
