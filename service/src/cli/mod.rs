//! Command-line interface for the `linkml2dh` tool

mod app;
mod types;

pub use app::Linkml2DhApp;
pub use types::Linkml2DhCli;

/// Main entry point for the CLI
///
/// # Errors
/// Returns error if CLI execution fails.
pub fn run() -> linkml_core::error::Result<()> {
    Linkml2DhApp::from_args().run()
}
