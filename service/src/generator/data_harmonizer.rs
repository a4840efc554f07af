//! DataHarmonizer template generator
//!
//! Writes an assembled template as delimited text (tab-separated by default)
//! with the fourteen-column header line first.

use std::io::Write;
use std::path::Path;
use tracing::info;

use super::traits::{Generator, GeneratorError, GeneratorResult};
use crate::config::TemplateConfig;
use crate::schema_view::SchemaView;
use crate::template::{Template, build_template};

/// DataHarmonizer TSV generator
#[derive(Debug, Clone, Default)]
pub struct DataHarmonizerGenerator {
    config: TemplateConfig,
}

impl DataHarmonizerGenerator {
    /// Create a generator with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with the given configuration
    #[must_use]
    pub fn with_config(config: TemplateConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &TemplateConfig {
        &self.config
    }

    /// Serialize an assembled template
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid output delimiter or a CSV write failure.
    pub fn render(&self, template: &Template) -> GeneratorResult<String> {
        let delimiter = self
            .config
            .output
            .delimiter_byte()
            .map_err(|e| GeneratorError::Configuration(e.to_string()))?;

        let mut wtr = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .flexible(false)
            .from_writer(vec![]);

        if self.config.output.include_header {
            wtr.write_record(template.headers())?;
        }
        for row in template.rows() {
            wtr.write_record(row.cells())?;
        }

        let data = wtr
            .into_inner()
            .map_err(|e| GeneratorError::Generation(format!("Failed to finish writing: {e}")))?;
        String::from_utf8(data)
            .map_err(|e| GeneratorError::Generation(format!("Invalid UTF-8: {e}")))
    }

    /// Generate a class template and write it to `path`
    ///
    /// The template is fully built and serialized before the file is touched.
    /// The content goes to a temporary file in the destination directory that
    /// is then renamed over `path`, so a failure never leaves partial output.
    ///
    /// # Errors
    ///
    /// Returns any projection error, or an I/O error if the file cannot be
    /// written.
    pub fn write_file(&self, view: &SchemaView, class_name: &str, path: &Path) -> GeneratorResult<Template> {
        let template = build_template(view, class_name, &self.config)?;
        let content = self.render(&template)?;
        write_atomic(path, content.as_bytes())?;
        info!(rows = template.len(), "wrote template to {}", path.display());
        Ok(template)
    }
}

fn write_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let existing = std::fs::metadata(path).ok().map(|meta| meta.permissions());

    // New files get 0o666 less the umask, like `File::create`; replaced
    // files keep their current mode.
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut file = builder.tempfile_in(parent)?;
    if let Some(permissions) = existing {
        file.as_file().set_permissions(permissions)?;
    }
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

impl Generator for DataHarmonizerGenerator {
    fn generate(&self, view: &SchemaView, class_name: &str) -> GeneratorResult<String> {
        let template = build_template(view, class_name, &self.config)?;
        self.render(&template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{Parser, SchemaFormat};
    use pretty_assertions::assert_eq;

    const SCHEMA: &str = r#"
id: https://example.org/soil
name: soil
classes:
  Sample:
    slots: [site]
slots:
  site:
    title: collection site
    description: "Where the sample was taken, e.g. \"north field\""
    comments:
      - first
      - second
"#;

    fn view() -> anyhow::Result<SchemaView> {
        Ok(SchemaView::new(Parser::new().parse_str(SCHEMA, SchemaFormat::Yaml)?))
    }

    #[test]
    fn test_tsv_output() -> anyhow::Result<()> {
        let output = DataHarmonizerGenerator::new().generate(&view()?, "Sample")?;
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines[0],
            "Ontology ID\tparent class\tlabel\tdatatype\tsource\tdata status\trequirement\tmin value\tmax value\tcapitalize\tpattern\tdescription\tguidance\texamples"
        );
        assert_eq!(lines[1], "\t\tdefault\t\t\t\t\t\t\t\t\t\t\t");
        assert!(lines[2].starts_with("\tdefault\tcollection site\txs:token\t"));
        assert!(lines[2].ends_with("\tfirst|second\t"));
        assert_eq!(lines.len(), 3);
        Ok(())
    }

    #[test]
    fn test_without_header() -> anyhow::Result<()> {
        let mut config = TemplateConfig::default();
        config.output.include_header = false;
        let output = DataHarmonizerGenerator::with_config(config).generate(&view()?, "Sample")?;
        assert!(output.starts_with("\t\tdefault"));
        Ok(())
    }

    #[test]
    fn test_write_file_replaces_destination() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("template.tsv");
        std::fs::write(&path, "stale")?;

        let template = DataHarmonizerGenerator::new().write_file(&view()?, "Sample", &path)?;
        let written = std::fs::read_to_string(&path)?;
        assert_eq!(written.lines().count(), template.len() + 1);
        assert_eq!(std::fs::read_dir(dir.path())?.count(), 1);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_rewrite_keeps_destination_mode() -> anyhow::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir()?;
        let path = dir.path().join("template.tsv");
        std::fs::write(&path, "old")?;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644))?;

        DataHarmonizerGenerator::new().write_file(&view()?, "Sample", &path)?;
        let mode = std::fs::metadata(&path)?.permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_mode_follows_umask() -> anyhow::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir()?;
        let reference = dir.path().join("reference.tsv");
        std::fs::write(&reference, "")?;
        let path = dir.path().join("template.tsv");

        DataHarmonizerGenerator::new().write_file(&view()?, "Sample", &path)?;
        let expected = std::fs::metadata(&reference)?.permissions().mode() & 0o777;
        let mode = std::fs::metadata(&path)?.permissions().mode() & 0o777;
        assert_eq!(mode, expected);
        Ok(())
    }

    #[test]
    fn test_unknown_class_writes_nothing() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("template.tsv");

        let result = DataHarmonizerGenerator::new().write_file(&view()?, "Core", &path);
        assert!(matches!(
            result,
            Err(GeneratorError::LinkML(linkml_core::LinkMLError::UnknownClass { .. }))
        ));
        assert!(!path.exists());
        Ok(())
    }
}
