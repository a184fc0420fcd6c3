use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use schemacraft_config::ExportFormat;
use schemacraft_core::Schema;
use schemacraft_exporter::{ExportOutput, Exporter};
use tracing::info;

use crate::utils::{load_config, load_schema};

#[derive(Debug)]
pub struct ExportArgs {
    pub schema: PathBuf,
    pub format: Option<ExportFormat>,
    pub out: Option<PathBuf>,
    pub all: bool,
    pub out_dir: Option<PathBuf>,
}

pub fn cmd_export(config_path: &Path, args: ExportArgs) -> Result<()> {
    let config = load_config(config_path)?;
    let schema = load_schema(&args.schema)?;
    let exporter = Exporter::new(config);

    if args.all {
        let out_dir = args.out_dir.context("--all requires --out-dir")?;
        return export_all(&exporter, &schema, &out_dir);
    }

    let format = args.format.unwrap_or(exporter.config().default_format);
    let output = exporter
        .export(&schema, format)
        .with_context(|| format!("export {} as {}", args.schema.display(), format))?;

    match args.out {
        Some(path) => write_output(&path, &output),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.text.as_bytes())?;
            if !output.text.ends_with('\n') {
                writeln!(stdout)?;
            }
            Ok(())
        }
    }
}

fn export_all(exporter: &Exporter, schema: &Schema, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir {}", out_dir.display()))?;

    for format in ExportFormat::ALL {
        let output = exporter
            .export(schema, format)
            .with_context(|| format!("export as {}", format))?;
        write_output(&out_dir.join(output_file_name(format)), &output)?;
    }
    Ok(())
}

/// File name used for `--all`. Both SQL dialects share an extension, so
/// MySQL gets its own infix.
pub fn output_file_name(format: ExportFormat) -> String {
    match format {
        ExportFormat::Mysql => format!("schema.mysql.{}", format.file_extension()),
        _ => format!("schema.{}", format.file_extension()),
    }
}

fn write_output(path: &Path, output: &ExportOutput) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create parent dir {}", parent.display()))?;
    }
    fs::write(path, &output.text).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), format = %output.format, "wrote export");
    eprintln!(
        "{} {} {}",
        "Exported:".bright_green().bold(),
        format!("{}", path.display()).bright_white(),
        format!("({}, {} lines)", output.target_label, output.line_count).dimmed()
    );
    Ok(())
}
