use anyhow::Result;
use colored::Colorize;
use schemacraft_config::ExportFormat;

pub fn cmd_formats() -> Result<()> {
    println!("{}", "Export formats:".bright_cyan().bold());
    for format in ExportFormat::ALL {
        println!("  {}", format_line(format));
    }
    Ok(())
}

fn format_line(format: ExportFormat) -> String {
    let marker = if format == ExportFormat::default() {
        " (default)".dimmed().to_string()
    } else {
        String::new()
    };
    format!(
        "{} {} {}{}",
        format!("{:<10}", format.as_str()).bright_white().bold(),
        format!("{:<16}", format.target_label()).cyan(),
        format!(".{}", format.file_extension()).bright_yellow(),
        marker
    )
}
