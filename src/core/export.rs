use crate::core::session::{BillOfMaterials, MetricReading, SessionReport, Trend};
use crate::utils::error::{CustomizerError, Result};
use std::fmt::Write;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

pub fn render(report: &SessionReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => bom_to_csv(&report.bill_of_materials),
    }
}

/// One row per attached part, in attachment order.
pub fn bom_to_csv(bom: &BillOfMaterials) -> Result<String> {
    let bytes = write_bom_csv(bom, Vec::new())?;
    String::from_utf8(bytes).map_err(|e| CustomizerError::ConfigError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}

pub fn write_bom_csv<W: io::Write>(bom: &BillOfMaterials, sink: W) -> Result<W> {
    let mut writer = csv::Writer::from_writer(sink);
    for line in &bom.lines {
        writer.serialize(line)?;
    }
    writer
        .into_inner()
        .map_err(|e| CustomizerError::IoError(e.into_error()))
}

fn arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "▲",
        Trend::Down => "▼",
        Trend::Unchanged => " ",
    }
}

fn metric_line(out: &mut String, label: &str, unit: &str, reading: &MetricReading) {
    let _ = writeln!(
        out,
        "  {:<10} {:>10.1} {:<5} {} (base {:.1})",
        label,
        reading.value,
        unit,
        arrow(reading.trend),
        reading.base
    );
}

pub fn render_text(report: &SessionReport) -> String {
    let mut out = String::new();

    match &report.performance {
        Some(perf) => {
            let _ = writeln!(
                out,
                "📋 {} {} ({})",
                report.brand.as_deref().unwrap_or(""),
                perf.model,
                perf.engine.as_deref().unwrap_or("N/A")
            );
            metric_line(&mut out, "Weight", "kg", &perf.weight);
            metric_line(&mut out, "Power", "hp", &perf.power);
            metric_line(&mut out, "Torque", "Nm", &perf.torque);
            metric_line(&mut out, "Mileage", "km/l", &perf.mileage);
            metric_line(&mut out, "Top speed", "km/h", &perf.top_speed);
        }
        None => {
            let _ = writeln!(out, "Select a motorcycle model to view performance specs");
        }
    }

    let bom = &report.bill_of_materials;
    let _ = writeln!(out);
    let _ = writeln!(out, "🔧 Attached parts ({}):", bom.lines.len());
    for line in &bom.lines {
        let marker = if report.selected_part_id == Some(line.id) {
            "*"
        } else {
            " "
        };
        let _ = writeln!(
            out,
            " {}#{:<3} {:<32} {:<18} {:>10.0}  {:.1} kg",
            marker, line.id, line.name, line.category, line.price, line.weight
        );
    }
    let _ = writeln!(out, "💰 Total price: {:.0}", bom.total_price);

    out
}
