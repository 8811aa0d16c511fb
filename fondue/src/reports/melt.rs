//! Melt command report data structures.

use fondue_merge::MeltReport;

use super::output::{Output, Report};

/// Result of a melt operation.
#[derive(Debug)]
pub enum MeltOutcome {
    /// The artifact was assembled and written.
    Written(MeltReport),
    /// Dry run: the artifact was assembled but not written.
    Preview { report: MeltReport, text: String },
}

impl Report for MeltOutcome {
    fn render(&self, out: &mut dyn Output) {
        match self {
            MeltOutcome::Written(report) => render_summary(report, out),
            MeltOutcome::Preview { report, text } => {
                out.divider(&report.output.display().to_string());
                out.preformatted(text);
            }
        }
    }
}

fn render_summary(report: &MeltReport, out: &mut dyn Output) {
    out.key_value("Library", &report.library);
    out.key_value("Guard", &report.guard);
    out.newline();

    out.section(&format!("Units ({})", report.units.len()));
    for (name, lines) in &report.units {
        out.list_item(&format!(
            "{}: {} declaration + {} implementation lines",
            name, lines.declarations, lines.implementations
        ));
    }
    out.newline();

    out.section("Includes");
    out.list_item(&format!(
        "declarations: {} unique of {} collected",
        report.declaration_includes.unique, report.declaration_includes.collected
    ));
    out.list_item(&format!(
        "implementations: {} unique of {} collected",
        report.implementation_includes.unique, report.implementation_includes.collected
    ));
    out.newline();

    out.key_value("Wrote", &report.output.display().to_string());
}
