use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde_json::json;
use watch_etl_core::{PipelineReport, WriteOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                println!("{} {}", "✓".green(), msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                let json = json!({
                    "type": "success",
                    "message": msg.as_ref()
                });
                self.print_json(&json);
            }
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                println!("{}", msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                let json = json!({
                    "type": "info",
                    "message": msg.as_ref()
                });
                self.print_json(&json);
            }
        }
    }

    /// Render the run summary. Human mode prints the counts; JSON modes emit
    /// one structured object so scripts can read the outcome. Quiet mode
    /// suppresses the summary in every format.
    pub fn report(&self, report: &PipelineReport) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                self.info(format!("  content records:  {}", report.content_records));
                self.info(format!("  history records:  {}", report.history_records));
                self.info(format!("  merged records:   {}", report.merged_records));
                match report.outcome {
                    WriteOutcome::Written { rows } => self.success(format!(
                        "wrote {} rows to {}",
                        rows,
                        report.output_path.display()
                    )),
                    WriteOutcome::EmptyInput => {
                        self.info("no merged records; output file not written")
                    }
                }
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&report_json(report));
            }
        }
    }

    fn print_json(&self, data: &serde_json::Value) {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(data).unwrap_or_default());
            }
            OutputFormat::JsonPretty => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
            OutputFormat::Human => {
                println!("{}", data);
            }
        }
    }
}

fn report_json(report: &PipelineReport) -> serde_json::Value {
    let rows_written = match report.outcome {
        WriteOutcome::Written { rows } => rows,
        WriteOutcome::EmptyInput => 0,
    };
    json!({
        "type": "report",
        "content_records": report.content_records,
        "history_records": report.history_records,
        "merged_records": report.merged_records,
        "rows_written": rows_written,
        "output_path": report.output_path.display().to_string(),
        "output_written": matches!(report.outcome, WriteOutcome::Written { .. }),
    })
}
