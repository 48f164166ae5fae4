//! Table rendering for CLI output

use super::{ColorTheme, StatusIcon};
use crate::domain::config::{EnvironmentConfig, EnvironmentName};
use crate::infrastructure::manifest::{FileAction, MaterializeReport};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};

/// Table renderer for formatted output
pub struct TableRenderer {
    theme: ColorTheme,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    /// Create a new table renderer with default theme
    pub fn new() -> Self {
        Self {
            theme: ColorTheme::default(),
        }
    }

    /// Render the outcome of a manifest run
    pub fn render_materialize_report(&self, report: &MaterializeReport) -> String {
        if report.outcomes.is_empty() {
            return "No manifests generated".to_string();
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("FILE").set_alignment(CellAlignment::Left),
                Cell::new("ACTION").set_alignment(CellAlignment::Center),
                Cell::new("PATH").set_alignment(CellAlignment::Left),
            ]);

        for outcome in &report.outcomes {
            table.add_row(vec![
                Cell::new(outcome.file_name),
                Cell::new(format!(
                    "{} {}",
                    StatusIcon::get_action_icon(outcome.action),
                    outcome.action.as_str()
                ))
                .fg(self.theme.get_action_color(outcome.action)),
                Cell::new(&outcome.location),
            ]);
        }

        let title = match report.environment {
            Some(environment) => format!("Manifests for {}", environment),
            None => "Manifest templates".to_string(),
        };

        let mut output = String::new();
        output.push_str(&format!(
            "╭─ {} {} ─╮\n",
            title,
            format!(
                "[{} written, {} deleted]",
                report.count(FileAction::Written),
                report.count(FileAction::Deleted)
            )
            .bright_black()
        ));
        output.push_str(&table.to_string());
        output.push('\n');
        output.push_str(&format!(
            "Legend: {} Written  {} Deleted  {} Not managed\n",
            StatusIcon::WRITTEN.green(),
            StatusIcon::DELETED.yellow(),
            StatusIcon::SKIPPED.bright_black()
        ));

        output
    }

    /// Render the compiled-in environment table, marking `current`
    pub fn render_environments(
        &self,
        environments: &[EnvironmentConfig],
        current: EnvironmentName,
    ) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new(""),
                Cell::new("ENVIRONMENT").set_alignment(CellAlignment::Left),
                Cell::new("HOSTNAME").set_alignment(CellAlignment::Left),
                Cell::new("PUBLIC URL").set_alignment(CellAlignment::Left),
                Cell::new("TLS").set_alignment(CellAlignment::Center),
                Cell::new("POSTGRES MANAGED").set_alignment(CellAlignment::Center),
                Cell::new("SECRET MANAGED").set_alignment(CellAlignment::Center),
            ]);

        for environment in environments {
            let marker = if environment.name == current {
                StatusIcon::CURRENT
            } else {
                ""
            };

            table.add_row(vec![
                Cell::new(marker).fg(self.theme.info),
                Cell::new(environment.name.as_str()),
                Cell::new(environment.hostname),
                Cell::new(environment.public_url()),
                self.flag_cell(environment.tls_enabled),
                self.flag_cell(environment.postgres_managed),
                self.flag_cell(environment.secret_managed),
            ]);
        }

        table.to_string()
    }

    fn flag_cell(&self, enabled: bool) -> Cell {
        Cell::new(StatusIcon::get_flag_text(enabled))
            .fg(self.theme.get_flag_color(enabled))
            .set_alignment(CellAlignment::Center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::manifest::FileOutcome;

    #[test]
    fn test_render_empty_report() {
        let renderer = TableRenderer::new();
        let output = renderer.render_materialize_report(&MaterializeReport::default());
        assert!(output.contains("No manifests generated"));
    }

    #[test]
    fn test_render_report() {
        let renderer = TableRenderer::new();
        let report = MaterializeReport {
            environment: Some(EnvironmentName::Production),
            outcomes: vec![
                FileOutcome {
                    file_name: "deployment.json",
                    location: "./deployment.json".to_string(),
                    action: FileAction::Written,
                },
                FileOutcome {
                    file_name: "secret.json",
                    location: "./secret.json".to_string(),
                    action: FileAction::Deleted,
                },
            ],
        };

        let output = renderer.render_materialize_report(&report);
        assert!(output.contains("Manifests for production"));
        assert!(output.contains("deployment.json"));
        assert!(output.contains("written"));
        assert!(output.contains("deleted"));
    }

    #[test]
    fn test_render_environments() {
        let renderer = TableRenderer::new();
        let environments: Vec<_> = EnvironmentName::all()
            .iter()
            .map(|name| name.config())
            .collect();

        let output = renderer.render_environments(&environments, EnvironmentName::Dev);
        assert!(output.contains("http://rallly.localhost"));
        assert!(output.contains("https://rallly.con2.fi"));
        assert!(output.contains("HOSTNAME"));
        assert_eq!(output.matches("rallly.localhost").count(), 2);
        assert!(output.contains(StatusIcon::CURRENT));
    }
}
