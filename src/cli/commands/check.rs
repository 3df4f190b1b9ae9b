//! Check command implementation.
//!
//! The `vercheck check` command compares installed versions with the
//! published ones. It is also what runs when no subcommand is given.

use serde::Serialize;

use crate::check::{spawn_check, CheckEvent, CheckResult, CheckSummary, Overrides};
use crate::cli::args::CheckArgs;
use crate::config::{ApplicationDescriptor, Settings};
use crate::error::{Result, VercheckError};
use crate::sources::resolve_local;
use crate::ui::{format_progress, Prompt, PromptType, SpinnerHandle, UserInterface};
use crate::version::Verdict;

use super::dispatcher::{Command, CommandContext, CommandResult};
use super::display::{finish_spinner, show_result, summary_line, summary_table, to_json};

/// Machine-readable output of `check --json`.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub results: Vec<CheckResult>,
    pub summary: CheckSummary,
}

/// The check command implementation.
pub struct CheckCommand {
    context: CommandContext,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(context: CommandContext, args: CheckArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// Configured settings with command-line overrides applied.
    fn effective_settings(&self, settings: &Settings) -> Settings {
        let mut settings = settings.clone();
        if let Some(timeout) = self.args.timeout {
            settings.timeout_secs = timeout;
        }
        if let Some(delay) = self.args.delay_ms {
            settings.delay_ms = delay;
        }
        settings
    }

    /// Ask for each application's installed version.
    ///
    /// The prompt is pre-filled with the detected version. A blank answer,
    /// or the detected version itself, keeps local detection.
    fn prompt_versions(
        &self,
        ui: &mut dyn UserInterface,
        applications: &[ApplicationDescriptor],
        overrides: &mut Overrides,
    ) -> Result<()> {
        for app in applications {
            if overrides.get(&app.key).is_some() {
                continue;
            }

            let detected = resolve_local(&app.local);
            let prompt = Prompt {
                key: format!("version_{}", app.key),
                question: format!("{} installed version", app.display_name),
                prompt_type: PromptType::Input,
                default: detected.version().map(String::from),
            };

            let answer = ui.prompt(&prompt)?.as_string();
            let answer = answer.trim();
            if !answer.is_empty() && Some(answer) != detected.version() {
                overrides.set(app.key.clone(), answer);
            }
        }
        Ok(())
    }

    /// Show events as they arrive: one spinner per application, replaced
    /// by the result line.
    fn render_events(
        &self,
        ui: &mut dyn UserInterface,
        events: impl Iterator<Item = CheckEvent>,
    ) -> (Vec<CheckResult>, Option<CheckSummary>) {
        let mut results = Vec::new();
        let mut summary = None;
        let mut spinner: Option<Box<dyn SpinnerHandle>> = None;

        for event in events {
            match event {
                CheckEvent::Progress(progress) if progress.percent < 100 => {
                    if let Some(mut previous) = spinner.take() {
                        previous.finish_and_clear();
                    }
                    spinner = Some(ui.start_spinner(&format_progress(
                        progress.percent,
                        &progress.message,
                    )));
                }
                CheckEvent::Progress(_) => {}
                CheckEvent::Result(result) => {
                    match spinner.take() {
                        Some(mut s) => finish_spinner(s.as_mut(), &result),
                        None => show_result(ui, &result),
                    }
                    if ui.output_mode().shows_details() {
                        ui.show_hint(&format!("{} · {}", result.key, result.reference_url));
                    }
                    results.push(result);
                }
                CheckEvent::Complete(done) => summary = Some(done),
            }
        }

        if let Some(mut s) = spinner.take() {
            s.finish_and_clear();
        }
        (results, summary)
    }

    fn show_summary(
        &self,
        ui: &mut dyn UserInterface,
        results: &[CheckResult],
        summary: &CheckSummary,
    ) {
        if results.is_empty() {
            ui.message("No applications to check.");
            return;
        }

        ui.message("");
        ui.message(&summary_table(results).render());
        ui.message("");

        let line = summary_line(summary);
        if summary.all_current() {
            ui.success(&line);
        } else {
            ui.warning(&line);
        }

        for result in results
            .iter()
            .filter(|r| r.verdict == Verdict::UpdateAvailable)
        {
            ui.show_hint(&format!(
                "Get {} from {}",
                result.display_name, result.reference_url
            ));
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let loaded = match self.context.load_config() {
            Ok(loaded) => loaded,
            Err(e @ VercheckError::ConfigNotFound { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let applications = loaded.config.select(&self.args.only)?;
        let settings = self.effective_settings(&loaded.config.settings);
        let mut overrides = Overrides::parse_assignments(&self.args.overrides)?;

        for key in overrides.keys() {
            if loaded.config.application(key).is_none() {
                return Err(VercheckError::UnknownApplication {
                    key: key.to_string(),
                });
            }
        }

        if self.args.manual {
            self.prompt_versions(ui, &applications, &mut overrides)?;
        }

        tracing::debug!(
            source = %loaded.source,
            applications = applications.len(),
            "Starting check"
        );

        let total = applications.len();
        let handle = spawn_check(applications, &settings, overrides)?;

        let (results, summary) = if self.args.json {
            let mut results = Vec::new();
            let mut summary = None;
            for event in handle.events().iter() {
                match event {
                    CheckEvent::Result(result) => results.push(result),
                    CheckEvent::Complete(done) => summary = Some(done),
                    CheckEvent::Progress(_) => {}
                }
            }
            (results, summary)
        } else {
            ui.show_header(&format!(
                "Checking {} application{}",
                total,
                if total == 1 { "" } else { "s" }
            ));
            self.render_events(ui, handle.events().iter())
        };

        let joined = handle.join()?;
        let summary = summary.unwrap_or(joined);

        if self.args.json {
            let report = CheckReport { results, summary };
            ui.message(&to_json(&report)?);
            return Ok(self.exit_status(&report.summary));
        }

        self.show_summary(ui, &results, &summary);
        Ok(self.exit_status(&summary))
    }
}

impl CheckCommand {
    fn exit_status(&self, summary: &CheckSummary) -> CommandResult {
        if self.args.strict && !summary.all_current() {
            CommandResult::failure(1)
        } else {
            CommandResult::success()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Progress;
    use crate::sources::LocalVersion;
    use crate::ui::{MockUI, OutputMode, SpinnerStatus};
    use chrono::Utc;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn command(dir: &TempDir, args: CheckArgs) -> CheckCommand {
        CheckCommand::new(
            CommandContext::new(dir.path().to_path_buf(), None),
            args,
        )
    }

    fn write_config(dir: &TempDir, content: &str) {
        fs::write(dir.path().join("vercheck.yml"), content).unwrap();
    }

    fn result(key: &str, verdict: Verdict) -> CheckResult {
        CheckResult {
            key: key.to_string(),
            display_name: key.to_uppercase(),
            local_version: LocalVersion::Found("1.0".to_string()),
            local_display: "1.0".to_string(),
            remote_display: "1.0".to_string(),
            verdict,
            status_text: verdict.status_text().to_string(),
            issue: None,
            reference_url: "https://example.com".to_string(),
            overridden: false,
            checked_at: Utc::now(),
        }
    }

    #[test]
    fn effective_settings_apply_flags() {
        let temp = TempDir::new().unwrap();
        let cmd = command(
            &temp,
            CheckArgs {
                timeout: Some(3),
                delay_ms: Some(0),
                ..Default::default()
            },
        );
        let settings = cmd.effective_settings(&Settings::default());
        assert_eq!(settings.timeout_secs, 3);
        assert_eq!(settings.delay_ms, 0);
    }

    #[test]
    fn events_render_as_spinners() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp, CheckArgs::default());
        let mut ui = MockUI::new();

        let events = vec![
            CheckEvent::Progress(Progress {
                percent: 0,
                message: "Checking A...".to_string(),
            }),
            CheckEvent::Result(result("a", Verdict::UpToDate)),
            CheckEvent::Progress(Progress {
                percent: 35,
                message: "Checking B...".to_string(),
            }),
            CheckEvent::Result(result("b", Verdict::UpdateAvailable)),
            CheckEvent::progress(100, "Check complete"),
            CheckEvent::Complete(CheckSummary::default()),
        ];

        let (results, summary) = cmd.render_events(&mut ui, events.into_iter());
        assert_eq!(results.len(), 2);
        assert!(summary.is_some());
        assert_eq!(ui.spinners(), ["[  0%] Checking A...", "[ 35%] Checking B..."]);

        let finishes = ui.spinner_finishes();
        assert_eq!(finishes[0].0, SpinnerStatus::Success);
        assert_eq!(finishes[1].0, SpinnerStatus::Warning);
    }

    #[test]
    fn verbose_adds_one_reference_hint_per_result() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp, CheckArgs::default());
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        let events = vec![
            CheckEvent::Result(result("a", Verdict::UpToDate)),
            CheckEvent::Result(result("b", Verdict::LocalNewer)),
            CheckEvent::Complete(CheckSummary::default()),
        ];
        cmd.render_events(&mut ui, events.into_iter());

        assert_eq!(ui.hints(), ["a · https://example.com", "b · https://example.com"]);
        assert_eq!(ui.successes().len(), 2);
    }

    #[test]
    fn summary_hints_update_links() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp, CheckArgs::default());
        let mut ui = MockUI::new();
        let results = vec![result("a", Verdict::UpdateAvailable)];
        let mut summary = CheckSummary::default();
        summary.record(&results[0]);

        cmd.show_summary(&mut ui, &results, &summary);
        assert!(ui.has_warning("1 update available"));
        assert!(ui.has_hint("https://example.com"));
    }

    #[test]
    fn empty_selection_reports_nothing_to_check() {
        let temp = TempDir::new().unwrap();
        write_config(&temp, "settings:\n  delay_ms: 0\napplications: []\n");
        let mut ui = MockUI::with_mode(OutputMode::Normal);

        let result = command(&temp, CheckArgs::default()).execute(&mut ui).unwrap();
        assert!(result.success);
        assert!(ui.has_message("No applications to check."));
    }

    #[test]
    fn unknown_only_key_is_error() {
        let temp = TempDir::new().unwrap();
        let args = CheckArgs {
            only: vec!["nope".to_string()],
            ..Default::default()
        };
        let mut ui = MockUI::new();
        let err = command(&temp, args).execute(&mut ui).unwrap_err();
        assert!(matches!(err, VercheckError::UnknownApplication { .. }));
    }

    #[test]
    fn override_for_unknown_key_is_error() {
        let temp = TempDir::new().unwrap();
        let args = CheckArgs {
            overrides: vec!["nope=1.0".to_string()],
            ..Default::default()
        };
        let mut ui = MockUI::new();
        assert!(command(&temp, args).execute(&mut ui).is_err());
    }

    #[test]
    fn missing_explicit_config_fails_with_code_2() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(
            CommandContext::new(
                temp.path().to_path_buf(),
                Some(PathBuf::from("/nonexistent/vercheck.yml")),
            ),
            CheckArgs::default(),
        );
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("Configuration not found"));
    }

    #[test]
    fn manual_prompt_overrides_detected_version() {
        let temp = TempDir::new().unwrap();
        let xml = temp.path().join("version.xml");
        fs::write(&xml, "<root><version>1.0</version></root>").unwrap();

        let apps = vec![ApplicationDescriptor {
            key: "app".to_string(),
            display_name: "App".to_string(),
            local: crate::config::LocalSourceSpec::XmlFile { path: xml },
            remote: crate::config::RemoteSourceSpec {
                url: "https://example.com".to_string(),
                tag: "p".to_string(),
                class: "path".to_string(),
            },
        }];

        let cmd = command(&temp, CheckArgs::default());
        let mut ui = MockUI::new();
        ui.set_prompt_response("version_app", "2.0");
        let mut overrides = Overrides::new();
        cmd.prompt_versions(&mut ui, &apps, &mut overrides).unwrap();
        assert_eq!(overrides.get("app"), Some("2.0"));

        let mut ui = MockUI::new();
        let mut overrides = Overrides::new();
        cmd.prompt_versions(&mut ui, &apps, &mut overrides).unwrap();
        assert!(overrides.is_empty(), "detected default keeps local detection");
    }

    #[test]
    fn strict_fails_unless_all_current() {
        let temp = TempDir::new().unwrap();
        let cmd = command(
            &temp,
            CheckArgs {
                strict: true,
                ..Default::default()
            },
        );
        let mut summary = CheckSummary::default();
        summary.record(&result("a", Verdict::UpToDate));
        assert!(cmd.exit_status(&summary).success);

        summary.record(&result("b", Verdict::UpdateAvailable));
        assert_eq!(cmd.exit_status(&summary).exit_code, 1);
    }
}
