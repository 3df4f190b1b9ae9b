//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{Result, VercheckError};

use super::{OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// Prefix of environment variables that answer prompts.
pub const PROMPT_ENV_PREFIX: &str = "VERCHECK_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Spinners become plain lines. Prompts are answered from
/// `VERCHECK_PROMPT_<KEY>` environment variables, then from the prompt's
/// default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key) {
            return Ok(PromptResult::from_answer(&prompt.prompt_type, value));
        }

        if let Some(default) = &prompt.default {
            return Ok(PromptResult::from_answer(&prompt.prompt_type, default));
        }

        match prompt.prompt_type {
            PromptType::Input => Ok(PromptResult::String(String::new())),
            PromptType::Confirm => Err(VercheckError::ConfigValidationError {
                message: format!(
                    "Cannot prompt for '{}' in non-interactive mode (no default value)",
                    prompt.key
                ),
            }),
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(LineSpinner { mode: self.mode })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            println!("  {}", hint);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that prints its final line without animating.
struct LineSpinner {
    mode: OutputMode,
}

impl SpinnerHandle for LineSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn finish_warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("⚠ {}", msg);
        }
    }

    fn finish_error(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✗ {}", msg);
        }
    }

    fn finish_and_clear(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_prompt(key: &str, default: Option<&str>) -> Prompt {
        Prompt {
            key: key.to_string(),
            question: "Installed version".to_string(),
            prompt_type: PromptType::Input,
            default: default.map(String::from),
        }
    }

    #[test]
    fn env_override_answers_prompt() {
        let mut overrides = HashMap::new();
        overrides.insert(
            "VERCHECK_PROMPT_VERSION_PC_MANAGER".to_string(),
            "17.0.1.25".to_string(),
        );
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);

        let result = ui
            .prompt(&input_prompt("version_pc_manager", Some("1.0")))
            .unwrap();
        assert_eq!(result, PromptResult::String("17.0.1.25".to_string()));
    }

    #[test]
    fn default_answers_prompt() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let result = ui.prompt(&input_prompt("version_app", Some("2.0"))).unwrap();
        assert_eq!(result.as_string(), "2.0");
    }

    #[test]
    fn input_without_default_is_blank() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let result = ui.prompt(&input_prompt("version_app", None)).unwrap();
        assert_eq!(result.as_string(), "");
    }

    #[test]
    fn confirm_without_default_is_error() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt {
            key: "overwrite".to_string(),
            question: "Overwrite?".to_string(),
            prompt_type: PromptType::Confirm,
            default: None,
        };
        assert!(ui.prompt(&prompt).is_err());
    }

    #[test]
    fn never_interactive() {
        let ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        assert!(!ui.is_interactive());
    }
}
