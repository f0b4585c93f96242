//! Shared task-field validation for create and update inputs.

use crate::application::config::TodosConfig;
use crate::domain::entity::TaskFields;
use crate::domain::value_objects::{TodoNotes, TodoTitle};
use crate::error::{FieldViolation, TodoError, TodoResult};

/// Validate raw task fields, collecting every violation before failing.
pub fn validate_task_fields(
    config: &TodosConfig,
    title: &str,
    notes: Option<&str>,
    done: bool,
) -> TodoResult<TaskFields> {
    let mut violations: Vec<FieldViolation> = Vec::new();

    let title = match TodoTitle::parse(title, config.title_max_chars) {
        Ok(t) => Some(t),
        Err(v) => {
            violations.push(v);
            None
        }
    };

    let notes = match notes {
        Some(raw) => match TodoNotes::parse(raw, config.notes_max_chars) {
            Ok(n) => Some(n),
            Err(v) => {
                violations.push(v);
                None
            }
        },
        None => None,
    };

    if !violations.is_empty() {
        return Err(TodoError::validation(violations));
    }

    // title is always Some here; a missing one pushed a violation above
    let title = title.ok_or_else(|| TodoError::Internal("validated title missing".to_string()))?;

    Ok(TaskFields { title, notes, done })
}
