//! Questions a front end asks the user before creating or renaming an
//! event. A dialog only describes the question; answering it is up to the
//! caller (a terminal prompt, a web modal, a test).

use chrono::NaiveDateTime;

use crate::schedule::clock::format_clock;
use crate::schedule::{Schedule, ScheduleError, ScheduleEvent};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dialog {
    CreateEvent {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    RenameEvent {
        id: String,
        current: String,
    },
}

impl Dialog {
    /// Ask for the new name of an existing event, pre-filled with its
    /// current name.
    pub fn rename(schedule: &Schedule, id: &str) -> Result<Self, ScheduleError> {
        let event = schedule
            .get(id)
            .ok_or_else(|| ScheduleError::NotFound(id.to_string()))?;
        Ok(Self::RenameEvent {
            id: event.id.clone(),
            current: event.name.clone(),
        })
    }

    pub fn heading(&self) -> String {
        match self {
            Self::CreateEvent { start, end } => format!(
                "New event {} - {}",
                format_clock(start.time()),
                format_clock(end.time())
            ),
            Self::RenameEvent { current, .. } => format!("Rename \"{}\"", current),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CreateEvent { .. } => "Event name: ",
            Self::RenameEvent { .. } => "Edit event name: ",
        }
    }

    pub fn default_value(&self) -> &str {
        match self {
            Self::CreateEvent { .. } => "",
            Self::RenameEvent { current, .. } => current,
        }
    }

    /// Apply the user's answer. A blank answer cancels the dialog.
    pub fn apply(
        &self,
        answer: &str,
        schedule: &mut Schedule,
    ) -> Result<Option<ScheduleEvent>, ScheduleError> {
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        let event = match self {
            Self::CreateEvent { start, end } => schedule.create(answer, *start, *end)?,
            Self::RenameEvent { id, .. } => schedule.rename(id, answer)?,
        };
        Ok(Some(event.clone()))
    }
}
