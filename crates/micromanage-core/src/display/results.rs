//! Display implementations for command results.
//!
//! Each result opens with its message, lists what changed, and closes with a
//! warning when the change could not be persisted.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    GroupNoteUpdated, PersistenceStatus, PlanCreated, ProgressReport, UnitUpdated, UpdateOutcome,
};

fn fmt_persistence(status: PersistenceStatus, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if status == PersistenceStatus::MemoryOnly {
        writeln!(f)?;
        writeln!(
            f,
            "> Warning: changes are kept in memory only; the snapshot could not be saved."
        )?;
    }
    Ok(())
}

impl fmt::Display for PlanCreated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message)?;
        writeln!(f)?;
        writeln!(f, "- Groups: {}", self.group_count)?;
        writeln!(f, "- Units: {}", self.unit_count)?;
        writeln!(f, "- Updated: {}", LocalDateTime::new(&self.last_updated))?;
        fmt_persistence(self.persistence_status, f)
    }
}

impl fmt::Display for UnitUpdated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message)?;
        writeln!(f)?;
        writeln!(f, "- Unit status: {}", self.status.with_icon())?;
        writeln!(f, "- Group status: {}", self.group_status.with_icon())?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        fmt_persistence(self.persistence_status, f)
    }
}

impl fmt::Display for GroupNoteUpdated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message)?;
        writeln!(f)?;
        writeln!(f, "{}", self.developer_note)?;
        fmt_persistence(self.persistence_status, f)
    }
}

impl fmt::Display for UpdateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateOutcome::Unit(result) => write!(f, "{result}"),
            UpdateOutcome::GroupNote(result) => write!(f, "{result}"),
        }
    }
}

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = &self.progress;
        writeln!(f, "# {}", self.goal)?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Groups**: {}/{} completed ({}%)",
            progress.groups.completed, progress.groups.total, progress.groups.percent_complete
        )?;
        writeln!(
            f,
            "- **Units**: {}/{} completed ({}%)",
            progress.units.completed, progress.units.total, progress.units.percent_complete
        )?;
        if self.needs_more_thoughts == Some(true) {
            writeln!(f, "- **Needs more thoughts**: yes")?;
        }

        for (summary, detail) in self.groups.iter().zip(&self.details) {
            writeln!(f)?;
            writeln!(
                f,
                "## {}. {} ({}) {}/{}",
                summary.group_index,
                summary.goal,
                summary.status.with_icon(),
                summary.units.completed,
                summary.units.total
            )?;
            if let Some(note) = &summary.developer_note {
                writeln!(f)?;
                writeln!(f, "{note}")?;
            }
            writeln!(f)?;
            for unit in &detail.units {
                write!(
                    f,
                    "- {}. {} ({})",
                    unit.unit_index,
                    unit.goal,
                    unit.status.with_icon()
                )?;
                match &unit.developer_note {
                    Some(note) => writeln!(f, " - {note}")?,
                    None => writeln!(f)?,
                }
            }
        }

        let persistence = &self.persistence;
        writeln!(f)?;
        writeln!(
            f,
            "Data file: `{}`{}",
            persistence.data_file_path.display(),
            if persistence.file_exists { "" } else { " (not written yet)" }
        )?;
        writeln!(
            f,
            "Last updated: {}",
            LocalDateTime::new(&persistence.last_updated)
        )
    }
}
