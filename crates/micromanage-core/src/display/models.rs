//! Display implementations for domain models.
//!
//! Output is markdown so the CLI renderer can style it; the same text is
//! readable as plain output.

use std::fmt;

use crate::models::{Group, PersistenceStatus, Status, Unit, Workplan};

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PersistenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Workplan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.goal)?;
        writeln!(f)?;
        if self.needs_more_thoughts == Some(true) {
            writeln!(f, "> This plan may need further refinement.")?;
            writeln!(f)?;
        }

        for (index, group) in self.groups.iter().enumerate() {
            group.fmt_indexed(index, f)?;
        }
        Ok(())
    }
}

impl Group {
    fn fmt_indexed(&self, index: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {index}. {} ({})", self.goal, self.status.with_icon())?;
        writeln!(f)?;
        if let Some(note) = &self.developer_note {
            writeln!(f, "{note}")?;
            writeln!(f)?;
        }
        for (unit_index, unit) in self.units.iter().enumerate() {
            unit.fmt_indexed(unit_index, f)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({})", self.goal, self.status.with_icon())?;
        writeln!(f)?;
        if let Some(note) = &self.developer_note {
            writeln!(f, "{note}")?;
            writeln!(f)?;
        }
        for (index, unit) in self.units.iter().enumerate() {
            unit.fmt_indexed(index, f)?;
        }
        Ok(())
    }
}

impl Unit {
    fn fmt_indexed(&self, index: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {index}. {} ({})", self.goal, self.status.with_icon())?;
        match &self.developer_note {
            Some(note) => writeln!(f, " - {note}"),
            None => writeln!(f),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.goal, self.status.with_icon())?;
        if let Some(note) = &self.developer_note {
            write!(f, " - {note}")?;
        }
        Ok(())
    }
}
