//! Production logbook record keeping.
//!
//! Work performed on a product (sowing, spraying, harvesting, ...) is
//! captured as dated log entries. Entry creation on the screen goes through
//! a three-step modal; its state is modeled as one explicit enum so that
//! impossible combinations (a task picked with no group, a form open with
//! nothing selected) cannot be represented.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{
    catalog::ProductId,
    error::{PlatformError, Result},
};

/// Default page size for logbook listings.
const DEFAULT_PER_PAGE: u32 = 20;

/// One dated work record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Entry identifier.
    pub id: Uuid,
    /// Product the work was performed on.
    pub product_id: ProductId,
    /// Task group (e.g. "soil preparation", "harvest").
    pub task_group: String,
    /// Task performed within the group.
    pub task: String,
    /// Quantity handled, in the product's sale unit.
    pub quantity: u32,
    /// Day the work was performed.
    pub performed_on: NaiveDate,
    /// Free-form note.
    pub note: Option<String>,
}

/// Fields for recording a log entry.
#[derive(Debug, Clone, Deserialize)]
pub struct NewLogEntry {
    /// Product the work was performed on.
    pub product_id: ProductId,
    /// Task group.
    pub task_group: String,
    /// Task performed.
    pub task: String,
    /// Quantity handled.
    pub quantity: u32,
    /// Day the work was performed.
    pub performed_on: NaiveDate,
    /// Free-form note.
    pub note: Option<String>,
}

/// Listing filter over the logbook.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogFilter {
    /// Restrict to one product.
    pub product_id: Option<ProductId>,
    /// Earliest `performed_on` day, inclusive.
    pub from: Option<NaiveDate>,
    /// Latest `performed_on` day, inclusive.
    pub to: Option<NaiveDate>,
    /// Page number (default 1).
    pub page: Option<u32>,
    /// Items per page (default 20).
    pub per_page: Option<u32>,
}

/// One page of logbook results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogPage {
    /// Entries in the current page.
    pub entries: Vec<LogEntry>,
    /// Total count after filtering.
    pub total: u32,
    /// Current page number.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
}

/// In-memory logbook for one production entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Logbook {
    entries: Vec<LogEntry>,
}

impl Logbook {
    /// Creates an empty logbook.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries in the logbook.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the logbook holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records a new entry and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::LogbookError`] if the task name is empty.
    #[instrument(skip(self, new), fields(task = %new.task))]
    pub fn record(&mut self, new: NewLogEntry) -> Result<Uuid> {
        if new.task.trim().is_empty() {
            return Err(PlatformError::LogbookError("task cannot be empty".into()));
        }

        let id = Uuid::new_v4();
        self.entries.push(LogEntry {
            id,
            product_id: new.product_id,
            task_group: new.task_group,
            task: new.task,
            quantity: new.quantity,
            performed_on: new.performed_on,
            note: new.note,
        });
        debug!(total = self.entries.len(), "log entry recorded");
        Ok(id)
    }

    /// Lists entries with filtering and pagination.
    #[must_use]
    pub fn list(&self, filter: &LogFilter) -> LogPage {
        let filtered: Vec<&LogEntry> = self
            .entries
            .iter()
            .filter(|e| {
                filter.product_id.as_ref().is_none_or(|p| &e.product_id == p)
                    && filter.from.is_none_or(|from| e.performed_on >= from)
                    && filter.to.is_none_or(|to| e.performed_on <= to)
            })
            .collect();

        let page = filter.page.unwrap_or(1).max(1);
        let per_page = filter.per_page.unwrap_or(DEFAULT_PER_PAGE).max(1);
        let start = (page - 1) as usize * per_page as usize;

        let entries = filtered
            .iter()
            .skip(start)
            .take(per_page as usize)
            .map(|e| (*e).clone())
            .collect();

        LogPage {
            entries,
            total: u32::try_from(filtered.len()).unwrap_or(u32::MAX),
            page,
            per_page,
        }
    }

    /// Returns the entries recorded for one product, oldest first.
    #[must_use]
    pub fn entries_for_product(&self, product_id: &ProductId) -> Vec<&LogEntry> {
        self.entries.iter().filter(|e| &e.product_id == product_id).collect()
    }
}

/// State of the work-log entry modal.
///
/// The screen walks `Idle -> GroupSelect -> TaskSelect -> FormOpen`; `back`
/// steps one state towards group selection and `cancel` returns to idle
/// from anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum WorkLogWizard {
    /// Modal closed.
    Idle,
    /// Picking a task group.
    GroupSelect,
    /// Picking a task within the chosen group.
    TaskSelect {
        /// Chosen task group.
        group: String,
    },
    /// Entry form open for the chosen group and task.
    FormOpen {
        /// Chosen task group.
        group: String,
        /// Chosen task.
        task: String,
    },
}

impl WorkLogWizard {
    /// Opens the modal.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::WizardState`] unless the wizard is idle.
    pub fn open(self) -> Result<Self> {
        match self {
            Self::Idle => Ok(Self::GroupSelect),
            _ => Err(PlatformError::WizardState("modal is already open".into())),
        }
    }

    /// Chooses a task group.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::WizardState`] unless a group is being picked.
    pub fn select_group<S: Into<String>>(self, group: S) -> Result<Self> {
        match self {
            Self::GroupSelect => Ok(Self::TaskSelect { group: group.into() }),
            _ => Err(PlatformError::WizardState("select a task group first".into())),
        }
    }

    /// Chooses a task within the current group.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::WizardState`] unless a task is being picked.
    pub fn select_task<S: Into<String>>(self, task: S) -> Result<Self> {
        match self {
            Self::TaskSelect { group } => Ok(Self::FormOpen { group, task: task.into() }),
            _ => Err(PlatformError::WizardState("select a task after its group".into())),
        }
    }

    /// Steps one screen back.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::WizardState`] from `Idle` or `GroupSelect`.
    pub fn back(self) -> Result<Self> {
        match self {
            Self::TaskSelect { .. } => Ok(Self::GroupSelect),
            Self::FormOpen { group, .. } => Ok(Self::TaskSelect { group }),
            _ => Err(PlatformError::WizardState("nothing to go back to".into())),
        }
    }

    /// Closes the modal, discarding any selection.
    #[must_use]
    pub fn cancel(self) -> Self {
        Self::Idle
    }

    /// Submits the entry form, producing the record to append.
    ///
    /// The wizard returns to idle; the caller passes the record on to
    /// [`Logbook::record`].
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::WizardState`] unless the form is open.
    pub fn submit(
        self,
        product_id: ProductId,
        quantity: u32,
        performed_on: NaiveDate,
        note: Option<String>,
    ) -> Result<(Self, NewLogEntry)> {
        match self {
            Self::FormOpen { group, task } => Ok((Self::Idle, NewLogEntry {
                product_id,
                task_group: group,
                task,
                quantity,
                performed_on,
                note,
            })),
            _ => Err(PlatformError::WizardState("complete the selection steps first".into())),
        }
    }
}
