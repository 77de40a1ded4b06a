use crate::domain::model::ViewSkipRecord;
use crate::utils::error::{Result, SkipError, LOAD_FAILURE_MESSAGE};

/// State of the "choose a skip size" page.
///
/// Transitions: `Loading -> Ready`, `Loading -> Error`, and `Ready -> Ready`
/// through [`SkipPage::toggle`]. Nothing leaves `Error`; a reload builds a new page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Loading,
    Error(String),
    Ready {
        skips: Vec<ViewSkipRecord>,
        selected: Option<u64>,
    },
}

impl PageState {
    fn name(&self) -> &'static str {
        match self {
            PageState::Loading => "loading",
            PageState::Error(_) => "showing an error",
            PageState::Ready { .. } => "ready",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkipPage {
    state: PageState,
}

impl Default for SkipPage {
    fn default() -> Self {
        Self::new()
    }
}

impl SkipPage {
    pub fn new() -> Self {
        Self {
            state: PageState::Loading,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn is_error(&self) -> bool {
        matches!(self.state, PageState::Error(_))
    }

    /// Settles a loading page with the outcome of its single fetch.
    /// Any failure becomes the generic error view; there is no partial list.
    pub fn finish_loading(&mut self, outcome: Result<Vec<ViewSkipRecord>>) -> Result<()> {
        if !matches!(self.state, PageState::Loading) {
            return Err(SkipError::InvalidTransition {
                state: self.state.name(),
                event: "finish loading",
            });
        }

        self.state = match outcome {
            Ok(skips) => PageState::Ready {
                skips,
                selected: None,
            },
            Err(e) => {
                tracing::debug!("Page entering error state: {}", e);
                PageState::Error(LOAD_FAILURE_MESSAGE.to_string())
            }
        };
        Ok(())
    }

    /// Selects `id`, or clears the selection when `id` is already selected.
    /// Returns the newly selected skip, if any.
    pub fn toggle(&mut self, id: u64) -> Result<Option<&ViewSkipRecord>> {
        let state_name = self.state.name();
        let PageState::Ready { skips, selected } = &mut self.state else {
            return Err(SkipError::InvalidTransition {
                state: state_name,
                event: "select a skip",
            });
        };

        if !skips.iter().any(|s| s.id() == id) {
            return Err(SkipError::UnknownSkip { id });
        }

        *selected = if *selected == Some(id) { None } else { Some(id) };
        tracing::debug!("Selection is now {:?}", selected);

        Ok(selected.and_then(|current| skips.iter().find(|s| s.id() == current)))
    }

    pub fn skips(&self) -> &[ViewSkipRecord] {
        match &self.state {
            PageState::Ready { skips, .. } => skips,
            _ => &[],
        }
    }

    pub fn selected_id(&self) -> Option<u64> {
        match &self.state {
            PageState::Ready { selected, .. } => *selected,
            _ => None,
        }
    }

    pub fn selected(&self) -> Option<&ViewSkipRecord> {
        let id = self.selected_id()?;
        self.skips().iter().find(|s| s.id() == id)
    }
}
