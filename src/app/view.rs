use crate::app::cards::{format_pounds, render_card};
use crate::app::progress::StepProgress;
use crate::core::page::{PageState, SkipPage};
use crate::domain::model::LocationQuery;

/// Render-time inputs that are not part of the page state.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub location: LocationQuery,
    pub progress: StepProgress,
}

impl PageContext {
    pub fn new(location: LocationQuery, progress: StepProgress) -> Self {
        Self { location, progress }
    }
}

pub fn render_page(page: &SkipPage, context: &PageContext) -> String {
    match page.state() {
        PageState::Loading => {
            "Loading Skip Options\nFinding the best skips for your area...".to_string()
        }
        PageState::Error(message) => format!(
            "Unable to Load Skips\n{}\n[Try Again] run the command again to reload",
            message
        ),
        PageState::Ready { .. } => render_ready(page, context),
    }
}

fn render_ready(page: &SkipPage, context: &PageContext) -> String {
    let skips = page.skips();
    let selected_id = page.selected_id();

    let mut sections = vec![
        context.progress.render(),
        format!(
            "Choose Your Skip Size\n\
             Find the perfect skip for your project. We've got sizes for every need, \
             from small clearouts to major renovations.\n\
             Showing {} available skips for {}",
            skips.len(),
            context.location.label()
        ),
    ];

    sections.extend(
        skips
            .iter()
            .map(|skip| render_card(skip, selected_id == Some(skip.id()))),
    );

    let mut navigation = "← Back to Waste Type".to_string();
    if let Some(selected) = page.selected() {
        navigation.push_str("    Continue to Permit Check →");
        sections.push(navigation);
        sections.push(format!(
            "Selected: {}\n{}\n{} inc. VAT",
            selected.name,
            selected.description,
            format_pounds(selected.price_including_vat())
        ));
    } else {
        sections.push(navigation);
    }

    sections.join("\n\n")
}
