// Presentation: step progress, skip cards, page views and exports.

pub mod cards;
pub mod export;
pub mod progress;
pub mod view;

pub use export::{render_output, OutputFormat};
pub use progress::StepProgress;
pub use view::{render_page, PageContext};
