use crate::app::view::{render_page, PageContext};
use crate::core::page::{PageState, SkipPage};
use crate::domain::model::ViewSkipRecord;
use crate::utils::error::{Result, SkipError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Cards,
    Table,
    Json,
    Csv,
}

/// One flat row per skip, shared by the CSV and table outputs.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct SkipRow {
    #[tabled(rename = "ID")]
    pub id: u64,
    #[tabled(rename = "Skip")]
    pub name: String,
    #[tabled(rename = "Yards")]
    pub size: u32,
    #[tabled(rename = "Hire days")]
    pub hire_period_days: u32,
    #[tabled(rename = "Ex. VAT")]
    pub price_before_vat: f64,
    #[tabled(rename = "Inc. VAT")]
    pub price_including_vat: f64,
    #[tabled(rename = "Capacity")]
    pub capacity: String,
    #[tabled(rename = "Heavy waste")]
    pub heavy_waste: bool,
    #[tabled(rename = "Road")]
    pub road_placement: bool,
    #[tabled(rename = "Popular")]
    pub popular: bool,
    #[tabled(rename = "Selected")]
    pub selected: bool,
}

impl SkipRow {
    pub fn new(skip: &ViewSkipRecord, selected: bool) -> Self {
        Self {
            id: skip.id(),
            name: skip.name.clone(),
            size: skip.size(),
            hire_period_days: skip.raw.hire_period_days,
            price_before_vat: skip.raw.price_before_vat,
            price_including_vat: (skip.price_including_vat() * 100.0).round() / 100.0,
            capacity: skip.capacity.clone(),
            heavy_waste: skip.raw.allows_heavy_waste,
            road_placement: skip.raw.allowed_on_road,
            popular: skip.is_popular,
            selected,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SkipListExport<'a> {
    pub postcode: &'a str,
    pub area: Option<&'a str>,
    pub generated_at: DateTime<Utc>,
    pub count: usize,
    pub selected_id: Option<u64>,
    pub error: Option<&'a str>,
    pub skips: &'a [ViewSkipRecord],
}

/// CSV column names, in `SkipRow` field order.
const CSV_HEADERS: [&str; 11] = [
    "id",
    "name",
    "size",
    "hire_period_days",
    "price_before_vat",
    "price_including_vat",
    "capacity",
    "heavy_waste",
    "road_placement",
    "popular",
    "selected",
];

fn rows(page: &SkipPage) -> Vec<SkipRow> {
    let selected_id = page.selected_id();
    page.skips()
        .iter()
        .map(|skip| SkipRow::new(skip, selected_id == Some(skip.id())))
        .collect()
}

pub fn render_json(page: &SkipPage, context: &PageContext) -> Result<String> {
    let error = match page.state() {
        PageState::Error(message) => Some(message.as_str()),
        _ => None,
    };

    let export = SkipListExport {
        postcode: &context.location.postcode,
        area: context.location.area.as_deref(),
        generated_at: Utc::now(),
        count: page.skips().len(),
        selected_id: page.selected_id(),
        error,
        skips: page.skips(),
    };

    Ok(serde_json::to_string_pretty(&export)?)
}

pub fn render_csv(page: &SkipPage) -> Result<String> {
    // header written up front so an empty list still yields one line
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;
    for row in rows(page) {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| SkipError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn render_table(page: &SkipPage) -> String {
    let mut table = Table::new(rows(page));
    table.with(Style::rounded());
    table.to_string()
}

/// Renders `page` in `format`. Table and CSV fall back to the text view
/// when there is no list to show.
pub fn render_output(format: OutputFormat, page: &SkipPage, context: &PageContext) -> Result<String> {
    let is_ready = matches!(page.state(), PageState::Ready { .. });

    match format {
        OutputFormat::Json => render_json(page, context),
        OutputFormat::Csv if is_ready => render_csv(page),
        OutputFormat::Table if is_ready => Ok(render_table(page)),
        _ => Ok(render_page(page, context)),
    }
}
