use crate::domain::model::ViewSkipRecord;

/// Whole-pound price as shown on the cards, e.g. `£278`.
pub fn format_pounds(amount: f64) -> String {
    format!("£{}", amount.round() as i64)
}

pub fn render_card(skip: &ViewSkipRecord, is_selected: bool) -> String {
    let marker = if is_selected { "[✓]" } else { "[ ]" };
    let badge = if skip.is_popular { "  ★ Most Popular" } else { "" };

    let mut lines = vec![
        format!("{} {} (id {}){}", marker, skip.name, skip.id(), badge),
        format!("    {} ex. VAT", format_pounds(skip.raw.price_before_vat)),
        format!("    {}", skip.description),
        format!("    {:<16}{}", "Capacity:", skip.capacity),
        format!("    {:<16}{} days", "Hire Period:", skip.raw.hire_period_days),
    ];

    if skip.raw.allows_heavy_waste {
        lines.push(format!("    {:<16}Allowed", "Heavy Waste:"));
    }
    if skip.raw.allowed_on_road {
        lines.push(format!("    {:<16}Permitted", "Road Placement:"));
    }

    lines.push(format!("    {:<16}{}", "Image:", skip.image));
    lines.push(format!(
        "    > {}",
        if is_selected {
            "Selected ✓"
        } else {
            "Select This Skip"
        }
    ));

    lines.join("\n")
}
