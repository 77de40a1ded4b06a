/// Steps of the booking wizard, in order.
pub const WIZARD_STEPS: [&str; 6] = [
    "Postcode",
    "Waste Type",
    "Select Skip",
    "Permit",
    "Date",
    "Payment",
];

/// 1-based position of the skip size step.
pub const SELECT_SKIP_STEP: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Complete,
    Current,
    Upcoming,
}

impl StepStatus {
    fn marker(self) -> &'static str {
        match self {
            StepStatus::Complete => "✔",
            StepStatus::Current => "●",
            StepStatus::Upcoming => "○",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepProgress {
    current_step: u32,
    total_steps: u32,
}

impl Default for StepProgress {
    fn default() -> Self {
        Self::new(SELECT_SKIP_STEP, WIZARD_STEPS.len() as u32)
    }
}

impl StepProgress {
    pub fn new(current_step: u32, total_steps: u32) -> Self {
        Self {
            current_step,
            total_steps,
        }
    }

    /// Visible steps with their status. At most the six known steps are shown.
    pub fn steps(&self) -> Vec<(&'static str, StepStatus)> {
        WIZARD_STEPS
            .iter()
            .take(self.total_steps as usize)
            .enumerate()
            .map(|(index, label)| {
                let position = index as u32 + 1;
                let status = if position < self.current_step {
                    StepStatus::Complete
                } else if position == self.current_step {
                    StepStatus::Current
                } else {
                    StepStatus::Upcoming
                };
                (*label, status)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let steps = self.steps();
        let mut line = String::new();

        for (index, (label, status)) in steps.iter().enumerate() {
            if index > 0 {
                // thick connector after every completed step
                let connector = if steps[index - 1].1 == StepStatus::Complete {
                    " ━━ "
                } else {
                    " ── "
                };
                line.push_str(connector);
            }
            line.push_str(status.marker());
            line.push(' ');
            line.push_str(label);
        }

        format!("{}\nStep {} of {}", line, self.current_step, steps.len())
    }
}
