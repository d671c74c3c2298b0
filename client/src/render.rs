//! Plain-text rendering of the three views

use crate::core::eligibility::ELIGIBILITY_CONDITIONS;
use crate::state::ViewModel;
use crate::types::{
    ActiveView, EligibilityForm, EligibilityResult, StatisticsSnapshot, UploadStatus,
};

pub const HEADER: &str = "Data Warehouse Finals by Group 5";

const UPLOAD_INFO: [&str; 4] = [
    "✅ Clean data → Goes to appropriate tables",
    "🔄 Invalid keys (like \"P1L1592\") → Auto-transformed to valid format",
    "🚨 Dirty data → Moved to DirtyData table with error reasons",
    "📧 Email validation and LoyaltyStatus standardization",
];

fn push_line(out: &mut String, line: impl AsRef<str>) {
    out.push_str(line.as_ref());
    out.push('\n');
}

/// Tab bar with the active view in brackets
pub fn render_tabs(active: ActiveView) -> String {
    ActiveView::ALL
        .iter()
        .map(|view| {
            if *view == active {
                format!("[{}]", view.title())
            } else {
                format!(" {} ", view.title())
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Status line of the upload view; empty while idle
pub fn render_upload_status(status: &UploadStatus) -> String {
    status.to_string()
}

pub fn render_upload(selection_name: Option<&str>, status: &UploadStatus) -> String {
    let mut out = String::new();
    push_line(&mut out, "Upload New Data");
    push_line(&mut out, "Upload CSV files for: Airlines, Airports, Passengers, Flights, or Sales data.");
    push_line(&mut out, format!("Selected file: {}", selection_name.unwrap_or("(none)")));

    let status_line = render_upload_status(status);
    if !status_line.is_empty() {
        push_line(&mut out, status_line);
    }

    push_line(&mut out, "💡 How it works:");
    for line in UPLOAD_INFO {
        push_line(&mut out, format!("  • {line}"));
    }
    out
}

/// Outcome box of an eligibility query
pub fn render_eligibility_result(result: &EligibilityResult) -> String {
    let mut out = String::new();
    if result.eligible() {
        push_line(&mut out, "✅ Customer is ELIGIBLE for Insurance");
    } else {
        push_line(&mut out, "❌ Customer is NOT ELIGIBLE for Insurance");
    }
    if let Some(reason) = result.reason() {
        push_line(&mut out, format!("Reason: {reason}"));
    }
    if let Some(error) = result.error() {
        push_line(&mut out, format!("Error: {error}"));
    }
    out
}

pub fn render_eligibility(form: &EligibilityForm, result: Option<&EligibilityResult>) -> String {
    let mut out = String::new();
    push_line(&mut out, "Insurance Eligibility Check");
    push_line(&mut out, format!("Passenger Name: {}", form.name));
    push_line(&mut out, format!("Flight ID:      {}", form.flight_id));
    push_line(&mut out, format!("Baggage Status: {}", form.baggage));
    push_line(&mut out, format!("Flight Date:    {}", form.date.map(|d| d.to_string()).unwrap_or_default()));

    if let Some(result) = result {
        out.push_str(&render_eligibility_result(result));
    }

    push_line(&mut out, "📋 Eligibility Conditions:");
    for condition in ELIGIBILITY_CONDITIONS {
        push_line(&mut out, format!("  • {condition}"));
    }
    out
}

/// Statistics cards, or a loading placeholder before the first snapshot
pub fn render_statistics(snapshot: Option<&StatisticsSnapshot>) -> String {
    let mut out = String::new();
    push_line(&mut out, "Data Warehouse Statistics");

    match snapshot {
        Some(snapshot) => {
            for (category, count) in snapshot.entries() {
                push_line(&mut out, format!("{:<16} {count}", category.label()));
            }
        }
        None => {
            push_line(&mut out, "Loading statistics...");
        }
    }
    out
}

/// Full page: header, tabs and the active view
pub fn render_view(model: &ViewModel) -> String {
    let body = match model.active {
        ActiveView::Upload => render_upload(model.selection_name.as_deref(), &model.upload_status),
        ActiveView::Eligibility => render_eligibility(&model.form, model.eligibility.as_ref()),
        ActiveView::Statistics => render_statistics(model.statistics.as_ref()),
    };

    format!("{HEADER}\n{}\n\n{body}", render_tabs(model.active))
}
