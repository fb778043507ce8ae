//! Plain-text rendering of the dashboard views.

use std::fmt::{self, Write};

use clap::ValueEnum;
use common::views::{
    forecast_view, latest_summary, resource_plan_view, CountRow, ListRow, ViewState,
};
use common::PredictionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewKind {
    Summary,
    Forecast,
    Resources,
    All,
}

pub fn render(store: &PredictionStore, view: ViewKind) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_view(store, view, &mut out);
    out
}

fn write_view(store: &PredictionStore, view: ViewKind, out: &mut String) -> fmt::Result {
    match view {
        ViewKind::Summary => render_summary(store, out),
        ViewKind::Forecast => render_forecast(store, out),
        ViewKind::Resources => render_resources(store, out),
        ViewKind::All => {
            render_summary(store, out)?;
            writeln!(out)?;
            render_forecast(store, out)?;
            writeln!(out)?;
            render_resources(store, out)
        }
    }
}

fn render_summary(store: &PredictionStore, out: &mut String) -> fmt::Result {
    let summary = match ViewState::derive(store, latest_summary) {
        ViewState::Populated(summary) => summary,
        ViewState::Empty => {
            writeln!(out, "No prediction data yet.")?;
            return Ok(());
        }
    };

    writeln!(out, "== Latest Prediction: {} ({}) ==", summary.city, summary.date)?;
    if !summary.summary.is_empty() {
        writeln!(out, "{}", summary.summary)?;
    }
    for card in &summary.cards {
        writeln!(out, "  {:<12} {}", card.title, card.value)?;
    }
    Ok(())
}

fn render_forecast(store: &PredictionStore, out: &mut String) -> fmt::Result {
    let view = match ViewState::derive(store, forecast_view) {
        ViewState::Populated(view) => view,
        ViewState::Empty => {
            writeln!(out, "No prediction data yet.")?;
            return Ok(());
        }
    };

    writeln!(out, "== Forecast ==")?;
    for card in view.metrics.cards() {
        writeln!(out, "  {:<20} {:>6}  {}", card.title, card.value, card.description)?;
    }

    writeln!(out, "Surge projection:")?;
    for point in &view.loads {
        writeln!(out, "  {:<10} {}", point.label, point.value)?;
    }

    let mix: Vec<&str> = view.patient_mix.iter().map(|t| t.label.as_str()).collect();
    writeln!(out, "Expected patient mix: {}", join_or_none(&mix))?;

    if !view.recommendations.is_empty() {
        writeln!(out, "Recommendations:")?;
        for tag in &view.recommendations {
            writeln!(out, "  - {}", tag.label)?;
        }
    }
    Ok(())
}

fn render_resources(store: &PredictionStore, out: &mut String) -> fmt::Result {
    let plan = match ViewState::derive(store, resource_plan_view) {
        ViewState::Populated(plan) => plan,
        ViewState::Empty => {
            writeln!(out, "No resource plan yet.")?;
            return Ok(());
        }
    };

    writeln!(out, "== Resource Plan ==")?;
    write_counts(out, "Staff Requirements", &plan.staff)?;
    write_counts(out, "Bed & ICU Allocation", &plan.beds)?;
    if !plan.supplies.is_empty() {
        writeln!(out, "Supply Estimates:")?;
        for row in &plan.supplies {
            writeln!(out, "  {:<20} {}", row.key, row.estimate)?;
        }
    }
    write_list(out, "Supplies Checklist", &plan.checklist)?;
    write_list(out, "Shift Recommendations", &plan.shift_plan)?;
    write_list(out, "Notes", &plan.notes)
}

fn write_counts(out: &mut String, title: &str, rows: &[CountRow]) -> fmt::Result {
    writeln!(out, "{}:", title)?;
    for row in rows {
        writeln!(out, "  {:<20} {}", row.key, row.count)?;
    }
    Ok(())
}

fn write_list(out: &mut String, title: &str, rows: &[ListRow]) -> fmt::Result {
    writeln!(out, "{}:", title)?;
    for row in rows {
        writeln!(out, "  [ ] {}", row.key)?;
    }
    Ok(())
}

fn join_or_none(items: &[&str]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}
