//! Output formatting for CLI results.
//!
//! Two output modes:
//! - **Human**: the rendered view, one line per stop, todo or pin
//! - **Json**: the whole document as stored

use std::fmt::Write;

use chrono::NaiveDateTime;
use tripdeck_core::{Document, NoteDocument, Pin, Stop, TodoDocument, TripDocument};
use tripdeck_engine::itinerary::{day_label, is_upcoming, truncate_location, LOCATION_MAX_LEN};
use tripdeck_engine::pins::{bounds, Marker};
use tripdeck_engine::{DayMetrics, Outcome};

/// Output mode for formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format the itinerary, optionally a single day
pub fn format_trip(doc: &TripDocument, only: Option<usize>, now: NaiveDateTime) -> String {
    let days = &doc.trip.days;
    if days.is_empty() {
        return "(empty itinerary)".to_string();
    }

    let mut out = String::new();
    for (index, day) in days.iter().enumerate() {
        if only.is_some_and(|n| n != index) {
            continue;
        }
        let metrics = DayMetrics::of(day);
        let _ = writeln!(out, "Day {}  {}", index + 1, day_label(&day.meta));
        if !day.meta.date.is_empty() {
            let _ = writeln!(out, "  {}", day.meta.date);
        }
        if !day.meta.hotel.name.is_empty() {
            let _ = writeln!(out, "  Hotel: {} ({})", day.meta.hotel.name, day.meta.hotel.area);
        }
        let _ = writeln!(
            out,
            "  {}/{} done  spent {:.2} of {:.2} SGD  ({:.0}%)",
            metrics.completed_count,
            metrics.total_count,
            metrics.total_spent,
            metrics.total_estimated,
            metrics.progress() * 100.0
        );
        for stop in &day.stops {
            out.push_str(&format_stop(stop, now));
        }
    }

    if out.is_empty() {
        return "(no such day)".to_string();
    }
    out.truncate(out.trim_end().len());
    out
}

fn format_stop(stop: &Stop, now: NaiveDateTime) -> String {
    let mark = if stop.completed { "[x]" } else { "[ ]" };
    let soon = if !stop.completed && is_upcoming(&stop.time, now) {
        " (soon)"
    } else {
        ""
    };

    let mut line = format!(
        "  {} {:>5} {} [{}] {}{}  {:.2} SGD  @{}\n",
        mark,
        stop.time,
        stop.id,
        stop.category.as_str(),
        stop.activity,
        soon,
        stop.estimated_cost_sgd,
        truncate_location(&stop.location, LOCATION_MAX_LEN),
    );

    let modes = stop.movement.transport_modes();
    if !modes.is_empty() || !stop.movement.desc.is_empty() {
        let labels: Vec<_> = modes.iter().map(|m| m.label()).collect();
        let _ = writeln!(line, "        via {}  {}", labels.join(" + "), stop.movement.desc);
    }
    if let Some(link) = stop.maps_link() {
        let _ = writeln!(line, "        map {}", link);
    }
    if stop.has_notes() {
        for note_line in stop.notes.lines() {
            let _ = writeln!(line, "        > {}", note_line);
        }
    }
    line
}

/// Format the todo list, open items first
pub fn format_todos(doc: &TodoDocument) -> String {
    if doc.todo.is_empty() {
        return "(no todos)".to_string();
    }

    let (done, open): (Vec<_>, Vec<_>) = doc.todo.iter().partition(|t| t.completed);
    let mut lines = Vec::with_capacity(doc.todo.len());
    for item in open.into_iter().chain(done) {
        let mark = if item.completed { "[x]" } else { "[ ]" };
        let mut line = format!("{} {} ({}) {}", mark, item.id, item.priority.as_str(), item.text);
        if let Some(note) = item.note.as_deref().filter(|n| !n.is_empty()) {
            let _ = write!(line, " - {}", note);
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Format the general note
pub fn format_note(doc: &NoteDocument) -> String {
    let mut out = format!("{}\nupdated {}\n\n", doc.title, doc.updated_at);
    out.push_str(&doc.text());
    out
}

/// Format a pin listing with the map centre
pub fn format_pins(pins: &[&Pin]) -> String {
    if pins.is_empty() {
        return "(no pins)".to_string();
    }

    let mut lines: Vec<String> = pins
        .iter()
        .map(|pin| {
            let marker = Marker::from(*pin);
            format!(
                "{:>10.5} {:>10.5}  {}  {}",
                marker.coordinates[1], marker.coordinates[0], marker.title, marker.description
            )
        })
        .collect();

    let collection = tripdeck_core::PinCollection {
        features: pins.iter().map(|p| (*p).clone()).collect(),
        ..Default::default()
    };
    if let Some(b) = bounds(&collection) {
        let [lon, lat] = b.center();
        lines.push(format!("centre {:.5}, {:.5}", lat, lon));
    }
    lines.join("\n")
}

/// One status line for a mutation, `None` when it saved
pub fn format_outcome(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Commit => None,
        Outcome::Unchanged => Some("(no change)".to_string()),
        Outcome::NotFound => Some("(not found)".to_string()),
        Outcome::Declined => Some("(cancelled)".to_string()),
        Outcome::Rejected(reason) => Some(format!("(rejected) {}", reason)),
    }
}

/// The document as stored
pub fn format_json<D: Document>(doc: &D) -> String {
    doc.to_bytes()
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_else(|e| format_error(&e.into()))
}

/// Error line printed to stderr
pub fn format_error(e: &anyhow::Error) -> String {
    format!("(error) {:#}", e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tripdeck_core::{Day, TodoItem};

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn trip() -> TripDocument {
        serde_json::from_str(
            r#"{"trip":{"days":[{"meta":{"country":"Indonesia","city":"Yogyakarta","date":"1 Jun"},
                "stops":[
                  {"id":"s1","time":"12:15","activity":"Gudeg lunch","category":"food",
                   "location":"Jalan Wijilan, Kraton district","estimated_cost_sgd":8,
                   "movement":{"mode":"car+walk","desc":"Grab"}},
                  {"id":"s2","time":"15:00","activity":"Kraton","category":"sightseeing",
                   "estimated_cost_sgd":4,"completed":true,"notes":"bring sarong"}
                ]}]}}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_format_trip() {
        let out = format_trip(&trip(), None, noon());
        assert!(out.starts_with("Day 1  Indonesia - Yogyakarta"));
        assert!(out.contains("1/2 done  spent 4.00 of 12.00 SGD  (50%)"));
        assert!(out.contains("Gudeg lunch (soon)"));
        assert!(out.contains("@Jalan Wijilan, Krato…"));
        assert!(out.contains("via Car + Walk  Grab"));
        assert!(out.contains("> bring sarong"));
    }

    #[test]
    fn test_format_missing_day() {
        assert_eq!(format_trip(&trip(), Some(4), noon()), "(no such day)");
        assert_eq!(
            format_trip(&TripDocument::default(), None, noon()),
            "(empty itinerary)"
        );
    }

    #[test]
    fn test_format_todos_open_first() {
        let doc = TodoDocument::from_items(vec![
            TodoItem {
                id: "1".into(),
                text: "Book hotel".into(),
                completed: true,
                ..Default::default()
            },
            TodoItem {
                id: "2".into(),
                text: "Buy adapter".into(),
                note: Some("type G".into()),
                ..Default::default()
            },
        ]);
        assert_eq!(
            format_todos(&doc),
            "[ ] 2 (low) Buy adapter - type G\n[x] 1 (low) Book hotel"
        );
    }

    #[test]
    fn test_format_outcome() {
        assert_eq!(format_outcome(&Outcome::Commit), None);
        assert_eq!(format_outcome(&Outcome::Declined).unwrap(), "(cancelled)");
    }

    #[test]
    fn test_empty_day_list_renders() {
        let doc = TripDocument::from_days(vec![Day::default()]);
        assert!(format_trip(&doc, Some(0), noon()).contains("0/0 done"));
    }
}
