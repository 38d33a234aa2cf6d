//! iCalendar serialization of visibility windows.
//!
//! One VEVENT per window. The whole calendar is rendered in memory first and
//! written in a single operation, so a failed write never leaves a partial
//! file behind.

use std::path::Path;

use anyhow::{Context, Result};
use ical::generator::{Emitter, IcalCalendarBuilder};
use ical::ical_property;
use ical::parser::ical::component::IcalEvent;
use ical::property::Property;
use tracing::info;

use crate::models::VisibilityWindow;

/// One calendar entry to be emitted as a VEVENT.
#[derive(Debug, Clone)]
pub struct CalendarEvent {
    pub title: String,
    pub description: String,
    pub location: String,
    pub window: VisibilityWindow,
}

impl CalendarEvent {
    fn to_vevent(&self, uid: &str) -> IcalEvent {
        let mut event = IcalEvent::new();
        event.properties.push(ical_property!("UID", uid));
        event
            .properties
            .push(ical_property!("DTSTAMP", self.window.start.to_ics_stamp()));
        event
            .properties
            .push(ical_property!("DTSTART", self.window.start.to_ics_stamp()));
        event
            .properties
            .push(ical_property!("DTEND", self.window.end.to_ics_stamp()));
        event
            .properties
            .push(ical_property!("SUMMARY", self.title.clone()));
        event
            .properties
            .push(ical_property!("DESCRIPTION", self.description.clone()));
        event
            .properties
            .push(ical_property!("LOCATION", self.location.clone()));
        event
    }
}

/// Render events into iCalendar text.
pub fn render_calendar(events: &[CalendarEvent]) -> String {
    let mut calendar = IcalCalendarBuilder::version("2.0")
        .gregorian()
        .prodid("-//caniobserve//observability tools//EN")
        .build();

    for (i, event) in events.iter().enumerate() {
        let uid = format!(
            "caniobserve-{}-{}@caniobserve",
            i,
            event.window.start.to_ics_stamp()
        );
        calendar.events.push(event.to_vevent(&uid));
    }

    calendar.generate()
}

/// Render events and write them to `path` in one shot.
pub fn write_calendar(events: &[CalendarEvent], path: &Path) -> Result<()> {
    let payload = render_calendar(events);
    std::fs::write(path, payload)
        .with_context(|| format!("failed to write calendar to {}", path.display()))?;
    info!(events = events.len(), path = %path.display(), "calendar written");
    Ok(())
}
