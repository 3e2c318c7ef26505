//! One day's events held in memory, and the edits a calendar front end
//! makes to them.

use chrono::{NaiveDate, NaiveDateTime};

use super::classify::Classifier;
use super::codec;
use super::error::ScheduleError;
use super::event::{ScheduleEvent, clean_title, event_id};

#[derive(Clone, Debug)]
pub struct Schedule {
    date: NaiveDate,
    classifier: Classifier,
    events: Vec<ScheduleEvent>,
}

impl Schedule {
    pub fn new(date: NaiveDate, classifier: Classifier) -> Self {
        Self {
            date,
            classifier,
            events: Vec::new(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn events(&self) -> &[ScheduleEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ScheduleEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Discard everything and take `events` as the new day, e.g. after a
    /// reload from the backend. Colliding ids are made unique.
    pub fn replace_all(&mut self, events: Vec<ScheduleEvent>) {
        self.events.clear();
        for mut event in events {
            event.id = self.unique_id(&event.id);
            self.events.push(event);
        }
    }

    /// Decode `text` for this schedule's date and replace the day with it.
    pub fn replace_from_text(&mut self, text: &str) {
        let events = codec::decode(text, self.date, &self.classifier);
        self.replace_all(events);
    }

    pub fn create(
        &mut self,
        name: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<&ScheduleEvent, ScheduleError> {
        let mut event = ScheduleEvent::new(name, start, end, &self.classifier)?;
        event.id = self.unique_id(&event.id);
        tracing::debug!("Created event {}", event.id);
        self.events.push(event);
        Ok(&self.events[self.events.len() - 1])
    }

    /// Drag an event to a new start time, keeping its length.
    pub fn move_to(
        &mut self,
        id: &str,
        start: NaiveDateTime,
    ) -> Result<&ScheduleEvent, ScheduleError> {
        let idx = self.position(id)?;
        let length = self.events[idx].end - self.events[idx].start;
        self.update_range(idx, start, start + length)
    }

    /// Change both ends of an event.
    pub fn resize(
        &mut self,
        id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<&ScheduleEvent, ScheduleError> {
        let idx = self.position(id)?;
        self.update_range(idx, start, end)
    }

    /// Rename an event. The id follows the name so it is regenerated.
    pub fn rename(&mut self, id: &str, name: &str) -> Result<&ScheduleEvent, ScheduleError> {
        let idx = self.position(id)?;
        let name = clean_title(name);
        let new_id = event_id(&name, self.events[idx].start);

        // Take the event out of the collection while picking an id so it
        // does not collide with itself
        let mut event = self.events.remove(idx);
        event.id = self.unique_id(&new_id);
        event.name = name;
        event.refresh(&self.classifier);
        tracing::debug!("Renamed event {} to {}", id, event.id);
        self.events.insert(idx, event);
        Ok(&self.events[idx])
    }

    pub fn delete(&mut self, id: &str) -> Result<ScheduleEvent, ScheduleError> {
        let idx = self.position(id)?;
        tracing::debug!("Deleted event {}", id);
        Ok(self.events.remove(idx))
    }

    pub fn to_text(&self) -> String {
        codec::encode(&self.events)
    }

    pub fn time_slots(&self) -> Vec<String> {
        codec::time_slots(&self.events)
    }

    fn position(&self, id: &str) -> Result<usize, ScheduleError> {
        self.events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ScheduleError::NotFound(id.to_string()))
    }

    fn update_range(
        &mut self,
        idx: usize,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<&ScheduleEvent, ScheduleError> {
        if end <= start {
            return Err(ScheduleError::InvalidRange { start, end });
        }
        let event = &mut self.events[idx];
        event.start = start;
        event.end = end;
        event.refresh(&self.classifier);
        Ok(&self.events[idx])
    }

    fn unique_id(&self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut n = 2;
        while self.get(&candidate).is_some() {
            candidate = format!("{}-{}", base, n);
            n += 1;
        }
        candidate
    }
}
