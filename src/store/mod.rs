//! In-memory store for trap entries and trap locations.
//!
//! The store is the single owner of both collections. Every mutation applies
//! synchronously in memory, notifies subscribers, and then mirrors the full
//! collection to the injected key-value backend. Persistence is best-effort:
//! a failed write leaves the in-memory state authoritative for the session
//! and is never surfaced to the caller.
//!
//! Writes are gated on `hydrate()` having run, so a freshly started process
//! cannot clobber stored data before the persisted snapshot has been adopted.
//! After hydration every mutation persists, including one that empties a
//! collection.

use crate::db::kv::KvStore;
use crate::models::entry::{NewEntry, TrapEntry};
use crate::models::location::TrapLocation;

/// Logical key for the persisted entry collection.
pub const ENTRIES_KEY: &str = "entries";
/// Logical key for the persisted location collection.
pub const LOCATIONS_KEY: &str = "trapLocations";

/// Locations seeded on first run or when nothing usable was persisted.
pub const DEFAULT_LOCATIONS: [&str; 4] = ["Kitchen", "Bathroom", "Garage", "Living Room"];

/// Mutation notifications delivered synchronously to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    EntryAdded(u64),
    EntryDeleted(u64),
    LocationAdded(u64),
    LocationsRemoved { name: String, removed: usize },
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

pub struct TrapStore<K: KvStore> {
    backend: K,
    entries: Vec<TrapEntry>,
    locations: Vec<TrapLocation>,
    next_entry_id: u64,
    next_location_id: u64,
    hydrated: bool,
    listeners: Vec<Listener>,
}

fn seeded_locations() -> Vec<TrapLocation> {
    DEFAULT_LOCATIONS
        .iter()
        .enumerate()
        .map(|(i, name)| TrapLocation {
            id: i as u64 + 1,
            name: (*name).to_string(),
        })
        .collect()
}

impl<K: KvStore> TrapStore<K> {
    /// A new store starts with the seeded locations and no entries, and does
    /// not persist anything until `hydrate()` has run.
    pub fn new(backend: K) -> Self {
        let locations = seeded_locations();
        Self {
            backend,
            entries: Vec::new(),
            next_entry_id: 1,
            next_location_id: locations.len() as u64 + 1,
            locations,
            hydrated: false,
            listeners: Vec::new(),
        }
    }

    /// One-shot rehydration of persisted state.
    ///
    /// Entries: adopted if present and well-formed, otherwise empty.
    /// Locations: adopted if present, well-formed and non-empty, otherwise
    /// the seeded defaults. Malformed data and backend read errors both
    /// degrade silently to the defaults; startup never fails here.
    pub fn hydrate(&mut self) {
        if self.hydrated {
            return;
        }

        if let Ok(Some(raw)) = self.backend.get(ENTRIES_KEY)
            && let Ok(stored) = serde_json::from_str::<Vec<TrapEntry>>(&raw)
        {
            self.entries = stored;
        }

        if let Ok(Some(raw)) = self.backend.get(LOCATIONS_KEY)
            && let Ok(stored) = serde_json::from_str::<Vec<TrapLocation>>(&raw)
            && !stored.is_empty()
        {
            self.locations = stored;
        }

        self.next_entry_id = self.entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        self.next_location_id = self.locations.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        self.hydrated = true;
    }

    /// Assign a fresh id and prepend the entry (newest first).
    /// Returns the assigned id.
    pub fn add_entry(&mut self, new: NewEntry) -> u64 {
        let id = self.next_entry_id;
        self.next_entry_id += 1;

        self.entries.insert(
            0,
            TrapEntry {
                id,
                date: new.date,
                trap_id: new.trap_id,
                count: new.count,
            },
        );

        self.persist_entries();
        self.backend
            .audit("add-entry", &id.to_string(), "entry recorded");
        self.emit(StoreEvent::EntryAdded(id));
        id
    }

    /// Remove the entry with the given id. An absent id is a no-op, not an
    /// error; returns whether anything was removed.
    pub fn delete_entry(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return false;
        }

        self.persist_entries();
        self.backend
            .audit("del-entry", &id.to_string(), "entry deleted");
        self.emit(StoreEvent::EntryDeleted(id));
        true
    }

    /// Assign a fresh id and append a location. Duplicate names are legal at
    /// this level; callers pre-check when they want uniqueness.
    pub fn add_trap_location(&mut self, name: &str) -> u64 {
        let id = self.next_location_id;
        self.next_location_id += 1;

        self.locations.push(TrapLocation {
            id,
            name: name.to_string(),
        });

        self.persist_locations();
        self.backend.audit("add-location", name, "location added");
        self.emit(StoreEvent::LocationAdded(id));
        id
    }

    /// Remove every location with the given name. Entries referencing the
    /// name are left untouched (they become orphans). Returns how many
    /// locations were removed.
    pub fn remove_trap_location(&mut self, name: &str) -> usize {
        let before = self.locations.len();
        self.locations.retain(|l| l.name != name);
        let removed = before - self.locations.len();
        if removed == 0 {
            return 0;
        }

        self.persist_locations();
        self.backend.audit("del-location", name, "location removed");
        self.emit(StoreEvent::LocationsRemoved {
            name: name.to_string(),
            removed,
        });
        removed
    }

    pub fn entries(&self) -> &[TrapEntry] {
        &self.entries
    }

    pub fn locations(&self) -> &[TrapLocation] {
        &self.locations
    }

    /// Whether a location with this name currently exists. Entries whose
    /// `trap_id` fails this check are orphans.
    pub fn has_location(&self, name: &str) -> bool {
        self.locations.iter().any(|l| l.name == name)
    }

    /// Register a listener notified synchronously on every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    fn emit(&mut self, event: StoreEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    fn persist_entries(&mut self) {
        if !self.hydrated {
            return;
        }
        if let Ok(raw) = serde_json::to_string(&self.entries) {
            let _ = self.backend.set(ENTRIES_KEY, &raw);
        }
    }

    fn persist_locations(&mut self) {
        if !self.hydrated {
            return;
        }
        if let Ok(raw) = serde_json::to_string(&self.locations) {
            let _ = self.backend.set(LOCATIONS_KEY, &raw);
        }
    }
}
