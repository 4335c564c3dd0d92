use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{StoreError, StoreResult};
use crate::modules::auth::{
    interface::UserRepository,
    model::{NewUser, Role, User},
};
use crate::modules::contact::{
    interface::ContactRepository,
    model::{ContactMessage, NewContactMessage},
};
use crate::modules::events::{
    interface::EventRepository,
    model::{Event, EventInput},
};
use crate::modules::registrations::{
    interface::RegistrationRepository,
    model::{
        AdminRegistration, NewRegistration, Registration, RegistrationOverview, UserRegistration,
        DEFAULT_STATUS,
    },
};

#[derive(Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    events: BTreeMap<i64, Event>,
    registrations: BTreeMap<i64, Registration>,
    contacts: BTreeMap<i64, ContactMessage>,
    last_id: i64,
    event_cascade: bool,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    /// Registrations in listing order: newest first, id breaking ties.
    fn registrations_newest_first(&self) -> Vec<&Registration> {
        let mut rows: Vec<&Registration> = self.registrations.values().collect();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        rows
    }
}

/// In-process store with the same semantics as the MySQL schema: unique
/// emails, foreign keys from registrations, event deletes that take their
/// registrations with them, and the same listing orders.
///
/// Every operation runs under one lock, so each is atomic.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn event_cascade_enabled(&self) -> bool {
        self.lock().event_cascade
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, user: &NewUser) -> StoreResult<i64> {
        let mut tables = self.lock();
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate);
        }

        let id = tables.next_id();
        tables.users.insert(
            id,
            User {
                id,
                name: user.name.clone(),
                email: user.email.clone(),
                password: user.password_hash.clone(),
                role: user.role,
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(self.lock().users.values().find(|u| u.email == email).cloned())
    }

    async fn email_exists(&self, email: &str) -> StoreResult<bool> {
        Ok(self.lock().users.values().any(|u| u.email == email))
    }

    async fn set_role(&self, email: &str, role: Role) -> StoreResult<bool> {
        let mut tables = self.lock();
        match tables.users.values_mut().find(|u| u.email == email) {
            Some(user) => {
                user.role = role;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl EventRepository for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<Event>> {
        let mut events: Vec<Event> = self.lock().events.values().cloned().collect();
        events.sort_by(|a, b| (b.date, b.id).cmp(&(a.date, a.id)));
        Ok(events)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Event>> {
        Ok(self.lock().events.get(&id).cloned())
    }

    async fn create(&self, event: &EventInput) -> StoreResult<i64> {
        let mut tables = self.lock();
        let id = tables.next_id();
        tables.events.insert(
            id,
            Event {
                id,
                title: event.title.clone(),
                category: event.category.clone(),
                date: event.date,
                description: event.description.clone(),
                image: event.image.clone(),
            },
        );
        Ok(id)
    }

    async fn update(&self, id: i64, event: &EventInput) -> StoreResult<bool> {
        let mut tables = self.lock();
        let Some(existing) = tables.events.get_mut(&id) else {
            return Ok(false);
        };

        existing.title = event.title.clone();
        existing.category = event.category.clone();
        existing.date = event.date;
        existing.description = event.description.clone();
        existing.image = event.image.clone();
        Ok(true)
    }

    async fn delete_with_registrations(&self, id: i64) -> StoreResult<Option<u64>> {
        let mut tables = self.lock();
        if tables.events.remove(&id).is_none() {
            return Ok(None);
        }

        let before = tables.registrations.len();
        tables.registrations.retain(|_, r| r.event_id != id);
        Ok(Some((before - tables.registrations.len()) as u64))
    }
}

#[async_trait]
impl RegistrationRepository for MemoryStore {
    async fn create(&self, registration: &NewRegistration) -> StoreResult<i64> {
        let mut tables = self.lock();
        if !tables.events.contains_key(&registration.event_id)
            || !tables.users.contains_key(&registration.user_id)
        {
            return Err(StoreError::MissingReference);
        }

        let id = tables.next_id();
        tables.registrations.insert(
            id,
            Registration {
                id,
                user_id: registration.user_id,
                event_id: registration.event_id,
                name: registration.name.clone(),
                email: registration.email.clone(),
                phone: registration.phone.clone(),
                preferred_date: registration.preferred_date,
                notes: registration.notes.clone(),
                status: DEFAULT_STATUS.to_string(),
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    async fn list_by_event(&self, event_id: i64) -> StoreResult<Vec<Registration>> {
        let tables = self.lock();
        Ok(tables
            .registrations_newest_first()
            .into_iter()
            .filter(|r| r.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn list_for_user(&self, user_id: i64) -> StoreResult<Vec<UserRegistration>> {
        let tables = self.lock();
        Ok(tables
            .registrations_newest_first()
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .filter_map(|r| {
                let event = tables.events.get(&r.event_id)?;
                Some(UserRegistration {
                    id: r.id,
                    event_title: event.title.clone(),
                    event_category: event.category.clone(),
                    event_date: event.date,
                    preferred_date: r.preferred_date,
                    notes: r.notes.clone(),
                    created_at: r.created_at,
                    status: r.status.clone(),
                })
            })
            .collect())
    }

    async fn list_overview(&self) -> StoreResult<Vec<RegistrationOverview>> {
        let tables = self.lock();
        Ok(tables
            .registrations_newest_first()
            .into_iter()
            .filter_map(|r| {
                let event = tables.events.get(&r.event_id)?;
                Some(RegistrationOverview {
                    registration_id: r.id,
                    user_name: r.name.clone(),
                    user_email: r.email.clone(),
                    user_phone: r.phone.clone(),
                    event_title: event.title.clone(),
                    event_date: event.date,
                    preferred_date: r.preferred_date,
                    status: r.status.clone(),
                    created_at: r.created_at,
                })
            })
            .collect())
    }

    async fn list_for_admin(&self) -> StoreResult<Vec<AdminRegistration>> {
        let tables = self.lock();
        Ok(tables
            .registrations_newest_first()
            .into_iter()
            .filter_map(|r| {
                let user = tables.users.get(&r.user_id)?;
                let event = tables.events.get(&r.event_id)?;
                Some(AdminRegistration {
                    id: r.id,
                    user_name: user.name.clone(),
                    user_email: user.email.clone(),
                    event_title: event.title.clone(),
                    preferred_date: r.preferred_date,
                    status: r.status.clone(),
                    created_at: r.created_at,
                })
            })
            .collect())
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        Ok(self.lock().registrations.remove(&id).is_some())
    }

    async fn enable_event_cascade(&self) -> StoreResult<()> {
        self.lock().event_cascade = true;
        Ok(())
    }
}

#[async_trait]
impl ContactRepository for MemoryStore {
    async fn create(&self, message: &NewContactMessage) -> StoreResult<i64> {
        let mut tables = self.lock();
        let id = tables.next_id();
        tables.contacts.insert(
            id,
            ContactMessage {
                id,
                name: message.name.clone(),
                email: message.email.clone(),
                message: message.message.clone(),
                submitted_at: Utc::now(),
            },
        );
        Ok(id)
    }

    async fn list(&self) -> StoreResult<Vec<ContactMessage>> {
        let mut messages: Vec<ContactMessage> = self.lock().contacts.values().cloned().collect();
        messages.sort_by(|a, b| (b.submitted_at, b.id).cmp(&(a.submitted_at, a.id)));
        Ok(messages)
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        Ok(self.lock().contacts.remove(&id).is_some())
    }
}
