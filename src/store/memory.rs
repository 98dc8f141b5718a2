//! In-memory record store with change notification.

use std::fs;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, HolidayRecord, LeaveRecord};
use crate::store::{EmployeeRepo, HolidayRepo, LeaveRepo, StoreEvent};

type Subscriber = Box<dyn Fn(StoreEvent) + Send + Sync>;

/// A serializable snapshot of all three collections.
///
/// Used to persist the store to a JSON file and to seed it back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// All registered employees.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// All leave records.
    #[serde(default)]
    pub leaves: Vec<LeaveRecord>,
    /// All holiday records.
    #[serde(default)]
    pub holidays: Vec<HolidayRecord>,
}

/// Synchronous in-memory store for the three entity collections.
///
/// Writes upsert by id and notify subscribers afterwards; reads hand out
/// cloned snapshots so the calculation engine never observes a collection
/// mid-mutation. Single-session sized: dataset bounds are one
/// organization's headcount, so cloning per read is acceptable.
#[derive(Default)]
pub struct MemoryStore {
    employees: RwLock<Vec<Employee>>,
    leaves: RwLock<Vec<LeaveRecord>>,
    holidays: RwLock<Vec<HolidayRecord>>,
    subscribers: RwLock<Vec<Subscriber>>,
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("employees", &*read(&self.employees))
            .field("leaves", &*read(&self.leaves))
            .field("holidays", &*read(&self.holidays))
            .finish_non_exhaustive()
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

fn upsert_by_id<T>(items: &mut Vec<T>, item: T, id_of: impl Fn(&T) -> &str) {
    let id = id_of(&item).to_string();
    match items.iter_mut().find(|existing| id_of(existing) == id) {
        Some(existing) => *existing = item,
        None => items.push(item),
    }
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated from a snapshot.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        Self {
            employees: RwLock::new(snapshot.employees),
            leaves: RwLock::new(snapshot.leaves),
            holidays: RwLock::new(snapshot.holidays),
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Registers an observer invoked after every write.
    ///
    /// This is the explicit replacement for an ambient change-notification
    /// broadcast: the presentation layer subscribes at construction and
    /// recomputes on each event. The engine itself never subscribes.
    pub fn subscribe(&self, subscriber: impl Fn(StoreEvent) + Send + Sync + 'static) {
        write(&self.subscribers).push(Box::new(subscriber));
    }

    fn notify(&self, event: StoreEvent) {
        for subscriber in read(&self.subscribers).iter() {
            subscriber(event);
        }
    }

    /// Returns a snapshot of all three collections.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            employees: read(&self.employees).clone(),
            leaves: read(&self.leaves).clone(),
            holidays: read(&self.holidays).clone(),
        }
    }

    /// Writes the current snapshot to a JSON file.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> EngineResult<()> {
        let path = path.as_ref();
        let json =
            serde_json::to_string_pretty(&self.snapshot()).map_err(|err| EngineError::SnapshotIo {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;
        fs::write(path, json).map_err(|err| EngineError::SnapshotIo {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }

    /// Loads a store from a JSON snapshot file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|err| EngineError::SnapshotIo {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        let snapshot: StoreSnapshot =
            serde_json::from_str(&contents).map_err(|err| EngineError::SnapshotIo {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Looks up one employee by id.
    pub fn find_employee(&self, id: &str) -> Option<Employee> {
        read(&self.employees).iter().find(|e| e.id == id).cloned()
    }
}

impl EmployeeRepo for MemoryStore {
    fn employees(&self) -> Vec<Employee> {
        read(&self.employees).clone()
    }

    fn save_employee(&self, employee: Employee) {
        upsert_by_id(&mut write(&self.employees), employee, |e| &e.id);
        self.notify(StoreEvent::Employees);
    }

    fn delete_employee(&self, id: &str) {
        write(&self.employees).retain(|e| e.id != id);
        self.notify(StoreEvent::Employees);
    }
}

impl LeaveRepo for MemoryStore {
    fn leaves(&self) -> Vec<LeaveRecord> {
        read(&self.leaves).clone()
    }

    fn save_leave(&self, record: LeaveRecord) {
        upsert_by_id(&mut write(&self.leaves), record, |l| &l.id);
        self.notify(StoreEvent::Leaves);
    }

    fn delete_leave(&self, id: &str) {
        write(&self.leaves).retain(|l| l.id != id);
        self.notify(StoreEvent::Leaves);
    }
}

impl HolidayRepo for MemoryStore {
    fn holidays(&self) -> Vec<HolidayRecord> {
        read(&self.holidays).clone()
    }

    fn save_holiday(&self, record: HolidayRecord) {
        upsert_by_id(&mut write(&self.holidays), record, |h| &h.id);
        self.notify(StoreEvent::Holidays);
    }

    fn delete_holiday(&self, id: &str) {
        write(&self.holidays).retain(|h| h.id != id);
        self.notify(StoreEvent::Holidays);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn make_employee(id: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: format!("employee {}", id),
            employee_code: format!("PREF-{}", id),
            department: "HR".to_string(),
            email: format!("{}@example.org", id),
            annual_entitlement: 30,
            exceptional_entitlement: 10,
        }
    }

    fn make_leave(id: &str, employee_id: &str) -> LeaveRecord {
        LeaveRecord {
            id: id.to_string(),
            employee_id: employee_id.to_string(),
            leave_type: crate::models::LeaveType::Annual,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            reason: String::new(),
            total_days: 5,
            deducted_days: 5,
        }
    }

    #[test]
    fn test_save_inserts_then_updates_by_id() {
        let store = MemoryStore::new();
        store.save_employee(make_employee("emp_001"));
        assert_eq!(store.employees().len(), 1);

        let mut updated = make_employee("emp_001");
        updated.department = "Finance".to_string();
        store.save_employee(updated);

        let employees = store.employees();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].department, "Finance");
    }

    #[test]
    fn test_delete_employee_keeps_leave_history() {
        let store = MemoryStore::new();
        store.save_employee(make_employee("emp_001"));
        store.save_leave(make_leave("lv_001", "emp_001"));

        store.delete_employee("emp_001");

        assert!(store.employees().is_empty());
        // The association is non-owning: history survives the employee.
        assert_eq!(store.leaves().len(), 1);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let store = MemoryStore::new();
        store.save_employee(make_employee("emp_001"));
        store.delete_employee("emp_999");
        assert_eq!(store.employees().len(), 1);
    }

    #[test]
    fn test_subscribers_fire_on_every_write() {
        let store = MemoryStore::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = Arc::clone(&seen);
        store.subscribe(move |_| {
            seen_clone.fetch_add(1, Ordering::SeqCst);
        });

        store.save_employee(make_employee("emp_001"));
        store.save_leave(make_leave("lv_001", "emp_001"));
        store.delete_leave("lv_001");

        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_subscriber_sees_collection_kind() {
        let store = MemoryStore::new();
        let last = Arc::new(RwLock::new(None));
        let last_clone = Arc::clone(&last);
        store.subscribe(move |event| {
            *write(&last_clone) = Some(event);
        });

        store.save_holiday(HolidayRecord {
            id: "hol_001".to_string(),
            name: "New Year's Day".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        });

        assert_eq!(*read(&last), Some(StoreEvent::Holidays));
    }

    #[test]
    fn test_snapshot_round_trips_through_json_file() {
        let store = MemoryStore::new();
        store.save_employee(make_employee("emp_001"));
        store.save_leave(make_leave("lv_001", "emp_001"));

        let path = std::env::temp_dir().join("leave_engine_store_test.json");
        store.save_to(&path).unwrap();

        let restored = MemoryStore::load_from(&path).unwrap();
        assert_eq!(restored.snapshot(), store.snapshot());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_snapshot_is_error() {
        let err = MemoryStore::load_from("/nonexistent/store.json").unwrap_err();
        assert!(matches!(err, EngineError::SnapshotIo { .. }));
    }

    #[test]
    fn test_find_employee() {
        let store = MemoryStore::new();
        store.save_employee(make_employee("emp_001"));
        assert!(store.find_employee("emp_001").is_some());
        assert!(store.find_employee("emp_404").is_none());
    }
}
