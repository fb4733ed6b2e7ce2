//! JSON file order store
//!
//! Reads `orders.json`: a JSON array of order objects.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use shared::Order;

use super::OrderStore;
use crate::{TrackerError, TrackerResult};

/// Order store backed by a local JSON file
#[derive(Debug, Clone)]
pub struct JsonFileOrderStore {
    path: PathBuf,
}

impl JsonFileOrderStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OrderStore for JsonFileOrderStore {
    /// A missing file means no orders yet
    fn list_orders(&self) -> TrackerResult<Vec<Order>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Orders file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(TrackerError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let records: Vec<Value> = serde_json::from_str(&content).map_err(|source| TrackerError::Json {
            path: self.path.clone(),
            source,
        })?;

        // A record with a wrongly typed field is dropped on its own
        let total = records.len();
        let orders: Vec<Order> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<Order>(record) {
                Ok(order) => Some(order),
                Err(e) => {
                    tracing::debug!(path = %self.path.display(), index, error = %e, "Skipping unreadable order record");
                    None
                }
            })
            .collect();
        tracing::debug!(
            path = %self.path.display(),
            count = orders.len(),
            skipped = total - orders.len(),
            "Loaded orders"
        );
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileOrderStore::new(dir.path().join("orders.json"));
        assert!(store.list_orders().unwrap().is_empty());
    }

    #[test]
    fn test_reads_orders_in_file_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"order_number": "B", "order_date": "2024-01-24", "payment_mode": "UPI", "purchase": 10}},
                {{"order_number": "A", "order_date": "", "payment_mode": "Card EMI", "purchase": 20.5}}
            ]"#
        )
        .unwrap();

        let store = JsonFileOrderStore::new(file.path());
        assert_eq!(store.path(), file.path());
        let orders = store.list_orders().unwrap();
        let numbers: Vec<_> = orders.iter().map(|o| o.order_number.as_str()).collect();
        assert_eq!(numbers, vec!["B", "A"]);
    }

    #[test]
    fn test_wrongly_typed_record_skipped_alone() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"order_number": "GOOD", "order_date": "2024-01-24", "payment_mode": "Card EMI", "purchase": 100}},
                {{"order_number": "NUMDATE", "order_date": 20240124, "payment_mode": "Card EMI", "purchase": 100}},
                {{"order_number": "OBJMODE", "order_date": "2024-01-24", "payment_mode": {{"card": 4321}}, "purchase": 100}},
                {{"order_number": "TEXTAMOUNT", "order_date": "2024-01-24", "payment_mode": "EMI", "purchase": "n/a"}},
                42,
                {{"order_number": "LAST", "order_date": "2024-01-25", "payment_mode": "UPI", "purchase": 5}}
            ]"#
        )
        .unwrap();

        let store = JsonFileOrderStore::new(file.path());
        let orders = store.list_orders().unwrap();
        let numbers: Vec<_> = orders.iter().map(|o| o.order_number.as_str()).collect();
        assert_eq!(numbers, vec!["GOOD", "LAST"]);
    }

    #[test]
    fn test_non_array_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"order_number": "A"}}"#).unwrap();

        let store = JsonFileOrderStore::new(file.path());
        assert!(matches!(store.list_orders(), Err(TrackerError::Json { .. })));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let store = JsonFileOrderStore::new(file.path());
        assert!(matches!(store.list_orders(), Err(TrackerError::Json { .. })));
    }

    #[test]
    fn test_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileOrderStore::new(dir.path());
        assert!(matches!(store.list_orders(), Err(TrackerError::Io { .. })));
    }
}
