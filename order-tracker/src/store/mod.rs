//! Order store abstraction
//!
//! The reminder core only reads orders; mutations belong to the store's owner.

mod json_file;

pub use json_file::JsonFileOrderStore;

use shared::Order;

use crate::TrackerResult;

/// Source of the current order list
pub trait OrderStore: Send + Sync {
    /// All orders, in stored order
    fn list_orders(&self) -> TrackerResult<Vec<Order>>;
}

/// Fixed in-memory order list
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderStore {
    orders: Vec<Order>,
}

impl InMemoryOrderStore {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }
}

impl OrderStore for InMemoryOrderStore {
    fn list_orders(&self) -> TrackerResult<Vec<Order>> {
        Ok(self.orders.clone())
    }
}

impl<T: OrderStore + ?Sized> OrderStore for &T {
    fn list_orders(&self) -> TrackerResult<Vec<Order>> {
        (**self).list_orders()
    }
}
