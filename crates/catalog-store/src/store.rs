//! # Product Store
//!
//! The authoritative in-memory product collection and the
//! "current product" selection pointer used by the edit form.
//!
//! ## Snapshot Publication
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Operations Flow                                │
//! │                                                                         │
//! │  Collaborator Action       Store Method          Published Snapshot     │
//! │  ───────────────────       ────────────          ──────────────────     │
//! │                                                                         │
//! │  Submit (create) ────────► add(draft) ─────────► [.., new product]     │
//! │                                                                         │
//! │  Submit (edit) ──────────► update(product) ────► [.., replaced, ..]    │
//! │                                                                         │
//! │  Delete action ──────────► delete(&product) ───► [.. minus one ..]     │
//! │                                                                         │
//! │  Open edit form ─────────► set_current(Some) ──► pointer channel       │
//! │  Cancel / saved ─────────► set_current(None) ──► pointer channel       │
//! │                                                                         │
//! │  NOTE: observers always receive the FULL sequence, never a diff.       │
//! │        A new subscriber immediately sees the latest snapshot.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why `tokio::sync::watch`?
//! The spec for this layer is "replay-latest pub/sub over immutable
//! snapshots": every observer wants the newest full value and nothing
//! older. That is exactly the watch channel contract. Writers are
//! serialized by the sender's internal lock, so a subscriber can never
//! observe a half-applied mutation.

use std::sync::atomic::{AtomicU32, Ordering};

use tokio::sync::watch;
use tracing::debug;

use catalog_core::{Product, ProductDraft};

/// Owns the product sequence and the selection pointer.
///
/// ## Invariants
/// - Every live product has a unique, strictly positive `id`
/// - `id` is assigned here on `add` and never changes afterwards
/// - List order is insertion order; `update` preserves position
/// - At most one product is "current" at any time
///
/// ## Sharing
/// Construct once per session and pass by reference (or inside an `Arc`)
/// to collaborators. All methods take `&self`.
#[derive(Debug)]
pub struct ProductStore {
    /// Product list channel. The sender holds the latest snapshot.
    products: watch::Sender<Vec<Product>>,

    /// Selection pointer channel (`None` = create-mode).
    current: watch::Sender<Option<Product>>,

    /// Monotonically increasing id source. Never reset by deletes, so an
    /// id is never reissued within a session.
    next_id: AtomicU32,
}

impl ProductStore {
    /// Creates an empty store: no products, nothing selected, ids start
    /// at 1.
    pub fn new() -> Self {
        let (products, _) = watch::channel(Vec::new());
        let (current, _) = watch::channel(None);
        ProductStore {
            products,
            current,
            next_id: AtomicU32::new(0),
        }
    }

    // =========================================================================
    // Read Access
    // =========================================================================

    /// Returns a clone of the current snapshot, in insertion order.
    pub fn list(&self) -> Vec<Product> {
        self.products.borrow().clone()
    }

    /// Subscribes to product list snapshots.
    ///
    /// The receiver starts at the latest snapshot (replay-latest) and is
    /// notified on every published mutation with the full new sequence.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Product>> {
        self.products.subscribe()
    }

    /// Returns the current selection (`None` = create-mode).
    pub fn current(&self) -> Option<Product> {
        self.current.borrow().clone()
    }

    /// Subscribes to selection pointer changes (replay-latest).
    pub fn subscribe_current(&self) -> watch::Receiver<Option<Product>> {
        self.current.subscribe()
    }

    /// Number of products in the latest snapshot.
    pub fn len(&self) -> usize {
        self.products.borrow().len()
    }

    /// Checks if the store holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.borrow().is_empty()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds a product from a validated draft and returns it with its
    /// assigned id.
    ///
    /// ## Behavior
    /// - Id comes from the monotonic counter (first id is 1)
    /// - The product is appended at the end of the sequence
    /// - Duplicate names are allowed; the draft is trusted as validated
    /// - The new snapshot is published to all subscribers
    pub fn add(&self, draft: ProductDraft) -> Product {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let product = draft.into_product(id);

        self.products.send_modify(|list| list.push(product.clone()));
        debug!(id, name = %product.name, "product added");

        product
    }

    /// Replaces the stored product whose id matches, preserving its
    /// position in the sequence.
    ///
    /// ## Behavior
    /// - Matching id: entry replaced in place, new snapshot published
    /// - Absent id: silent no-op, nothing published
    pub fn update(&self, product: Product) {
        let id = product.id;
        let mut replaced = false;

        self.products.send_if_modified(|list| {
            if let Some(slot) = list.iter_mut().find(|p| p.id == id) {
                *slot = product.clone();
                replaced = true;
            }
            replaced
        });

        if replaced {
            debug!(id, "product updated");
        } else {
            debug!(id, "update ignored: id not in store");
        }
    }

    /// Removes the stored product whose id matches.
    ///
    /// ## Behavior
    /// - Matching id: exactly one entry removed, new snapshot published
    /// - Absent id: silent no-op, nothing published
    pub fn delete(&self, product: &Product) {
        let id = product.id;
        let mut removed = false;

        self.products.send_if_modified(|list| {
            let before = list.len();
            list.retain(|p| p.id != id);
            removed = list.len() != before;
            removed
        });

        if removed {
            debug!(id, "product deleted");
        } else {
            debug!(id, "delete ignored: id not in store");
        }
    }

    /// Sets or clears the selection pointer and publishes it.
    ///
    /// `Some(p)` seeds the form with `p`'s fields (edit-mode); `None`
    /// leaves the form empty (create-mode).
    pub fn set_current(&self, product: Option<Product>) {
        match &product {
            Some(p) => debug!(id = p.id, "current product set"),
            None => debug!("current product cleared"),
        }
        self.current.send_replace(product);
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{Money, ProductType};

    fn draft(name: &str, product_type: ProductType, cents: i64, quantity: u32) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            product_type,
            price: Money::from_cents(cents),
            quantity,
        }
    }

    #[test]
    fn test_empty_store() {
        let store = ProductStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.list(), vec![]);
        assert_eq!(store.current(), None);
    }

    #[test]
    fn test_add_assigns_id_one_on_empty_store() {
        let store = ProductStore::new();
        let product = store.add(draft("Tee", ProductType::TShirt, 1000, 5));

        assert_eq!(product.id, 1);
        let snapshot = store.list();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, 1);
        assert_eq!(snapshot[0].name, "Tee");
        assert_eq!(snapshot[0].product_type, ProductType::TShirt);
        assert_eq!(snapshot[0].price, Money::from_cents(1000));
        assert_eq!(snapshot[0].quantity, 5);
    }

    #[test]
    fn test_add_appends_at_end_with_unique_ids() {
        let store = ProductStore::new();
        let mut seen = Vec::new();

        for i in 0..10 {
            let before = store.len();
            let product = store.add(draft(&format!("Product {i}"), ProductType::Cap, 100, 1));

            assert!(product.id > 0);
            assert!(!seen.contains(&product.id));
            seen.push(product.id);

            let snapshot = store.list();
            assert_eq!(snapshot.len(), before + 1);
            assert_eq!(snapshot.last().unwrap().id, product.id);
        }
    }

    #[test]
    fn test_add_allows_duplicate_names() {
        let store = ProductStore::new();
        let a = store.add(draft("Cap", ProductType::Cap, 500, 1));
        let b = store.add(draft("Cap", ProductType::Cap, 500, 1));

        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let store = ProductStore::new();
        let first = store.add(draft("Tee", ProductType::TShirt, 1000, 5));
        let second = store.add(draft("Cap", ProductType::Cap, 500, 3));

        let edited = Product {
            name: "Premium Tee".to_string(),
            price: Money::from_cents(1500),
            ..first.clone()
        };
        store.update(edited.clone());

        let snapshot = store.list();
        assert_eq!(snapshot.len(), 2);
        // Position preserved: edited entry still first
        assert_eq!(snapshot[0], edited);
        assert_eq!(snapshot[1], second);
    }

    #[test]
    fn test_update_absent_id_is_silent_noop() {
        let store = ProductStore::new();
        let product = store.add(draft("Tee", ProductType::TShirt, 1000, 5));

        let ghost = Product {
            id: 999,
            name: "Ghost".to_string(),
            product_type: ProductType::Sweatshirt,
            price: Money::from_cents(1),
            quantity: 1,
        };
        store.update(ghost);

        assert_eq!(store.list(), vec![product]);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let store = ProductStore::new();
        let first = store.add(draft("Tee", ProductType::TShirt, 1000, 5));
        let second = store.add(draft("Cap", ProductType::Cap, 500, 3));

        store.delete(&first);

        // The survivor keeps its id and its (now only) position
        let snapshot = store.list();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, second.id);
        assert_eq!(snapshot[0], second);
    }

    #[test]
    fn test_delete_absent_id_is_silent_noop() {
        let store = ProductStore::new();
        let product = store.add(draft("Tee", ProductType::TShirt, 1000, 5));

        store.delete(&product);
        store.delete(&product); // second delete finds nothing

        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_never_reused_after_delete() {
        let store = ProductStore::new();
        let a = store.add(draft("A", ProductType::TShirt, 100, 1));
        let b = store.add(draft("B", ProductType::Cap, 100, 1));

        store.delete(&a);
        store.delete(&b);

        // A count-based scheme would hand out 1 again here
        let c = store.add(draft("C", ProductType::Sweatshirt, 100, 1));
        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_set_current_round_trip() {
        let store = ProductStore::new();
        let product = store.add(draft("Tee", ProductType::TShirt, 1000, 5));

        assert_eq!(store.current(), None);

        store.set_current(Some(product.clone()));
        assert_eq!(store.current(), Some(product));

        store.set_current(None);
        assert_eq!(store.current(), None);
    }

    // =========================================================================
    // Observer Tests
    // =========================================================================

    #[tokio::test]
    async fn test_subscriber_receives_full_snapshot() {
        let store = ProductStore::new();
        let mut rx = store.subscribe();

        let product = store.add(draft("Tee", ProductType::TShirt, 1000, 5));

        rx.changed().await.unwrap();
        let snapshot = rx.borrow_and_update().clone();
        assert_eq!(snapshot, vec![product]);
    }

    #[tokio::test]
    async fn test_late_subscriber_sees_latest_snapshot() {
        let store = ProductStore::new();
        store.add(draft("Tee", ProductType::TShirt, 1000, 5));
        store.add(draft("Cap", ProductType::Cap, 500, 3));

        // Subscribing after the mutations: the latest snapshot is
        // available immediately, no change event required
        let rx = store.subscribe();
        assert_eq!(rx.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_noop_mutations_publish_nothing() {
        let store = ProductStore::new();
        let product = store.add(draft("Tee", ProductType::TShirt, 1000, 5));

        let mut rx = store.subscribe();
        rx.borrow_and_update();

        let ghost = Product { id: 999, ..product.clone() };
        store.update(ghost.clone());
        store.delete(&ghost);

        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_current_pointer_is_observable() {
        let store = ProductStore::new();
        let product = store.add(draft("Tee", ProductType::TShirt, 1000, 5));

        let mut rx = store.subscribe_current();
        assert_eq!(*rx.borrow_and_update(), None);

        store.set_current(Some(product.clone()));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), Some(product));
    }
}
