//! # catalog-store: Observable In-Memory Product Store
//!
//! The stateful layer of the catalog. One [`ProductStore`] is constructed
//! per application session and shared by reference with every
//! presentation collaborator.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Collaborator Call Surface                          │
//! │                                                                         │
//! │  List screen ──► subscribe() / set_current(p) / delete(&p)             │
//! │  Form screen ──► current() / add(draft) / update(p) / set_current(None)│
//! │                                                                         │
//! │                        ┌──────────────────┐                             │
//! │                        │   ProductStore   │                             │
//! │                        │  (this crate)    │                             │
//! │                        └────────┬─────────┘                             │
//! │                                 │ watch channels                        │
//! │                 full snapshots, replay-latest                           │
//! │                                 ▼                                       │
//! │                        every subscriber                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All state is lost on process exit; there is no persistence tier.

pub mod store;

pub use store::ProductStore;
