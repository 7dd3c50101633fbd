//! Luxe Store - record store collaborator
//!
//! The site keeps two kinds of records in a hosted Postgres database exposed
//! over PostgREST (Supabase): portfolio [`Project`]s, read by the gallery, and
//! [`ConsultationRequest`]s, written by the booking form. Views talk to the
//! database only through the [`RecordStore`] trait.
//!
//! - [`RestRecordStore`]: PostgREST client built on `reqwest`
//! - [`MemoryRecordStore`]: in-process store for tests and offline demos
//! - [`UnconfiguredStore`]: what the site uses when no credentials are set
//!
//! ## Example
//!
//! ```ignore
//! use luxe_store::{ProjectQuery, RecordStore, StoreSettings, connect};
//!
//! let store = connect(StoreSettings::from_env()?);
//! let projects = store
//!     .list_projects(&ProjectQuery::new().order_by_display_order())
//!     .await?;
//! ```

mod error;
mod memory;
mod models;
mod query;
mod rest;
mod settings;
mod store;

pub use error::{SettingsError, StoreError};
pub use memory::MemoryRecordStore;
pub use models::{ConsultationRequest, Project};
pub use query::{ProjectOrder, ProjectQuery};
pub use rest::RestRecordStore;
pub use settings::StoreSettings;
pub use store::{RecordStore, UnconfiguredStore, connect};
