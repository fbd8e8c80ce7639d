//! Terminal blog reader: a filterable article list, an article detail view
//! and a per-article comment feed with local comment submission.
//!
//! All state is in memory for the session; nothing is persisted and no
//! network is involved. State transitions follow an MVI layout: see
//! [`ui::blog`] for the state machine and [`model`] for the data it acts on.

pub mod config;
pub mod logging;
pub mod model;
pub mod ui;
