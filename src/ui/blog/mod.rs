//! The blog view state machine: list/detail navigation, category filtering
//! and comment submission, in MVI form.

mod intent;
mod reducer;
mod state;

pub use intent::BlogIntent;
pub use reducer::BlogReducer;
pub use state::{BlogState, CommentField, Screen};
