//! Backend API Bindings
//!
//! REST bindings to the todo backend, organized by resource.

mod todo;

pub use todo::*;
