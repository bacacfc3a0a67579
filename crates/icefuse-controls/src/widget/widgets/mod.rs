//! Concrete widget implementations.

mod floating_select;

pub use floating_select::{FloatingSelect, SelectAllState, SelectOption, SelectionChange};
