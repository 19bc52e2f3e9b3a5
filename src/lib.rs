pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
pub mod panel;
pub mod store;
pub mod tui;
pub mod util;
