pub mod filter;
pub mod group;
pub mod sort;
pub mod view;

pub use filter::apply_filters;
pub use group::{GroupContent, GroupLevel, GroupNode, group_by_contract, group_by_hierarchy};
pub use sort::apply_sort;
pub use view::{ActiveView, ViewMode, ViewResult, compute};
