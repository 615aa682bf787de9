pub mod navigation_target;
pub mod role;
