pub mod navigation_controller;
pub mod viewer;
