pub mod absence;
pub mod calendar;
pub mod dashboard;
pub mod nav;
pub mod profile;
pub mod shell;
pub mod toasts;
pub mod volunteer;
