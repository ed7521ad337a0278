pub mod activity;
pub mod content;
pub mod dispatch;
pub mod health;
pub mod lesson;
pub mod reflection;
pub mod render;
pub mod roster;
pub mod schema;
pub mod shared;
pub mod strategy;
