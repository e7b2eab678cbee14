pub mod notification;

pub use notification::{Notification, DEFAULT_MESSAGE};
