mod acknowledge;
mod admin;
mod health;
mod publish;
mod receive;
mod register;
mod subscribe;

pub use acknowledge::acknowledge;
pub use admin::{admin_messages, admin_topics};
pub use health::healthz;
pub use publish::publish;
pub use receive::receive;
pub use register::register;
pub use subscribe::{list_subscriptions, subscribe, unsubscribe};
