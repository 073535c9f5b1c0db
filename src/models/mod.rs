pub mod event;
pub mod registration;
pub mod session;
pub mod speaker;
pub mod sponsor;

pub use event::Event;
pub use registration::Registration;
pub use session::Session;
pub use speaker::Speaker;
pub use sponsor::Sponsor;

pub(crate) fn default_true() -> bool {
    true
}
