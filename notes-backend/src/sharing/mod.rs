//! Share links: unguessable tokens that grant read access to one note for a
//! fixed period.
//!
//! Issuing a link checks that the note exists, then records a grant that
//! expires [`service::SHARE_TTL_DAYS`] days later. Resolving a link re-checks, in order, that the
//! grant exists, that it has not expired, and that the note still exists.
//! Every failure looks the same to the caller.

pub mod service;
pub mod token;

pub use service::SharingService;
