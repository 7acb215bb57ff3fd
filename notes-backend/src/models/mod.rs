mod share_grant;

pub use notes_types::Note;
pub use share_grant::ShareGrant;
