//! Notes: plain CRUD over the note table

pub mod service;

pub use service::NoteService;
