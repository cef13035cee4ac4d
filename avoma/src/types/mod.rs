//! Typed records for every Avoma resource, plus their query and request bodies.
//!
//! Each resource lives in its own module and is referred to qualified, e.g.
//! `meeting::Meeting`, `meeting::Query`, `call::Create`, `user::Update`.

pub mod call;
pub mod common;
pub mod meeting;
pub mod note;
pub mod recording;
pub mod sentiment;
pub mod smart_category;
pub mod template;
pub mod transcription;
pub mod user;

pub use common::MeetingAttribute;
