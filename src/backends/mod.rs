//! Backends that turn a [`RepeatDocument`](crate::document::RepeatDocument) into files.

#[allow(non_snake_case)]
pub mod C;
