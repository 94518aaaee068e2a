// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types shared by the propflux crates.
//!
//! - [`StreamItem`]: the value-or-error item flowing through every props stream
//! - [`PropsError`]: the root error type carried in-band by [`StreamItem::Error`]
//! - [`Subject`]: a hot, manually-fed stream used as a side-channel

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error;
pub mod stream_item;
pub mod subject;
pub mod subject_error;

pub use self::error::{IntoPropsError, PropsError, Result, ResultExt};
pub use self::stream_item::StreamItem;
pub use self::subject::{Subject, SubjectBoxStream};
pub use self::subject_error::SubjectError;
