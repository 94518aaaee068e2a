// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Canned props records.

use propflux_stream::{PropValue, Props};

/// `{ foo: "foo" }`
pub fn props_foo() -> Props {
    props_with("foo", "foo")
}

/// `{ foo: "bar" }`
pub fn props_bar() -> Props {
    props_with("foo", "bar")
}

/// `{ label: "OK", disabled: false }`
pub fn props_button() -> Props {
    Props::new().with("label", "OK").with("disabled", false)
}

/// A record with a single field.
pub fn props_with(key: &str, value: impl Into<PropValue>) -> Props {
    Props::new().with(key, value)
}
