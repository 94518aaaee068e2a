// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Derives the props field that carries the handler for event `id`.
///
/// The first character is uppercased, the remainder lowercased, and the result
/// prefixed with `on`. The same key is used to attach the handler and to look
/// it up again.
///
/// An empty `id` yields the bare prefix `"on"`.
///
/// ```
/// use propflux_stream::derive_key;
///
/// assert_eq!(derive_key("baz"), "onBaz");
/// assert_eq!(derive_key("EVENT"), "onEvent");
/// assert_eq!(derive_key("doubleClick"), "onDoubleclick");
/// ```
#[must_use]
pub fn derive_key(id: &str) -> String {
    let mut chars = id.chars();
    let mut key = String::with_capacity(id.len() + 2);
    key.push_str("on");
    if let Some(first) = chars.next() {
        key.extend(first.to_uppercase());
        key.push_str(&chars.as_str().to_lowercase());
    }
    key
}
