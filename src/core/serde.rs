/// Serde helper functions for compact serialization
///
/// Used with `skip_serializing_if` to drop zero/false/none fields from the
/// JSON view.

/// Skip serializing if Option is None
pub fn is_none<T>(value: &Option<T>) -> bool {
    value.is_none()
}

/// Skip serializing if value is false
pub fn is_false(value: &bool) -> bool {
    !*value
}

/// Skip serializing if value is zero
pub fn is_zero_usize(value: &usize) -> bool {
    *value == 0
}
