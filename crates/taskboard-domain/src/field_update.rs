/// Three-state update for an optional field in a partial-update request.
///
/// `NoChange` keeps the existing value, `Set` replaces it, and `Clear`
/// empties it. A plain `Option` cannot distinguish "leave alone" from
/// "set to None", which is why clearable task fields (assignee, due
/// date) use this instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    NoChange,
    Set(T),
    Clear,
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::NoChange
    }
}

impl<T> FieldUpdate<T> {
    /// Apply this update to an optional field.
    ///
    /// ```
    /// use taskboard_domain::FieldUpdate;
    ///
    /// let mut field = Some("old".to_string());
    /// FieldUpdate::Set("new".to_string()).apply_to(&mut field);
    /// assert_eq!(field, Some("new".to_string()));
    ///
    /// FieldUpdate::<String>::Clear.apply_to(&mut field);
    /// assert_eq!(field, None);
    /// ```
    pub fn apply_to(self, field: &mut Option<T>) {
        match self {
            FieldUpdate::NoChange => {}
            FieldUpdate::Set(value) => *field = Some(value),
            FieldUpdate::Clear => *field = None,
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    /// `Some` becomes `Set`, `None` becomes `Clear`.
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => FieldUpdate::Set(value),
            None => FieldUpdate::Clear,
        }
    }
}
