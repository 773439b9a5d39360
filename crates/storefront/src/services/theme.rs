//! Persisted light/dark preference.

use elyosr_core::Theme;

use crate::storage::{LocalStore, StorageError, keys};

/// Read the stored theme. Missing or unreadable values mean light.
#[must_use]
pub fn load_theme(storage: &dyn LocalStore) -> Theme {
    match storage.get(keys::THEME) {
        Ok(Some(value)) => Theme::from_stored(&value),
        Ok(None) => Theme::default(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read theme, using light");
            Theme::default()
        }
    }
}

/// Store `theme`.
///
/// # Errors
///
/// Returns an error if the value could not be written.
pub fn save_theme(storage: &dyn LocalStore, theme: Theme) -> Result<(), StorageError> {
    storage.set(keys::THEME, theme.as_str())
}

/// Flip `current`, store the result, and return it.
///
/// # Errors
///
/// Returns an error if the new value could not be written; the caller still
/// decides whether to keep the flipped theme for the session.
pub fn toggle_theme(storage: &dyn LocalStore, current: Theme) -> Result<Theme, StorageError> {
    let next = current.toggled();
    save_theme(storage, next)?;
    tracing::debug!(theme = %next, "theme toggled");
    Ok(next)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_default_is_light() {
        assert_eq!(load_theme(&MemoryStore::new()), Theme::Light);
    }

    #[test]
    fn test_stored_dark() {
        let storage = MemoryStore::with_entries([(keys::THEME, "dark")]);
        assert_eq!(load_theme(&storage), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let storage = MemoryStore::new();
        let next = toggle_theme(&storage, Theme::Light).unwrap();
        assert_eq!(next, Theme::Dark);
        assert_eq!(storage.get(keys::THEME).unwrap().as_deref(), Some("dark"));

        let next = toggle_theme(&storage, next).unwrap();
        assert_eq!(next, Theme::Light);
        assert_eq!(load_theme(&storage), Theme::Light);
    }
}
