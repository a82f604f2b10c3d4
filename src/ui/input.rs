use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use super::router::Route;

/// Keyboard dispatch: arrows move the cursor, Enter activates the selected
/// record, Esc/Backspace walks up, letters jump between tabs, Space drives
/// the pause gate on the sensor detail screen.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::Enter => app.activate_selected(),
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        KeyCode::Char('o') => app.navigate(Route::Overview),
        KeyCode::Char('c') => app.navigate(Route::Cameras),
        KeyCode::Char('s') => app.navigate(Route::Sensors),
        KeyCode::Char(' ') => app.toggle_pause(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::SyntheticProvider;
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn letter_keys_switch_screens() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = App::new(Arc::new(SyntheticProvider::new()), runtime.handle().clone());
        handle_key(&mut app, key(KeyCode::Char('c')));
        assert_eq!(app.route, Route::Cameras);
        handle_key(&mut app, key(KeyCode::Char('s')));
        assert_eq!(app.route, Route::Sensors);
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.route, Route::Overview);
        app.shutdown();
    }
}
