use crate::model::ResourceKind;
use crate::ui::app::{App, Route, Screen};
use crate::ui::views::form::FormError;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // Overlays take every key while open
    if app.state().delete_confirmation().is_open() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
            _ => {}
        }
        return;
    }
    if app.state().menu().is_open() {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.menu_move(-1),
            KeyCode::Down | KeyCode::Char('j') => app.menu_move(1),
            KeyCode::Enter => app.menu_activate(),
            KeyCode::Esc | KeyCode::Char('m') => app.close_menu(),
            _ => {}
        }
        return;
    }

    match app.route() {
        Route::Home => handle_home_key(app, key),
        Route::List(view) if view.filter_input().is_some() => handle_filter_key(app, key),
        Route::List(_) => handle_list_key(app, key),
        Route::Form(_) => handle_form_key(app, key),
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('m') => app.open_menu(),
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => app.home_move(-1),
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => app.home_move(1),
        KeyCode::Enter => app.home_activate(),
        KeyCode::Char('x') => app.dismiss_notification(),
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('m') => app.open_menu(),
        KeyCode::Esc => app.open_screen(Screen::Home),
        KeyCode::Up | KeyCode::Char('k') => app.list_move(-1),
        KeyCode::Down | KeyCode::Char('j') => app.list_move(1),
        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') => app.prev_page(),
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') => app.next_page(),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(page) = c.to_digit(10) {
                app.go_to_page(page as usize);
            }
        }
        KeyCode::Char('a') => app.add_new(),
        KeyCode::Char('e') | KeyCode::Enter => app.edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('x') => app.dismiss_notification(),
        KeyCode::Char('f') => {
            if let Some(view) = app.list_view_mut() {
                if view.kind() == ResourceKind::Assignment {
                    view.open_filter_prompt();
                }
            }
        }
        KeyCode::Char('c') => {
            if let Some(view) = app.list_view_mut() {
                view.set_date_filter(None);
            }
        }
        _ => {}
    }
}

fn handle_filter_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            let committed = app.list_view_mut().map(|view| view.commit_filter_prompt());
            if let Some(Err(_)) = committed {
                app.warn(FormError::InvalidDate.to_string());
            }
        }
        KeyCode::Esc => {
            if let Some(view) = app.list_view_mut() {
                view.cancel_filter_prompt();
            }
        }
        KeyCode::Backspace => {
            if let Some(view) = app.list_view_mut() {
                view.filter_backspace();
            }
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
            if let Some(view) = app.list_view_mut() {
                view.filter_push(c);
            }
        }
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_form(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Left => app.form_cycle(false),
        KeyCode::Right => app.form_cycle(true),
        _ => {
            let Some(form) = app.form_mut() else {
                return;
            };
            match key.code {
                KeyCode::Tab | KeyCode::Down => form.focus_next(),
                KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
                KeyCode::Backspace => form.backspace(),
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    form.input_char(c)
                }
                _ => {}
            }
        }
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
