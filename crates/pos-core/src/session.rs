//! Screens and the login gate
//!
//! The backend keeps the session in a cookie. The client only checks that
//! the cookie is present; the backend stays the authority and answers 401
//! when it disagrees.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Order,
    Transactions,
    Menu,
    Report,
    Account,
    Login,
}

impl Screen {
    /// Entries of the navigation bar, in display order
    pub const NAV: [Screen; 5] = [
        Screen::Order,
        Screen::Transactions,
        Screen::Menu,
        Screen::Report,
        Screen::Account,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Order => "Home",
            Screen::Transactions => "Transaksi",
            Screen::Menu => "Menu",
            Screen::Report => "Laporan",
            Screen::Account => "Akun",
            Screen::Login => "Login",
        }
    }

    /// Reachable without a session
    pub fn is_public(&self) -> bool {
        matches!(self, Screen::Login)
    }
}

/// Whether `cookies` (a `document.cookie` string) contains `key`
pub fn has_auth_cookie(cookies: &str, key: &str) -> bool {
    cookies
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .any(|(name, value)| name.trim() == key && !value.trim().is_empty())
}

/// Screen actually shown for a navigation request
pub fn guard(requested: Screen, logged_in: bool) -> Screen {
    if logged_in || requested.is_public() {
        requested
    } else {
        Screen::Login
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_lookup() {
        assert!(has_auth_cookie("theme=dark; token=abc.def", "token"));
        assert!(has_auth_cookie("token=abc", "token"));
        assert!(!has_auth_cookie("theme=dark; mytoken=abc", "token"));
        assert!(!has_auth_cookie("token=", "token"));
        assert!(!has_auth_cookie("", "token"));
    }

    #[test]
    fn test_guard_redirects_private_screens() {
        for screen in Screen::NAV {
            assert_eq!(guard(screen, false), Screen::Login);
            assert_eq!(guard(screen, true), screen);
        }
        assert_eq!(guard(Screen::Login, false), Screen::Login);
    }
}
