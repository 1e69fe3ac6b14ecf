use business::domain::auth::model::User;

use crate::screens::format::initial;

const DEFAULT_INITIAL: char = 'U';
const DEFAULT_NAME: &str = "User Name";
const DEFAULT_EMAIL: &str = "user@example.com";

pub fn welcome(user: &User, registered: bool) -> String {
    let headline = if registered {
        "Account created successfully! Please check your email for verification."
    } else {
        "Login successful!"
    };
    format!("Success: {}\nSigned in as {} <{}>", headline, user.name, user.email)
}

/// Profile card; every field falls back to a placeholder when nobody is signed in.
pub fn profile(user: Option<&User>) -> String {
    let name = user
        .map(|u| u.name.as_str())
        .filter(|n| !n.trim().is_empty())
        .unwrap_or(DEFAULT_NAME);
    let email = user
        .map(|u| u.email.as_str())
        .filter(|e| !e.trim().is_empty())
        .unwrap_or(DEFAULT_EMAIL);
    let avatar = user
        .map(|u| initial(&u.name, DEFAULT_INITIAL))
        .unwrap_or(DEFAULT_INITIAL);

    let mut lines = vec![
        "My Profile".to_string(),
        "Manage your account".to_string(),
        String::new(),
        format!("[{}] {}", avatar, name),
        format!("    {}", email),
    ];
    if let Some(user) = user {
        lines.push(format!("    Role: {}", user.role));
        if let Some(phone) = &user.phone {
            lines.push(format!("    Phone: {}", phone));
        }
    }
    lines.join("\n")
}
