use tu_core::{UserIdentity, user_properties};

use std::fmt::Write;

/// Human-readable summary of a user and every profile property
pub fn render_user(user: &UserIdentity) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "{user}");
    let _ = writeln!(out, "  display name: {}", user.display_name());
    let _ = writeln!(out, "  stable id:    {}", user.stable_id());
    let _ = writeln!(out, "  guest:        {}", user.is_guest());
    for (property, value) in user.property_values() {
        let _ = writeln!(
            out,
            "  {:<13} {}",
            format!("{}:", property.display_label()),
            value.as_deref().unwrap_or("-")
        );
    }

    out.trim_end().to_string()
}

/// One line per descriptor: name, label, serialization key and flags
pub fn render_properties() -> String {
    user_properties()
        .iter()
        .map(|property| {
            let flags = property
                .flags()
                .as_array()
                .iter()
                .map(|flag| if *flag { "1" } else { "0" })
                .collect::<String>();
            format!(
                "{:<13} {:<13} {:<13} {}",
                property.name(),
                property.display_label(),
                property.serialization_key(),
                flags
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
