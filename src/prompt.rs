//! Agent instructions built from the persona and menu

use std::fmt::Write;

use crate::menu::Menu;
use crate::persona::Persona;

/// Build the persona instructions handed to the host runtime
///
/// Lists every required order field with its examples, then the process
/// rules, numbered and bulleted the same way regardless of persona.
#[must_use]
pub fn build_instructions(persona: &Persona) -> String {
    let mut out = String::new();

    let description = persona
        .personality
        .as_ref()
        .and_then(|p| p.description.clone())
        .unwrap_or_else(|| default_description(persona));
    out.push_str(&description);
    out.push_str("\n\n");

    let fields = &persona.ordering.fields;
    if !fields.is_empty() {
        let _ = writeln!(
            out,
            "Your goal is to take a coffee order. You MUST obtain the following {} pieces of information before finishing:",
            fields.len()
        );
        for (i, field) in fields.iter().enumerate() {
            if field.examples.is_empty() {
                let _ = writeln!(out, "{}. {}", i + 1, field.label);
            } else {
                let _ = writeln!(
                    out,
                    "{}. {} (e.g., {})",
                    i + 1,
                    field.label,
                    field.examples.join(", ")
                );
            }
        }
    }

    if !persona.ordering.process.is_empty() {
        if !fields.is_empty() {
            out.push('\n');
        }
        out.push_str("Process:\n");
        for rule in &persona.ordering.process {
            let _ = writeln!(out, "- {rule}");
        }
    }

    out.trim_end().to_string()
}

/// Build the full system prompt: instructions plus the opening menu announcement
#[must_use]
pub fn build_system_prompt(persona: &Persona, menu: &Menu) -> String {
    format!(
        "{}\n\nOpen the conversation by sharing this menu overview, then take the order:\n{}",
        build_instructions(persona),
        menu.format_menu_text()
    )
}

fn default_description(persona: &Persona) -> String {
    let traits = persona.traits();
    let character = if traits.is_empty() {
        persona.identity.name.clone()
    } else {
        format!("{} {}", traits.join(", "), persona.identity.name)
    };
    let article = if character.starts_with(['a', 'e', 'i', 'o', 'u']) {
        "an"
    } else {
        "a"
    };

    match &persona.identity.tagline {
        Some(tagline) => format!(
            "You are {article} {character} at '{}', {tagline}.",
            persona.shop()
        ),
        None => format!("You are {article} {character} at '{}'.", persona.shop()),
    }
}
