use crate::terminal::colors;
use colored::*;
use thera_common::connection::{ConnectionRecord, ConnectionTag, SignatureSnapshot};

type Detail = (String, ColoredString);

pub fn route(connection: &ConnectionRecord) -> String {
    format!("{} → {}", connection.source.name, connection.target.name)
}

pub fn security(system_class: f64) -> ColoredString {
    let text = format!("{system_class:.1}");
    match system_class {
        s if s >= 0.45 => text.color(colors::HIGH_SEC),
        s if s > 0.0 => text.color(colors::LOW_SEC),
        _ => text.color(colors::NULL_SEC),
    }
}

pub fn details(connection: &ConnectionRecord) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        (
            "Region".to_string(),
            connection.target.region.name.as_str().color(colors::SECONDARY),
        ),
        ("Security".to_string(), security(connection.target.system_class)),
        (
            "Sigs".to_string(),
            format!(
                "{} → {}",
                signature(&connection.source_signature),
                signature(&connection.target_signature)
            )
            .normal(),
        ),
    ];

    let kind = connection
        .source_signature
        .kind
        .as_ref()
        .or(connection.target_signature.kind.as_ref());
    if let Some(kind) = kind {
        details.push(("Type".to_string(), kind.name.as_str().color(colors::ACCENT)));
    }

    let mut status: Vec<&str> = connection.tags.iter().filter_map(|t| tag_label(*t)).collect();
    if status.is_empty() {
        status.push("stable");
    }
    let status = status.join(", ");
    let status = if connection.tags.contains(&ConnectionTag::Eol) {
        status.red().bold()
    } else {
        status.green()
    };
    details.push(("Status".to_string(), status));
    details.push(("EOL".to_string(), format!("{}h", connection.estimated_eol).normal()));

    details
}

fn signature(signature: &SignatureSnapshot) -> String {
    signature.name.clone().unwrap_or_else(|| "???".to_string())
}

fn tag_label(tag: ConnectionTag) -> Option<&'static str> {
    match tag {
        ConnectionTag::Fresh => None,
        ConnectionTag::Eol => Some("end of life"),
        ConnectionTag::JumpMassXl => Some("capital mass"),
        ConnectionTag::JumpMassL => Some("large mass"),
        ConnectionTag::JumpMassM => Some("medium mass"),
        ConnectionTag::JumpMassS => Some("small mass"),
    }
}
