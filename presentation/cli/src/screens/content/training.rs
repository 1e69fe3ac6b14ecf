use business::domain::content::training::{MaterialKind, TrainingMaterial, by_kind, catalog};

use crate::screens::alert::ScreenResult;

pub fn show(kind: Option<MaterialKind>) -> ScreenResult {
    let materials: Vec<&TrainingMaterial> = match kind {
        Some(kind) => by_kind(kind),
        None => catalog().iter().collect(),
    };
    Ok(render(&materials))
}

fn render(materials: &[&TrainingMaterial]) -> String {
    let mut lines = vec![
        "Training Materials".to_string(),
        "Professional guides and treatment protocols".to_string(),
        String::new(),
    ];
    for material in materials {
        lines.push(format!("[{}] {}", material.kind, material.title));
        lines.push(format!("    {}", material.description));
        match material.parsed_url() {
            Ok(url) => lines.push(format!(
                "    {} ({})",
                url,
                url.host_str().unwrap_or_default()
            )),
            Err(_) => lines.push("    Link unavailable".to_string()),
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_list_whole_catalog_without_kind() {
        let rendered = show(None).unwrap();

        assert!(rendered.contains("[PDF] Professional Manual 2026"));
        assert!(rendered.contains("[Video] Genosys HAIRGEN BOOSTER"));
    }

    #[test]
    fn should_show_link_with_its_host() {
        let rendered = show(Some(MaterialKind::Pdf)).unwrap();

        assert!(rendered.contains(
            "https://genosys.ae/documents/ppt/Professional%20Manual%202026.pdf (genosys.ae)"
        ));
    }

    #[test]
    fn should_mark_unparseable_link() {
        let broken = TrainingMaterial {
            id: "9",
            title: "Broken",
            description: "No link",
            url: "not a url",
            kind: MaterialKind::Pdf,
        };

        let rendered = render(&[&broken]);

        assert!(rendered.contains("Link unavailable"));
    }

    #[test]
    fn should_list_only_videos() {
        let rendered = show(Some(MaterialKind::Video)).unwrap();

        assert!(!rendered.contains("[PDF]"));
        assert_eq!(rendered.matches("[Video]").count(), 2);
    }
}
