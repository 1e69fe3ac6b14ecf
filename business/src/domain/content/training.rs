use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    Pdf,
    Video,
}

impl std::fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialKind::Pdf => write!(f, "PDF"),
            MaterialKind::Video => write!(f, "Video"),
        }
    }
}

impl std::str::FromStr for MaterialKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(MaterialKind::Pdf),
            "video" => Ok(MaterialKind::Video),
            _ => Err(format!("Invalid material kind: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingMaterial {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub kind: MaterialKind,
}

impl TrainingMaterial {
    pub fn parsed_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(self.url)
    }
}

const CATALOG: [TrainingMaterial; 5] = [
    TrainingMaterial {
        id: "1",
        title: "Professional Manual 2026",
        description: "Complete professional training manual for Genosys products",
        url: "https://genosys.ae/documents/ppt/Professional%20Manual%202026.pdf",
        kind: MaterialKind::Pdf,
    },
    TrainingMaterial {
        id: "2",
        title: "Facial Treatment Homecare 2026",
        description: "Homecare treatment protocols and procedures",
        url: "https://genosys.ae/documents/ppt/GENOSYS%20FACIAL%20TREATMENT_Homecare_2025.pdf",
        kind: MaterialKind::Pdf,
    },
    TrainingMaterial {
        id: "3",
        title: "Facial Treatment Professional 2026",
        description: "Professional treatment protocols for clinics",
        url: "https://genosys.ae/documents/ppt/GENOSYS%20FACIAL%20TREATMENT_Professional_2025.pdf",
        kind: MaterialKind::Pdf,
    },
    TrainingMaterial {
        id: "4",
        title: "Genosys HAIRGEN BOOSTER",
        description: "Professional hair treatment training video",
        url: "https://www.youtube.com/watch?v=dsS-d8HahQA",
        kind: MaterialKind::Video,
    },
    TrainingMaterial {
        id: "5",
        title: "HR3 MATRIX Anti Hair Loss Treatment",
        description: "Anti-hair loss treatment protocols",
        url: "https://www.youtube.com/watch?v=XwOIRrizmF4",
        kind: MaterialKind::Video,
    },
];

pub fn catalog() -> &'static [TrainingMaterial] {
    &CATALOG
}

pub fn by_kind(kind: MaterialKind) -> Vec<&'static TrainingMaterial> {
    CATALOG.iter().filter(|m| m.kind == kind).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_split_catalog_by_kind() {
        assert_eq!(catalog().len(), 5);
        assert_eq!(by_kind(MaterialKind::Pdf).len(), 3);
        assert_eq!(by_kind(MaterialKind::Video).len(), 2);
    }

    #[test]
    fn should_only_contain_valid_https_urls() {
        for material in catalog() {
            let url = material.parsed_url().unwrap();
            assert_eq!(url.scheme(), "https", "{}", material.title);
        }
    }
}
