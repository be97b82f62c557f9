use crate::domain::model::{Intro, Labels, Profile, ProjectEntry, SkillEntry};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{find_duplicate, validate_non_empty_string, validate_url};
use serde::Serialize;

pub const DEFAULT_COPYRIGHT_YEAR: u16 = 2025;

/// Read-only portfolio content. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentStore {
    profile: Profile,
    intro: Intro,
    labels: Labels,
    projects: Vec<ProjectEntry>,
    skills: Vec<SkillEntry>,
    copyright_year: u16,
}

impl ContentStore {
    pub fn new(
        profile: Profile,
        intro: Intro,
        labels: Labels,
        projects: Vec<ProjectEntry>,
        skills: Vec<SkillEntry>,
    ) -> Result<Self> {
        validate_non_empty_string("profile.name", &profile.name)?;
        validate_url("profile.github", &profile.github)?;

        if let Some(id) = find_duplicate(projects.iter().map(|p| p.id)) {
            return Err(SiteError::DuplicateProjectId { id });
        }
        for project in &projects {
            validate_non_empty_string(&format!("projects[{}].title", project.id), &project.title)?;
            validate_url(&format!("projects[{}].link", project.id), &project.link)?;
        }
        for (index, skill) in skills.iter().enumerate() {
            validate_non_empty_string(&format!("skills[{}].name", index), &skill.name)?;
        }

        Ok(Self {
            profile,
            intro,
            labels,
            projects,
            skills,
            copyright_year: DEFAULT_COPYRIGHT_YEAR,
        })
    }

    pub fn with_copyright_year(mut self, year: u16) -> Self {
        self.copyright_year = year;
        self
    }

    /// The compiled-in portfolio.
    pub fn builtin() -> Self {
        Self {
            profile: builtin_profile(),
            intro: builtin_intro(),
            labels: Labels::default(),
            projects: builtin_projects(),
            skills: builtin_skills(),
            copyright_year: DEFAULT_COPYRIGHT_YEAR,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn intro(&self) -> &Intro {
        &self.intro
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn projects(&self) -> &[ProjectEntry] {
        &self.projects
    }

    pub fn skills(&self) -> &[SkillEntry] {
        &self.skills
    }

    pub fn copyright_year(&self) -> u16 {
        self.copyright_year
    }

    /// First word of the profile name, shown as the nav brand.
    pub fn brand(&self) -> &str {
        self.profile
            .name
            .split_whitespace()
            .next()
            .unwrap_or(&self.profile.name)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn builtin_profile() -> Profile {
    Profile {
        name: "Thomas P".to_string(),
        role: "Ingénieur ESIEA - IA & Systèmes Embarqués".to_string(),
        school: "ESIEA Paris (2021-2027)".to_string(),
        github: "https://github.com/K4yan0".to_string(),
        slogan: "“L'intelligence artificielle au service de l'homme.”".to_string(),
    }
}

pub fn builtin_intro() -> Intro {
    Intro {
        pitch: "Étudiant en 4e année d'ingénierie informatique passionné par l'intelligence \
                artificielle et les systèmes embarqués. Je m'intéresse particulièrement à \
                l'application de l'IA aux technologies critiques comme les drones et les \
                systèmes spatiaux. Je recherche un stage pour mettre à profit ma rigueur \
                technique au sein d'une équipe tournée vers l'innovation."
            .to_string(),
        badge: "Ingénieur ESIEA 2027".to_string(),
        objective: "Stage Ingénieur (IA/Embarqué)".to_string(),
        vision: "\"Je souhaite devenir un ingénieur capable de faire le pont entre la recherche \
                 en IA et les contraintes physiques des systèmes embarqués, pour contribuer à \
                 des projets aérospatiaux innovants et sûrs.\""
            .to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn builtin_projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry {
            id: 1,
            title: "Astro-Classifier RF".to_string(),
            tags: strings(&["Python", "Machine Learning", "Streamlit", "NASA API"]),
            context: "Projet Personnel - Data Science & Espace".to_string(),
            description: "Classification d'astéroïdes potentiellement dangereux (PHA) à partir \
                          de données orbitales de la NASA."
                .to_string(),
            details: strings(&[
                "Pipeline complet : Acquisition, Nettoyage, EDA, Entraînement.",
                "Modèle Random Forest atteignant 99.86% de précision.",
                "Développement d'une Web App interactive (Streamlit) pour simuler les risques en temps réel.",
                "Identification autonome des facteurs de risque (Taille 'H' et Proximité 'moid').",
            ]),
            image: "/portfolio/app_monitor.png".to_string(),
            link: "https://github.com/K4yan0/asteroid-risk-prediction".to_string(),
        },
        ProjectEntry {
            id: 2,
            title: "Exoplanet Detection".to_string(),
            tags: strings(&["Deep Learning", "CNN 1D", "TensorFlow", "Astro-Physics"]),
            context: "Projet Académique - Recherche ML vs DL".to_string(),
            description: "Comparaison d'approches pour la détection d'exoplanètes via les \
                          courbes de lumière TESS/Kepler."
                .to_string(),
            details: strings(&[
                "Traitement de +300 000 séries chronologiques de flux stellaires.",
                "Comparaison : Random Forest vs Réseau de neurones convolutif (CNN 1D).",
                "Le CNN 1D a appris automatiquement les signatures de transit sur les données brutes.",
                "Amélioration significative des scores F1 et PR-AUC par rapport aux méthodes classiques.",
            ]),
            image: "/portfolio/logo.png".to_string(),
            link: "https://github.com/K4yan0/exoplanet-detection-ml".to_string(),
        },
    ]
}

pub fn builtin_skills() -> Vec<SkillEntry> {
    vec![
        SkillEntry {
            name: "IA & Data".to_string(),
            icons: "TensorFlow, Keras, Scikit-learn, Pandas".to_string(),
            description: "Machine Learning, Deep Learning, Data Analysis".to_string(),
            glyph: None,
        },
        SkillEntry {
            name: "Dev & Outils".to_string(),
            icons: "Python, C, Java, SQL, Git, Docker".to_string(),
            description: "Développement logiciel rigoureux, CI/CD".to_string(),
            glyph: None,
        },
        SkillEntry {
            name: "Soft Skills".to_string(),
            icons: "Adaptabilité, Gestion, Communication".to_string(),
            description: "Trésorier BDE (Gestion budget), Stage HEGP (Autonomie)".to_string(),
            glyph: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_store_is_valid() {
        let store = ContentStore::builtin();
        let rebuilt = ContentStore::new(
            store.profile().clone(),
            store.intro().clone(),
            store.labels().clone(),
            store.projects().to_vec(),
            store.skills().to_vec(),
        )
        .unwrap();
        assert_eq!(rebuilt, store);
    }

    #[test]
    fn test_builtin_order() {
        let store = ContentStore::builtin();
        let ids: Vec<u32> = store.projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(store.projects()[0].title, "Astro-Classifier RF");
        assert_eq!(store.skills().len(), 3);
        assert_eq!(store.brand(), "Thomas");
    }

    #[test]
    fn test_duplicate_project_ids_rejected() {
        let mut projects = builtin_projects();
        projects[1].id = 1;
        let err = ContentStore::new(
            builtin_profile(),
            builtin_intro(),
            Labels::default(),
            projects,
            builtin_skills(),
        )
        .unwrap_err();
        assert!(matches!(err, SiteError::DuplicateProjectId { id: 1 }));
    }

    #[test]
    fn test_project_link_must_be_http() {
        let mut projects = builtin_projects();
        projects[0].link = "not a url".to_string();
        let result = ContentStore::new(
            builtin_profile(),
            builtin_intro(),
            Labels::default(),
            projects,
            builtin_skills(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_to_json_lists_projects_in_order() {
        let json = ContentStore::builtin().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["projects"][0]["id"], 1);
        assert_eq!(value["projects"][1]["title"], "Exoplanet Detection");
    }
}
