use portfolio_site::core::html::escape;
use portfolio_site::domain::model::{Intro, Labels, ProjectEntry, SkillEntry};
use portfolio_site::core::store::{builtin_intro, builtin_profile};
use portfolio_site::{ContentStore, PageOptions, PortfolioView, SectionId, SectionRenderer};

/// Splits `html` into the chunks that start at each occurrence of `marker`.
fn blocks<'a>(html: &'a str, marker: &str) -> Vec<&'a str> {
    let starts: Vec<usize> = html.match_indices(marker).map(|(i, _)| i).collect();
    starts
        .iter()
        .enumerate()
        .map(|(n, &start)| {
            let end = starts.get(n + 1).copied().unwrap_or(html.len());
            &html[start..end]
        })
        .collect()
}

/// Asserts that `needles` appear in `haystack` in the given order.
fn assert_in_order(haystack: &str, needles: &[String]) {
    let mut from = 0;
    for needle in needles {
        let found = haystack[from..]
            .find(needle.as_str())
            .unwrap_or_else(|| panic!("'{}' missing or out of order", needle));
        from += found + needle.len();
    }
}

fn project(id: u32, title: &str) -> ProjectEntry {
    ProjectEntry {
        id,
        title: title.to_string(),
        tags: vec![format!("{}-z", title), format!("{}-a", title)],
        context: format!("{} context", title),
        description: format!("{} <desc>", title),
        details: vec![format!("{} second", title), format!("{} first", title)],
        image: format!("/img/{}.png", id),
        link: format!("https://example.com/{}", id),
    }
}

fn store_with(projects: Vec<ProjectEntry>, skills: Vec<SkillEntry>) -> ContentStore {
    ContentStore::new(
        builtin_profile(),
        builtin_intro(),
        Labels::default(),
        projects,
        skills,
    )
    .unwrap()
}

#[test]
fn test_builtin_projects_render_in_order() {
    let store = ContentStore::builtin();
    let options = PageOptions::default();
    let html = SectionRenderer::new(&store, &options).render_page(SectionId::Home);

    let cards = blocks(&html, "<article data-project-id=");
    assert_eq!(cards.len(), 2);
    assert!(cards[0].starts_with(r#"<article data-project-id="1""#));
    assert!(cards[0].contains("Astro-Classifier RF"));
    assert!(cards[1].starts_with(r#"<article data-project-id="2""#));
    assert!(cards[1].contains("Exoplanet Detection"));
}

#[test]
fn test_every_project_field_is_rendered_verbatim_and_in_order() {
    // ids deliberately not sorted; titles not alphabetical
    let projects = vec![project(9, "Zeta"), project(3, "Alpha"), project(5, "Mid")];
    let store = store_with(projects.clone(), Vec::new());
    let options = PageOptions::default();
    let html = SectionRenderer::new(&store, &options).render_projects();

    let cards = blocks(&html, "<article data-project-id=");
    assert_eq!(cards.len(), projects.len());

    for (card, project) in cards.iter().zip(&projects) {
        assert!(card.starts_with(&format!(r#"<article data-project-id="{}""#, project.id)));
        let mut expected = vec![
            escape(&project.title),
            escape(&project.context),
        ];
        expected.extend(project.tags.iter().map(|t| escape(t)));
        expected.push(format!(r#"href="{}""#, project.link));
        expected.push(escape(&project.description));
        expected.extend(project.details.iter().map(|d| escape(d)));
        assert_in_order(card, &expected);
        assert!(card.contains(&format!(r#"src="{}""#, project.image)));
    }
}

#[test]
fn test_empty_project_list_renders_no_cards() {
    let store = store_with(Vec::new(), Vec::new());
    let options = PageOptions::default();
    let html = SectionRenderer::new(&store, &options).render_page(SectionId::Projects);
    assert!(!html.contains("data-project-id="));
    assert!(!html.contains("data-skill-index="));
    assert!(html.contains(r#"id="projects""#));
}

#[test]
fn test_skills_render_in_order_with_all_fields() {
    let skills: Vec<SkillEntry> = (0..5)
        .map(|i| SkillEntry {
            name: format!("Skill {} & co", i),
            icons: format!("Tool{}, Tool{}", i, i + 1),
            description: format!("Does thing {}", i),
            glyph: None,
        })
        .collect();
    let store = store_with(Vec::new(), skills.clone());
    let options = PageOptions::default();
    let html = SectionRenderer::new(&store, &options).render_skills();

    let cards = blocks(&html, "<div data-skill-index=");
    assert_eq!(cards.len(), skills.len());
    for (index, (card, skill)) in cards.iter().zip(&skills).enumerate() {
        assert!(card.starts_with(&format!(r#"<div data-skill-index="{}""#, index)));
        assert_in_order(
            card,
            &[escape(&skill.name), escape(&skill.icons), escape(&skill.description)],
        );
    }
    // glyphs cycle database, code, user
    assert!(cards[0].contains(r#"data-icon="database""#));
    assert!(cards[1].contains(r#"data-icon="code""#));
    assert!(cards[2].contains(r#"data-icon="user""#));
    assert!(cards[3].contains(r#"data-icon="database""#));
}

#[test]
fn test_explicit_skill_glyph_wins() {
    let skills = vec![SkillEntry {
        name: "Outreach".to_string(),
        icons: "Talks".to_string(),
        description: "Meetups".to_string(),
        glyph: Some(portfolio_site::core::icons::Icon::Send),
    }];
    let store = store_with(Vec::new(), skills);
    let options = PageOptions::default();
    let html = SectionRenderer::new(&store, &options).render_skills();
    assert!(html.contains(r#"data-icon="send""#));
    assert!(!html.contains(r#"data-icon="database""#));
}

#[test]
fn test_rerender_is_byte_identical() {
    let store = ContentStore::builtin();
    let options = PageOptions::default();
    for section in SectionId::ALL {
        let view = PortfolioView::with_active(&store, &options, section);
        assert_eq!(view.render(), view.render());
    }
}

#[test]
fn test_only_nav_differs_between_active_sections() {
    let store = ContentStore::builtin();
    let options = PageOptions::default();
    let renderer = SectionRenderer::new(&store, &options);

    let home = renderer.render_page(SectionId::Home);
    let skills = renderer.render_page(SectionId::Skills);
    let differing: Vec<(&str, &str)> = home
        .lines()
        .zip(skills.lines())
        .filter(|(a, b)| a != b)
        .collect();

    assert_eq!(home.lines().count(), skills.lines().count());
    assert_eq!(differing.len(), 2);
    assert!(differing.iter().all(|(a, _)| a.contains("data-nav=")));
}

#[test]
fn test_page_has_four_anchored_sections_nav_and_footer() {
    let store = ContentStore::builtin();
    let options = PageOptions::default();
    let html = SectionRenderer::new(&store, &options).render_page(SectionId::Home);

    let positions: Vec<usize> = SectionId::ALL
        .iter()
        .map(|s| html.find(&format!(r#"<section id="{}""#, s.anchor())).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(html.contains("<nav "));
    assert!(html.contains("<footer "));
    assert!(html.contains(r#"data-nav-offset="80""#));
    assert!(html.contains("<script>"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_intro_and_labels_are_rendered() {
    let intro = Intro {
        pitch: "I build <things>.".to_string(),
        ..builtin_intro()
    };
    let labels = Labels {
        about_title: "About me".to_string(),
        ..Labels::default()
    };
    let store = ContentStore::new(builtin_profile(), intro, labels, Vec::new(), Vec::new()).unwrap();
    let options = PageOptions::default();
    let html = SectionRenderer::new(&store, &options).render_page(SectionId::About);

    assert!(html.contains("I build &lt;things&gt;."));
    assert!(html.contains("About me"));
    assert!(html.contains("ESIEA Paris (2021-2027)"));
    assert!(html.contains("Stage Ingénieur (IA/Embarqué)"));
}
