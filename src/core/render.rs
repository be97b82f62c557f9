use crate::core::animate::Reveal;
use crate::core::html::{attr, escape, HtmlWriter};
use crate::core::icons::Icon;
use crate::core::store::ContentStore;
use crate::core::tracker::DEFAULT_TRIGGER_OFFSET;
use crate::domain::model::{ProjectEntry, SectionId, SkillEntry};

/// Class toggled onto the nav link of the active section.
pub const ACTIVE_LINK_CLASS: &str = "text-blue-600";

const NAV_LINK_CLASS: &str = "cursor-pointer hover:text-blue-600 capitalize";
const CARD_CLASS: &str = "bg-white p-6 rounded-xl shadow-md hover:shadow-xl transition-all duration-300 border border-slate-100";

/// Client-side mirror of the tracker: scroll spy with the same trigger
/// offset, smooth scroll to anchors, reveal-once animations. `active` starts
/// unset so the first scroll pass always repaints the nav, whatever the
/// server highlighted. Only nav links scroll with the nav offset.
const PAGE_SCRIPT: &str = r#"(function () {
  var offset = Number(document.body.dataset.navOffset || 80);
  var activeClass = document.body.dataset.activeClass;
  var ids = ["home", "about", "projects", "skills"];
  var links = document.querySelectorAll("[data-nav]");
  var active = null;
  function setActive(id) {
    if (id === active) return;
    active = id;
    links.forEach(function (l) { l.classList.toggle(activeClass, l.dataset.nav === id); });
  }
  function onScroll() {
    var y = window.scrollY + offset;
    for (var i = 0; i < ids.length; i++) {
      var s = document.getElementById(ids[i]);
      if (s && y >= s.offsetTop && y < s.offsetTop + s.offsetHeight) { setActive(ids[i]); return; }
    }
  }
  document.querySelectorAll("[data-scroll-to]").forEach(function (a) {
    a.addEventListener("click", function (e) {
      var t = document.getElementById(a.dataset.scrollTo);
      if (!t) return;
      e.preventDefault();
      var shift = a.hasAttribute("data-nav") ? offset : 0;
      window.scrollTo({ top: Math.max(0, t.offsetTop - shift), behavior: "smooth" });
    });
  });
  function show(el) {
    el.style.transition = "opacity " + el.dataset.duration + "s, transform " + el.dataset.duration + "s";
    el.style.opacity = 1;
    el.style.transform = "none";
  }
  var io = new IntersectionObserver(function (entries) {
    entries.forEach(function (en) { if (en.isIntersecting) { show(en.target); io.unobserve(en.target); } });
  });
  document.querySelectorAll("[data-reveal]").forEach(function (el) {
    if (el.dataset.reveal === "mount") { requestAnimationFrame(function () { show(el); }); } else { io.observe(el); }
  });
  window.addEventListener("scroll", onScroll, { passive: true });
  onScroll();
})();"#;

/// Page-level settings that are not portfolio content.
#[derive(Debug, Clone, PartialEq)]
pub struct PageOptions {
    pub title: String,
    pub lang: String,
    pub stylesheets: Vec<String>,
    pub nav_offset: f64,
    pub include_script: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            lang: "fr".to_string(),
            stylesheets: Vec::new(),
            nav_offset: DEFAULT_TRIGGER_OFFSET,
            include_script: true,
        }
    }
}

/// Turns the content store into the page markup. Output depends only on the
/// store, the options and the active section.
#[derive(Debug, Clone, Copy)]
pub struct SectionRenderer<'a> {
    store: &'a ContentStore,
    options: &'a PageOptions,
}

impl<'a> SectionRenderer<'a> {
    pub fn new(store: &'a ContentStore, options: &'a PageOptions) -> Self {
        Self { store, options }
    }

    pub fn render_page(&self, active: SectionId) -> String {
        let mut w = HtmlWriter::new();
        w.line("<!DOCTYPE html>");
        w.open("html", &attr("lang", &self.options.lang));
        self.write_head(&mut w);
        w.open(
            "body",
            &format!(
                r#"class="bg-slate-50 text-slate-900 font-sans min-h-screen" data-nav-offset="{}" data-active-class="{}""#,
                self.options.nav_offset, ACTIVE_LINK_CLASS
            ),
        );
        self.write_nav(&mut w, active);
        self.write_hero(&mut w);
        self.write_about(&mut w);
        self.write_projects(&mut w);
        self.write_skills(&mut w);
        self.write_footer(&mut w);
        if self.options.include_script {
            w.raw_inline("script", "", PAGE_SCRIPT);
        }
        w.close("body");
        w.close("html");
        w.finish()
    }

    pub fn render_nav(&self, active: SectionId) -> String {
        let mut w = HtmlWriter::new();
        self.write_nav(&mut w, active);
        w.finish()
    }

    pub fn render_projects(&self) -> String {
        let mut w = HtmlWriter::new();
        for project in self.store.projects() {
            write_project(&mut w, project, &self.store.labels().cta_code);
        }
        w.finish()
    }

    pub fn render_skills(&self) -> String {
        let mut w = HtmlWriter::new();
        for (index, skill) in self.store.skills().iter().enumerate() {
            write_skill(&mut w, index, skill);
        }
        w.finish()
    }

    fn write_head(&self, w: &mut HtmlWriter) {
        w.open("head", "");
        w.line(r#"<meta charset="utf-8">"#);
        w.line(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
        w.text("title", "", &self.options.title);
        for href in &self.options.stylesheets {
            w.line(&format!(r#"<link rel="stylesheet" {}>"#, attr("href", href)));
        }
        w.close("head");
    }

    fn write_nav(&self, w: &mut HtmlWriter, active: SectionId) {
        w.open(
            "nav",
            r#"class="fixed top-0 w-full bg-white/90 backdrop-blur-sm z-50 border-b border-slate-200 px-6 py-4 flex justify-between items-center""#,
        );
        w.raw_inline(
            "div",
            r#"class="font-bold text-xl tracking-tight text-slate-900""#,
            &format!(
                r#"{}<span class="text-blue-600">{}</span>"#,
                escape(self.store.brand()),
                escape(&self.store.labels().brand_suffix)
            ),
        );
        w.open("div", r#"class="hidden md:flex gap-8 text-sm font-medium text-slate-600""#);
        for section in SectionId::ALL {
            let class = if section == active {
                format!("{} {}", NAV_LINK_CLASS, ACTIVE_LINK_CLASS)
            } else {
                NAV_LINK_CLASS.to_string()
            };
            w.text(
                "a",
                &format!(
                    r##"href="#{id}" data-nav="{id}" data-scroll-to="{id}" class="{class}""##,
                    id = section.anchor(),
                    class = class
                ),
                section.anchor(),
            );
        }
        w.close("div");
        w.close("nav");
    }

    fn write_hero(&self, w: &mut HtmlWriter) {
        let profile = self.store.profile();
        w.open(
            "section",
            r#"id="home" class="min-h-screen flex flex-col justify-center items-center text-center px-4 pt-20 bg-[radial-gradient(ellipse_at_top,_var(--tw-gradient-stops))] from-slate-100 via-slate-50 to-slate-50""#,
        );
        w.open("div", &Reveal::HERO.attrs());
        w.text(
            "div",
            r#"class="inline-block px-3 py-1 mb-6 text-xs font-semibold tracking-wider text-blue-600 uppercase bg-blue-100 rounded-full""#,
            &self.store.intro().badge,
        );
        w.text(
            "h1",
            r#"class="text-5xl md:text-7xl font-black mb-6 text-slate-900 tracking-tight""#,
            &profile.name,
        );
        w.text(
            "p",
            r#"class="text-xl md:text-2xl text-slate-600 max-w-2xl mx-auto mb-8 font-light""#,
            &profile.role,
        );
        w.text(
            "p",
            r#"class="italic text-slate-500 mb-12 border-l-4 border-blue-500 pl-4 inline-block text-lg""#,
            &profile.slogan,
        );
        w.open("div", r#"class="flex justify-center gap-4""#);
        w.text(
            "a",
            r##"href="#projects" data-scroll-to="projects" class="bg-blue-600 text-white px-8 py-3 rounded-lg font-semibold hover:bg-blue-700 transition cursor-pointer shadow-lg hover:shadow-blue-500/30""##,
            &self.store.labels().cta_projects,
        );
        w.raw_inline(
            "a",
            &format!(
                r#"{} target="_blank" class="flex items-center gap-2 bg-white text-slate-700 border border-slate-200 px-8 py-3 rounded-lg font-semibold hover:bg-slate-50 transition cursor-pointer""#,
                attr("href", &profile.github)
            ),
            &format!("{} GitHub", Icon::Github.svg(20)),
        );
        w.close("div");
        w.close("div");
        w.raw_inline(
            "a",
            r##"href="#about" data-scroll-to="about" class="absolute bottom-10 cursor-pointer animate-bounce text-slate-400""##,
            &Icon::ChevronDown.svg(32),
        );
        w.close("section");
    }

    fn open_section(&self, w: &mut HtmlWriter, section: SectionId, title: &str, extra_class: &str) {
        let class = if extra_class.is_empty() {
            "py-20 px-6 md:px-20".to_string()
        } else {
            format!("py-20 px-6 md:px-20 {}", extra_class)
        };
        w.open(
            "section",
            &format!(r#"id="{}" class="{}""#, section.anchor(), class),
        );
        w.open("div", r#"class="max-w-5xl mx-auto""#);
        w.raw_inline(
            "h2",
            &format!(
                r#"{} class="text-3xl md:text-4xl font-bold mb-12 text-slate-800 flex items-center gap-3""#,
                Reveal::HEADING.attrs()
            ),
            &format!(
                r#"<span class="w-2 h-10 bg-blue-600 rounded-full block"></span>{}"#,
                escape(title)
            ),
        );
    }

    fn close_section(&self, w: &mut HtmlWriter) {
        w.close("div");
        w.close("section");
    }

    fn write_about(&self, w: &mut HtmlWriter) {
        let labels = self.store.labels();
        self.open_section(w, SectionId::About, &labels.about_title, "");
        w.open("div", r#"class="flex flex-col md:flex-row gap-12 items-center""#);
        w.open("div", r#"class="md:w-1/3""#);
        w.raw_inline(
            "div",
            r#"class="w-64 h-64 bg-slate-200 rounded-2xl mx-auto flex items-center justify-center text-slate-400 shadow-inner""#,
            &Icon::User.svg(64),
        );
        w.close("div");
        w.open("div", r#"class="md:w-2/3 text-lg text-slate-600 leading-relaxed""#);
        w.text("p", r#"class="mb-6""#, &self.store.intro().pitch);
        w.open("div", r#"class="grid grid-cols-2 gap-4 mt-8""#);
        write_fact(
            w,
            "blue",
            Icon::BookOpen,
            &labels.education_title,
            &self.store.profile().school,
        );
        write_fact(
            w,
            "emerald",
            Icon::Send,
            &labels.objective_title,
            &self.store.intro().objective,
        );
        w.close("div");
        w.close("div");
        w.close("div");
        self.close_section(w);
    }

    fn write_projects(&self, w: &mut HtmlWriter) {
        self.open_section(
            w,
            SectionId::Projects,
            &self.store.labels().projects_title,
            "bg-slate-100/50",
        );
        w.open("div", r#"class="grid gap-8""#);
        for project in self.store.projects() {
            write_project(w, project, &self.store.labels().cta_code);
        }
        w.close("div");
        self.close_section(w);
    }

    fn write_skills(&self, w: &mut HtmlWriter) {
        let labels = self.store.labels();
        self.open_section(w, SectionId::Skills, &labels.skills_title, "");
        w.open("div", r#"class="grid md:grid-cols-3 gap-6""#);
        for (index, skill) in self.store.skills().iter().enumerate() {
            write_skill(w, index, skill);
        }
        w.close("div");
        w.open(
            "div",
            r#"class="mt-20 bg-slate-900 rounded-2xl p-8 md:p-12 text-center text-white relative overflow-hidden""#,
        );
        w.line(r#"<div class="absolute top-0 left-0 w-full h-1 bg-gradient-to-r from-blue-500 via-purple-500 to-pink-500"></div>"#);
        w.text("h3", r#"class="text-2xl font-bold mb-4""#, &labels.vision_title);
        w.text(
            "p",
            r#"class="text-slate-300 text-lg max-w-3xl mx-auto leading-relaxed""#,
            &self.store.intro().vision,
        );
        w.close("div");
        self.close_section(w);
    }

    fn write_footer(&self, w: &mut HtmlWriter) {
        w.open(
            "footer",
            r#"class="bg-white border-t border-slate-200 py-8 text-center text-slate-500 text-sm""#,
        );
        w.text(
            "p",
            "",
            &format!(
                "© {} {}. {}",
                self.store.copyright_year(),
                self.store.profile().name,
                self.store.labels().footer_credits
            ),
        );
        w.close("footer");
    }
}

fn write_fact(w: &mut HtmlWriter, color: &str, icon: Icon, title: &str, body: &str) {
    w.open(
        "div",
        &format!(r#"class="bg-{c}-50 p-4 rounded-lg border border-{c}-100""#, c = color),
    );
    w.raw_inline(
        "h4",
        &format!(r#"class="font-bold text-{}-900 flex items-center gap-2""#, color),
        &format!("{} {}", icon.svg(18), escape(title)),
    );
    w.text("p", &format!(r#"class="text-sm text-{}-700""#, color), body);
    w.close("div");
}

fn write_project(w: &mut HtmlWriter, project: &ProjectEntry, cta: &str) {
    w.open(
        "article",
        &format!(r#"data-project-id="{}" {}"#, project.id, Reveal::CARD.attrs()),
    );
    w.open(
        "div",
        &format!(r#"class="{} flex flex-col gap-6 p-0 overflow-hidden""#, CARD_CLASS),
    );
    w.open("div", r#"class="h-64 overflow-hidden group""#);
    w.line(&format!(
        r#"<img {} {} class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-105">"#,
        attr("src", &project.image),
        attr("alt", &project.title)
    ));
    w.close("div");

    w.open("div", r#"class="p-8 flex flex-col md:flex-row gap-8""#);
    w.open("div", r#"class="md:w-1/3 flex flex-col justify-between""#);
    w.open("div", "");
    w.text("h3", r#"class="text-2xl font-bold text-slate-900 mb-2""#, &project.title);
    w.text(
        "span",
        r#"class="inline-block bg-blue-100 text-blue-800 text-xs px-2 py-1 rounded mb-4 font-mono""#,
        &project.context,
    );
    w.open("div", r#"class="flex flex-wrap gap-2 mb-6""#);
    for tag in &project.tags {
        w.text(
            "span",
            r#"data-tag class="text-xs font-semibold text-slate-500 border border-slate-200 px-2 py-1 rounded""#,
            tag,
        );
    }
    w.close("div");
    w.close("div");
    w.raw_inline(
        "a",
        &format!(
            r#"{} target="_blank" class="flex items-center gap-2 text-blue-600 font-bold hover:underline mt-4 md:mt-0""#,
            attr("href", &project.link)
        ),
        &format!("{} {}", escape(cta), Icon::ExternalLink.svg(16)),
    );
    w.close("div");

    w.open("div", r#"class="md:w-2/3 border-l border-slate-100 md:pl-8""#);
    w.text("p", r#"class="text-slate-700 mb-4 font-medium""#, &project.description);
    w.open("ul", r#"class="space-y-2""#);
    for detail in &project.details {
        w.raw_inline(
            "li",
            r#"data-detail class="flex items-start gap-2 text-sm text-slate-600""#,
            &format!(
                r#"<span class="mt-1.5 w-1.5 h-1.5 bg-blue-400 rounded-full flex-shrink-0"></span>{}"#,
                escape(detail)
            ),
        );
    }
    w.close("ul");
    w.close("div");
    w.close("div");
    w.close("div");
    w.close("article");
}

fn write_skill(w: &mut HtmlWriter, index: usize, skill: &SkillEntry) {
    let glyph = skill.glyph.unwrap_or_else(|| Icon::for_skill_index(index));
    w.open(
        "div",
        &format!(r#"data-skill-index="{}" class="{} hover:-translate-y-2""#, index, CARD_CLASS),
    );
    w.raw_inline(
        "div",
        r#"class="w-12 h-12 bg-slate-900 text-white rounded-lg flex items-center justify-center mb-6""#,
        &glyph.svg(24),
    );
    w.text("h3", r#"class="text-xl font-bold mb-3""#, &skill.name);
    w.text("p", r#"class="text-sm font-mono text-blue-600 mb-3""#, &skill.icons);
    w.text("p", r#"class="text-slate-600 text-sm""#, &skill.description);
    w.close("div");
}
