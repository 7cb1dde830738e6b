//! HTML document for a page snapshot.
//!
//! Rendering is a pure function of content, section order and snapshot.
//! Every reveal wrapper emitted along the way is recorded, so the same pass
//! that writes the HTML also produces the page outline.

use crate::core::nav::NavAppearance;
use crate::core::session::PageSnapshot;
use crate::core::style::{self, ACCENT, GLOBAL_STYLES};
use crate::domain::content::PortfolioContent;
use crate::domain::model::{BlockId, BlockKind, BlockSpec, PageOutline, Section, SectionList};
use std::fmt::Write as _;
use std::time::Duration;

/// Document-level values that are not part of the content records.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub lang: String,
    pub copyright_year: i32,
}

#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub outline: PageOutline,
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn tenths(n: u64) -> Duration {
    Duration::from_millis(100 * n)
}

/// Cards in a grid come in one after another.
fn stagger(index: usize) -> Duration {
    tenths(index as u64)
}

/// Accumulates HTML and the outline of reveal blocks.
struct Builder<'s> {
    html: String,
    blocks: Vec<BlockSpec>,
    snapshot: &'s PageSnapshot,
    section: Section,
    next_index: usize,
}

impl<'s> Builder<'s> {
    fn new(snapshot: &'s PageSnapshot) -> Self {
        Self {
            html: String::with_capacity(32 * 1024),
            blocks: Vec::new(),
            snapshot,
            section: Section::Home,
            next_index: 0,
        }
    }

    fn enter(&mut self, section: Section) {
        self.section = section;
        self.next_index = 0;
    }

    fn push(&mut self, s: &str) {
        self.html.push_str(s);
    }

    /// Wraps `body` in a reveal block.
    fn reveal<F: FnOnce(&mut String)>(&mut self, kind: BlockKind, delay: Duration, body: F) {
        let id = BlockId::new(self.section, self.next_index);
        self.next_index += 1;

        let visible = self.snapshot.is_revealed(&id);
        let _ = write!(
            self.html,
            "<div class=\"reveal\" data-block=\"{}\" style=\"{}\">",
            id,
            style::reveal_style(visible, delay)
        );
        body(&mut self.html);
        self.html.push_str("</div>\n");

        self.blocks.push(BlockSpec {
            id,
            section: self.section,
            kind,
            delay,
        });
    }

    fn finish(self) -> RenderedPage {
        RenderedPage {
            html: self.html,
            outline: PageOutline {
                blocks: self.blocks,
            },
        }
    }
}

pub struct PageRenderer<'a> {
    content: &'a PortfolioContent,
    sections: &'a SectionList,
    meta: PageMeta,
}

impl<'a> PageRenderer<'a> {
    pub fn new(content: &'a PortfolioContent, sections: &'a SectionList, meta: PageMeta) -> Self {
        Self {
            content,
            sections,
            meta,
        }
    }

    /// Reveal blocks of the page, in document order.
    pub fn outline(&self) -> PageOutline {
        let snapshot = PageSnapshot::initial(self.sections, Default::default());
        self.render(&snapshot).outline
    }

    pub fn render(&self, snapshot: &PageSnapshot) -> RenderedPage {
        let mut b = Builder::new(snapshot);

        let _ = write!(
            b.html,
            "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"UTF-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n",
            escape_html(&self.meta.lang),
            escape_html(&self.meta.title),
            GLOBAL_STYLES
        );

        self.render_nav(&mut b);

        for section in self.sections.iter() {
            b.enter(section);
            match section {
                Section::Home => self.render_hero(&mut b),
                Section::About => self.render_about(&mut b),
                Section::Skills => self.render_skills(&mut b),
                Section::Projects => self.render_projects(&mut b),
                Section::Experience => self.render_experience(&mut b),
                Section::Contact => self.render_contact(&mut b),
            }
        }

        self.render_footer(&mut b);
        b.push("</body>\n</html>\n");
        b.finish()
    }

    fn render_nav(&self, b: &mut Builder<'_>) {
        let snapshot = b.snapshot;
        let profile = &self.content.profile;

        let _ = write!(
            b.html,
            "<nav class=\"nav\" data-appearance=\"{}\" style=\"{}\">\n<div class=\"nav-inner\">\n",
            match snapshot.appearance {
                NavAppearance::Transparent => "transparent",
                NavAppearance::Opaque => "opaque",
            },
            style::nav_style(snapshot.appearance)
        );
        let _ = writeln!(
            b.html,
            "<span class=\"nav-brand\" data-target=\"{}\">{}<span style=\"color: {};\">.</span></span>",
            self.sections.first(),
            escape_html(&profile.initials),
            ACCENT
        );

        b.push("<div class=\"nav-desktop\">\n");
        self.render_nav_links(b, false);
        b.push("</div>\n");

        let _ = writeln!(
            b.html,
            "<button class=\"nav-mobile-btn\" aria-expanded=\"{}\">{}</button>",
            snapshot.menu.is_open(),
            style::menu_icon(snapshot.menu)
        );
        b.push("</div>\n");

        if snapshot.menu.is_open() {
            b.push("<div class=\"nav-mobile-menu\">\n");
            self.render_nav_links(b, true);
            b.push("</div>\n");
        }
        b.push("</nav>\n");
    }

    fn render_nav_links(&self, b: &mut Builder<'_>, mobile: bool) {
        let active = b.snapshot.active;
        for section in self.sections.nav_entries() {
            let is_active = section == active;
            let _ = writeln!(
                b.html,
                "<span class=\"nav-link\" data-target=\"{}\"{} style=\"{}\">{}</span>",
                section,
                if is_active { " aria-current=\"true\"" } else { "" },
                style::nav_link_style(is_active, mobile),
                section
            );
        }
    }

    fn render_section_header(&self, b: &mut Builder<'_>, section: Section) {
        let number = self.sections.ordinal(section).unwrap_or(0);
        b.reveal(BlockKind::SectionHeader, Duration::ZERO, |html| {
            let _ = write!(
                html,
                "<div class=\"section-header\"><span class=\"section-number\">{:02}</span>\
                 <div class=\"accent-line\" style=\"width: 64px;\"></div>\
                 <span class=\"section-label\">{}</span></div>",
                number,
                escape_html(section.label())
            );
        });
    }

    fn render_title(b: &mut Builder<'_>, plain: &str, accent: &str) {
        let plain = escape_html(plain);
        let accent = escape_html(accent);
        b.reveal(BlockKind::Heading, tenths(1), |html| {
            let _ = write!(
                html,
                "<h2 class=\"section-title\">{} <em>{}</em></h2>",
                plain, accent
            );
        });
    }

    fn render_hero(&self, b: &mut Builder<'_>) {
        let profile = &self.content.profile;
        let snapshot = b.snapshot;

        let _ = write!(
            b.html,
            "<section id=\"{}\" class=\"hero-section\">\n\
             <div class=\"hero-orb\" style=\"{}\"></div>\n<div class=\"hero-grid\"></div>\n\
             <div class=\"hero-content\" style=\"text-align: center; position: relative; z-index: 1;\">\n",
            Section::Home,
            style::orb_transform(snapshot.pointer, snapshot.viewport)
        );

        let eyebrow = escape_html(&profile.eyebrow);
        b.reveal(BlockKind::Eyebrow, Duration::ZERO, |html| {
            let _ = write!(
                html,
                "<p class=\"hero-eyebrow\"><span style=\"animation: pulse 2s ease-in-out infinite; \
                 display: inline-block;\">●</span>&nbsp; {}</p>",
                eyebrow
            );
        });

        let first = escape_html(&profile.first_name);
        let last = escape_html(&profile.last_name);
        b.reveal(BlockKind::HeroTitle, Duration::from_millis(150), |html| {
            let _ = write!(
                html,
                "<h1 class=\"hero-title\">{}<br><em class=\"hero-accent\">{}</em></h1>",
                first, last
            );
        });

        let subtitle = escape_html(&profile.subtitle);
        b.reveal(BlockKind::HeroSubtitle, tenths(3), |html| {
            let _ = write!(html, "<p class=\"hero-subtitle\">{}</p>", subtitle);
        });

        let buttons: Vec<(Section, &str)> = [
            (Section::Projects, "View Projects"),
            (Section::Contact, "Get In Touch"),
        ]
        .into_iter()
        .filter(|(target, _)| self.sections.contains(*target))
        .collect();
        b.reveal(BlockKind::CallToAction, Duration::from_millis(450), |html| {
            html.push_str("<div class=\"hero-cta\">");
            for (target, label) in buttons {
                let _ = write!(
                    html,
                    "<button class=\"cta\" data-target=\"{}\">{}</button>",
                    target, label
                );
            }
            html.push_str("</div>");
        });

        b.push(
            "</div>\n<div class=\"scroll-indicator\"><span>Scroll</span>\
             <div style=\"width: 1px; height: 32px; background: linear-gradient(to bottom, \
             rgba(92,255,229,0.5), transparent);\"></div></div>\n</section>\n",
        );
    }

    fn render_about(&self, b: &mut Builder<'_>) {
        let profile = &self.content.profile;
        let _ = writeln!(b.html, "<section id=\"{}\" class=\"section-pad\">", Section::About);
        self.render_section_header(b, Section::About);

        b.push("<div class=\"about-grid\">\n");
        let heading = escape_html(&profile.about_heading);
        let accent = escape_html(&profile.about_heading_accent);
        b.reveal(BlockKind::Heading, tenths(1), |html| {
            let _ = write!(
                html,
                "<h2 class=\"about-heading\">{} <em style=\"color: {};\">{}</em>.</h2>",
                heading, ACCENT, accent
            );
        });

        let paragraphs: Vec<String> = profile.about_paragraphs.iter().map(|p| escape_html(p)).collect();
        let stats = &self.content.stats;
        b.reveal(BlockKind::Body, tenths(2), |html| {
            html.push_str("<div>");
            for paragraph in &paragraphs {
                let _ = write!(html, "<p class=\"about-text\">{}</p>", paragraph);
            }
            html.push_str("<div class=\"stat-row\">");
            for stat in stats {
                let _ = write!(
                    html,
                    "<div><span class=\"stat-value\">{}</span><span class=\"stat-label\">{}</span></div>",
                    escape_html(&stat.value),
                    escape_html(&stat.label)
                );
            }
            html.push_str("</div></div>");
        });
        b.push("</div>\n</section>\n");
    }

    fn render_skills(&self, b: &mut Builder<'_>) {
        let _ = writeln!(b.html, "<section id=\"{}\" class=\"section-pad\">", Section::Skills);
        self.render_section_header(b, Section::Skills);

        b.push("<div class=\"skills-grid\">\n");
        for (i, category) in self.content.skills.iter().enumerate() {
            b.reveal(BlockKind::SkillCard, stagger(i), |html| {
                let _ = write!(
                    html,
                    "<div class=\"skill-card\"><h4>{}</h4><div class=\"skill-items\">",
                    escape_html(&category.label)
                );
                for item in &category.items {
                    let _ = write!(html, "<span>{}</span>", escape_html(item));
                }
                html.push_str("</div></div>");
            });
        }
        b.push("</div>\n</section>\n");
    }

    fn render_projects(&self, b: &mut Builder<'_>) {
        let profile = &self.content.profile;
        let hovered = b.snapshot.hovered_card;

        let _ = writeln!(b.html, "<section id=\"{}\" class=\"section-pad\">", Section::Projects);
        self.render_section_header(b, Section::Projects);
        Self::render_title(b, &profile.projects_title, &profile.projects_title_accent);

        b.push("<div class=\"projects-grid\">\n");
        for (i, project) in self.content.projects.iter().enumerate() {
            let card_style = style::card_style(hovered == Some(i));
            b.reveal(BlockKind::ProjectCard, stagger(i), |html| {
                let _ = write!(
                    html,
                    "<div class=\"project-card\" data-card=\"{}\" style=\"{}\">",
                    i, card_style
                );
                if project.highlight {
                    html.push_str("<span class=\"featured\">Featured</span>");
                }
                let _ = write!(
                    html,
                    "<p class=\"project-role\">{}</p><h3>{}</h3><p class=\"project-period\">{}</p>\
                     <p class=\"project-description\">{}</p><div class=\"tags\">",
                    escape_html(&project.role),
                    escape_html(&project.title),
                    escape_html(&project.period),
                    escape_html(&project.description)
                );
                for tag in &project.tags {
                    let _ = write!(html, "<span class=\"tag\">{}</span>", escape_html(tag));
                }
                html.push_str("</div></div>");
            });
        }
        b.push("</div>\n</section>\n");
    }

    fn render_experience(&self, b: &mut Builder<'_>) {
        let profile = &self.content.profile;

        let _ = writeln!(b.html, "<section id=\"{}\" class=\"section-pad\">", Section::Experience);
        self.render_section_header(b, Section::Experience);
        Self::render_title(b, &profile.experience_title, &profile.experience_title_accent);

        b.push("<div class=\"exp-grid\">\n");
        for (i, exp) in self.content.experiences.iter().enumerate() {
            b.reveal(BlockKind::ExperienceItem, stagger(i), |html| {
                let _ = write!(
                    html,
                    "<div class=\"exp-item\"><p class=\"exp-period\">{}</p><h4>{}</h4>\
                     <p class=\"exp-org\">{}</p><p class=\"exp-detail\">{}</p></div>",
                    escape_html(&exp.period),
                    escape_html(&exp.title),
                    escape_html(&exp.org),
                    escape_html(&exp.detail)
                );
            });
        }
        b.push("</div>\n");

        if let Some(education) = &self.content.education {
            b.reveal(BlockKind::Education, tenths(3), |html| {
                let _ = write!(
                    html,
                    "<div class=\"education\"><div><h4>{}</h4><p>{}</p></div>\
                     <div style=\"text-align: right;\"><span class=\"edu-score\">{}</span>\
                     <span class=\"edu-suffix\">{}</span></div></div>",
                    escape_html(&education.school),
                    escape_html(&education.degree),
                    escape_html(&education.score),
                    escape_html(&education.score_suffix)
                );
            });
        }
        b.push("</section>\n");
    }

    fn render_contact(&self, b: &mut Builder<'_>) {
        let profile = &self.content.profile;

        let _ = writeln!(b.html, "<section id=\"{}\" class=\"section-pad\">", Section::Contact);
        self.render_section_header(b, Section::Contact);

        let heading = escape_html(&profile.contact_heading);
        let accent = escape_html(&profile.contact_heading_accent);
        b.reveal(BlockKind::Heading, tenths(1), |html| {
            let _ = write!(
                html,
                "<h2 class=\"contact-heading\">{}<br><em style=\"color: {};\">{}</em>.</h2>",
                heading, ACCENT, accent
            );
        });

        let blurb = escape_html(&profile.contact_blurb);
        b.reveal(BlockKind::Body, tenths(2), |html| {
            let _ = write!(html, "<p class=\"contact-blurb\">{}</p>", blurb);
        });

        let links = &self.content.contact_links;
        b.reveal(BlockKind::ContactLinks, tenths(3), |html| {
            html.push_str("<div class=\"contact-links\">");
            for link in links {
                let target = if link.opens_new_tab() {
                    " target=\"_blank\""
                } else {
                    ""
                };
                let _ = write!(
                    html,
                    "<a class=\"contact-link\" href=\"{}\"{} rel=\"noopener noreferrer\">\
                     <span class=\"contact-label\">{}</span><span class=\"contact-value\">{}</span></a>",
                    escape_html(&link.href),
                    target,
                    escape_html(&link.label),
                    escape_html(&link.value)
                );
            }
            html.push_str("</div>");
        });
        b.push("</section>\n");
    }

    fn render_footer(&self, b: &mut Builder<'_>) {
        let profile = &self.content.profile;
        let _ = writeln!(
            b.html,
            "<footer class=\"footer\"><span>© {} {}</span><span>{}</span></footer>",
            self.meta.copyright_year,
            escape_html(&profile.full_name()),
            escape_html(&profile.location)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::nav::MenuState;

    fn meta() -> PageMeta {
        PageMeta {
            title: "Jordan Avery".to_string(),
            lang: "en".to_string(),
            copyright_year: 2026,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_outline_matches_content() {
        let content = PortfolioContent::default();
        let sections = SectionList::default();
        let outline = PageRenderer::new(&content, &sections, meta()).outline();

        assert_eq!(outline.in_section(Section::Home).count(), 4);
        assert_eq!(outline.in_section(Section::About).count(), 3);
        assert_eq!(outline.in_section(Section::Skills).count(), 1 + content.skills.len());
        assert_eq!(outline.in_section(Section::Projects).count(), 2 + content.projects.len());
        assert_eq!(outline.in_section(Section::Experience).count(), 2 + content.experiences.len() + 1);
        assert_eq!(outline.in_section(Section::Contact).count(), 4);

        let hero: Vec<Duration> = outline.in_section(Section::Home).map(|b| b.delay).collect();
        assert_eq!(
            hero,
            vec![
                Duration::ZERO,
                Duration::from_millis(150),
                Duration::from_millis(300),
                Duration::from_millis(450)
            ]
        );
        assert_eq!(outline.blocks[0].id.as_str(), "home-0");
    }

    #[test]
    fn test_render_reflects_snapshot() {
        let content = PortfolioContent::default();
        let sections = SectionList::default();
        let renderer = PageRenderer::new(&content, &sections, meta());

        let mut snapshot = PageSnapshot::initial(&sections, Default::default());
        snapshot.active = Section::Projects;
        snapshot.appearance = NavAppearance::Opaque;
        snapshot.menu = MenuState::Open;
        snapshot.hovered_card = Some(1);
        snapshot.revealed.insert(BlockId::new(Section::Home, 0));

        let page = renderer.render(&snapshot);
        let html = &page.html;

        assert!(html.contains("<section id=\"projects\""));
        assert!(html.contains("data-target=\"projects\" aria-current=\"true\""));
        assert!(html.contains("data-appearance=\"opaque\""));
        assert!(html.contains("class=\"nav-mobile-menu\""));
        assert!(html.contains("data-block=\"home-0\" style=\"opacity: 1;"));
        assert!(html.contains("data-block=\"home-1\" style=\"opacity: 0;"));
        assert!(html.contains("data-card=\"1\" style=\"background: linear-gradient"));
        assert!(html.contains("© 2026 Jordan Avery"));
        assert_eq!(page.outline, renderer.outline());
    }

    #[test]
    fn test_contact_links_target() {
        let content = PortfolioContent::default();
        let sections = SectionList::default();
        let html = PageRenderer::new(&content, &sections, meta())
            .render(&PageSnapshot::initial(&sections, Default::default()))
            .html;

        assert!(html.contains("href=\"https://github.com/example\" target=\"_blank\""));
        assert!(html.contains("href=\"mailto:jordan@example.com\" rel="));
        assert!(!html.contains("class=\"nav-mobile-menu\""));
    }

    #[test]
    fn test_omitted_sections_are_not_rendered() {
        let content = PortfolioContent::default();
        let sections = SectionList::parse(&["home", "about"]).unwrap();
        let html = PageRenderer::new(&content, &sections, meta())
            .render(&PageSnapshot::initial(&sections, Default::default()))
            .html;

        assert!(!html.contains("id=\"projects\""));
        assert!(!html.contains("data-target=\"contact\""));
        assert!(html.contains("<span class=\"section-number\">01</span>"));
    }
}
