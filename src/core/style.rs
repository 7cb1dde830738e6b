//! Pure mapping from page state to inline styles.

use crate::core::nav::{MenuState, NavAppearance};
use crate::domain::model::ViewportSize;
use std::fmt;
use std::time::Duration;

pub const ACCENT: &str = "#5cffe5";

const EASE_OUT: &str = "cubic-bezier(.22,1,.36,1)";
const REVEAL_DISTANCE_PX: u32 = 36;
const PARALLAX_FACTOR: f64 = 0.02;

/// Ordered list of CSS declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDescriptor {
    declarations: Vec<(&'static str, String)>,
}

impl StyleDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.declarations.push((property, value.into()));
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl fmt::Display for StyleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", property, value)?;
        }
        Ok(())
    }
}

/// Seconds with millisecond precision and no trailing zeros: `0.3`, `0`, `1.25`.
pub fn format_seconds(delay: Duration) -> String {
    let millis = delay.as_millis();
    let whole = millis / 1000;
    let frac = millis % 1000;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{:03}", frac);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}

fn format_px(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid "-0".
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

pub fn reveal_style(visible: bool, delay: Duration) -> StyleDescriptor {
    let delay = format_seconds(delay);
    StyleDescriptor::new()
        .with("opacity", if visible { "1" } else { "0" })
        .with(
            "transform",
            if visible {
                "translateY(0)".to_string()
            } else {
                format!("translateY({}px)", REVEAL_DISTANCE_PX)
            },
        )
        .with(
            "transition",
            format!(
                "opacity 0.7s {ease} {delay}s, transform 0.7s {ease} {delay}s",
                ease = EASE_OUT,
                delay = delay
            ),
        )
}

pub fn nav_style(appearance: NavAppearance) -> StyleDescriptor {
    let opaque = appearance == NavAppearance::Opaque;
    let blur = if opaque { "blur(18px)" } else { "none" };
    StyleDescriptor::new()
        .with("backdrop-filter", blur)
        .with("-webkit-backdrop-filter", blur)
        .with(
            "background",
            if opaque { "rgba(10,10,12,0.82)" } else { "transparent" },
        )
        .with(
            "border-bottom",
            if opaque {
                "1px solid rgba(255,255,255,0.06)"
            } else {
                "1px solid transparent"
            },
        )
}

pub fn nav_link_style(active: bool, mobile: bool) -> StyleDescriptor {
    let idle = if mobile {
        "rgba(255,255,255,0.55)"
    } else {
        "rgba(255,255,255,0.5)"
    };
    StyleDescriptor::new().with("color", if active { ACCENT } else { idle })
}

pub fn card_style(hovered: bool) -> StyleDescriptor {
    if hovered {
        StyleDescriptor::new()
            .with(
                "background",
                "linear-gradient(135deg, rgba(92,255,229,0.06) 0%, rgba(20,20,24,0.95) 60%)",
            )
            .with("border", "1px solid rgba(92,255,229,0.25)")
            .with("transform", "translateY(-4px)")
    } else {
        StyleDescriptor::new()
            .with("background", "rgba(255,255,255,0.025)")
            .with("border", "1px solid rgba(255,255,255,0.06)")
            .with("transform", "translateY(0)")
    }
}

/// Hero background orb, nudged towards the pointer. Centred until the
/// pointer has been seen.
pub fn orb_transform(pointer: Option<(f64, f64)>, viewport: ViewportSize) -> StyleDescriptor {
    let (dx, dy) = match pointer {
        Some((x, y)) => (
            (x - viewport.width / 2.0) * PARALLAX_FACTOR,
            (y - viewport.height / 2.0) * PARALLAX_FACTOR,
        ),
        None => (0.0, 0.0),
    };
    StyleDescriptor::new().with(
        "transform",
        format!(
            "translate(calc(-50% + {}px), calc(-50% + {}px))",
            format_px(dx),
            format_px(dy)
        ),
    )
}

pub fn menu_icon(menu: MenuState) -> &'static str {
    match menu {
        MenuState::Open => "✕",
        MenuState::Closed => "☰",
    }
}

pub const GLOBAL_STYLES: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=DM+Mono:wght@400;500&family=DM+Sans:wght@300;400;500;600&family=Instrument+Serif:ital@0;1&display=swap');

*, *::before, *::after { margin: 0; padding: 0; box-sizing: border-box; }
html { scroll-behavior: smooth; }
body { background: #0a0a0c; color: #e0e0e0; overflow-x: hidden; font-family: 'DM Sans', sans-serif; }
::selection { background: rgba(92,255,229,0.25); color: #fff; }
a { text-decoration: none; color: inherit; }

.nav { position: fixed; top: 0; left: 0; right: 0; z-index: 100; transition: all 0.4s ease; }
.nav-inner { max-width: 1200px; margin: 0 auto; padding: 0 32px; display: flex; justify-content: space-between; align-items: center; height: 64px; }
.nav-brand { font-family: 'Instrument Serif', Georgia, serif; font-size: 22px; color: #e0e0e0; cursor: pointer; letter-spacing: -0.02em; }
.nav-desktop { display: flex; gap: 32px; align-items: center; }
.nav-link { font-size: 13px; letter-spacing: 0.08em; text-transform: uppercase; cursor: pointer; transition: color 0.3s; font-weight: 500; }
.nav-mobile-btn { display: none; background: none; border: none; color: #e0e0e0; font-size: 24px; cursor: pointer; padding: 4px; }
.nav-mobile-menu { background: rgba(10,10,12,0.96); padding: 16px 32px 24px; display: flex; flex-direction: column; gap: 18px; border-bottom: 1px solid rgba(255,255,255,0.06); }

.hero-section { min-height: 100vh; display: flex; flex-direction: column; justify-content: center; align-items: center; position: relative; overflow: hidden; padding: 0 32px; }
.hero-orb { position: absolute; width: 600px; height: 600px; border-radius: 50%; background: radial-gradient(circle, rgba(92,255,229,0.06) 0%, transparent 70%); top: 50%; left: 50%; transition: transform 0.3s ease-out; pointer-events: none; }
.hero-grid { position: absolute; inset: 0; opacity: 0.03; background-image: linear-gradient(rgba(255,255,255,0.5) 1px, transparent 1px), linear-gradient(90deg, rgba(255,255,255,0.5) 1px, transparent 1px); background-size: 80px 80px; pointer-events: none; }
.hero-title { font-family: 'Instrument Serif', Georgia, serif; font-size: 82px; font-weight: 400; letter-spacing: -0.03em; line-height: 1.05; color: #f5f5f5; margin-bottom: 24px; }
.hero-subtitle { font-size: 18px; color: rgba(255,255,255,0.45); max-width: 500px; margin: 0 auto 40px; line-height: 1.7; font-weight: 300; }
.scroll-indicator { position: absolute; bottom: 40px; left: 50%; transform: translateX(-50%); display: flex; flex-direction: column; align-items: center; gap: 8px; animation: float 3s ease-in-out infinite; }

.section-pad { padding: 120px 32px; max-width: 1200px; margin: 0 auto; }
.section-header { display: flex; align-items: center; gap: 16px; margin-bottom: 56px; }
.section-title { font-family: 'Instrument Serif', Georgia, serif; font-size: 42px; font-weight: 400; letter-spacing: -0.02em; color: #f0f0f0; margin-bottom: 48px; }
.about-grid, .projects-grid, .exp-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 24px; }
.skills-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 24px; }
.stat-row { display: flex; gap: 40px; }
.project-card { border-radius: 16px; padding: 32px 28px; transition: all 0.4s cubic-bezier(.22,1,.36,1); position: relative; overflow: hidden; }
.tag { font-family: 'DM Mono', monospace; font-size: 11px; color: rgba(255,255,255,0.45); background: rgba(255,255,255,0.04); border: 1px solid rgba(255,255,255,0.06); padding: 4px 12px; border-radius: 20px; }
.contact-link { background: rgba(255,255,255,0.03); border: 1px solid rgba(255,255,255,0.08); border-radius: 12px; padding: 16px 24px; transition: all 0.3s; display: flex; flex-direction: column; gap: 4px; min-width: 180px; }

@media (max-width: 768px) {
  .nav-desktop { display: none !important; }
  .nav-mobile-btn { display: block !important; }
  .hero-title { font-size: 48px !important; }
  .hero-subtitle { font-size: 16px !important; }
  .projects-grid { grid-template-columns: 1fr !important; }
  .skills-grid { grid-template-columns: 1fr 1fr !important; }
  .about-grid { grid-template-columns: 1fr !important; }
  .exp-grid { grid-template-columns: 1fr !important; }
  .section-pad { padding: 80px 20px !important; }
  .hero-section { padding: 0 20px !important; }
  .stat-row { flex-direction: column; gap: 20px !important; }
}

@media (max-width: 480px) {
  .hero-title { font-size: 36px !important; }
  .skills-grid { grid-template-columns: 1fr !important; }
}

@keyframes pulse { 0%, 100% { opacity: 0.6; } 50% { opacity: 1; } }
@keyframes float { 0%, 100% { transform: translateY(0px); } 50% { transform: translateY(-12px); } }
@keyframes lineGrow { from { width: 0; } to { width: 64px; } }

.accent-line { height: 1px; background: linear-gradient(90deg, #5cffe5, transparent); animation: lineGrow 1s cubic-bezier(.22,1,.36,1) forwards; }
"#;
