//! SVG generation for the planar view

use crate::config::RenderConfig;
use crate::layout::{
    bond_segments, charge_badge, lone_pair_markers, BoundingBox, ChargeSign, LayoutResult,
    NormalizedAtom,
};
use crate::molecule::Molecule;

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    title: Option<String>,
    desc: Option<String>,
    bonds: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            title: None,
            desc: None,
            bonds: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    pub(crate) fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Set the accessible title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Set the accessible description
    pub fn set_desc(&mut self, desc: impl Into<String>) {
        self.desc = Some(desc.into());
    }

    /// Add a circle element
    pub fn add_circle(&mut self, cx: f64, cy: f64, r: f64, class: &str, styles: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<circle class="{}{}" cx="{}" cy="{}" r="{}"{}/>"#,
            self.indent_str(),
            prefix,
            class,
            num(cx),
            num(cy),
            num(r),
            styles
        ));
    }

    /// Add a bond strand; strands are drawn beneath every other element
    pub fn add_bond_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, styles: &str) {
        let prefix = self.prefix();
        self.bonds.push(format!(
            r#"{}<line class="{}bond" x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            self.indent_str(),
            prefix,
            num(x1),
            num(y1),
            num(x2),
            num(y2),
            styles
        ));
    }

    /// Add a line element in the main layer
    pub fn add_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, class: &str, styles: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<line class="{}{}" x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            self.indent_str(),
            prefix,
            class,
            num(x1),
            num(y1),
            num(x2),
            num(y2),
            styles
        ));
    }

    /// Add a centered text element
    pub fn add_text(&mut self, text: &str, x: f64, y: f64, class: &str, styles: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<text class="{}{}" x="{}" y="{}" text-anchor="middle" dominant-baseline="central"{}>{}</text>"#,
            self.indent_str(),
            prefix,
            class,
            num(x),
            num(y),
            styles,
            escape_xml(text)
        ));
    }

    /// Add a group element with optional ID and classes
    pub fn start_group(&mut self, id: Option<&str>, classes: &[String]) {
        let id_attr = id.map(|i| format!(r#" id="{}""#, i)).unwrap_or_default();
        let class_attr = if classes.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}""#, classes.join(" "))
        };

        self.elements
            .push(format!("{}<g{}{}>", self.indent_str(), id_attr, class_attr));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string; `viewbox` is used as-is
    pub fn build(self, viewbox: BoundingBox) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            num(viewbox.x),
            num(viewbox.y),
            num(viewbox.width),
            num(viewbox.height)
        ));
        svg.push_str(nl);

        let pad = if self.config.pretty_print { "  " } else { "" };
        if let Some(title) = &self.title {
            svg.push_str(&format!("{pad}<title>{}</title>", escape_xml(title)));
            svg.push_str(nl);
        }
        if let Some(desc) = &self.desc {
            svg.push_str(&format!("{pad}<desc>{}</desc>", escape_xml(desc)));
            svg.push_str(nl);
        }

        for line in self.bonds.iter().chain(&self.elements) {
            svg.push_str(line);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a planar layout to an SVG string
///
/// Bond strands, lone pairs and charge badges are derived here from the
/// layout, one atom or bond at a time. The viewBox is the layout frame.
pub fn render_svg(molecule: &Molecule, result: &LayoutResult, config: &RenderConfig) -> String {
    let mut builder = SvgBuilder::new(config.svg.clone());
    describe(molecule, &mut builder);

    let bond_styles = format!(
        r#" stroke="{}" stroke-width="2" stroke-linecap="round""#,
        config.stylesheet.resolve_or_default("bond")
    );
    for bond in &result.bonds {
        let Some((start, end)) = result.endpoints(bond) else {
            continue;
        };
        for seg in bond_segments(start, end, bond.order, &config.layout) {
            builder.add_bond_line(seg.start.x, seg.start.y, seg.end.x, seg.end.y, &bond_styles);
        }
    }

    for atom in &result.atoms {
        render_atom(atom, config, &mut builder);
    }

    builder.build(result.frame)
}

/// Title and description from the molecule's metadata
pub(crate) fn describe(molecule: &Molecule, builder: &mut SvgBuilder) {
    if !molecule.name.is_empty() || !molecule.formula.is_empty() {
        builder.set_title(format!("{} ({})", molecule.name, molecule.formula));
    }
    let desc: Vec<&str> = [
        molecule.geometry.as_str(),
        molecule.hybridization.as_str(),
        molecule.description.as_str(),
    ]
    .into_iter()
    .filter(|s| !s.is_empty())
    .collect();
    if !desc.is_empty() {
        builder.set_desc(desc.join("; "));
    }
}

/// Render one atom with its decorations, grouped under its id
fn render_atom(atom: &NormalizedAtom, config: &RenderConfig, builder: &mut SvgBuilder) {
    let prefix = builder.prefix();
    let stylesheet = &config.stylesheet;
    let layout = &config.layout;
    let center = atom.position;

    builder.start_group(
        Some(&format!("atom-{}", atom.id)),
        &[format!("{prefix}atom-group")],
    );

    let fill = &stylesheet.element(&atom.element).color;
    builder.add_circle(
        center.x,
        center.y,
        layout.atom_radius,
        "atom",
        &format!(
            r#" fill="{}" stroke="{}" stroke-width="1""#,
            fill,
            stylesheet.resolve_or_default("atom-stroke")
        ),
    );

    if config.view.show_labels {
        builder.add_text(
            &atom.element,
            center.x,
            center.y,
            "label",
            &format!(
                r#" fill="{}" font-size="{}""#,
                stylesheet.label_color(&atom.element),
                num(layout.atom_radius)
            ),
        );
    }

    if config.view.show_lone_pairs {
        let dot_fill = format!(r#" fill="{}""#, stylesheet.resolve_or_default("lone-pair"));
        for marker in lone_pair_markers(center, atom.lone_pairs, layout) {
            for dot in marker.dots {
                builder.add_circle(
                    dot.x,
                    dot.y,
                    layout.lone_pair_dot_radius,
                    "lone-pair",
                    &dot_fill,
                );
            }
        }
    }

    if config.view.show_charges {
        if let Some(badge) = charge_badge(center, atom.charge, layout) {
            let token = match badge.sign {
                ChargeSign::Positive => "charge-positive",
                ChargeSign::Negative => "charge-negative",
            };
            builder.add_circle(
                badge.center.x,
                badge.center.y,
                badge.radius,
                "charge",
                &format!(r#" fill="{}""#, stylesheet.resolve_or_default(token)),
            );
            builder.add_text(
                badge.sign.symbol(),
                badge.center.x,
                badge.center.y,
                "charge-label",
                &format!(
                    r#" fill="{}" font-size="{}""#,
                    stylesheet.resolve_or_default("charge-text"),
                    num(badge.radius * 1.6)
                ),
            );
        }
    }

    builder.end_group();
}

/// Format a coordinate with at most two decimals and no trailing zeros
pub(crate) fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}", rounded)
}

/// Escape special XML characters
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
