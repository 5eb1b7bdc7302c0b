// Copyright 2025 the Radar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of a diff-driven retained surface.

use std::collections::HashMap;
use std::fmt::Write as _;

use kurbo::Rect;
use peniko::Brush;
use radar_core::{LayerId, MarkDiff, MarkId, MarkPayload, TextAnchor, TextBaseline};

/// A retained surface fed only by [`MarkDiff`]s, the way a real renderer would be.
#[derive(Debug)]
pub(crate) struct SvgScene {
    marks: HashMap<(LayerId, MarkId), (i32, MarkPayload)>,
    view_box: Rect,
}

impl SvgScene {
    pub(crate) fn new(view_box: Rect) -> Self {
        Self {
            marks: HashMap::new(),
            view_box,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.marks.len()
    }

    pub(crate) fn apply_diffs(&mut self, diffs: &[MarkDiff]) {
        for diff in diffs {
            match diff {
                MarkDiff::Enter {
                    layer,
                    id,
                    z_index,
                    new,
                    ..
                } => {
                    self.marks.insert((*layer, *id), (*z_index, (**new).clone()));
                }
                MarkDiff::Update {
                    layer,
                    id,
                    new_z_index,
                    new,
                    ..
                } => {
                    self.marks
                        .insert((*layer, *id), (*new_z_index, (**new).clone()));
                }
                MarkDiff::Exit { layer, id, .. } => {
                    self.marks.remove(&(*layer, *id));
                }
            }
        }
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let v = self.view_box;
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = writeln!(
            out,
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            v.x0,
            v.y0,
            v.width(),
            v.height(),
            v.width(),
            v.height()
        );

        let mut marks: Vec<_> = self.marks.iter().collect();
        marks.sort_by_key(|((layer, id), (z, _))| (*layer, *z, *id));

        for (_, (_, payload)) in marks {
            match payload {
                MarkPayload::Path(p) => {
                    let _ = write!(out, r#"<path d="{}""#, p.path.to_svg());
                    write_paint_attr(&mut out, "fill", &p.fill);
                    if p.stroke_width > 0.0 {
                        write_paint_attr(&mut out, "stroke", &p.stroke);
                        let _ = write!(out, r#" stroke-width="{}""#, p.stroke_width);
                    }
                    if p.opacity < 1.0 {
                        let _ = write!(out, r#" opacity="{}""#, p.opacity);
                    }
                    out.push_str("/>\n");
                }
                MarkPayload::Text(t) => {
                    let baseline = match t.baseline {
                        TextBaseline::Middle => "middle",
                        TextBaseline::Alphabetic => "alphabetic",
                        TextBaseline::Hanging => "hanging",
                    };
                    let anchor = match t.anchor {
                        TextAnchor::Start => "start",
                        TextAnchor::Middle => "middle",
                        TextAnchor::End => "end",
                    };
                    let _ = write!(
                        out,
                        r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{baseline}" text-anchor="{anchor}""#,
                        t.pos.x, t.pos.y, t.font_size
                    );
                    write_paint_attr(&mut out, "fill", &t.fill);
                    out.push('>');
                    out.push_str(&escape_xml(&t.text));
                    out.push_str("</text>\n");
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
