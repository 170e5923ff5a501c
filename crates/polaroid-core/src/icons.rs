//! Toolbar and slot-control icons rendered as inline SVG.
//!
//! All icons are stroked outlines drawn in `currentColor`, so they inherit
//! the text color of the button they sit in.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unknown icon name passed to [`Icon::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown icon: {0}")]
pub struct UnknownIcon(pub String);

/// One drawing primitive inside an icon.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Shape {
    Path(&'static str),
    /// A path drawn as a filled shape rather than an outline.
    FilledPath(&'static str),
    Line(f32, f32, f32, f32),
    Polyline(&'static str),
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rx: f32,
    },
}

/// Every icon the page uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Printer,
    Upload,
    Delete,
    Exclude,
    Replace,
    FilePen,
}

impl Icon {
    pub const ALL: [Icon; 6] = [
        Icon::Printer,
        Icon::Upload,
        Icon::Delete,
        Icon::Exclude,
        Icon::Replace,
        Icon::FilePen,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Icon::Printer => "printer",
            Icon::Upload => "upload",
            Icon::Delete => "delete",
            Icon::Exclude => "exclude",
            Icon::Replace => "replace",
            Icon::FilePen => "file-pen",
        }
    }

    /// SVG `viewBox`. The replace glyph is drawn on a larger canvas.
    pub fn view_box(self) -> &'static str {
        match self {
            Icon::Replace => "0 0 52 52",
            _ => "0 0 24 24",
        }
    }

    fn shapes(self) -> &'static [Shape] {
        use Shape::*;
        match self {
            Icon::Printer => &[
                Path("M6 18H4a2 2 0 0 1-2-2v-5a2 2 0 0 1 2-2h16a2 2 0 0 1 2 2v5a2 2 0 0 1-2 2h-2"),
                Path("M6 9V3a1 1 0 0 1 1-1h10a1 1 0 0 1 1 1v6"),
                Rect {
                    x: 6.0,
                    y: 14.0,
                    width: 12.0,
                    height: 8.0,
                    rx: 1.0,
                },
            ],
            Icon::Upload => &[
                Path("M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"),
                Polyline("17 8 12 3 7 8"),
                Line(12.0, 3.0, 12.0, 15.0),
            ],
            Icon::Delete => &[
                Path("M20 5H9l-7 7 7 7h11a2 2 0 0 0 2-2V7a2 2 0 0 0-2-2Z"),
                Line(18.0, 9.0, 12.0, 15.0),
                Line(12.0, 9.0, 18.0, 15.0),
            ],
            Icon::Exclude => &[Line(18.0, 6.0, 6.0, 18.0), Line(6.0, 6.0, 18.0, 18.0)],
            Icon::Replace => &[
                Path("M20,37.5c0-0.8-0.7-1.5-1.5-1.5h-15C2.7,36,2,36.7,2,37.5v11C2,49.3,2.7,50,3.5,50h15c0.8,0,1.5-0.7,1.5-1.5 V37.5z"),
                FilledPath("M8.1,22H3.2c-1,0-1.5,0.9-0.9,1.4l8,8.3c0.4,0.3,1,0.3,1.4,0l8-8.3c0.6-0.6,0.1-1.4-0.9-1.4h-4.7 c0-5,4.9-10,9.9-10V6C15,6,8.1,13,8.1,22z"),
                FilledPath("M41.8,20.3c-0.4-0.3-1-0.3-1.4,0l-8,8.3c-0.6,0.6-0.1,1.4,0.9,1.4h4.8c0,6-4.1,10-10.1,10v6 c9,0,16.1-7,16.1-16H49c1,0,1.5-0.9,0.9-1.4L41.8,20.3z"),
                Path("M50,3.5C50,2.7,49.3,2,48.5,2h-15C32.7,2,32,2.7,32,3.5v11c0,0.8,0.7,1.5,1.5,1.5h15c0.8,0,1.5-0.7,1.5-1.5 V3.5z"),
            ],
            Icon::FilePen => &[
                Path("M12.5 22H18a2 2 0 0 0 2-2V7l-5-5H6a2 2 0 0 0-2 2v9.5"),
                Path("M14 2v4a2 2 0 0 0 2 2h4"),
                Path("M13.378 15.626a1 1 0 1 0-3.004-3.004l-5.01 5.012a2 2 0 0 0-.506.854l-.837 2.87a.5.5 0 0 0 .62.62l2.87-.837a2 2 0 0 0 .854-.506z"),
            ],
        }
    }

    /// Render as a standalone `<svg>` element.
    pub fn svg(self) -> String {
        self.render(None)
    }

    /// Render with a `class` attribute, e.g. `"mr-2 h-5 w-5"`.
    pub fn svg_with_class(self, class: &str) -> String {
        self.render(Some(class))
    }

    fn render(self, class: Option<&str>) -> String {
        let mut out = String::with_capacity(512);
        out.push_str("<svg");
        if let Some(class) = class {
            let _ = write!(out, " class=\"{}\"", escape_attr(class));
        }
        let _ = write!(
            out,
            " xmlns=\"http://www.w3.org/2000/svg\" width=\"24\" height=\"24\" viewBox=\"{}\" \
             fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" \
             stroke-linecap=\"round\" stroke-linejoin=\"round\">",
            self.view_box()
        );

        for shape in self.shapes() {
            match *shape {
                Shape::Path(d) => {
                    let _ = write!(out, "<path d=\"{}\"/>", d);
                }
                Shape::FilledPath(d) => {
                    let _ = write!(out, "<path d=\"{}\" fill=\"currentColor\"/>", d);
                }
                Shape::Line(x1, y1, x2, y2) => {
                    let _ = write!(
                        out,
                        "<line x1=\"{}\" x2=\"{}\" y1=\"{}\" y2=\"{}\"/>",
                        x1, x2, y1, y2
                    );
                }
                Shape::Polyline(points) => {
                    let _ = write!(out, "<polyline points=\"{}\"/>", points);
                }
                Shape::Rect {
                    x,
                    y,
                    width,
                    height,
                    rx,
                } => {
                    let _ = write!(
                        out,
                        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\"/>",
                        x, y, width, height, rx
                    );
                }
            }
        }

        out.push_str("</svg>");
        out
    }
}

impl FromStr for Icon {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::ALL
            .into_iter()
            .find(|icon| icon.name() == s)
            .ok_or_else(|| UnknownIcon(s.to_string()))
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_renders_svg() {
        for icon in Icon::ALL {
            let svg = icon.svg();
            assert!(svg.starts_with("<svg "), "{} should open an svg", icon);
            assert!(svg.ends_with("</svg>"));
            assert!(svg.contains("stroke=\"currentColor\""));
        }
    }

    #[test]
    fn test_name_round_trip() {
        for icon in Icon::ALL {
            assert_eq!(icon.name().parse::<Icon>(), Ok(icon));
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "camera".parse::<Icon>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown icon: camera");
    }

    #[test]
    fn test_replace_uses_large_view_box() {
        assert_eq!(Icon::Replace.view_box(), "0 0 52 52");
        assert!(Icon::Replace.svg().contains("viewBox=\"0 0 52 52\""));
        assert!(Icon::Replace.svg().contains("fill=\"currentColor\""));
        assert_eq!(Icon::Printer.view_box(), "0 0 24 24");
    }

    #[test]
    fn test_upload_primitives() {
        let svg = Icon::Upload.svg();
        assert!(svg.contains("<polyline points=\"17 8 12 3 7 8\"/>"));
        assert!(svg.contains("<line x1=\"12\" x2=\"12\" y1=\"3\" y2=\"15\"/>"));
    }

    #[test]
    fn test_printer_rect() {
        let svg = Icon::Printer.svg();
        assert!(svg.contains("<rect x=\"6\" y=\"14\" width=\"12\" height=\"8\" rx=\"1\"/>"));
    }

    #[test]
    fn test_class_attribute_escaped() {
        let svg = Icon::Exclude.svg_with_class("mr-2 \"h-5\"");
        assert!(svg.starts_with("<svg class=\"mr-2 &quot;h-5&quot;\""));
    }
}
