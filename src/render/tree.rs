//! Declarative visual tree handed to the host
//!
//! Nodes only describe structure, text, colors and click regions. The host
//! does all layout and painting.

use std::fmt;

use crate::theme::{Color, BLACK};
use crate::widget::Action;

/// Layout direction of a frame's children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

/// Sizing along one axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Sizing {
    /// Shrink to the children
    #[default]
    Hug,
    /// Stretch to the parent
    Fill,
    Fixed(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    pub const fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }
}

/// Style overrides while the pointer is over a frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoverStyle {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropShadow {
    pub color: Color,
    pub offset: (f32, f32),
    pub blur: f32,
}

/// Auto-layout container
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub name: Option<&'static str>,
    pub direction: Direction,
    pub spacing: f32,
    pub padding: Padding,
    pub width: Sizing,
    pub height: Sizing,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f32,
    pub corner_radius: f32,
    pub align_horizontal: Align,
    pub align_vertical: Align,
    pub hover: Option<HoverStyle>,
    pub shadow: Option<DropShadow>,
    pub on_click: Option<Action>,
    pub children: Vec<Node>,
}

impl Frame {
    pub fn horizontal() -> Self {
        Self::default()
    }

    pub fn vertical() -> Self {
        Self {
            direction: Direction::Vertical,
            ..Self::default()
        }
    }

    /// Name used by the outline and lookups
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn width(mut self, width: Sizing) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Sizing) -> Self {
        self.height = height;
        self
    }

    pub fn fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn stroke(mut self, stroke: Color, width: f32) -> Self {
        self.stroke = Some(stroke);
        self.stroke_width = width;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Center children on both axes
    pub fn centered(mut self) -> Self {
        self.align_horizontal = Align::Center;
        self.align_vertical = Align::Center;
        self
    }

    pub fn align_vertical(mut self, align: Align) -> Self {
        self.align_vertical = align;
        self
    }

    pub fn align_horizontal(mut self, align: Align) -> Self {
        self.align_horizontal = align;
        self
    }

    pub fn hover(mut self, hover: HoverStyle) -> Self {
        self.hover = Some(hover);
        self
    }

    pub fn shadow(mut self, shadow: DropShadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn on_click(mut self, action: Action) -> Self {
        self.on_click = Some(action);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<N: Into<Node>>(mut self, children: impl IntoIterator<Item = N>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

/// Text run
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    pub font_size: f32,
    pub font_weight: u16,
    pub fill: Color,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font_size: 16.0,
            font_weight: 400,
            fill: BLACK,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.font_weight = weight;
        self
    }

    pub fn fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }
}

/// Inline SVG markup
#[derive(Debug, Clone, PartialEq)]
pub struct Svg {
    pub src: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Frame(Frame),
    Text(Text),
    Svg(Svg),
}

impl From<Frame> for Node {
    fn from(frame: Frame) -> Self {
        Node::Frame(frame)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl From<Svg> for Node {
    fn from(svg: Svg) -> Self {
        Node::Svg(svg)
    }
}

impl Node {
    /// Visit every node depth-first, parents before children
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        if let Node::Frame(frame) = self {
            for child in &frame.children {
                child.walk(visit);
            }
        }
    }

    /// Click actions in tree order
    pub fn click_targets(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.walk(&mut |node| {
            if let Node::Frame(Frame { on_click: Some(action), .. }) = node {
                actions.push(*action);
            }
        });
        actions
    }

    /// Text content in tree order
    pub fn texts(&self) -> Vec<&str> {
        let mut texts = Vec::new();
        self.walk(&mut |node| {
            if let Node::Text(text) = node {
                texts.push(text.content.as_str());
            }
        });
        texts
    }

    /// First frame with the given name
    pub fn find(&self, name: &str) -> Option<&Frame> {
        let mut found = None;
        self.walk(&mut |node| {
            if let Node::Frame(frame) = node {
                if found.is_none() && frame.name == Some(name) {
                    found = Some(frame);
                }
            }
        });
        found
    }

    fn write_outline(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            Node::Frame(frame) => {
                write!(f, "{}[{}]", indent, frame.name.unwrap_or("frame"))?;
                if let Some(fill) = frame.fill {
                    write!(f, " fill={}", fill)?;
                }
                if let Some(stroke) = frame.stroke {
                    write!(f, " stroke={}/{}", stroke, frame.stroke_width)?;
                }
                if let Some(action) = frame.on_click {
                    write!(f, " click={:?}", action)?;
                }
                writeln!(f)?;
                for child in &frame.children {
                    child.write_outline(f, depth + 1)?;
                }
                Ok(())
            }
            Node::Text(text) => writeln!(f, "{}\"{}\" ({})", indent, text.content, text.fill),
            Node::Svg(_) => writeln!(f, "{}<svg>", indent),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outline(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_collects_in_tree_order() {
        let tree: Node = Frame::vertical()
            .named("root")
            .child(Frame::horizontal().on_click(Action::ToggleMenu).child(Text::new("a")))
            .child(Text::new("b"))
            .child(Frame::horizontal().named("tail").on_click(Action::Minimize))
            .into();

        assert_eq!(tree.texts(), vec!["a", "b"]);
        assert_eq!(tree.click_targets(), vec![Action::ToggleMenu, Action::Minimize]);
        assert_eq!(tree.find("tail").and_then(|f| f.on_click), Some(Action::Minimize));
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn outline_indents_children() {
        let tree: Node = Frame::vertical()
            .named("root")
            .fill(BLACK)
            .child(Text::new("hi"))
            .into();
        let outline = tree.to_string();
        assert_eq!(outline, "[root] fill=#000000\n  \"hi\" (#000000)\n");
    }

    #[test]
    fn padding_helpers() {
        assert_eq!(Padding::symmetric(8.0, 16.0), Padding::new(8.0, 16.0, 8.0, 16.0));
        assert_eq!(Padding::all(4.0).left, 4.0);
    }
}
