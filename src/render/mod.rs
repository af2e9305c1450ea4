//! Render module - builds the widget's visual tree
//!
//! [`render`] is a pure function of the current date and the preference
//! snapshot. Click regions carry [`Action`]s instead of callbacks.

mod icons;
mod tree;

pub use tree::{Align, Direction, DropShadow, Frame, HoverStyle, Node, Padding, Sizing, Svg, Text};

use chrono::Datelike;

use crate::format::{compose_label, format_date, format_day_of_week, DateFormat, DayFormat};
use crate::state::Preferences;
use crate::theme::{
    ColorOption, BLACK, COLOR_CATALOG, HEADER_TEXT, OPTION_HOVER, PREVIEW_TEXT, WHITE,
};
use crate::widget::Action;

/// Width of the widget while the settings menu is open
pub const MENU_WIDTH: f32 = 400.0;
const SWATCHES_PER_ROW: usize = 5;
const CHECK_MARK: &str = "✓";

/// Primary label: "<day>, <date>" or just "<date>" when the day is hidden
pub fn primary_label<D: Datelike>(now: &D, prefs: &Preferences) -> String {
    let day = format_day_of_week(now, prefs.day_format);
    let date = format_date(now, prefs.date_format);
    compose_label(&day, &date)
}

/// Build the full widget tree for one render pass
pub fn render<D: Datelike>(now: &D, prefs: &Preferences) -> Node {
    let color = prefs.color();

    let mut root = Frame::vertical()
        .named("widget")
        .corner_radius(16.0)
        .fill(color.fill)
        .stroke(color.border, 3.0)
        .width(if prefs.menu_open { Sizing::Fixed(MENU_WIDTH) } else { Sizing::Hug })
        .shadow(DropShadow {
            color: BLACK.with_alpha(26),
            offset: (0.0, 2.0),
            blur: 8.0,
        })
        .child(main_row(now, prefs, color));

    if prefs.menu_open {
        root = root.child(settings_menu(now, prefs, color));
    }

    root.into()
}

fn main_row<D: Datelike>(now: &D, prefs: &Preferences, color: &ColorOption) -> Frame {
    let day = format_day_of_week(now, prefs.day_format);
    let date = format_date(now, prefs.date_format);

    let mut label = Frame::horizontal().named("label").spacing(2.0);
    if !day.is_empty() {
        label = label.child(Text::new(format!("{},", day)).size(14.0).fill(color.text));
    }
    label = label.child(Text::new(date).size(14.0).weight(600).fill(color.text));

    Frame::horizontal()
        .named("main-row")
        .spacing(6.0)
        .padding(Padding::all(16.0))
        .align_vertical(Align::Center)
        .fill(color.fill)
        .on_click(Action::ToggleMenu)
        .child(icons::calendar(color.text))
        .child(label)
}

fn settings_menu<D: Datelike>(now: &D, prefs: &Preferences, color: &ColorOption) -> Frame {
    let formats = Frame::horizontal()
        .named("formats")
        .width(Sizing::Fill)
        .fill(WHITE)
        .child(date_format_column(now, prefs.date_format))
        .child(
            Frame::horizontal()
                .named("divider")
                .width(Sizing::Fixed(1.0))
                .height(Sizing::Fill)
                .fill(color.border),
        )
        .child(day_format_column(now, prefs.day_format));

    Frame::vertical()
        .named("menu")
        .width(Sizing::Fill)
        .stroke(color.border, 1.0)
        .child(formats)
        .child(color_section(color))
        .child(minimize_button(color))
}

fn section_header(title: &str, padding: Padding) -> Frame {
    Frame::horizontal()
        .padding(padding)
        .width(Sizing::Fill)
        .child(Text::new(title).size(11.0).weight(600).fill(HEADER_TEXT))
}

/// One selectable row: label, live preview and a check mark
fn option_row(label: &str, preview: String, selected: bool, action: Action) -> Frame {
    Frame::horizontal()
        .spacing(8.0)
        .padding(Padding::symmetric(8.0, 16.0))
        .width(Sizing::Fill)
        .fill(WHITE)
        .hover(HoverStyle {
            fill: Some(OPTION_HOVER),
            stroke: None,
        })
        .on_click(action)
        .child(
            Frame::vertical()
                .spacing(2.0)
                .width(Sizing::Fill)
                .child(Text::new(label).size(14.0).fill(BLACK))
                .child(Text::new(preview).size(12.0).fill(PREVIEW_TEXT)),
        )
        .child(
            Text::new(CHECK_MARK)
                .size(13.0)
                .weight(600)
                .fill(if selected { BLACK } else { WHITE }),
        )
}

fn date_format_column<D: Datelike>(now: &D, current: DateFormat) -> Frame {
    let rows = DateFormat::ALL.into_iter().map(|format| {
        option_row(
            format.label(),
            format_date(now, format),
            format == current,
            Action::SelectDateFormat(format),
        )
    });

    Frame::vertical()
        .named("date-formats")
        .width(Sizing::Fill)
        .child(section_header("DATE FORMAT", Padding::new(16.0, 16.0, 8.0, 16.0)))
        .children(rows)
}

fn day_format_column<D: Datelike>(now: &D, current: DayFormat) -> Frame {
    let rows = DayFormat::ALL.into_iter().map(|format| {
        let preview = format_day_of_week(now, format);
        let preview = if preview.is_empty() { "(hidden)".to_string() } else { preview };
        option_row(format.label(), preview, format == current, Action::SelectDayFormat(format))
    });

    Frame::vertical()
        .named("day-formats")
        .width(Sizing::Fill)
        .child(section_header("DAY FORMAT", Padding::new(16.0, 16.0, 8.0, 16.0)))
        .children(rows)
}

fn swatch(option: &ColorOption, selected: bool) -> Frame {
    let mut swatch = Frame::horizontal()
        .width(Sizing::Fill)
        .height(Sizing::Fixed(40.0))
        .corner_radius(8.0)
        .fill(option.fill)
        .stroke(option.border, if selected { 2.0 } else { 1.0 })
        .hover(HoverStyle {
            fill: None,
            stroke: Some(option.border),
        })
        .centered()
        .on_click(Action::SelectColor(option.fill));

    if selected {
        swatch = swatch.child(Text::new(CHECK_MARK).size(16.0).weight(700).fill(option.text));
    }
    swatch
}

fn color_section(current: &ColorOption) -> Frame {
    let rows = COLOR_CATALOG.chunks(SWATCHES_PER_ROW).map(|row| {
        Frame::horizontal()
            .spacing(6.0)
            .width(Sizing::Fill)
            .children(row.iter().map(|option| swatch(option, option == current)))
    });

    Frame::vertical()
        .named("colors")
        .width(Sizing::Fill)
        .fill(WHITE)
        .stroke(current.border, 1.0)
        .child(section_header("COLOR", Padding::symmetric(12.0, 16.0)))
        .child(
            Frame::vertical()
                .spacing(6.0)
                .padding(Padding::new(0.0, 16.0, 16.0, 16.0))
                .width(Sizing::Fill)
                .children(rows),
        )
}

fn minimize_button(color: &ColorOption) -> Frame {
    Frame::horizontal()
        .fill(WHITE)
        .padding(Padding::all(16.0))
        .width(Sizing::Fill)
        .child(
            Frame::horizontal()
                .named("minimize")
                .width(Sizing::Fill)
                .padding(Padding::symmetric(12.0, 16.0))
                .fill(color.fill)
                .corner_radius(8.0)
                .stroke(color.border, 2.0)
                .hover(HoverStyle {
                    fill: Some(color.fill),
                    stroke: None,
                })
                .align_horizontal(Align::Center)
                .on_click(Action::Minimize)
                .child(Text::new("Minimize widget").size(12.0).weight(600).fill(color.text)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    fn open_prefs() -> Preferences {
        Preferences {
            menu_open: true,
            ..Preferences::default()
        }
    }

    #[test]
    fn closed_widget_has_single_click_target() {
        let tree = render(&reference(), &Preferences::default());
        assert_eq!(tree.click_targets(), vec![Action::ToggleMenu]);
        assert_eq!(tree.texts(), vec!["Tuesday,", "03/05/2024"]);

        let root = tree.find("widget").unwrap();
        assert_eq!(root.width, Sizing::Hug);
        assert_eq!(root.fill, Some(COLOR_CATALOG[0].fill));
    }

    #[test]
    fn hidden_day_drops_prefix_text() {
        let prefs = Preferences {
            day_format: DayFormat::Hidden,
            date_format: DateFormat::Iso,
            ..Preferences::default()
        };
        let tree = render(&reference(), &prefs);
        assert_eq!(tree.texts(), vec!["2024-03-05"]);
        assert_eq!(primary_label(&reference(), &prefs), "2024-03-05");
    }

    #[test]
    fn open_menu_maps_every_option_to_an_action() {
        let tree = render(&reference(), &open_prefs());
        let targets = tree.click_targets();

        let mut expected = vec![Action::ToggleMenu];
        expected.extend(DateFormat::ALL.map(Action::SelectDateFormat));
        expected.extend(DayFormat::ALL.map(Action::SelectDayFormat));
        expected.extend(COLOR_CATALOG.iter().map(|option| Action::SelectColor(option.fill)));
        expected.push(Action::Minimize);
        assert_eq!(targets, expected);

        assert_eq!(tree.find("widget").unwrap().width, Sizing::Fixed(MENU_WIDTH));
    }

    #[test]
    fn menu_shows_previews_and_headers() {
        let tree = render(&reference(), &open_prefs());
        let texts = tree.texts();
        for expected in [
            "DATE FORMAT",
            "DAY FORMAT",
            "COLOR",
            "Month DD, YYYY",
            "March 5, 2024",
            "Mar 5, 2024",
            "(hidden)",
            "T",
            "Tue",
            "Minimize widget",
        ] {
            assert!(texts.contains(&expected), "missing {:?}", expected);
        }
    }

    #[test]
    fn selected_swatch_is_marked() {
        let blue = COLOR_CATALOG[7];
        let prefs = Preferences {
            color_value: blue.value(),
            ..open_prefs()
        };
        let tree = render(&reference(), &prefs);
        let colors = Node::Frame(tree.find("colors").unwrap().clone());

        let mut marked = Vec::new();
        colors.walk(&mut |node| {
            if let Node::Frame(frame) = node {
                if frame.on_click.is_some() && frame.stroke_width == 2.0 {
                    marked.push(frame.fill);
                }
            }
        });
        assert_eq!(marked, vec![Some(blue.fill)]);
        assert_eq!(colors.texts(), vec!["COLOR", CHECK_MARK]);

        let root = tree.find("widget").unwrap();
        assert_eq!(root.fill, Some(blue.fill));
        assert_eq!(root.stroke, Some(blue.border));
    }

    #[test]
    fn stale_color_renders_with_first_entry() {
        let prefs = Preferences {
            color_value: "#ABCDEF".to_string(),
            ..Preferences::default()
        };
        let tree = render(&reference(), &prefs);
        let root = tree.find("widget").unwrap();
        assert_eq!(root.fill, Some(COLOR_CATALOG[0].fill));
        assert_eq!(root.stroke, Some(COLOR_CATALOG[0].border));
    }

    #[test]
    fn swatches_are_laid_out_in_two_rows() {
        let tree = render(&reference(), &open_prefs());
        let colors = tree.find("colors").unwrap();
        let Node::Frame(grid) = &colors.children[1] else {
            panic!("swatch grid missing");
        };
        assert_eq!(grid.children.len(), 2);
        for row in &grid.children {
            let Node::Frame(row) = row else {
                panic!("swatch row is not a frame");
            };
            assert_eq!(row.children.len(), SWATCHES_PER_ROW);
        }
    }
}
