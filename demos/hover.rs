//! Hover a fake plotting area and watch the tooltip flip near the edges.
use glam::Vec2;
use iced::widget::{container, mouse_area, stack, text};
use iced::{Color, Element, Length, Point, Rectangle, Size, Theme};
use iced_tooltip::{PayloadEntry, Tooltip, TooltipBuilder, TooltipUiMessage};

/// This demo has no render-side measurement hook, so it reports the box at
/// a fixed plausible size; a real host reports the painted bounds instead.
const MEASURED: Size = Size {
    width: 140.0,
    height: 46.0,
};

const REGION: Rectangle = Rectangle {
    x: 0.0,
    y: 0.0,
    width: 640.0,
    height: 480.0,
};

fn main() -> iced::Result {
    iced::application(new, update, view).run()
}

struct Demo {
    tooltip: Tooltip,
}

#[derive(Debug, Clone)]
enum Message {
    Tooltip(TooltipUiMessage),
    CursorMoved(Point),
    CursorLeft,
}

fn new() -> Demo {
    let tooltip = TooltipBuilder::new()
        .with_view_box(REGION)
        .with_label("sample")
        .with_payload(vec![
            PayloadEntry::new("uv", 300.0)
                .with_data_key("uv")
                .with_color(Color::from_rgb(0.2, 0.6, 1.0)),
            PayloadEntry::new("pv", 200.0)
                .with_data_key("pv")
                .with_color(Color::from_rgb(0.9, 0.4, 0.3)),
        ])
        .build()
        .expect("demo configuration is valid");

    Demo { tooltip }
}

fn update(demo: &mut Demo, message: Message) {
    match message {
        Message::Tooltip(message) => demo.tooltip.update(message),
        Message::CursorMoved(point) => {
            demo.tooltip.set_coordinate(Some(Vec2::new(point.x, point.y)));
            demo.tooltip.set_active(true);
            if let Some(message) = demo.tooltip.measure(Some(MEASURED)) {
                demo.tooltip.update(message);
            }
        }
        Message::CursorLeft => demo.tooltip.set_active(false),
    }
}

fn view(demo: &Demo) -> Element<'_, Message> {
    let area = container(text("move the cursor").size(14.0))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|theme: &Theme| container::background(theme.palette().background));

    let overlay: Element<'_, Message> = demo.tooltip.view().map(Message::Tooltip);

    mouse_area(stack![area, overlay])
        .on_move(Message::CursorMoved)
        .on_exit(Message::CursorLeft)
        .into()
}
