/// The success overlay: a modal card shown while the workflow sits in
/// `Success`. Dismissed by the button here or by the 5 second timer the
/// workflow schedules on entry.

use iced::widget::{button, column, container, opaque, text};
use iced::{Alignment, Element, Length};

use crate::Message;

pub fn success<'a>() -> Element<'a, Message> {
    let card = column![
        text("✅").size(40),
        text("Report Submitted Successfully!").size(24),
        text(
            "Thank you for helping make your community safer. Your report \
             has been submitted and will be reviewed shortly.",
        )
        .size(14),
        button(text("Submit Another Report"))
            .padding(12)
            .style(button::primary)
            .on_press(Message::DismissSuccess),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .max_width(420);

    let card = container(card)
        .padding(32)
        .style(container::rounded_box);

    // Opaque so the dimmed form underneath cannot be interacted with
    opaque(
        container(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(
                    iced::Color {
                        a: 0.55,
                        ..iced::Color::BLACK
                    }
                    .into(),
                ),
                ..container::Style::default()
            }),
    )
}
