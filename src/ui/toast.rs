/// The toast strip: the in-app notification sink.
///
/// Renders pending notifications in the top-right corner, newest last.
/// Toasts are dismissed by hand; the success overlay's auto-dismiss timer
/// is the only scheduled action in the app.

use iced::widget::{button, column, container, row, text, Column};
use iced::{Alignment, Element, Length};

use crate::notify::{Notification, NotificationKind};
use crate::Message;

/// One pending notification, keyed so a specific toast can be dismissed
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Overlay layer with every pending toast
pub fn strip(toasts: &[Toast]) -> Element<'_, Message> {
    let cards = toasts
        .iter()
        .fold(Column::new().spacing(8), |col, toast| col.push(card(toast)));

    container(cards)
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Right)
        .padding(16)
        .into()
}

fn card(toast: &Toast) -> Element<'_, Message> {
    let body = column![
        text(&toast.notification.title).size(14),
        text(&toast.notification.description).size(12),
    ]
    .spacing(4)
    .width(Length::Fixed(300.0));

    let close = button(text("✕").size(12))
        .style(button::text)
        .on_press(Message::DismissToast(toast.id));

    container(row![body, close].spacing(8).align_y(Alignment::Start))
        .padding(12)
        .style(card_style(toast.notification.kind))
        .into()
}

fn card_style(kind: NotificationKind) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| {
        let (background, text_color) = match kind {
            NotificationKind::Info => (
                iced::Color::from_rgb8(232, 245, 233),
                iced::Color::from_rgb8(27, 94, 32),
            ),
            NotificationKind::Error => (
                iced::Color::from_rgb8(255, 235, 238),
                iced::Color::from_rgb8(130, 30, 30),
            ),
        };
        container::Style {
            background: Some(background.into()),
            text_color: Some(text_color),
            border: iced::border::rounded(8),
            ..container::Style::default()
        }
    }
}
